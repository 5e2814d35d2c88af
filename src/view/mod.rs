//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists, popups)
//! - `layout`: Welcome screen, top bar and search status line
//! - `content`: Surah list and detail reader
//! - `progress`: Player bar
//! - `overlays`: Modal overlays (error, reciter picker, help)

mod utils;
mod layout;
mod content;
mod progress;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{AppModel, View};

pub use content::NO_RESULTS_MESSAGE;
pub use layout::SEARCHING_MESSAGE;
pub use progress::{status_label, AUDIO_UNAVAILABLE, USING_BACKUP};
pub use utils::format_duration;

/// Measurements from a drawn frame that feed back into the model
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInfo {
    pub detail_max_scroll: u16,
}

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, model: &AppModel) -> FrameInfo {
        let mut info = FrameInfo::default();
        if model.view() == View::Welcome {
            layout::render_welcome(frame, frame.area());
            return info;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Brand + search + reciter
                Constraint::Length(1), // Search status
                Constraint::Min(0),    // List or reader
                Constraint::Length(3), // Player bar
            ])
            .split(frame.area());

        layout::render_top_bar(
            frame,
            chunks[0],
            &model.ui,
            &model.search,
            model.playback.active_reciter.display_name,
        );
        layout::render_search_status(frame, chunks[1], &model.search);

        match model.view() {
            View::Detail => {
                info.detail_max_scroll = content::render_detail(
                    frame,
                    chunks[2],
                    model.detail.as_ref(),
                    model.ui.detail_scroll,
                );
            }
            _ => {
                let entries = model.visible_entries();
                content::render_surah_list(
                    frame,
                    chunks[2],
                    &entries,
                    &model.search,
                    &model.ui,
                    model.navigation.active_entry,
                );
            }
        }

        // Player bar stays visible across list and reader
        progress::render_player_bar(frame, chunks[3], &model.playback);

        if model.ui.error_message.is_some() {
            overlays::render_error_notification(frame, &model.ui);
        }

        if model.ui.show_reciter_picker {
            overlays::render_reciter_picker(frame, &model.ui, model.playback.active_reciter.id);
        }

        if model.ui.show_help_popup {
            overlays::render_help_popup(frame);
        }

        info
    }
}
