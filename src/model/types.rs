//! UI-only state: focus, selections and overlays

use std::time::{Duration, Instant};

/// How long an error notification stays on screen
pub const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Which part of the list view receives typed keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    Search,
    #[default]
    List,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub focus: Focus,
    /// Row in the visible (possibly filtered) list
    pub list_selected: usize,
    pub detail_scroll: u16,
    /// Largest useful reader offset, as measured by the last render
    pub detail_scroll_limit: u16,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    pub show_reciter_picker: bool,
    pub reciter_selected: usize,
    pub show_help_popup: bool,
}

impl UiState {
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.error_timestamp = Some(Instant::now());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
        self.error_timestamp = None;
    }

    pub fn auto_clear_old_errors(&mut self) {
        if self
            .error_timestamp
            .is_some_and(|t| t.elapsed() > ERROR_DISPLAY_DURATION)
        {
            self.clear_error();
        }
    }
}
