//! Controller module - Application logic and event handling
//!
//! The controller owns the `AppModel`, maps key presses and background
//! completions onto its transitions, and carries out the effects they return.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `navigation`: List/detail navigation, detail fetches and search
//! - `playback`: Playback controls and audio effect execution
//! - `player_events`: Audio backend event listener

mod input;
mod navigation;
mod playback;
mod player_events;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::audio::{AudioEvent, AudioOutput};
use crate::error::ServiceError;
use crate::model::{AppModel, Effect};
use crate::services::{DetailTexts, SearchOutcome, SearchResolver, TextSource};

/// Completions of background work, applied in order by the run loop
#[derive(Debug)]
pub enum AppEvent {
    SearchResolved {
        generation: u64,
        outcome: Option<SearchOutcome>,
    },
    DetailLoaded {
        generation: u64,
        result: Result<DetailTexts, String>,
    },
    Audio(AudioEvent),
}

pub struct AppController {
    pub(crate) model: AppModel,
    pub(crate) audio: Option<Arc<dyn AudioOutput>>,
    pub(crate) resolver: SearchResolver,
    pub(crate) texts: Arc<dyn TextSource>,
    pub(crate) events: mpsc::UnboundedSender<AppEvent>,
}

impl AppController {
    /// `audio` is `None` when no output device could be opened; every load
    /// then fails like an unreachable source.
    pub fn new(
        model: AppModel,
        audio: Option<Arc<dyn AudioOutput>>,
        resolver: SearchResolver,
        texts: Arc<dyn TextSource>,
        events: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            model,
            audio,
            resolver,
            texts,
            events,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn should_quit(&self) -> bool {
        self.model.should_quit
    }

    /// Called once per frame
    pub fn tick(&mut self) {
        self.model.auto_clear_old_errors();
    }

    /// Reader bound measured by the last draw
    pub fn set_detail_scroll_limit(&mut self, limit: u16) {
        self.model.set_detail_scroll_limit(limit);
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SearchResolved {
                generation,
                outcome,
            } => {
                tracing::debug!(generation, "Search resolution received");
                self.model.apply_search(generation, outcome);
            }
            AppEvent::DetailLoaded { generation, result } => {
                tracing::debug!(generation, ok = result.is_ok(), "Detail text received");
                self.model.apply_detail(generation, result);
            }
            AppEvent::Audio(event) => self.handle_audio_event(event),
        }
    }

    pub(crate) fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Playback(effect) => self.execute_playback(effect),
                Effect::FetchDetail {
                    entry_number,
                    generation,
                } => self.spawn_fetch_detail(entry_number, generation),
                Effect::Search(request) => self.spawn_search(request),
            }
        }
    }

    pub(crate) fn format_error(error: &ServiceError) -> String {
        match error {
            ServiceError::Network(e) if e.is_timeout() => {
                "Request timed out. Please check your connection.".to_string()
            }
            ServiceError::Network(e) if e.is_connect() => {
                "Could not reach the server. Please check your connection.".to_string()
            }
            ServiceError::Network(e) => match e.status() {
                Some(status) if status.as_u16() == 429 => {
                    "Rate limited. Please wait a moment.".to_string()
                }
                Some(status) => format!("Server returned {}", status),
                None => format!("Network error: {}", e),
            },
            ServiceError::SchemaMismatch(detail) => format!("Unexpected response: {}", detail),
            ServiceError::MediaSource(detail) => format!("Audio source error: {}", detail),
            ServiceError::Config(e) => format!("Configuration error: {}", e),
        }
    }
}
