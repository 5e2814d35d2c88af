//! Model module - Application state and transitions
//!
//! Each domain keeps one state value with pure transitions; `AppModel`
//! composes them and turns user intents into effects for the controller.
//!
//! - `types`: UI-only state (focus, selections, overlays)
//! - `navigation`: Welcome / List / Detail and the active entry
//! - `search`: Query text, applied results and their generation
//! - `playback`: Playback session state machine
//! - `detail`: Text bundle shown in the reader
//! - `app_model`: Main application model composing the above

mod types;
mod navigation;
mod search;
mod playback;
mod detail;
mod app_model;

pub use types::{Focus, UiState, ERROR_DISPLAY_DURATION};

pub use navigation::{NavigationState, View};

pub use search::{SearchRequest, SearchState};

pub use playback::{PlaybackEffect, PlaybackSession, PlaybackStatus};

pub use detail::{
    shows_invocation_heading, strip_invocation, verse_body, DetailLoadState, DetailTextBundle,
    VersePair, INVOCATION, INVOCATION_TRANSLATION, LOAD_FAILED_MESSAGE,
};

pub use app_model::{AppModel, Effect, SEEK_STEP_SECONDS, VOLUME_STEP};
