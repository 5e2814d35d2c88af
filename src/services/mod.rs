//! Services module - clients for the external collaborators
//!
//! - `text`: Original text + translation editions (REST)
//! - `search`: Search contract, resolver and numeric short-circuit
//! - `gemini`: LLM structured-output search backend
//! - `local`: Offline search backend used without an LLM credential

mod text;
mod search;
mod gemini;
mod local;

use std::sync::Arc;

pub use text::{parse_editions, AlQuranClient, DetailTexts, TextSource, Verse};
pub use search::{
    parse_entry_number, SearchAnswer, SearchBackend, SearchOutcome, SearchResolver, SearchStatus,
    SEARCH_FAILED_MESSAGE,
};
pub use gemini::{instruction, parse_generate_content, response_schema, GeminiSearchBackend};
pub use local::LocalSearchBackend;

#[cfg(test)]
pub use search::MockSearchBackend;
#[cfg(test)]
pub use text::MockTextSource;

use crate::settings::Settings;

/// The LLM backend when a credential is configured, the offline one otherwise
pub fn search_backend(http: reqwest::Client, settings: &Settings) -> Arc<dyn SearchBackend> {
    match settings.llm_api_key.clone() {
        Some(key) => {
            tracing::info!(model = %settings.llm_model, "Using LLM search backend");
            Arc::new(GeminiSearchBackend::new(http, settings, key))
        }
        None => {
            tracing::warn!("No LLM credential configured, using offline search");
            Arc::new(LocalSearchBackend)
        }
    }
}
