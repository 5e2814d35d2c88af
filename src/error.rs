//! Error taxonomy for the external collaborators

use thiserror::Error;

/// Errors raised by the text, search and audio collaborators.
///
/// None of these are fatal: the controller turns each into a visible UI
/// state. Empty or invalid search input is not an error at all.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response shape: {0}")]
    SchemaMismatch(String),

    #[error("Media source error: {0}")]
    MediaSource(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::SchemaMismatch(err.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
