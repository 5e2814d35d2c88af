//! Runtime settings
//!
//! Built-in defaults, overridden by `QURAN_PLAYER_*` environment variables
//! (e.g. `QURAN_PLAYER_TEXT_API_BASE`). The LLM credential is read from
//! `GEMINI_API_KEY`, or `API_KEY` when that is unset.

use std::time::Duration;

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::ServiceResult;

const ENV_PREFIX: &str = "QURAN_PLAYER";
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub const DEFAULT_AUDIO_BASE_URL: &str = "https://download.quranicaudio.com/quran";
pub const DEFAULT_TEXT_API_BASE: &str = "https://api.alquran.cloud/v1";
pub const DEFAULT_ORIGINAL_EDITION: &str = "quran-uthmani";
pub const DEFAULT_TRANSLATION_EDITION: &str = "ur.junagarhi";
pub const DEFAULT_LLM_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_LLM_MODEL: &str = "gemini-2.5-flash";

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    pub audio_base_url: String,
    pub text_api_base: String,
    pub original_edition: String,
    pub translation_edition: String,
    pub llm_api_base: String,
    pub llm_model: String,
    pub default_reciter: Option<String>,
    pub http_timeout_secs: u64,
    #[serde(skip)]
    pub llm_api_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            audio_base_url: DEFAULT_AUDIO_BASE_URL.to_string(),
            text_api_base: DEFAULT_TEXT_API_BASE.to_string(),
            original_edition: DEFAULT_ORIGINAL_EDITION.to_string(),
            translation_edition: DEFAULT_TRANSLATION_EDITION.to_string(),
            llm_api_base: DEFAULT_LLM_API_BASE.to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            default_reciter: None,
            http_timeout_secs: 30,
            llm_api_key: None,
        }
    }
}

impl Settings {
    /// Load settings from defaults and the process environment.
    pub fn load() -> ServiceResult<Self> {
        let mut settings = Self::from_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))?;
        settings.llm_api_key = API_KEY_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok())
            .filter(|key| !key.trim().is_empty());

        tracing::info!(
            text_api = %settings.text_api_base,
            audio_base = %settings.audio_base_url,
            llm_model = %settings.llm_model,
            llm_configured = settings.llm_api_key.is_some(),
            "Settings loaded"
        );
        Ok(settings)
    }

    fn from_source<S>(source: S) -> ServiceResult<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Settings::default();
        let config = Config::builder()
            .set_default("audio_base_url", defaults.audio_base_url)?
            .set_default("text_api_base", defaults.text_api_base)?
            .set_default("original_edition", defaults.original_edition)?
            .set_default("translation_edition", defaults.translation_edition)?
            .set_default("llm_api_base", defaults.llm_api_base)?
            .set_default("llm_model", defaults.llm_model)?
            .set_default("http_timeout_secs", defaults.http_timeout_secs)?
            .add_source(source)
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs.max(1))
    }
}
