//! LLM search backend (Gemini structured output)

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::search::{SearchAnswer, SearchBackend};
use crate::error::ServiceResult;
use crate::settings::Settings;

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiSearchBackend {
    http: reqwest::Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl GeminiSearchBackend {
    pub fn new(http: reqwest::Client, settings: &Settings, api_key: String) -> Self {
        Self {
            http,
            api_base: settings.llm_api_base.clone(),
            model: settings.llm_model.clone(),
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

/// The fixed instruction sent with every query
pub fn instruction(query: &str) -> String {
    format!(
        r#"User Query: "{query}"

Task: Identify which Quran Surah number(s) (1-114) the user is looking for.

Rules:
1. If the user asks for a specific "Sipara" or "Juz" (e.g., "Sipara 1"), return ALL Surah numbers that are contained in or start in that Sipara.
2. If the user asks for a specific "Surah" by name or number (e.g., "Surah 22", "Surah Yasin"), return that specific number.
3. If the user asks for BOTH (e.g., "Sipara 1 Surah 22", "Juz 30 and Surah Fatiha"), return the combined list of Surahs (union of both sets).
4. If the user describes a topic (e.g., "Surah about cows", "Heart of Quran"), return the relevant Surah number(s).
5. Return ONLY the JSON object.
"#
    )
}

/// Schema the structured output is validated against
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "surahNumbers": {
                "type": "ARRAY",
                "items": { "type": "INTEGER" },
                "description": "Array of Surah numbers (1-114) matching the query"
            },
            "reasoning": {
                "type": "STRING",
                "description": "Brief explanation of why these were chosen (e.g. 'Surahs in Sipara 1 and Surah 22')"
            }
        },
        "required": ["surahNumbers"]
    })
}

fn request_body(query: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": instruction(query) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    })
}

#[derive(Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// Extract the structured answer from a `generateContent` response body.
///
/// An empty answer text means "no matches", not a failure.
pub fn parse_generate_content(body: &str) -> ServiceResult<SearchAnswer> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Ok(SearchAnswer::default());
    }
    Ok(serde_json::from_str(&text)?)
}

#[async_trait]
impl SearchBackend for GeminiSearchBackend {
    async fn search(&self, query: &str) -> ServiceResult<SearchAnswer> {
        crate::log_request_started!("llm_search", query, model = %self.model);

        let result = async {
            let body = self
                .http
                .post(self.endpoint())
                .header(API_KEY_HEADER, &self.api_key)
                .json(&request_body(query))
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;
            parse_generate_content(&body)
        }
        .await;

        crate::log_request_outcome!("llm_search", result);
        result
    }
}
