//! Text collaborator: original script and translation for one surah

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{ServiceError, ServiceResult};
use crate::settings::Settings;

const SUCCESS_CODE: i64 = 200;
const EXPECTED_EDITIONS: usize = 2;

/// One verse of one edition
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verse {
    pub index: usize,
    pub verse_number: u16,
    pub text: String,
}

/// Both editions of a surah, aligned by position
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailTexts {
    pub entry_number: u16,
    pub original: Vec<Verse>,
    pub translated: Vec<Verse>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextSource: Send + Sync {
    async fn fetch_detail(&self, entry_number: u16) -> ServiceResult<DetailTexts>;
}

#[derive(Deserialize)]
struct EditionsResponse {
    code: i64,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Deserialize)]
struct EditionBundle {
    ayahs: Vec<WireAyah>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct WireAyah {
    number: u32,
    text: String,
    number_in_surah: u16,
    #[serde(default)]
    juz: Option<u8>,
}

impl EditionBundle {
    fn into_verses(self) -> Vec<Verse> {
        self.ayahs
            .into_iter()
            .enumerate()
            .map(|(index, ayah)| Verse {
                index,
                verse_number: ayah.number_in_surah,
                text: ayah.text,
            })
            .collect()
    }
}

/// Validate and convert an editions response body.
///
/// Anything other than a success code with exactly two equally long editions
/// is a schema mismatch.
pub fn parse_editions(entry_number: u16, body: &str) -> ServiceResult<DetailTexts> {
    let response: EditionsResponse = serde_json::from_str(body)?;
    if response.code != SUCCESS_CODE {
        return Err(ServiceError::SchemaMismatch(format!(
            "text API returned code {}",
            response.code
        )));
    }

    let bundles: Vec<EditionBundle> = serde_json::from_value(response.data)?;
    if bundles.len() != EXPECTED_EDITIONS {
        return Err(ServiceError::SchemaMismatch(format!(
            "expected {} editions, got {}",
            EXPECTED_EDITIONS,
            bundles.len()
        )));
    }

    let mut bundles = bundles.into_iter();
    let original = bundles.next().map(EditionBundle::into_verses).unwrap_or_default();
    let translated = bundles.next().map(EditionBundle::into_verses).unwrap_or_default();

    if original.len() != translated.len() {
        return Err(ServiceError::SchemaMismatch(format!(
            "editions are not aligned ({} vs {} verses)",
            original.len(),
            translated.len()
        )));
    }

    Ok(DetailTexts {
        entry_number,
        original,
        translated,
    })
}

/// REST client for the alquran.cloud editions endpoint
#[derive(Clone)]
pub struct AlQuranClient {
    http: reqwest::Client,
    api_base: String,
    original_edition: String,
    translation_edition: String,
}

impl AlQuranClient {
    pub fn new(http: reqwest::Client, settings: &Settings) -> Self {
        Self {
            http,
            api_base: settings.text_api_base.clone(),
            original_edition: settings.original_edition.clone(),
            translation_edition: settings.translation_edition.clone(),
        }
    }

    pub fn editions_url(&self, entry_number: u16) -> String {
        format!(
            "{}/surah/{}/editions/{},{}",
            self.api_base.trim_end_matches('/'),
            entry_number,
            self.original_edition,
            self.translation_edition
        )
    }
}

#[async_trait]
impl TextSource for AlQuranClient {
    async fn fetch_detail(&self, entry_number: u16) -> ServiceResult<DetailTexts> {
        let url = self.editions_url(entry_number);
        crate::log_request_started!("fetch_detail", entry_number, url = %url);

        let result = async {
            let body = self.http.get(&url).send().await?.text().await?;
            parse_editions(entry_number, &body)
        }
        .await;

        crate::log_request_outcome!("fetch_detail", result);
        result
    }
}
