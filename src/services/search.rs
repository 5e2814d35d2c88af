//! Search resolution: free text to a set of surah numbers

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::catalog::{is_valid_number, FIRST_SURAH, LAST_SURAH};
use crate::error::ServiceResult;

pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

/// Whether the backend answered. A failed search and a search with no
/// matches both carry an empty number set; only the status tells them apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    Matched,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub entry_numbers: BTreeSet<u16>,
    pub reasoning: Option<String>,
    pub status: SearchStatus,
}

impl SearchOutcome {
    pub fn single(entry_number: u16) -> Self {
        Self {
            entry_numbers: BTreeSet::from([entry_number]),
            reasoning: None,
            status: SearchStatus::Matched,
        }
    }

    pub fn failed() -> Self {
        Self {
            entry_numbers: BTreeSet::new(),
            reasoning: Some(SEARCH_FAILED_MESSAGE.to_string()),
            status: SearchStatus::Failed,
        }
    }

    /// Keep only numbers that exist in the catalog
    pub fn from_answer(answer: SearchAnswer) -> Self {
        let entry_numbers = answer
            .surah_numbers
            .into_iter()
            .filter_map(|n| u16::try_from(n).ok())
            .filter(|n| is_valid_number(*n))
            .collect();
        Self {
            entry_numbers,
            reasoning: answer.reasoning.filter(|r| !r.trim().is_empty()),
            status: SearchStatus::Matched,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.status == SearchStatus::Failed
    }
}

/// The structured answer a backend returns: `{surahNumbers, reasoning?}`
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnswer {
    pub surah_numbers: Vec<i64>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str) -> ServiceResult<SearchAnswer>;
}

/// A query that is just a surah number, e.g. "22"
pub fn parse_entry_number(query: &str) -> Option<u16> {
    let n: i64 = query.trim().parse().ok()?;
    if (i64::from(FIRST_SURAH)..=i64::from(LAST_SURAH)).contains(&n) {
        u16::try_from(n).ok()
    } else {
        None
    }
}

#[derive(Clone)]
pub struct SearchResolver {
    backend: Arc<dyn SearchBackend>,
}

impl SearchResolver {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Resolve a query. `None` means "no search": show the whole catalog.
    pub async fn resolve(&self, query: &str) -> Option<SearchOutcome> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        if let Some(number) = parse_entry_number(query) {
            tracing::debug!(query, number, "Numeric search short-circuit");
            return Some(SearchOutcome::single(number));
        }

        match self.backend.search(query).await {
            Ok(answer) => {
                let outcome = SearchOutcome::from_answer(answer);
                tracing::info!(query, matches = outcome.entry_numbers.len(), "Search resolved");
                Some(outcome)
            }
            Err(e) => {
                tracing::error!(query, error = %e, "Search failed");
                Some(SearchOutcome::failed())
            }
        }
    }
}
