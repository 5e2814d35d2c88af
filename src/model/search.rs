//! Search state owned by the list view

use std::collections::BTreeSet;

use crate::catalog::{entries, CatalogEntry};
use crate::services::{parse_entry_number, SearchOutcome, SearchStatus};

/// A resolution the controller has to run in the background
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub generation: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query_text: String,
    /// `None` shows the catalog unfiltered
    pub result_entry_numbers: Option<BTreeSet<u16>>,
    pub reasoning_text: Option<String>,
    pub is_searching: bool,
    pub failed: bool,
    pub generation: u64,
}

impl SearchState {
    /// Typing. Emptying the text clears any applied result.
    pub fn edit(&self, text: String) -> Self {
        if text.trim().is_empty() {
            return Self {
                query_text: text,
                ..self.clear()
            };
        }
        Self {
            query_text: text,
            ..self.clone()
        }
    }

    pub fn push_char(&self, c: char) -> Self {
        let mut text = self.query_text.clone();
        text.push(c);
        self.edit(text)
    }

    pub fn pop_char(&self) -> Self {
        let mut text = self.query_text.clone();
        text.pop();
        self.edit(text)
    }

    /// Submit the current text.
    ///
    /// Blank text clears the search. A plain catalog number applies at once.
    /// Anything else starts a background resolution tagged with a new
    /// generation.
    pub fn submit(&self) -> (Self, Option<SearchRequest>) {
        let query = self.query_text.trim();
        if query.is_empty() {
            return (self.clear(), None);
        }

        let generation = self.generation + 1;
        if let Some(number) = parse_entry_number(query) {
            let next = Self {
                generation,
                ..self.clone()
            }
            .with_outcome(SearchOutcome::single(number));
            return (next, None);
        }

        let next = Self {
            reasoning_text: None,
            is_searching: true,
            failed: false,
            generation,
            ..self.clone()
        };
        let request = SearchRequest {
            query: query.to_string(),
            generation,
        };
        (next, Some(request))
    }

    /// Apply a resolution. Results for any generation but the latest
    /// in-flight one are dropped.
    pub fn apply(&self, generation: u64, outcome: Option<SearchOutcome>) -> Self {
        if generation != self.generation || !self.is_searching {
            tracing::debug!(generation, current = self.generation, "Dropping stale search result");
            return self.clone();
        }
        match outcome {
            Some(outcome) => self.with_outcome(outcome),
            None => Self {
                query_text: self.query_text.clone(),
                ..self.clear()
            },
        }
    }

    fn with_outcome(&self, outcome: SearchOutcome) -> Self {
        Self {
            result_entry_numbers: Some(outcome.entry_numbers),
            reasoning_text: outcome.reasoning,
            is_searching: false,
            failed: outcome.status == SearchStatus::Failed,
            ..self.clone()
        }
    }

    /// Back to the unfiltered catalog. In-flight resolutions become stale.
    pub fn clear(&self) -> Self {
        Self {
            generation: self.generation + 1,
            ..Self::default()
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.result_entry_numbers.is_some()
    }

    /// The catalog as the list should show it, always in catalog order
    pub fn visible_entries(&self) -> Vec<&'static CatalogEntry> {
        if let Some(numbers) = &self.result_entry_numbers {
            return entries()
                .iter()
                .filter(|e| numbers.contains(&e.number))
                .collect();
        }

        let needle = self.query_text.trim().to_lowercase();
        if needle.is_empty() {
            return entries().iter().collect();
        }
        entries()
            .iter()
            .filter(|e| {
                e.english_name.to_lowercase().contains(&needle)
                    || e.english_translation.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
