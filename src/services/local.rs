//! Offline search backend, used when no LLM credential is configured
//!
//! Understands section references ("juz 30", "sipara 1", "para 2"), numeric
//! surah references ("surah 22") and surah names. Multiple references are
//! unioned. Topical queries need the LLM backend.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use super::search::{SearchAnswer, SearchBackend};
use crate::catalog::{entries, is_valid_number, surahs_in_section};
use crate::error::ServiceResult;

static SECTION_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:juz'?|sipara|siparah|para)\s*(\d{1,2})\b").expect("valid section regex")
});

static SURAH_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bsurah?\s*(\d{1,3})\b").expect("valid surah regex"));

const MIN_NAME_LEN: usize = 3;
/// Longest run of query words compared against one name ("al baqarah")
const MAX_NAME_WORDS: usize = 3;

/// Spelling-insensitive form of a name or query word.
///
/// Keeps letters and digits, lowercased, then folds the usual
/// transliteration differences: `ee` reads as `i`, `oo` as `u`, doubled
/// letters collapse ("Al-Faatiha" and "fatiha" agree) and a final `ah`
/// loses its `h` ("Baqarah").
fn fold(text: &str) -> String {
    let lowered: String = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    let lowered = lowered.replace("ee", "i").replace("oo", "u");

    let mut folded = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        if c.is_alphabetic() && folded.ends_with(c) {
            continue;
        }
        folded.push(c);
    }
    if folded.chars().count() > MIN_NAME_LEN && folded.ends_with("ah") {
        folded.pop();
    }
    folded
}

/// "Al-Baqara" matches as "albaqara" and as "baqara"
fn name_variants(english_name: &str) -> Vec<String> {
    let mut variants = vec![fold(english_name)];
    if let Some((prefix, rest)) = english_name.split_once('-') {
        if prefix.len() <= 3 {
            variants.push(fold(rest));
        }
    }
    variants.retain(|v| v.chars().count() >= MIN_NAME_LEN);
    variants
}

/// Every run of one to `MAX_NAME_WORDS` consecutive query words, folded and
/// joined. Names only match whole runs, so "nasr" never matches "nas".
fn query_phrases(query: &str) -> HashSet<String> {
    let words: Vec<String> = query
        .split_whitespace()
        .map(fold)
        .filter(|w| !w.is_empty())
        .collect();

    let mut phrases = HashSet::new();
    for start in 0..words.len() {
        let end = (start + MAX_NAME_WORDS).min(words.len());
        for stop in start + 1..=end {
            phrases.insert(words[start..stop].concat());
        }
    }
    phrases
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSearchBackend;

impl LocalSearchBackend {
    pub fn resolve(&self, query: &str) -> SearchAnswer {
        let mut numbers = BTreeSet::new();
        let mut reasons = Vec::new();

        for caps in SECTION_REF.captures_iter(query) {
            if let Some(range) = caps[1].parse().ok().and_then(surahs_in_section) {
                reasons.push(format!("Surahs in Juz {}", &caps[1]));
                numbers.extend(range);
            }
        }

        for caps in SURAH_REF.captures_iter(query) {
            if let Ok(n) = caps[1].parse::<u16>() {
                if is_valid_number(n) {
                    reasons.push(format!("Surah {}", n));
                    numbers.insert(n);
                }
            }
        }

        let phrases = query_phrases(query);
        let lowered_query = query.to_lowercase();
        for entry in entries() {
            let by_name = name_variants(entry.english_name)
                .iter()
                .any(|v| phrases.contains(v));
            let by_translation = entry.english_translation.len() > MIN_NAME_LEN
                && lowered_query.contains(&entry.english_translation.to_lowercase());
            if (by_name || by_translation) && numbers.insert(entry.number) {
                reasons.push(format!("Surah {}", entry.english_name));
            }
        }

        let reasoning = if reasons.is_empty() {
            "No offline match. Configure GEMINI_API_KEY for topic search.".to_string()
        } else {
            format!("Matched offline: {}", reasons.join(", "))
        };

        SearchAnswer {
            surah_numbers: numbers.into_iter().map(i64::from).collect(),
            reasoning: Some(reasoning),
        }
    }
}

#[async_trait]
impl SearchBackend for LocalSearchBackend {
    async fn search(&self, query: &str) -> ServiceResult<SearchAnswer> {
        tracing::debug!(query, "Resolving search offline");
        Ok(self.resolve(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(query: &str) -> Vec<i64> {
        LocalSearchBackend.resolve(query).surah_numbers
    }

    #[test]
    fn resolves_section_reference() {
        assert_eq!(numbers("Sipara 1"), vec![1, 2]);
        assert_eq!(numbers("juz 30"), (78..=114).collect::<Vec<_>>());
    }

    #[test]
    fn unions_section_and_surah() {
        assert_eq!(numbers("Sipara 1 Surah 22"), vec![1, 2, 22]);
    }

    #[test]
    fn resolves_name_ignoring_punctuation() {
        assert_eq!(numbers("Surah Yasin"), vec![36]);
        assert_eq!(numbers("al-kahf"), vec![18]);
    }

    #[test]
    fn resolves_translation() {
        assert_eq!(numbers("the cave"), vec![18]);
    }

    #[test]
    fn unknown_topic_has_no_match() {
        let answer = LocalSearchBackend.resolve("something about patience");
        assert!(answer.surah_numbers.is_empty());
        assert!(answer.reasoning.unwrap().starts_with("No offline match"));
    }

    #[test]
    fn resolves_common_spellings() {
        assert_eq!(numbers("Surah Rahman"), vec![55]);
        assert_eq!(numbers("surah ikhlas"), vec![112]);
        assert_eq!(numbers("surah nas"), vec![114]);
        assert_eq!(numbers("Surah Yaseen"), vec![36]);
        assert_eq!(numbers("Surah Al Baqarah"), vec![2]);
        assert_eq!(numbers("Fatihah"), vec![1]);
    }

    #[test]
    fn section_and_name_union() {
        let mut expected = vec![1];
        expected.extend(78..=114);
        assert_eq!(numbers("Juz 30 and Surah Fatiha"), expected);
    }

    #[test]
    fn names_match_whole_words_only() {
        assert_eq!(numbers("surah nasr"), vec![110]);
        assert_eq!(numbers("surah falaq"), vec![113]);
    }

    #[test]
    fn every_catalog_name_resolves_to_itself() {
        for entry in entries() {
            assert_eq!(
                numbers(entry.english_name),
                vec![i64::from(entry.number)],
                "{}",
                entry.english_name
            );
        }
    }

    #[test]
    fn out_of_range_section_is_ignored() {
        assert!(numbers("juz 45").is_empty());
    }
}
