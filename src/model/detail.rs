//! Text shown in the detail reader

use crate::services::{DetailTexts, Verse};

/// Opening formula, shown as a heading above the verses
pub const INVOCATION: &str = "بِسْمِ ٱللَّهِ ٱلرَّحْمَـٰنِ ٱلرَّحِيمِ";
pub const INVOCATION_TRANSLATION: &str = "شروع اللہ کے نام سے جو بڑا مہربان نہایت رحم والا ہے";

/// Entries whose first verse body drops the opening formula in favour of the heading
const HEADING_ENTRIES: [u16; 2] = [1, 9];

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load Surah data. Please check your connection.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailLoadState {
    Loading,
    Ready,
    /// Carries the cause; the reader shows it under `LOAD_FAILED_MESSAGE`
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailTextBundle {
    pub entry_number: u16,
    pub original_verses: Vec<Verse>,
    pub translated_verses: Vec<Verse>,
    pub load_state: DetailLoadState,
    pub generation: u64,
}

impl DetailTextBundle {
    pub fn loading(entry_number: u16, generation: u64) -> Self {
        Self {
            entry_number,
            original_verses: Vec::new(),
            translated_verses: Vec::new(),
            load_state: DetailLoadState::Loading,
            generation,
        }
    }

    /// Apply a fetch result. Results from an older fetch leave the bundle untouched.
    pub fn apply(&self, generation: u64, result: Result<DetailTexts, String>) -> Self {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "Dropping stale detail text");
            return self.clone();
        }
        match result {
            Ok(texts) if texts.entry_number == self.entry_number => Self {
                original_verses: texts.original,
                translated_verses: texts.translated,
                load_state: DetailLoadState::Ready,
                ..self.clone()
            },
            Ok(texts) => {
                tracing::warn!(
                    expected = self.entry_number,
                    got = texts.entry_number,
                    "Detail text for the wrong entry"
                );
                self.clone()
            }
            Err(e) => {
                tracing::warn!(entry = self.entry_number, error = %e, "Detail text unavailable");
                Self {
                    load_state: DetailLoadState::Failed(e),
                    ..self.clone()
                }
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == DetailLoadState::Loading
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.load_state, DetailLoadState::Failed(_))
    }

    pub fn shows_invocation_heading(&self) -> bool {
        shows_invocation_heading(self.entry_number)
    }

    /// Original and translated text paired by position
    pub fn verse_pairs(&self) -> Vec<VersePair<'_>> {
        self.original_verses
            .iter()
            .zip(&self.translated_verses)
            .map(|(original, translated)| VersePair {
                verse_number: original.verse_number,
                original: verse_body(self.entry_number, original),
                translated: translated.text.as_str(),
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersePair<'a> {
    pub verse_number: u16,
    pub original: &'a str,
    pub translated: &'a str,
}

pub fn shows_invocation_heading(entry_number: u16) -> bool {
    HEADING_ENTRIES.contains(&entry_number)
}

/// The verse text as rendered in its card
pub fn verse_body(entry_number: u16, verse: &Verse) -> &str {
    if verse.index == 0 && shows_invocation_heading(entry_number) {
        strip_invocation(&verse.text)
    } else {
        &verse.text
    }
}

/// Remove a leading opening formula. Text editions differ in the marks they
/// attach to it, so the match is on letters only.
pub fn strip_invocation(text: &str) -> &str {
    let mut expected = INVOCATION.chars().filter(|c| is_base_letter(*c)).peekable();
    for (i, c) in text.char_indices() {
        if expected.peek().is_none() {
            return text[i..].trim_start_matches(|c: char| is_mark(c) || c.is_whitespace());
        }
        if !is_base_letter(c) {
            continue;
        }
        if !letters_match(c, expected.next().unwrap_or(c)) {
            return text;
        }
    }
    if expected.peek().is_none() { "" } else { text }
}

/// Arabic letters without diacritics, tatweel, or spacing
fn is_base_letter(c: char) -> bool {
    matches!(c, '\u{0621}'..='\u{063A}' | '\u{0641}'..='\u{064A}' | '\u{0671}')
}

/// Harakat, Quranic annotation marks and tatweel
fn is_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0610}'..='\u{061A}' | '\u{0640}' | '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{06D6}'..='\u{06ED}'
    )
}

/// Alef wasla and plain alef are interchangeable between editions
fn letters_match(a: char, b: char) -> bool {
    let fold = |c: char| if c == '\u{0671}' { '\u{0627}' } else { c };
    fold(a) == fold(b)
}
