//! Catalog module - static surah, reciter and section tables
//!
//! Everything here is loaded once at process start and never mutated.
//!
//! - `types`: Record types (`CatalogEntry`, `Reciter`, `Section`)
//! - `entries`: The 114 surahs in order
//! - `reciters`: Reciters and their audio folders
//! - `sections`: The 30 juz and their start positions

mod types;
mod entries;
mod reciters;
mod sections;

pub use types::{CatalogEntry, Reciter, RevelationType, Section, FIRST_SURAH, LAST_SURAH};
pub use entries::SURAHS;
pub use reciters::RECITERS;
pub use sections::{surahs_in_section, SECTIONS};

/// All surahs in catalog order
pub fn entries() -> &'static [CatalogEntry] {
    &SURAHS
}

pub fn find_entry(number: u16) -> Option<&'static CatalogEntry> {
    if !is_valid_number(number) {
        return None;
    }
    SURAHS.get(usize::from(number - 1))
}

pub fn is_valid_number(number: u16) -> bool {
    (FIRST_SURAH..=LAST_SURAH).contains(&number)
}

pub fn reciters() -> &'static [Reciter] {
    &RECITERS
}

pub fn find_reciter(id: &str) -> Option<&'static Reciter> {
    RECITERS.iter().find(|r| r.id == id)
}

/// The reciter selected at startup: the configured one if it exists,
/// otherwise the first of the table.
pub fn default_reciter(preferred: Option<&str>) -> &'static Reciter {
    preferred.and_then(find_reciter).unwrap_or(&RECITERS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_numbered_in_order() {
        for (i, entry) in entries().iter().enumerate() {
            assert_eq!(usize::from(entry.number), i + 1);
        }
    }

    #[test]
    fn ayah_total_matches_the_mushaf() {
        let total: u32 = entries().iter().map(|e| u32::from(e.ayah_count)).sum();
        assert_eq!(total, 6236);
    }

    #[test]
    fn find_entry_rejects_out_of_range() {
        assert!(find_entry(0).is_none());
        assert!(find_entry(115).is_none());
        assert_eq!(find_entry(36).map(|e| e.english_name), Some("Ya-Sin"));
        assert_eq!(find_entry(114).map(|e| e.number), Some(114));
    }

    #[test]
    fn reciter_ids_are_unique() {
        let mut ids: Vec<_> = reciters().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), reciters().len());
    }

    #[test]
    fn default_reciter_falls_back_to_first() {
        assert_eq!(default_reciter(None).id, "sudais");
        assert_eq!(default_reciter(Some("nobody")).id, "sudais");
        assert_eq!(default_reciter(Some("mishary")).id, "mishary");
    }

    #[test]
    fn section_grouping() {
        assert_eq!(surahs_in_section(1), Some(1..=2));
        assert_eq!(surahs_in_section(14), Some(15..=16));
        assert_eq!(surahs_in_section(30), Some(78..=114));
        assert_eq!(surahs_in_section(0), None);
        assert_eq!(surahs_in_section(31), None);
    }

    #[test]
    fn section_starts() {
        let start = |n: u8| {
            let s = SECTIONS[usize::from(n) - 1];
            (s.start_surah, s.start_ayah)
        };
        assert_eq!(start(7), (5, 82));
        assert_eq!(start(8), (6, 111));
        assert_eq!(start(30), (78, 1));
        assert_eq!(surahs_in_section(7), Some(5..=6));
    }
}
