//! Catalog record types

use std::fmt;

pub const FIRST_SURAH: u16 = 1;
pub const LAST_SURAH: u16 = 114;

/// Where a surah was revealed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevelationType {
    Meccan,
    Medinan,
}

impl fmt::Display for RevelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RevelationType::Meccan => "Meccan",
            RevelationType::Medinan => "Medinan",
        };
        f.pad(name)
    }
}

/// One surah of the catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub number: u16,
    pub native_name: &'static str,
    pub english_name: &'static str,
    pub english_translation: &'static str,
    pub ayah_count: u16,
    pub revelation_type: RevelationType,
}

/// A reciter and the folders their recordings live under.
///
/// The primary folder is resolved against the configured primary audio base
/// (QuranicAudio layout). The fallback pair is a complete alternative source,
/// typically an mp3quran server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reciter {
    pub id: &'static str,
    pub display_name: &'static str,
    pub primary_folder_key: &'static str,
    pub fallback_server_base: Option<&'static str>,
    pub fallback_folder_key: Option<&'static str>,
}

/// One of the 30 conventional sections (juz / sipara) and where it starts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub number: u8,
    pub start_surah: u16,
    pub start_ayah: u16,
}
