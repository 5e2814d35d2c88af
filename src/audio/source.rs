//! Audio source URL construction

use crate::catalog::Reciter;

pub const AUDIO_EXTENSION: &str = "mp3";

/// Where one provider keeps a reciter's files: `{base}/{folder}/{NNN}.{extension}`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceDescriptor<'a> {
    pub base: &'a str,
    pub folder: &'a str,
    pub extension: &'a str,
}

impl SourceDescriptor<'_> {
    pub fn url_for(&self, entry_number: u16) -> String {
        format!(
            "{}/{}/{}.{}",
            self.base.trim_end_matches('/'),
            self.folder.trim_matches('/'),
            pad_entry_number(entry_number),
            self.extension
        )
    }
}

/// Entry numbers are zero-padded to three digits in file names
pub fn pad_entry_number(entry_number: u16) -> String {
    format!("{:03}", entry_number)
}

impl Reciter {
    pub fn primary_source<'a>(&'a self, primary_base: &'a str) -> SourceDescriptor<'a> {
        SourceDescriptor {
            base: primary_base,
            folder: self.primary_folder_key,
            extension: AUDIO_EXTENSION,
        }
    }

    /// Present only when both the fallback server and folder are configured
    pub fn fallback_source(&self) -> Option<SourceDescriptor<'static>> {
        match (self.fallback_server_base, self.fallback_folder_key) {
            (Some(base), Some(folder)) => Some(SourceDescriptor {
                base,
                folder,
                extension: AUDIO_EXTENSION,
            }),
            _ => None,
        }
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback_source().is_some()
    }
}
