//! The 30-part division of the catalog (juz / sipara)

use super::types::{Section, LAST_SURAH};

const fn section(number: u8, start_surah: u16, start_ayah: u16) -> Section {
    Section {
        number,
        start_surah,
        start_ayah,
    }
}

pub static SECTIONS: [Section; 30] = [
    section(1, 1, 1),
    section(2, 2, 142),
    section(3, 2, 253),
    section(4, 3, 93),
    section(5, 4, 24),
    section(6, 4, 148),
    section(7, 5, 82),
    section(8, 6, 111),
    section(9, 7, 88),
    section(10, 8, 41),
    section(11, 9, 93),
    section(12, 11, 6),
    section(13, 12, 53),
    section(14, 15, 1),
    section(15, 17, 1),
    section(16, 18, 75),
    section(17, 21, 1),
    section(18, 23, 1),
    section(19, 25, 21),
    section(20, 27, 56),
    section(21, 29, 46),
    section(22, 33, 31),
    section(23, 36, 28),
    section(24, 39, 32),
    section(25, 41, 47),
    section(26, 46, 1),
    section(27, 51, 31),
    section(28, 58, 1),
    section(29, 67, 1),
    section(30, 78, 1),
];

/// Surah numbers contained in or starting in the given section.
///
/// A surah that straddles a boundary belongs to both sections.
pub fn surahs_in_section(number: u8) -> Option<std::ops::RangeInclusive<u16>> {
    let index = usize::from(number).checked_sub(1)?;
    let start = SECTIONS.get(index)?;
    let end = match SECTIONS.get(index + 1) {
        Some(next) if next.start_ayah > 1 => next.start_surah,
        Some(next) => next.start_surah - 1,
        None => LAST_SURAH,
    };
    Some(start.start_surah..=end)
}
