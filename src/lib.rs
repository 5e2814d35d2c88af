//! Terminal Quran player: browse the 114 surahs, read the original text with
//! a translation, search by number, section or topic, and stream recitations.

pub mod audio;
pub mod catalog;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod services;
pub mod settings;
pub mod view;
