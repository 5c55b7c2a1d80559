//! Localization Module
//!
//! Message keys, locales, and the compiled-in English/Serbian catalog.

pub mod types;
pub mod catalog;

pub use types::{fill, Locale, MessageKey, Translator};
pub use catalog::Catalog;
