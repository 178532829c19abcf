//! Internationalization module
//!
//! This module handles multi-language support for the site: translation
//! loading, dotted-key lookup with fallback to the default language, message
//! formatting, pluralization and the visitor's active language.

pub mod loader;
pub mod localizer;

// Re-export commonly used i18n components
pub use loader::{TranslationCatalog, TranslationParams, TranslationStats, LanguageStats};
pub use localizer::{Localizer, detect_language};
