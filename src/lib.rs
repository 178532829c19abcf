//! Studio Site core
//!
//! Data layer of a game studio's portfolio website. This library provides
//! the settings store (feature flags, particle effects, card styles, enabled
//! languages) with change notification, and the localization resolver with
//! fallback to the default language and persisted language selection.

pub mod config;
pub mod services;
pub mod models;
pub mod state;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::AppConfig;
pub use utils::errors::{SiteError, Result};

// Re-export main components for easy access
pub use services::SettingsStore;
pub use state::{SiteContext, SubscriptionId};
pub use i18n::{Localizer, TranslationCatalog};
pub use models::{Language, SiteSettings, SettingsPatch, CardSurface};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
