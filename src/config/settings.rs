//! Application configuration
//!
//! This module defines the configuration structure and provides methods
//! for loading it from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use crate::utils::errors::{SiteError, Result};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub i18n: I18nConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Source of the initial site settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SiteConfig {
    /// JSON or TOML payload; built-in defaults when absent
    pub settings_path: Option<String>,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub translations_dir: String,
    pub default_language: String,
    pub supported_languages: Vec<String>,
}

/// Preference storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub preferences_path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Rolling daily log file directory; stdout only when absent
    pub directory: Option<String>,
    pub json: bool,
}

impl AppConfig {
    /// Load configuration from `config.toml` and `STUDIO_SITE__*` variables
    ///
    /// Values missing from both sources keep their defaults.
    pub fn new() -> Result<Self> {
        Self::from_file("config")
    }

    /// Load configuration from a specific file (extension optional)
    pub fn from_file(name: &str) -> Result<Self> {
        let defaults = config::Config::try_from(&AppConfig::default())?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix("STUDIO_SITE")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("i18n.supported_languages")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_config(self)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| SiteError::Config(format!("Failed to render config: {}", e)))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            i18n: I18nConfig {
                translations_dir: "translations".to_string(),
                default_language: "en".to_string(),
                supported_languages: vec!["en".to_string(), "tr".to_string()],
            },
            storage: StorageConfig {
                preferences_path: "data/preferences.json".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: None,
                json: false,
            },
        }
    }
}
