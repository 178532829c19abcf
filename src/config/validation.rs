//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::models::Language;
use crate::utils::errors::{SiteError, Result};
use super::AppConfig;

/// Validate all configuration settings
pub fn validate_config(config: &AppConfig) -> Result<()> {
    validate_site_config(&config.site)?;
    validate_i18n_config(&config.i18n)?;
    validate_storage_config(&config.storage)?;
    validate_logging_config(&config.logging)?;

    Ok(())
}

/// Validate site payload configuration
fn validate_site_config(config: &super::SiteConfig) -> Result<()> {
    if let Some(path) = &config.settings_path {
        if path.is_empty() {
            return Err(SiteError::Config(
                "Site settings path must not be empty when set".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.translations_dir.is_empty() {
        return Err(SiteError::Config(
            "Translations directory is required".to_string()
        ));
    }

    if config.default_language.is_empty() {
        return Err(SiteError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(SiteError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if let Some(unknown) = config
        .supported_languages
        .iter()
        .find(|code| Language::parse(code).is_none())
    {
        return Err(SiteError::Config(
            format!("Unsupported language in configuration: {}", unknown)
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(SiteError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    Ok(())
}

/// Validate preference storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.preferences_path.is_empty() {
        return Err(SiteError::Config(
            "Preferences path is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(SiteError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(SiteError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
