//! Error handling for the studio site core
//!
//! This module defines the main error type used while loading configuration,
//! settings payloads, translations and persisted preferences. Runtime lookups
//! and setters never produce these errors; they degrade to safe defaults.

use thiserror::Error;

/// Main error type for the studio site core
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Preference storage error: {0}")]
    Storage(String),

    #[error("Unsupported language: {code}")]
    UnsupportedLanguage { code: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for studio site operations
pub type Result<T> = std::result::Result<T, SiteError>;

impl SiteError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            SiteError::Config(_) => false,
            SiteError::ConfigLoad(_) => false,
            SiteError::Io(_) => true,
            SiteError::Serialization(_) => false,
            SiteError::Toml(_) => false,
            SiteError::Storage(_) => true,
            SiteError::UnsupportedLanguage { .. } => true,
            SiteError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SiteError::Config(_) => ErrorSeverity::Critical,
            SiteError::ConfigLoad(_) => ErrorSeverity::Critical,
            SiteError::Storage(_) => ErrorSeverity::Warning,
            SiteError::UnsupportedLanguage { .. } => ErrorSeverity::Warning,
            SiteError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
