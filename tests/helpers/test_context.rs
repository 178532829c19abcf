//! Test context for filesystem-backed tests
//!
//! Creates a temporary directory holding translation files, a settings
//! payload and a preference file, plus the matching `AppConfig`.

use std::path::{Path, PathBuf};
use std::sync::Once;
use serde_json::Value;
use studio_site::config::AppConfig;
use studio_site::models::SiteSettings;

use super::test_data::{english_table, turkish_table, sample_settings};

static INIT: Once = Once::new();

/// Initialize test logging (called once)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Temporary site layout
pub struct TestContext {
    pub temp_dir: tempfile::TempDir,
    pub config: AppConfig,
}

impl TestContext {
    /// Create a layout with English and Turkish translations and no settings payload
    pub fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        init_test_logging();

        let temp_dir = tempfile::tempdir()?;
        let translations_dir = temp_dir.path().join("translations");
        std::fs::create_dir_all(&translations_dir)?;

        let mut config = AppConfig::default();
        config.i18n.translations_dir = translations_dir.to_string_lossy().into_owned();
        config.i18n.supported_languages = vec!["en".to_string(), "tr".to_string(), "de".to_string()];
        config.storage.preferences_path = temp_dir
            .path()
            .join("data")
            .join("preferences.json")
            .to_string_lossy()
            .into_owned();

        let ctx = Self { temp_dir, config };
        ctx.write_translation("en", &english_table())?;
        ctx.write_translation("tr", &turkish_table())?;
        Ok(ctx)
    }

    /// Same layout plus a JSON settings payload
    pub fn with_settings_payload() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut ctx = Self::new()?;
        let path = ctx.write_settings(&sample_settings())?;
        ctx.config.site.settings_path = Some(path.to_string_lossy().into_owned());
        Ok(ctx)
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn translations_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.i18n.translations_dir)
    }

    pub fn preferences_path(&self) -> PathBuf {
        PathBuf::from(&self.config.storage.preferences_path)
    }

    /// Write `<code>.json` into the translations directory
    pub fn write_translation(&self, code: &str, table: &Value) -> std::io::Result<()> {
        let path = self.translations_dir().join(format!("{}.json", code));
        std::fs::write(path, serde_json::to_string_pretty(table)?)
    }

    /// Write a settings payload and return its path
    pub fn write_settings(&self, settings: &SiteSettings) -> std::io::Result<PathBuf> {
        let path = self.path().join("site-settings.json");
        std::fs::write(&path, serde_json::to_string_pretty(settings)?)?;
        Ok(path)
    }
}
