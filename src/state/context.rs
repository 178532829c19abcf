//! Site context
//!
//! Explicitly owned bundle of the settings store and the localizer. UI
//! code receives this context instead of reaching for global state.

use tracing::info;
use crate::config::AppConfig;
use crate::i18n::{Localizer, TranslationCatalog};
use crate::models::{LanguageInfo, SiteSettings};
use crate::services::SettingsStore;
use crate::state::storage::{FileStorage, PreferenceStorage};
use crate::utils::errors::Result;

/// Application-wide context containing both data services
#[derive(Debug)]
pub struct SiteContext {
    pub settings: SettingsStore,
    pub localizer: Localizer,
}

impl SiteContext {
    /// Assemble a context from already-built parts
    pub fn new(settings: SiteSettings, catalog: TranslationCatalog, storage: Box<dyn PreferenceStorage>) -> Self {
        Self::with_locale(settings, catalog, storage, None)
    }

    /// Assemble a context, using `locale_hint` when no language was persisted
    pub fn with_locale(
        settings: SiteSettings,
        catalog: TranslationCatalog,
        storage: Box<dyn PreferenceStorage>,
        locale_hint: Option<&str>,
    ) -> Self {
        Self {
            settings: SettingsStore::new(settings),
            localizer: Localizer::new(catalog, storage, locale_hint),
        }
    }

    /// Load settings, translations and preferences described by `config`
    pub async fn from_config(config: &AppConfig, locale_hint: Option<&str>) -> Result<Self> {
        let settings = match &config.site.settings_path {
            Some(path) => {
                info!(path = %path, "Loading site settings payload");
                SiteSettings::from_path(path)?
            }
            None => {
                info!("Using built-in site settings");
                SiteSettings::default()
            }
        };

        info!("Loading translations...");
        let mut catalog = TranslationCatalog::new(&config.i18n)?;
        catalog.load_translations().await?;

        let storage = FileStorage::new(&config.storage.preferences_path);

        Ok(Self::with_locale(settings, catalog, Box::new(storage), locale_hint))
    }

    /// Languages offered in the picker
    pub fn available_languages(&self) -> Vec<LanguageInfo> {
        self.localizer.available_languages(self.settings.get())
    }

    /// Translate a key in the active language
    pub fn t(&self, key: &str) -> String {
        self.localizer.translate(key)
    }
}
