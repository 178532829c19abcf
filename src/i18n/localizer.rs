//! Active-language resolver
//!
//! Wraps a [`TranslationCatalog`] with the visitor's selected language. The
//! selection is persisted through a [`PreferenceStorage`] and subscribers are
//! told about every successful switch.

use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};
use crate::i18n::loader::{TranslationCatalog, TranslationParams};
use crate::models::{Language, LanguageInfo, SiteSettings};
use crate::state::observers::{Observers, SubscriptionId};
use crate::state::storage::{PreferenceStorage, LANGUAGE_PREFERENCE_KEY};
use crate::utils::helpers::interpolate;
use crate::utils::logging::log_language_change;

/// Resolves translation keys for the active language
pub struct Localizer {
    catalog: TranslationCatalog,
    active: Language,
    storage: Box<dyn PreferenceStorage>,
    observers: Observers<Language>,
}

impl Localizer {
    /// Create a localizer, restoring the persisted language when there is one
    ///
    /// Without a usable persisted value the browser locale hint decides, then
    /// the catalog's default language.
    pub fn new(
        catalog: TranslationCatalog,
        storage: Box<dyn PreferenceStorage>,
        locale_hint: Option<&str>,
    ) -> Self {
        let persisted = match storage.get(LANGUAGE_PREFERENCE_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Could not read persisted language, ignoring it");
                None
            }
        };

        let active = persisted
            .as_deref()
            .and_then(Language::parse)
            .unwrap_or_else(|| detect_language(&catalog, locale_hint));

        debug!(language = %active, persisted = ?persisted, "Localizer initialized");

        Self {
            catalog,
            active,
            storage,
            observers: Observers::new(),
        }
    }

    /// Active language
    pub fn language(&self) -> Language {
        self.active
    }

    /// Underlying catalog
    pub fn catalog(&self) -> &TranslationCatalog {
        &self.catalog
    }

    /// Switch the active language
    ///
    /// Only exact catalog codes are accepted; anything else is logged and
    /// ignored. A storage failure is logged; the
    /// switch still takes effect for this session.
    pub fn set_language(&mut self, code: &str) -> bool {
        let Some(lang) = Language::from_code(code) else {
            warn!(code = code, "Ignoring unsupported language");
            return false;
        };

        let previous = self.active;
        self.active = lang;

        let persisted = match self.storage.save(LANGUAGE_PREFERENCE_KEY, lang.code()) {
            Ok(()) => true,
            Err(e) => {
                error!(language = %lang, error = %e, "Failed to persist language");
                false
            }
        };

        log_language_change(previous.code(), lang.code(), persisted);
        self.observers.notify(&lang);
        true
    }

    /// Translate a dotted key; returns the key itself when nothing matches
    pub fn translate(&self, key: &str) -> String {
        self.catalog
            .text(key, self.active)
            .unwrap_or_else(|| key.to_string())
    }

    /// Translate and fill `{name}` placeholders
    pub fn translate_with(&self, key: &str, params: &TranslationParams) -> String {
        match self.catalog.text(key, self.active) {
            Some(text) => interpolate(&text, params),
            None => key.to_string(),
        }
    }

    /// Translate a plural key (`key.one`, `key.other`) and fill `{count}`
    pub fn translate_plural(&self, key: &str, count: i64, params: Option<&TranslationParams>) -> String {
        let category = self.active.plural_category(count);
        let plural_key = format!("{}.{}", key, category);

        let text = self
            .catalog
            .find_text(&plural_key, self.active)
            .or_else(|| self.catalog.text(key, self.active));

        match text {
            Some(text) => {
                let mut final_params = params.cloned().unwrap_or_default();
                final_params.insert("count".to_string(), count.to_string());
                interpolate(&text, &final_params)
            }
            None => key.to_string(),
        }
    }

    /// Structured entries (for example milestone lists) for a key
    pub fn entries<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.catalog.entries(key, self.active)
    }

    /// Register a listener called with the new language after each switch
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Language) + 'static,
    {
        self.observers.subscribe(listener)
    }

    /// Remove a language listener
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Catalog entries for the languages enabled in `settings`
    pub fn available_languages(&self, settings: &SiteSettings) -> Vec<LanguageInfo> {
        Language::ALL
            .into_iter()
            .filter(|lang| settings.languages.enabled.contains(lang))
            .map(Language::info)
            .collect()
    }
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer")
            .field("active", &self.active)
            .field("catalog", &self.catalog)
            .field("observers", &self.observers)
            .finish()
    }
}

/// Pick a language from a browser locale such as `"tr-TR"`
///
/// Falls back to the catalog default when the hint is absent or unsupported.
pub fn detect_language(catalog: &TranslationCatalog, locale: Option<&str>) -> Language {
    locale
        .and_then(Language::parse)
        .filter(|lang| catalog.supported_languages().contains(lang))
        .unwrap_or_else(|| catalog.default_language())
}
