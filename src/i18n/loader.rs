//! Translation loading and lookup
//!
//! This module loads one JSON document per language, validates its shape and
//! resolves dotted keys with a fallback to the default language.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::{info, warn, error, debug};
use crate::config::I18nConfig;
use crate::models::Language;
use crate::utils::errors::{SiteError, Result};
use crate::utils::helpers::key_segments;

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

/// Loaded translation tables
#[derive(Debug, Clone)]
pub struct TranslationCatalog {
    /// Loaded translations by language
    translations: HashMap<Language, Map<String, Value>>,
    /// Language consulted when a key is missing
    default_language: Language,
    /// Languages to load
    supported_languages: Vec<Language>,
    /// Directory holding `<code>.json` files
    translations_dir: PathBuf,
}

impl TranslationCatalog {
    /// Create an empty catalog from configuration
    pub fn new(config: &I18nConfig) -> Result<Self> {
        let default_language = config.default_language.parse::<Language>()?;
        let supported_languages = config
            .supported_languages
            .iter()
            .map(|code| code.parse::<Language>())
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            translations: HashMap::new(),
            default_language,
            supported_languages,
            translations_dir: PathBuf::from(&config.translations_dir),
        })
    }

    /// Build a catalog from an in-memory `{code: {...}}` document
    ///
    /// Unknown language codes are rejected; English is the fallback.
    pub fn from_value(document: Value) -> Result<Self> {
        let Value::Object(languages) = document else {
            return Err(SiteError::Config(
                "Translation document must be an object keyed by language code".to_string()
            ));
        };

        let mut catalog = Self {
            translations: HashMap::new(),
            default_language: Language::FALLBACK,
            supported_languages: Vec::new(),
            translations_dir: PathBuf::new(),
        };

        for (code, table) in languages {
            let lang = code.parse::<Language>()?;
            catalog.insert(lang, table)?;
        }

        Ok(catalog)
    }

    /// Add or replace one language table
    pub fn insert(&mut self, lang: Language, table: Value) -> Result<()> {
        let Value::Object(map) = table else {
            return Err(SiteError::Config(
                format!("Invalid translation table format for {}", lang)
            ));
        };

        debug!("Loaded {} translation keys for {}", count_keys(&map), lang);
        self.translations.insert(lang, map);
        if !self.supported_languages.contains(&lang) {
            self.supported_languages.push(lang);
        }
        Ok(())
    }

    /// Load all translation files from the translations directory
    pub async fn load_translations(&mut self) -> Result<()> {
        let translations_dir = self.translations_dir.clone();

        if !translations_dir.exists() {
            return Err(SiteError::Config(
                format!("Translations directory not found: {}", translations_dir.display())
            ));
        }

        let supported_languages = self.supported_languages.clone();
        for lang in supported_languages {
            let file_path = translations_dir.join(format!("{}.json", lang.code()));

            if file_path.exists() {
                match self.load_language_file(&file_path, lang).await {
                    Ok(_) => info!("Loaded translations for language: {}", lang),
                    Err(e) => {
                        error!("Failed to load translations for {}: {}", lang, e);
                        if lang == self.default_language {
                            return Err(SiteError::Config(
                                format!("Failed to load default language translations: {}", e)
                            ));
                        }
                    }
                }
            } else {
                warn!("Translation file not found: {}", file_path.display());
                if lang == self.default_language {
                    return Err(SiteError::Config(
                        format!("Default language translation file not found: {}", file_path.display())
                    ));
                }
            }
        }

        Ok(())
    }

    /// Load a single language file
    async fn load_language_file(&mut self, file_path: &Path, lang: Language) -> Result<()> {
        let content = fs::read_to_string(file_path).await?;
        let table: Value = serde_json::from_str(&content)?;
        self.insert(lang, table)
    }

    /// Walk one language table along a dotted key
    pub fn lookup(&self, key: &str, lang: Language) -> Option<&Value> {
        let table = self.translations.get(&lang)?;
        let mut segments = key_segments(key).into_iter();

        let mut current = table.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }

        Some(current)
    }

    /// Display text for a key, trying `lang` first and then the default language
    pub fn text(&self, key: &str, lang: Language) -> Option<String> {
        let text = self.find_text(key, lang);
        if text.is_none() {
            warn!("Translation key '{}' not found in any language", key);
        }
        text
    }

    /// Same resolution as [`text`](Self::text) without logging a miss
    pub fn find_text(&self, key: &str, lang: Language) -> Option<String> {
        if let Some(text) = self.lookup(key, lang).and_then(extract_text) {
            return Some(text);
        }

        if lang != self.default_language {
            if let Some(text) = self.lookup(key, self.default_language).and_then(extract_text) {
                debug!(key = key, lang = %lang, "Translation served from default language");
                return Some(text);
            }
        }

        None
    }

    /// Deserialize a structured value, trying `lang` first and then the default language
    pub fn entries<T: DeserializeOwned>(&self, key: &str, lang: Language) -> Option<T> {
        let mut candidates = vec![lang];
        if lang != self.default_language {
            candidates.push(self.default_language);
        }

        candidates.into_iter().find_map(|candidate| {
            let value = self.lookup(key, candidate)?;
            match serde_json::from_value(value.clone()) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    warn!(key = key, lang = %candidate, error = %e, "Translation entry has unexpected shape");
                    None
                }
            }
        })
    }

    /// Whether a table was loaded for `lang`
    pub fn has_language(&self, lang: Language) -> bool {
        self.translations.contains_key(&lang)
    }

    /// Languages with a loaded table
    pub fn loaded_languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.translations.keys().copied().collect();
        languages.sort();
        languages
    }

    /// Get supported languages
    pub fn supported_languages(&self) -> &[Language] {
        &self.supported_languages
    }

    /// Get default language
    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Keys present in the default language but unresolvable in `lang`
    pub fn missing_keys(&self, lang: Language) -> Vec<String> {
        let Some(reference) = self.translations.get(&self.default_language) else {
            return Vec::new();
        };

        let mut paths = Vec::new();
        collect_leaf_paths(reference, "", &mut paths);
        paths
            .into_iter()
            .filter(|path| self.lookup(path, lang).is_none())
            .collect()
    }

    /// Get translation statistics
    pub fn get_stats(&self) -> TranslationStats {
        let mut stats = TranslationStats {
            languages: Vec::new(),
            total_keys: 0,
        };

        for lang in self.loaded_languages() {
            let Some(translations) = self.translations.get(&lang) else {
                continue;
            };
            let key_count = count_keys(translations);
            stats.languages.push(LanguageStats {
                code: lang,
                key_count,
                missing_keys: self.missing_keys(lang).len(),
            });
            if lang == self.default_language {
                stats.total_keys = key_count;
            }
        }

        stats
    }
}

/// Extract text from a JSON value
///
/// Plural objects resolve to their `other` form; lists and nested sections
/// have no text.
fn extract_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(obj) => obj.get("other").and_then(extract_text),
        Value::Array(_) | Value::Null => None,
    }
}

/// Recursively count translation keys
fn count_keys(obj: &Map<String, Value>) -> usize {
    let mut count = 0;
    for value in obj.values() {
        match value {
            Value::Object(nested) => count += count_keys(nested),
            _ => count += 1,
        }
    }
    count
}

fn collect_leaf_paths(obj: &Map<String, Value>, prefix: &str, out: &mut Vec<String>) {
    for (key, value) in obj {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(nested) => collect_leaf_paths(nested, &path, out),
            _ => out.push(path),
        }
    }
}

/// Translation statistics
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone)]
pub struct LanguageStats {
    pub code: Language,
    pub key_count: usize,
    pub missing_keys: usize,
}

impl TranslationStats {
    /// Per-language counts keyed by code
    pub fn by_language(&self) -> BTreeMap<Language, usize> {
        self.languages
            .iter()
            .map(|stats| (stats.code, stats.key_count))
            .collect()
    }
}
