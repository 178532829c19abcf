//! Preference storage
//!
//! Durable key-value storage for visitor preferences. The selected language
//! is the only value persisted today. Records are kept as a JSON document on
//! disk, each stamped with the time it was last written.

use std::collections::BTreeMap;
use std::path::PathBuf;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::utils::errors::{SiteError, Result};

/// Key under which the selected language code is stored
pub const LANGUAGE_PREFERENCE_KEY: &str = "preferred_language";

/// A persisted value and when it was written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPreference {
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl StoredPreference {
    fn now(value: &str) -> Self {
        Self {
            value: value.to_string(),
            updated_at: Utc::now(),
        }
    }
}

/// Durable key-value storage for preferences
pub trait PreferenceStorage {
    /// Read a stored record
    fn load(&self, key: &str) -> Result<Option<StoredPreference>>;

    /// Write a value, replacing any previous one
    fn save(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a value; returns whether it existed
    fn remove(&mut self, key: &str) -> Result<bool>;

    /// Read only the stored value
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load(key)?.map(|record| record.value))
    }
}

/// JSON file backed preference storage
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, StoredPreference>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Preference file is corrupt");
            SiteError::Storage(format!("Corrupt preference file {}: {}", self.path.display(), e))
        })
    }

    fn write_all(&self, records: &BTreeMap<String, StoredPreference>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let serialized = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, serialized)?;
        debug!(path = %self.path.display(), records = records.len(), "Preferences written");
        Ok(())
    }
}

impl PreferenceStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<StoredPreference>> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking new writes
        let mut records = self.read_all().unwrap_or_default();
        records.insert(key.to_string(), StoredPreference::now(value));
        self.write_all(&records)
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let mut records = self.read_all()?;
        let existed = records.remove(key).is_some();
        if existed {
            self.write_all(&records)?;
        }
        Ok(existed)
    }
}

/// In-memory preference storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: BTreeMap<String, StoredPreference>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.records.insert(key.to_string(), StoredPreference::now(value));
        storage
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<StoredPreference>> {
        Ok(self.records.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.records.insert(key.to_string(), StoredPreference::now(value));
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.records.remove(key).is_some())
    }
}
