//! State management module
//!
//! This module handles subscriber lists, persisted visitor preferences and
//! the context object that owns the data services.

pub mod context;
pub mod observers;
pub mod storage;

// Re-export commonly used state components
pub use context::SiteContext;
pub use observers::{Observers, SubscriptionId};
pub use storage::{PreferenceStorage, FileStorage, MemoryStorage, StoredPreference, LANGUAGE_PREFERENCE_KEY};
