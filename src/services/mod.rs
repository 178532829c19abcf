//! Services module
//!
//! In-process data services consumed by the UI layer.

pub mod settings_store;

pub use settings_store::SettingsStore;
