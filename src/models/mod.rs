//! Data models
//!
//! Typed settings payload and the language catalog.

pub mod language;
pub mod site;

pub use language::{Language, LanguageInfo};
pub use site::{
    SiteSettings, SettingsPatch, FeatureFlag, ParticleSettings, ColorOption,
    LanguageSettings, CardSurface, CardStyle, CardStyles, CursorSettings, MAX_PARTICLE_COUNT,
};
