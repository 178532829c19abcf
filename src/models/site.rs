//! Site settings model
//!
//! Typed form of the settings payload: feature flags, particle effects,
//! language availability, card styles and the cursor colour.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::models::language::Language;
use crate::utils::errors::{SiteError, Result};
use crate::utils::helpers::is_valid_hex_color;

/// Upper bound for the particle count
pub const MAX_PARTICLE_COUNT: u32 = 500;

/// Complete site settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub features: BTreeMap<String, FeatureFlag>,
    pub particles: ParticleSettings,
    pub languages: LanguageSettings,
    pub card_style: CardStyles,
    #[serde(default)]
    pub cursor: CursorSettings,
}

/// A single feature toggle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFlag {
    pub enabled: bool,
    #[serde(default)]
    pub description: String,
}

/// Background particle effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleSettings {
    pub count: u32,
    pub colors: Vec<ColorOption>,
}

/// Named colour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    pub name: String,
    pub value: String,
}

/// Languages offered to visitors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSettings {
    pub enabled: BTreeSet<Language>,
    pub default: Language,
}

/// Surfaces that render cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSurface {
    Project,
    Team,
}

impl CardSurface {
    pub fn as_str(self) -> &'static str {
        match self {
            CardSurface::Project => "project",
            CardSurface::Team => "team",
        }
    }
}

/// Selected style out of the allowed options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStyle {
    pub selected: String,
    pub options: Vec<String>,
}

impl CardStyle {
    pub fn allows(&self, style: &str) -> bool {
        self.options.iter().any(|option| option == style)
    }
}

/// Card style per surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStyles {
    pub project: CardStyle,
    pub team: CardStyle,
}

impl CardStyles {
    pub fn get(&self, surface: CardSurface) -> &CardStyle {
        match surface {
            CardSurface::Project => &self.project,
            CardSurface::Team => &self.team,
        }
    }

    pub fn get_mut(&mut self, surface: CardSurface) -> &mut CardStyle {
        match surface {
            CardSurface::Project => &mut self.project,
            CardSurface::Team => &mut self.team,
        }
    }
}

/// Custom cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorSettings {
    pub color: String,
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self { color: "#00ffd5".to_string() }
    }
}

/// Partial settings for a shallow merge
///
/// Each present section replaces the current section as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub features: Option<BTreeMap<String, FeatureFlag>>,
    pub particles: Option<ParticleSettings>,
    pub languages: Option<LanguageSettings>,
    pub card_style: Option<CardStyles>,
    pub cursor: Option<CursorSettings>,
}

impl SiteSettings {
    /// Load a settings payload from a JSON or TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let settings: SiteSettings = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Apply a shallow merge
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(features) = patch.features {
            self.features = features;
        }
        if let Some(particles) = patch.particles {
            self.particles = particles;
        }
        if let Some(languages) = patch.languages {
            self.languages = languages;
        }
        if let Some(card_style) = patch.card_style {
            self.card_style = card_style;
        }
        if let Some(cursor) = patch.cursor {
            self.cursor = cursor;
        }
    }

    /// Check the payload invariants
    pub fn validate(&self) -> Result<()> {
        if self.particles.count > MAX_PARTICLE_COUNT {
            return Err(SiteError::Config(format!(
                "Particle count {} exceeds maximum of {}",
                self.particles.count, MAX_PARTICLE_COUNT
            )));
        }

        validate_colors(&self.particles.colors)?;

        if !is_valid_hex_color(&self.cursor.color) {
            return Err(SiteError::Config(format!(
                "Invalid cursor colour: {}",
                self.cursor.color
            )));
        }

        if self.languages.enabled.is_empty() {
            return Err(SiteError::Config(
                "At least one language must be enabled".to_string()
            ));
        }

        if !self.languages.enabled.contains(&self.languages.default) {
            return Err(SiteError::Config(format!(
                "Default language '{}' is not enabled",
                self.languages.default
            )));
        }

        for surface in [CardSurface::Project, CardSurface::Team] {
            let style = self.card_style.get(surface);
            if !style.allows(&style.selected) {
                return Err(SiteError::Config(format!(
                    "Selected {} card style '{}' is not one of {:?}",
                    surface.as_str(),
                    style.selected,
                    style.options
                )));
            }
        }

        Ok(())
    }
}

/// Validate a particle colour palette
pub(crate) fn validate_colors(colors: &[ColorOption]) -> Result<()> {
    if colors.is_empty() {
        return Err(SiteError::InvalidInput(
            "Particle palette must contain at least one colour".to_string()
        ));
    }

    if let Some(bad) = colors.iter().find(|color| !is_valid_hex_color(&color.value)) {
        return Err(SiteError::InvalidInput(format!(
            "Invalid colour '{}' for '{}'",
            bad.value, bad.name
        )));
    }

    Ok(())
}

fn flag(enabled: bool, description: &str) -> FeatureFlag {
    FeatureFlag {
        enabled,
        description: description.to_string(),
    }
}

fn color(name: &str, value: &str) -> ColorOption {
    ColorOption {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn styles(selected: &str, options: &[&str]) -> CardStyle {
    CardStyle {
        selected: selected.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        let features = [
            ("particles", flag(true, "Animated particle background")),
            ("customCursor", flag(true, "Custom cursor with trailing glow")),
            ("cardTilt", flag(true, "Tilt cards toward the pointer")),
            ("cardGlow", flag(true, "Glow that follows the pointer on cards")),
            ("parallax", flag(false, "3D parallax on project covers")),
            ("languageSwitcher", flag(true, "Language picker in the navigation bar")),
        ]
        .into_iter()
        .map(|(name, flag)| (name.to_string(), flag))
        .collect();

        Self {
            features,
            particles: ParticleSettings {
                count: 100,
                colors: vec![
                    color("cyan", "#00ffd5"),
                    color("magenta", "#ff2e88"),
                    color("amber", "#ffc857"),
                ],
            },
            languages: LanguageSettings {
                enabled: [Language::En, Language::Tr].into_iter().collect(),
                default: Language::En,
            },
            card_style: CardStyles {
                project: styles("glow", &["glow", "tilt", "parallax", "nft"]),
                team: styles("tilt", &["glow", "tilt", "nft"]),
            },
            cursor: CursorSettings::default(),
        }
    }
}
