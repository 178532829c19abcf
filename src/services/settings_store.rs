//! Settings store
//!
//! Owns the live site settings, exposes validating setters and notifies
//! subscribers synchronously after every applied change. Invalid values are
//! ignored: nothing changes and nobody is notified.

use std::collections::BTreeSet;
use tracing::debug;
use crate::models::{
    CardSurface, ColorOption, Language, SettingsPatch, SiteSettings, MAX_PARTICLE_COUNT,
};
use crate::models::site::validate_colors;
use crate::state::observers::{Observers, SubscriptionId};
use crate::utils::helpers::{is_valid_hex_color, key_segments};
use crate::utils::logging::{log_rejected_setting, log_setting_change};

/// Single source of truth for feature flags and display configuration
#[derive(Debug)]
pub struct SettingsStore {
    settings: SiteSettings,
    observers: Observers<SiteSettings>,
}

impl SettingsStore {
    /// Create a store from an initial payload
    pub fn new(settings: SiteSettings) -> Self {
        Self {
            settings,
            observers: Observers::new(),
        }
    }

    /// Current settings
    pub fn get(&self) -> &SiteSettings {
        &self.settings
    }

    /// Owned copy of the current settings
    pub fn snapshot(&self) -> SiteSettings {
        self.settings.clone()
    }

    /// Check a feature flag by dotted path
    ///
    /// Accepts `"cardTilt"`, `"cardTilt.enabled"` and the same forms prefixed
    /// with `"features."`. Anything that does not resolve to an enabled flag
    /// is `false`.
    pub fn is_feature_enabled(&self, path: &str) -> bool {
        let segments = key_segments(path);
        let segments = match segments.as_slice() {
            ["features", rest @ ..] => rest,
            all => all,
        };

        match segments {
            [name] | [name, "enabled"] => self
                .settings
                .features
                .get(*name)
                .map(|flag| flag.enabled)
                .unwrap_or(false),
            _ => false,
        }
    }

    /// Shallow-merge a partial payload and notify subscribers
    pub fn update(&mut self, patch: SettingsPatch) {
        let sections = patch_sections(&patch);
        self.settings.merge(patch);
        let notified = self.notify();
        log_setting_change("update", &sections, notified);
    }

    /// Register a listener called after every applied change
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&SiteSettings) + 'static,
    {
        let id = self.observers.subscribe(listener);
        debug!(subscription = %id, "Settings subscriber added");
        id
    }

    /// Remove a listener; returns false when it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.observers.unsubscribe(id);
        debug!(subscription = %id, removed = removed, "Settings subscriber removed");
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Currently selected card style for a surface
    pub fn card_style(&self, surface: CardSurface) -> &str {
        &self.settings.card_style.get(surface).selected
    }

    /// Select a card style; must be one of the surface's options
    pub fn set_card_style(&mut self, surface: CardSurface, style: &str) -> bool {
        let card_style = self.settings.card_style.get_mut(surface);
        if !card_style.allows(style) {
            log_rejected_setting(
                surface_setting(surface),
                style,
                "not one of the allowed options",
            );
            return false;
        }

        card_style.selected = style.to_string();
        let notified = self.notify();
        log_setting_change(surface_setting(surface), style, notified);
        true
    }

    /// Set the particle count; must be within `0..=500`
    pub fn set_particle_count(&mut self, count: i64) -> bool {
        let count = match u32::try_from(count) {
            Ok(count) if count <= MAX_PARTICLE_COUNT => count,
            _ => {
                log_rejected_setting("particles.count", &count.to_string(), "out of range");
                return false;
            }
        };

        self.settings.particles.count = count;
        let notified = self.notify();
        log_setting_change("particles.count", &count.to_string(), notified);
        true
    }

    /// Replace the particle palette; every colour must be a hex colour
    pub fn set_particle_colors(&mut self, colors: Vec<ColorOption>) -> bool {
        if let Err(e) = validate_colors(&colors) {
            log_rejected_setting("particles.colors", &format!("{} colours", colors.len()), &e.to_string());
            return false;
        }

        let summary = colors
            .iter()
            .map(|color| color.value.as_str())
            .collect::<Vec<_>>()
            .join(",");
        self.settings.particles.colors = colors;
        let notified = self.notify();
        log_setting_change("particles.colors", &summary, notified);
        true
    }

    /// Set the cursor colour; must be a hex colour
    pub fn set_cursor_color(&mut self, color: &str) -> bool {
        if !is_valid_hex_color(color) {
            log_rejected_setting("cursor.color", color, "not a hex colour");
            return false;
        }

        self.settings.cursor.color = color.to_string();
        let notified = self.notify();
        log_setting_change("cursor.color", color, notified);
        true
    }

    /// Toggle an existing feature flag
    pub fn set_feature_enabled(&mut self, name: &str, enabled: bool) -> bool {
        let Some(flag) = self.settings.features.get_mut(name) else {
            log_rejected_setting("features", name, "unknown feature");
            return false;
        };

        flag.enabled = enabled;
        let notified = self.notify();
        log_setting_change(&format!("features.{}.enabled", name), &enabled.to_string(), notified);
        true
    }

    /// Languages currently offered to visitors
    pub fn enabled_languages(&self) -> &BTreeSet<Language> {
        &self.settings.languages.enabled
    }

    /// Replace the enabled language set; must be non-empty and keep the default
    pub fn set_enabled_languages<I>(&mut self, languages: I) -> bool
    where
        I: IntoIterator<Item = Language>,
    {
        let enabled: BTreeSet<Language> = languages.into_iter().collect();
        let summary = enabled
            .iter()
            .map(|lang| lang.code())
            .collect::<Vec<_>>()
            .join(",");

        if enabled.is_empty() {
            log_rejected_setting("languages.enabled", &summary, "empty language set");
            return false;
        }
        if !enabled.contains(&self.settings.languages.default) {
            log_rejected_setting("languages.enabled", &summary, "default language must stay enabled");
            return false;
        }

        self.settings.languages.enabled = enabled;
        let notified = self.notify();
        log_setting_change("languages.enabled", &summary, notified);
        true
    }

    fn notify(&mut self) -> usize {
        self.observers.notify(&self.settings)
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(SiteSettings::default())
    }
}

fn surface_setting(surface: CardSurface) -> &'static str {
    match surface {
        CardSurface::Project => "cardStyle.project",
        CardSurface::Team => "cardStyle.team",
    }
}

fn patch_sections(patch: &SettingsPatch) -> String {
    let mut sections = Vec::new();
    if patch.features.is_some() {
        sections.push("features");
    }
    if patch.particles.is_some() {
        sections.push("particles");
    }
    if patch.languages.is_some() {
        sections.push("languages");
    }
    if patch.card_style.is_some() {
        sections.push("cardStyle");
    }
    if patch.cursor.is_some() {
        sections.push("cursor");
    }
    sections.join(",")
}
