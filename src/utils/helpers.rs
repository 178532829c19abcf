//! Helper functions and utilities
//!
//! This module contains small string helpers shared by the settings store
//! and the localizer.

use std::collections::HashMap;
use std::sync::OnceLock;
use regex::Regex;

fn hex_color_regex() -> &'static Regex {
    static HEX_COLOR: OnceLock<Regex> = OnceLock::new();
    HEX_COLOR.get_or_init(|| {
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex colour pattern is valid")
    })
}

/// Validate a `#rgb` or `#rrggbb` colour string
pub fn is_valid_hex_color(value: &str) -> bool {
    hex_color_regex().is_match(value)
}

/// Split a dotted key path into its segments
///
/// Empty input yields no segments, so it never matches anything.
pub fn key_segments(path: &str) -> Vec<&str> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').collect()
}

/// Reduce a locale tag to its primary language subtag
///
/// `"tr-TR"` and `"tr_TR"` both become `"tr"`.
pub fn primary_language_tag(locale: &str) -> String {
    locale
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Replace `{name}` placeholders with their parameter values
pub fn interpolate(template: &str, params: &HashMap<String, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in params {
        let placeholder = format!("{{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}
