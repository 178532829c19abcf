//! Language catalog model
//!
//! The site ships a fixed set of languages. Which of them are offered to
//! visitors is decided by the settings store.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::utils::errors::SiteError;
use crate::utils::helpers::primary_language_tag;

/// A language the site can be rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Tr,
    De,
    Es,
    Fr,
}

impl Language {
    /// Every language in catalog order
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Tr,
        Language::De,
        Language::Es,
        Language::Fr,
    ];

    /// Language consulted when a key is missing in the active one
    pub const FALLBACK: Language = Language::En;

    /// Two-letter language code
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
            Language::De => "de",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    /// Name of the language in that language
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Tr => "Türkçe",
            Language::De => "Deutsch",
            Language::Es => "Español",
            Language::Fr => "Français",
        }
    }

    /// Flag glyph shown in the language picker
    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇬🇧",
            Language::Tr => "🇹🇷",
            Language::De => "🇩🇪",
            Language::Es => "🇪🇸",
            Language::Fr => "🇫🇷",
        }
    }

    /// Exact catalog code lookup (`"tr"`, never `"TR"` or `"tr-TR"`)
    pub fn from_code(code: &str) -> Option<Self> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Parse a locale tag, tolerating region suffixes and case
    pub fn parse(code: &str) -> Option<Self> {
        let tag = primary_language_tag(code);
        Language::ALL.into_iter().find(|lang| lang.code() == tag)
    }

    /// Catalog entry for this language
    pub fn info(self) -> LanguageInfo {
        LanguageInfo {
            code: self,
            name: self.display_name(),
            flag: self.flag(),
        }
    }

    /// Plural category for `count` (`"one"` or `"other"`)
    pub fn plural_category(self, count: i64) -> &'static str {
        match self {
            // French treats zero as singular
            Language::Fr => {
                if count == 0 || count == 1 { "one" } else { "other" }
            }
            Language::En | Language::Tr | Language::De | Language::Es => {
                if count == 1 { "one" } else { "other" }
            }
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::FALLBACK
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s).ok_or_else(|| SiteError::UnsupportedLanguage { code: s.to_string() })
    }
}

/// Entry in the language picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    pub code: Language,
    pub name: &'static str,
    pub flag: &'static str,
}
