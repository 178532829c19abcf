//! Integration tests for the localizer
//!
//! Covers fallback resolution, structured entries and persisted language
//! selection.

use serde::Deserialize;
use serde_json::json;
use studio_site::i18n::{Localizer, TranslationCatalog, TranslationParams};
use studio_site::state::{FileStorage, MemoryStorage, PreferenceStorage, LANGUAGE_PREFERENCE_KEY};
use studio_site::Language;

use crate::helpers::{translation_document, TestContext};

#[derive(Debug, Deserialize, PartialEq)]
struct Milestone {
    year: u16,
    title: String,
}

fn localizer_in(code: &str) -> Localizer {
    let catalog = TranslationCatalog::from_value(translation_document()).unwrap();
    let storage = MemoryStorage::with_value(LANGUAGE_PREFERENCE_KEY, code);
    Localizer::new(catalog, Box::new(storage), None)
}

#[test]
fn test_documented_fallback_example() {
    let catalog = TranslationCatalog::from_value(json!({
        "en": { "a": { "b": "Hello" } },
        "tr": {}
    }))
    .unwrap();
    let storage = MemoryStorage::with_value(LANGUAGE_PREFERENCE_KEY, "tr");
    let localizer = Localizer::new(catalog, Box::new(storage), None);

    assert_eq!(localizer.translate("a.b"), "Hello");
    assert_eq!(localizer.translate("a.c"), "a.c");
}

#[test]
fn test_active_language_wins_over_fallback() {
    let localizer = localizer_in("tr");
    assert_eq!(localizer.translate("nav.home"), "Ana Sayfa");
    assert_eq!(localizer.translate("nav.team"), "Team");
    assert_eq!(localizer.translate("nav"), "nav");
}

#[test]
fn test_structured_entries_with_fallback() {
    let localizer = localizer_in("tr");
    let milestones: Vec<Milestone> = localizer.entries("about.milestones").unwrap();
    assert_eq!(milestones, vec![Milestone { year: 2019, title: "Stüdyo kuruldu".to_string() }]);

    let missing: Option<Vec<Milestone>> = localizer.entries("about.timeline");
    assert!(missing.is_none());
}

#[test]
fn test_interpolation_falls_back_too() {
    let localizer = localizer_in("tr");
    let mut params = TranslationParams::new();
    params.insert("founders".to_string(), "three".to_string());

    assert_eq!(localizer.translate_with("about.body", &params), "Founded by three friends");
    assert_eq!(localizer.translate_plural("team.members", 3, None), "3 members");
}

#[test]
fn test_invalid_language_leaves_state_unchanged() {
    let mut localizer = localizer_in("en");
    let seen = std::rc::Rc::new(std::cell::Cell::new(false));
    let flag = std::rc::Rc::clone(&seen);
    localizer.subscribe(move |_| flag.set(true));

    assert!(!localizer.set_language("klingon"));
    assert_eq!(localizer.language(), Language::En);
    assert!(!seen.get());
}

#[test]
fn test_language_choice_survives_restart() {
    let ctx = TestContext::new().expect("Failed to create test context");
    let document = translation_document();

    let mut localizer = Localizer::new(
        TranslationCatalog::from_value(document.clone()).unwrap(),
        Box::new(FileStorage::new(ctx.preferences_path())),
        None,
    );
    assert_eq!(localizer.language(), Language::En);
    assert!(localizer.set_language("tr"));

    let stored = FileStorage::new(ctx.preferences_path())
        .get(LANGUAGE_PREFERENCE_KEY)
        .unwrap();
    assert_eq!(stored.as_deref(), Some("tr"));

    let restarted = Localizer::new(
        TranslationCatalog::from_value(document).unwrap(),
        Box::new(FileStorage::new(ctx.preferences_path())),
        Some("de-DE"),
    );
    assert_eq!(restarted.language(), Language::Tr);
    assert_eq!(restarted.translate("hero.title"), "Dünyalar inşa ediyoruz");
}
