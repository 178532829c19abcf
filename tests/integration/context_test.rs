//! Integration tests for site context startup
//!
//! Loads configuration, settings payloads and translation files from a
//! temporary directory the way the binary does.

use assert_matches::assert_matches;
use serial_test::serial;
use studio_site::config::AppConfig;
use studio_site::{Language, SiteContext, SiteError};

use crate::helpers::TestContext;

#[tokio::test]
async fn test_context_from_config_with_defaults() {
    let ctx = TestContext::new().expect("Failed to create test context");

    let site = SiteContext::from_config(&ctx.config, None).await.unwrap();

    assert_eq!(site.localizer.language(), Language::En);
    assert_eq!(site.t("hero.cta"), "See our games");
    let codes: Vec<Language> = site.available_languages().into_iter().map(|info| info.code).collect();
    assert_eq!(codes, vec![Language::En, Language::Tr]);
}

#[tokio::test]
async fn test_context_uses_settings_payload_and_locale_hint() {
    let ctx = TestContext::with_settings_payload().expect("Failed to create test context");

    let site = SiteContext::from_config(&ctx.config, Some("tr_TR.UTF-8")).await.unwrap();

    assert_eq!(site.localizer.language(), Language::Tr);
    assert_eq!(site.t("nav.home"), "Ana Sayfa");
    assert_eq!(site.available_languages().len(), 3);
    assert_eq!(site.settings.get().card_style.team.options, vec!["tilt", "nft"]);
}

#[tokio::test]
async fn test_missing_language_file_is_tolerated() {
    let ctx = TestContext::new().expect("Failed to create test context");

    // "de" is supported in the test config but has no file
    let site = SiteContext::from_config(&ctx.config, Some("de")).await.unwrap();
    assert_eq!(site.localizer.language(), Language::De);
    assert_eq!(site.t("nav.home"), "Home");
}

#[tokio::test]
async fn test_invalid_settings_payload_is_rejected() {
    let mut ctx = TestContext::new().expect("Failed to create test context");
    let path = ctx.path().join("broken.json");
    std::fs::write(&path, r#"{"features": {}}"#).unwrap();
    ctx.config.site.settings_path = Some(path.to_string_lossy().into_owned());

    let result = SiteContext::from_config(&ctx.config, None).await;
    assert_matches!(result, Err(SiteError::Serialization(_)));
}

#[tokio::test]
async fn test_missing_default_translations_is_fatal() {
    let ctx = TestContext::new().expect("Failed to create test context");
    std::fs::remove_file(ctx.translations_dir().join("en.json")).unwrap();

    let result = SiteContext::from_config(&ctx.config, None).await;
    assert_matches!(result, Err(SiteError::Config(_)));
}

#[test]
#[serial]
fn test_config_file_and_environment_overrides() {
    let ctx = TestContext::new().expect("Failed to create test context");
    let file = ctx.path().join("site.toml");
    std::fs::write(
        &file,
        r#"
[i18n]
translations_dir = "content/i18n"
default_language = "en"
supported_languages = ["en", "es"]

[logging]
level = "debug"
json = true
"#,
    )
    .unwrap();

    std::env::set_var("STUDIO_SITE__STORAGE__PREFERENCES_PATH", "/tmp/studio-prefs.json");
    let config = AppConfig::from_file(&file.to_string_lossy());
    std::env::remove_var("STUDIO_SITE__STORAGE__PREFERENCES_PATH");

    let config = config.unwrap();
    assert_eq!(config.i18n.translations_dir, "content/i18n");
    assert_eq!(config.i18n.supported_languages, vec!["en", "es"]);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
    assert_eq!(config.storage.preferences_path, "/tmp/studio-prefs.json");
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_malformed_config_file_reports_load_error() {
    let ctx = TestContext::new().expect("Failed to create test context");
    let file = ctx.path().join("broken.toml");
    std::fs::write(&file, "[logging\nlevel = ").unwrap();

    let result = AppConfig::from_file(&file.to_string_lossy());
    assert_matches!(result, Err(SiteError::ConfigLoad(_)));
}

#[test]
#[serial]
fn test_config_defaults_without_file() {
    let ctx = TestContext::new().expect("Failed to create test context");
    let missing = ctx.path().join("absent");

    let config = AppConfig::from_file(&missing.to_string_lossy()).unwrap();
    assert_eq!(config.i18n.default_language, "en");
    assert_eq!(config.logging.level, "info");
    assert!(config.site.settings_path.is_none());
    assert!(config.to_toml().unwrap().contains("translations_dir"));
}
