//! Tests for registry configuration and serialized settings.

use std::sync::Arc;

use lingo::options::DEFAULT_MISSING_ITEM_TEXT;
use lingo::{LingoOptions, LingoSettings, MissingTranslationMode, Parameters};

// =========================================================================
// Defaults
// =========================================================================

#[test]
fn default_options() {
    let options = LingoOptions::default();

    assert!(!options.debug());
    assert_eq!(options.fields_prefix(), "Fields");
    assert_eq!(options.missing_item_text(), DEFAULT_MISSING_ITEM_TEXT);
    assert_eq!(options.missing_translation_mode(), MissingTranslationMode::AsReadable);
    assert_eq!(options.default_language(), "en");
    assert!(options.parameters().is_empty());
    assert!(options.loaders().is_empty());
    assert_eq!(options.base_prefixes().len(), 1);
    assert!(options.base_prefixes().get("Enum").is_some());
}

#[test]
fn base_prefix_registration_replaces_existing_rule() {
    let mut options = LingoOptions::default();
    options
        .add_base_prefix_str("Enum", "Lists")
        .add_base_prefix_str("Entity", "Models");

    assert_eq!(options.base_prefixes().len(), 2);
}

#[test]
fn parameters_keep_registration_order() {
    let mut params = Parameters::new();
    params.insert("b", Arc::new(|_: &str, _: &str| "1".to_string()));
    params.insert("a", Arc::new(|_: &str, _: &str| "2".to_string()));
    params.insert("B", Arc::new(|_: &str, _: &str| "3".to_string()));

    assert_eq!(params.names().collect::<Vec<_>>(), vec!["b", "a"]);
    assert!(params.contains("A"));
    assert_eq!(params.parse("{b}{a}", "en"), "32");
}

// =========================================================================
// Settings
// =========================================================================

#[test]
fn settings_from_json() {
    let settings: LingoSettings = serde_json::from_str(
        r#"{
            "debug": true,
            "fieldsPrefix": "Props",
            "missingTranslationMode": "AsError",
            "defaultLanguage": "fr"
        }"#,
    )
    .unwrap();
    let options = LingoOptions::from(settings);

    assert!(options.debug());
    assert_eq!(options.fields_prefix(), "Props");
    assert_eq!(options.missing_translation_mode(), MissingTranslationMode::AsError);
    assert_eq!(options.default_language(), "fr");
    assert_eq!(options.missing_item_text(), DEFAULT_MISSING_ITEM_TEXT);
}

#[test]
fn empty_settings_keep_defaults() {
    let settings: LingoSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, LingoSettings::default());

    let options = LingoOptions::from(settings);
    assert_eq!(options.missing_translation_mode(), MissingTranslationMode::AsReadable);
    assert_eq!(options.fields_prefix(), "Fields");
}

#[test]
fn unknown_mode_is_rejected() {
    let result = serde_json::from_str::<LingoSettings>(r#"{"missingTranslationMode": "Loud"}"#);
    assert!(result.is_err());
}

#[test]
fn settings_serialize_in_camel_case() {
    let settings = LingoSettings {
        missing_item_text: Some("?{key}".to_string()),
        ..LingoSettings::default()
    };
    let json = serde_json::to_value(&settings).unwrap();

    assert_eq!(json["missingItemText"], "?{key}");
    assert!(json["fieldsPrefix"].is_null());
}
