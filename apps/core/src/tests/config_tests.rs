//! Configuration Tests
//!
//! `COACH_*` variables are set per test with `temp_env`, which serializes
//! access to the process environment.

use crate::brain::coach::Coach;
use crate::config::{CoachConfig, LogFormat};
use crate::error::AppError;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

const KEYS: &[&str] = &[
    "COACH_DATA_DIR",
    "COACH_MEMORY_FILE",
    "COACH_QUOTES_FILE",
    "COACH_ADVICE_FILE",
    "COACH_SUGGESTIONS",
    "COACH_APPEND_QUOTE",
    "COACH_MEMORY_CAPACITY",
    "COACH_RECENCY_MINUTES",
    "COACH_LOG_FORMAT",
];

/// Every coach variable unset except `overrides`
fn env_with(overrides: &[(&'static str, &str)]) -> Vec<(&'static str, Option<String>)> {
    KEYS.iter()
        .map(|key| {
            let value = overrides
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.to_string());
            (*key, value)
        })
        .collect()
}

#[test]
fn test_defaults() {
    temp_env::with_vars(env_with(&[]), || {
        let config = CoachConfig::from_env().expect("Default config should load");
        assert!(config.data_dir.ends_with("data"));
        assert!(config.memory_file.ends_with("data/coach_memory.json"));
        assert!(config.quotes_file.ends_with("data/quotes.json"));
        assert_eq!(config.advice_file, None);
        assert_eq!(config.suggestion_count, 3);
        assert!(config.append_quote);
        assert_eq!(config.memory_capacity, 10);
        assert_eq!(config.recency_minutes, 60);
        assert_eq!(config.log_format, LogFormat::Pretty);
    });
}

#[test]
fn test_data_dir_drives_file_paths() {
    temp_env::with_vars(env_with(&[("COACH_DATA_DIR", "/tmp/coach-data")]), || {
        let config = CoachConfig::from_env().unwrap();
        assert_eq!(
            config.memory_file,
            PathBuf::from("/tmp/coach-data/coach_memory.json")
        );
        assert_eq!(config.quotes_file, PathBuf::from("/tmp/coach-data/quotes.json"));
    });
}

#[test]
fn test_overrides() {
    let vars = env_with(&[
        ("COACH_MEMORY_FILE", "/tmp/elsewhere/memory.json"),
        ("COACH_SUGGESTIONS", "2"),
        ("COACH_APPEND_QUOTE", "off"),
        ("COACH_MEMORY_CAPACITY", "25"),
        ("COACH_RECENCY_MINUTES", "0"),
        ("COACH_LOG_FORMAT", "JSON"),
    ]);
    temp_env::with_vars(vars, || {
        let config = CoachConfig::from_env().unwrap();
        assert_eq!(config.memory_file, PathBuf::from("/tmp/elsewhere/memory.json"));
        assert_eq!(config.suggestion_count, 2);
        assert!(!config.append_quote);
        assert_eq!(config.memory_capacity, 25);
        assert_eq!(config.recency_minutes, 0);
        assert_eq!(config.log_format, LogFormat::Json);
    });
}

#[test]
fn test_out_of_range_is_validation_error() {
    temp_env::with_vars(env_with(&[("COACH_SUGGESTIONS", "7")]), || {
        let err = CoachConfig::from_env().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);
    });
}

#[test]
fn test_unparseable_values_are_config_errors() {
    for (key, value) in [
        ("COACH_SUGGESTIONS", "three"),
        ("COACH_APPEND_QUOTE", "maybe"),
        ("COACH_LOG_FORMAT", "xml"),
    ] {
        temp_env::with_vars(env_with(&[(key, value)]), || {
            let err = CoachConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(_)), "{}: got {:?}", key, err);
        });
    }
}

#[test]
fn test_coach_uses_custom_advice_file() {
    let dir = tempdir().unwrap();
    let advice = dir.path().join("advice.json");
    fs::write(
        &advice,
        r#"{
            "fallback": "Tell me more.",
            "entries": [
                {"category": "gratitude", "keywords": ["Thank"], "messages": ["Write down one thing you appreciate."]}
            ]
        }"#,
    )
    .unwrap();

    let config = CoachConfig {
        data_dir: dir.path().to_path_buf(),
        memory_file: dir.path().join("coach_memory.json"),
        quotes_file: dir.path().join("quotes.json"),
        advice_file: Some(advice),
        append_quote: false,
        ..CoachConfig::default()
    };

    let mut coach = Coach::from_config(&config).expect("Failed to build coach");
    let turn = coach.respond("THANKS for yesterday");
    assert_eq!(turn.matched_category.as_deref(), Some("gratitude"));
    assert_eq!(turn.reply_text, "Write down one thing you appreciate.");

    assert_eq!(coach.respond("The weather is mild").reply_text, "Tell me more.");
}

#[test]
fn test_coach_rejects_invalid_advice_file() {
    let dir = tempdir().unwrap();
    let advice = dir.path().join("advice.json");
    fs::write(&advice, r#"{"fallback": "x", "entries": []}"#).unwrap();

    let config = CoachConfig {
        data_dir: dir.path().to_path_buf(),
        memory_file: dir.path().join("coach_memory.json"),
        quotes_file: dir.path().join("quotes.json"),
        advice_file: Some(advice),
        ..CoachConfig::default()
    };

    assert!(matches!(
        Coach::from_config(&config),
        Err(AppError::Validation(_))
    ));
}
