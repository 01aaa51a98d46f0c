//! Config Loading Tests
//!
//! Tests for `StoreConfig` files:
//! - Missing fields take defaults
//! - Out-of-range values are rejected with a code
//! - Loaded config drives the store

use std::io::Write;

use rowdex::store::ConfigError;
use rowdex::{Store, StoreConfig};
use tempfile::NamedTempFile;

// =============================================================================
// Helper Functions
// =============================================================================

fn write_config(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// =============================================================================
// Loading Tests
// =============================================================================

/// An empty object loads as the default config.
#[test]
fn test_load_empty_object() {
    let file = write_config("{}");
    let config = StoreConfig::load(file.path()).unwrap();
    assert_eq!(config, StoreConfig::default());
}

/// A full file round-trips every field.
#[test]
fn test_load_all_fields() {
    let file = write_config(
        r#"{
            "initial_capacity": 1024,
            "preview_limit": 3,
            "max_workers": 2,
            "min_rows_per_worker": 10
        }"#,
    );
    let config = StoreConfig::load(file.path()).unwrap();
    assert_eq!(config.initial_capacity, 1024);
    assert_eq!(config.preview_limit, 3);
    assert_eq!(config.max_workers, Some(2));
    assert_eq!(config.min_rows_per_worker, 10);
}

/// A missing file is an I/O error naming the path.
#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = StoreConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

/// Malformed JSON is a parse error.
#[test]
fn test_load_malformed() {
    let file = write_config("{ not json");
    let err = StoreConfig::load(file.path()).unwrap_err();
    assert_eq!(err.code(), "ROWDEX_CONFIG_PARSE");
}

/// Out-of-range values are rejected after parsing.
#[test]
fn test_load_invalid_values() {
    for text in [
        r#"{"preview_limit": 0}"#,
        r#"{"max_workers": 0}"#,
        r#"{"min_rows_per_worker": 0}"#,
    ] {
        let file = write_config(text);
        let err = StoreConfig::load(file.path()).unwrap_err();
        assert_eq!(err.code(), "ROWDEX_CONFIG_INVALID", "{}", text);
    }
}

// =============================================================================
// Config-Driven Behavior
// =============================================================================

/// The preview limit from a file changes selector display.
#[test]
fn test_preview_limit_from_file() {
    let file = write_config(r#"{"preview_limit": 3}"#);
    let store = Store::with_config(StoreConfig::load(file.path()).unwrap());
    store.extend([1, 2, 3]);
    let all = store.add_selector(|_: &i32| true);
    assert_eq!(all.to_string(), "[0, 1, 2]");

    store.add(4);
    assert_eq!(all.to_string(), "[0, 1, ..., 4]");
}
