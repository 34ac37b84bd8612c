//! Test utilities and shared test helpers for merge-structure.
//!
//! Temporary files created here live inside a [`tempfile::TempDir`], so
//! they are removed when the directory handle is dropped.

#[cfg(any(test, feature = "tempfile"))]
use std::path::PathBuf;
use std::sync::Once;

#[cfg(any(test, feature = "tracing-subscriber"))]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(any(test, feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(any(test, feature = "tracing-subscriber")))]
pub fn init_test_logging() {
    INIT.call_once(|| {});
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(any(test, feature = "tempfile"))]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `content` to `name` inside `dir` and return the full path.
///
/// `name` is used verbatim, so names without an extension or with a
/// trailing dot can be produced.
#[cfg(any(test, feature = "tempfile"))]
pub fn write_temp_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temporary file");
    path
}

/// Build a path inside `dir` without creating the file.
#[cfg(any(test, feature = "tempfile"))]
pub fn temp_path(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

/// Sample documents used across test suites.
pub mod document_fixtures {
    use crate::Document;
    use serde_json::json;

    /// JSON text with one scalar and one nested mapping.
    pub const NESTED_JSON: &str = r#"{
  "key1": "value1",
  "key2": {
    "nestedKey": "nestedValue"
  }
}
"#;

    /// YAML text equivalent to [`NESTED_JSON`].
    pub const NESTED_YAML: &str = "key1: value1\nkey2:\n  nestedKey: nestedValue\n";

    /// The document both nested fixtures decode to.
    pub fn nested_document() -> Document {
        let mut document = Document::new();
        document.insert("key1".to_string(), json!("value1"));
        document.insert("key2".to_string(), json!({ "nestedKey": "nestedValue" }));
        document
    }

    /// A document exercising every value kind.
    pub fn mixed_document() -> Document {
        let value = json!({
            "name": "merge",
            "version": 3,
            "ratio": 0.5,
            "enabled": true,
            "missing": null,
            "tags": ["a", "b"],
            "servers": [
                { "host": "localhost", "port": 8080 },
                { "host": "example.com", "port": 443 }
            ],
            "nested": { "deeper": { "leaf": -7 } }
        });
        match value {
            serde_json::Value::Object(map) => map,
            _ => unreachable!("fixture is an object literal"),
        }
    }
}
