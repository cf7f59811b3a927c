//! Test fixture loader for Causeway golden datasets.
//!
//! Golden files live under `golden/` in this crate: DAG text inputs with their
//! expected validation outcome, and raw LLM output shapes with their expected
//! normalized records.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by file name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

/// Load every fixture in `subdir` as `T`, paired with its file name.
pub fn load_all<T: DeserializeOwned>(subdir: &str) -> Vec<(String, T)> {
    list_fixtures(subdir)
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let relative = format!("{subdir}/{name}");
            (name, load_fixture(&relative))
        })
        .collect()
}

// ── Golden dataset types ─────────────────────────────────────────────────

/// A DAG text input and its expected validation outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct DagCase {
    pub description: String,
    /// Raw text as a user would type it.
    pub input: String,
    pub expect_valid: bool,
    /// Expected adjacency when valid.
    #[serde(default)]
    pub expected_graph: Option<serde_json::Value>,
    /// Substring the failure message must contain.
    #[serde(default)]
    pub expected_message: Option<String>,
    #[serde(default)]
    pub expect_cycles: bool,
}

/// A raw LLM output shape and its expected normalized records.
#[derive(Debug, Clone, Deserialize)]
pub struct ShapeCase {
    pub description: String,
    /// `"relationships"` or `"variables"`.
    pub mode: String,
    pub input: serde_json::Value,
    /// Serialized `NormalizedOutput`, or absent when an error is expected.
    #[serde(default)]
    pub expected: Option<serde_json::Value>,
    /// Expected error path, e.g. `$[1]`.
    #[serde(default)]
    pub expected_error_path: Option<String>,
}
