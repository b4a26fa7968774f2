//! Test fixture loader for the SWC standardizer.
//!
//! Tree fixtures are JSON documents holding an ordered record list and the
//! test names a full validation run is expected to report. Raw `.swc` files
//! sit next to them for reader/writer tests.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

use swc_core::models::{NodeRecord, QcTest};

/// Root directory of the workspace `test-fixtures` folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up until the data folder
    // (not this crate's own directory) is found.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("trees").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// A named tree with its expected findings.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeFixture {
    pub name: String,
    pub records: Vec<NodeRecord>,
    /// Test names expected in the report, in report order.
    pub expected_findings: Vec<QcTest>,
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

/// Load `trees/<name>.json`.
pub fn load_tree(name: &str) -> TreeFixture {
    load_fixture(&format!("trees/{name}.json"))
}

/// Every tree fixture, sorted by file name.
pub fn all_trees() -> Vec<TreeFixture> {
    let mut paths = list_fixtures("trees", "json");
    paths.sort();
    paths
        .iter()
        .map(|p| {
            let name = p.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            load_fixture(&format!("trees/{name}"))
        })
        .collect()
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all files with `extension` in a fixture subdirectory.
pub fn list_fixtures(subdir: &str, extension: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == extension) {
                Some(path)
            } else {
                None
            }
        })
        .collect()
}
