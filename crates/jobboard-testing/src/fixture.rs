//! Golden-file loader for HTTP contract tests.
//!
//! Golden bodies live under `contracts/http/` at the workspace root.

use std::path::{Path, PathBuf};

use serde_json::Value;

const CONTRACTS_DIR: &str = "contracts";

/// Golden JSON bodies for deterministic endpoints.
///
/// ```no_run
/// use jobboard_testing::fixture::Fixture;
/// let body = Fixture::load("contracts/http/admin/list_users.json");
/// ```
pub struct Fixture;

impl Fixture {
    /// Workspace root: the first ancestor of the crate dir that holds `contracts/`.
    pub fn workspace_root() -> PathBuf {
        let start = std::env::var("CARGO_MANIFEST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::current_dir().unwrap());
        start
            .ancestors()
            .find(|a| a.join(CONTRACTS_DIR).is_dir())
            .map(Path::to_path_buf)
            .unwrap_or(start)
    }

    /// Load and parse a JSON file at `workspace_root/relative_path`.
    ///
    /// Panics if the file is missing or not valid JSON.
    pub fn load(relative_path: &str) -> Value {
        let full_path = Self::workspace_root().join(relative_path);
        let contents = std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("fixture not found at {}: {}", full_path.display(), e));
        serde_json::from_str(&contents)
            .unwrap_or_else(|e| panic!("invalid JSON in fixture {}: {}", relative_path, e))
    }

    /// Assert that `actual` equals the golden file, printing both on mismatch.
    pub fn assert_matches(actual: &Value, relative_path: &str) {
        let expected = Self::load(relative_path);
        assert_eq!(
            actual,
            &expected,
            "response does not match {relative_path}\nactual:\n{}\nexpected:\n{}",
            serde_json::to_string_pretty(actual).unwrap_or_default(),
            serde_json::to_string_pretty(&expected).unwrap_or_default(),
        );
    }
}
