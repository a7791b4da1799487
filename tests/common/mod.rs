//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use histogram_nd::{HistogramConfig, HistogramError, RunOutcome, run};

// =============================================================================
// Test Case Loading
// =============================================================================

/// Base directory for test cases.
pub fn test_cases_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/test-cases")
}

/// Load a JSON file and deserialize it.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> T {
    let file =
        File::open(path).unwrap_or_else(|e| panic!("Failed to open {}: {e}", path.display()));
    serde_json::from_reader(file)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {e}", path.display()))
}

/// A golden text-output case: configuration, raw input and expected output.
#[derive(Debug, Deserialize)]
pub struct TextCase {
    pub config: HistogramConfig,
    pub input: String,
    pub expected: String,
}

/// Load `tests/test-cases/text/<name>.json`, validating its configuration.
pub fn load_text_case(name: &str) -> TextCase {
    let path = test_cases_dir().join("text").join(format!("{name}.json"));
    let case: TextCase = load_json(&path);
    case.config
        .validate()
        .unwrap_or_else(|e| panic!("Invalid config in {}: {e}", path.display()));
    case
}

// =============================================================================
// Pipeline Helpers
// =============================================================================

/// Run the pipeline over an in-memory input, returning the outcome and the bytes written.
pub fn run_bytes(
    config: &HistogramConfig,
    input: &str,
) -> (Result<RunOutcome, HistogramError>, Vec<u8>) {
    let mut out = Vec::new();
    let result = run(config, input.as_bytes(), &mut out);
    (result, out)
}

/// Run the pipeline and return the text output; panics on error.
pub fn run_text(config: &HistogramConfig, input: &str) -> String {
    let (result, out) = run_bytes(config, input);
    result.unwrap_or_else(|e| panic!("run failed: {e}"));
    String::from_utf8(out).expect("text output is UTF-8")
}

/// Render tuples as input lines, one tuple per line, space separated.
pub fn to_input(tuples: &[Vec<f64>]) -> String {
    let mut input = String::new();
    for tuple in tuples {
        let line: Vec<String> = tuple.iter().map(|v| v.to_string()).collect();
        input.push_str(&line.join(" "));
        input.push('\n');
    }
    input
}
