//! Shared test utilities for touca-options integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic: the Touca
//!   environment overrides are cleared unless a test sets them.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a hermetic `touca-options` command for integration testing.
pub fn touca_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("touca-options");

    // Clear potential host leakage
    cmd.env_remove("TOUCA_API_KEY")
        .env_remove("TOUCA_TEST_VERSION")
        .env_remove("RUST_LOG");

    cmd
}

/// Writes a configuration file with the given `touca` section into `dir`.
#[allow(dead_code)]
pub fn write_config(dir: &TempDir, section: serde_json::Value) -> PathBuf {
    let path = dir.path().join("touca.json");
    let content = serde_json::json!({ "touca": section });
    std::fs::write(&path, content.to_string()).unwrap();
    path
}
