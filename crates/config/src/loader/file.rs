//! Configuration file loading.
//!
//! Responsibilities:
//! - Read the JSON file named by the `file` incoming parameter.
//! - Fold the members of its `touca` section into the incoming parameters.
//!
//! Does NOT handle:
//! - Locating the file on disk; the caller supplies the path.
//! - Validating option types (see arguments.rs).
//!
//! Invariants:
//! - Caller-supplied parameters always win: file values are only inserted for absent keys.
//! - The resolved options are never touched by this stage.

use std::path::PathBuf;

use serde_json::Value;

use super::error::ConfigError;
use crate::constants::{CONFIG_SECTION, FILE_OPTION};
use crate::types::IncomingOptions;

/// Apply the configuration file named by `incoming["file"]`, if any.
pub fn apply_config_file(incoming: &mut IncomingOptions) -> Result<(), ConfigError> {
    let path = match incoming.get(FILE_OPTION) {
        None => return Ok(()),
        Some(Value::String(path)) if path.is_empty() => return Ok(()),
        Some(Value::String(path)) => PathBuf::from(path),
        Some(_) => {
            return Err(ConfigError::InvalidType {
                param: FILE_OPTION.to_string(),
            });
        }
    };

    if !path.is_file() {
        return Err(ConfigError::MissingFile { path });
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(source) => return Err(ConfigError::FileRead { path, source }),
    };

    let parsed: Value = match serde_json::from_str(&content) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!(
                path = %path.display(),
                error = %e,
                "Configuration file is not valid JSON"
            );
            return Err(ConfigError::MalformedFile { path });
        }
    };

    let section = match parsed.get(CONFIG_SECTION) {
        Some(Value::Object(section)) => section,
        _ => return Err(ConfigError::MissingSection { path }),
    };

    let mut applied = 0usize;
    for (name, value) in section {
        if incoming.insert_if_absent(name, value.clone()) {
            applied += 1;
        }
    }

    tracing::debug!(
        path = %path.display(),
        applied,
        skipped = section.len() - applied,
        "Applied configuration file"
    );

    Ok(())
}
