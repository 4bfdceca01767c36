//! Caller-supplied parameters.
//!
//! Responsibilities:
//! - Carry untyped parameters (JSON values) exactly as the caller or the
//!   configuration file supplied them.
//! - Provide builder methods for the common options.
//!
//! Does NOT handle:
//! - Type validation (see `loader::arguments`).
//!
//! Invariants:
//! - Values are never replaced once inserted through `insert_if_absent`.

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::constants::{CONCURRENCY_DISABLED, CONCURRENCY_ENABLED, FILE_OPTION};
use crate::types::OptionKey;

/// Parameters supplied by the caller for a single resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncomingOptions {
    values: Map<String, Value>,
}

impl IncomingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary parameter. Unrecognized names are kept but ignored
    /// during resolution.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Set a recognized option.
    pub fn with_option(self, key: OptionKey, value: impl Into<Value>) -> Self {
        self.with(key.as_str(), value)
    }

    /// Set the path of the configuration file to load.
    pub fn with_config_file(self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        self.with(FILE_OPTION, path.to_string_lossy().into_owned())
    }

    pub fn with_team(self, team: impl Into<String>) -> Self {
        self.with_option(OptionKey::Team, team.into())
    }

    pub fn with_suite(self, suite: impl Into<String>) -> Self {
        self.with_option(OptionKey::Suite, suite.into())
    }

    pub fn with_version(self, version: impl Into<String>) -> Self {
        self.with_option(OptionKey::Version, version.into())
    }

    pub fn with_api_key(self, api_key: impl Into<String>) -> Self {
        self.with_option(OptionKey::ApiKey, api_key.into())
    }

    pub fn with_api_url(self, api_url: impl Into<String>) -> Self {
        self.with_option(OptionKey::ApiUrl, api_url.into())
    }

    pub fn with_handshake(self, handshake: bool) -> Self {
        self.with_option(OptionKey::Handshake, handshake)
    }

    /// Enable or disable concurrency using its accepted string literals.
    pub fn with_concurrency(self, enabled: bool) -> Self {
        let literal = if enabled {
            CONCURRENCY_ENABLED
        } else {
            CONCURRENCY_DISABLED
        };
        self.with_option(OptionKey::Concurrency, literal)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Insert `value` under `name` unless a value is already present.
    ///
    /// Returns true if the value was inserted.
    pub fn insert_if_absent(&mut self, name: &str, value: Value) -> bool {
        if self.values.contains_key(name) {
            return false;
        }
        self.values.insert(name.to_string(), value);
        true
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

impl From<Map<String, Value>> for IncomingOptions {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl From<IncomingOptions> for Map<String, Value> {
    fn from(options: IncomingOptions) -> Self {
        options.values
    }
}
