//! The resolved (accumulating) option set.
//!
//! Responsibilities:
//! - Hold every recognized option as an `Option<_>` field where `Some` means "present".
//! - Provide key-based access so loader stages can be driven by tables of `OptionKey`.
//! - Serialize without ever revealing the API key.
//!
//! Does NOT handle:
//! - Deciding precedence between sources (see `loader`).
//!
//! Invariants:
//! - `api_key` is stored as a `SecretString`; `Debug` and `Serialize` never expose it.
//! - Text keys only ever hold `OptionValue::Text`, flag keys only `OptionValue::Flag`.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use super::key::{OptionKey, OptionValue};
use crate::loader::ConfigError;

/// Placeholder written in place of secret values.
pub const REDACTED: &str = "<redacted>";

mod redacted {
    use secrecy::SecretString;
    use serde::Serializer;

    pub fn serialize<S>(_secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(super::REDACTED)
    }
}

/// Options resolved from the configuration file, caller arguments,
/// environment variables, and the API URL.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolvedOptions {
    /// Slug of the team to which test results belong.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Slug of the suite to which test results belong.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    /// Version of the code under test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// API key issued by the Touca server.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "redacted::serialize"
    )]
    pub api_key: Option<SecretString>,
    /// URL to the Touca server API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Whether the client should authenticate with the server during configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handshake: Option<bool>,
    /// Whether test case declarations are shared across threads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<bool>,
}

impl ResolvedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a value is present for `key`.
    pub fn contains(&self, key: OptionKey) -> bool {
        match key {
            OptionKey::ApiKey => self.api_key.is_some(),
            OptionKey::Handshake => self.handshake.is_some(),
            OptionKey::Concurrency => self.concurrency.is_some(),
            _ => self.text(key).is_some(),
        }
    }

    /// Returns the value of a text option.
    ///
    /// Always `None` for the boolean options `handshake` and `concurrency`.
    pub fn text(&self, key: OptionKey) -> Option<&str> {
        match key {
            OptionKey::Team => self.team.as_deref(),
            OptionKey::Suite => self.suite.as_deref(),
            OptionKey::Version => self.version.as_deref(),
            OptionKey::ApiKey => self.api_key(),
            OptionKey::ApiUrl => self.api_url.as_deref(),
            OptionKey::Handshake | OptionKey::Concurrency => None,
        }
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// Fails with `ConfigError::InvalidType` when the value kind does not
    /// match the option (e.g. a flag for `team`).
    pub fn set(&mut self, key: OptionKey, value: OptionValue) -> Result<(), ConfigError> {
        match (key, value) {
            (OptionKey::Team, OptionValue::Text(v)) => self.team = Some(v),
            (OptionKey::Suite, OptionValue::Text(v)) => self.suite = Some(v),
            (OptionKey::Version, OptionValue::Text(v)) => self.version = Some(v),
            (OptionKey::ApiKey, OptionValue::Text(v)) => {
                self.api_key = Some(SecretString::new(v.into()))
            }
            (OptionKey::ApiUrl, OptionValue::Text(v)) => self.api_url = Some(v),
            (OptionKey::Handshake, OptionValue::Flag(v)) => self.handshake = Some(v),
            (OptionKey::Concurrency, OptionValue::Flag(v)) => self.concurrency = Some(v),
            (key, _) => {
                return Err(ConfigError::InvalidType {
                    param: key.as_str().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the API key, exposing the secret.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|key| key.expose_secret())
    }

    /// Returns true unless the handshake was explicitly disabled.
    pub fn has_handshake(&self) -> bool {
        self.handshake.unwrap_or(true)
    }

    /// Returns true when team, suite, and version are all present.
    pub fn is_configured(&self) -> bool {
        OptionKey::SLUGS.iter().all(|key| self.contains(*key))
    }
}
