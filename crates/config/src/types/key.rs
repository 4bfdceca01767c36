//! Recognized option names and the values they resolve to.
//!
//! Responsibilities:
//! - Enumerate the closed set of option keys understood by the resolver.
//! - Define the typed value produced by a parameter rule's transform.
//!
//! Does NOT handle:
//! - Validation of incoming values (see `loader::arguments`).
//! - Storage of resolved values (see `types::resolved`).

use std::fmt;

/// One of the option keys understood by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionKey {
    Team,
    Suite,
    Version,
    ApiKey,
    ApiUrl,
    Handshake,
    Concurrency,
}

impl OptionKey {
    /// Keys that identify the test results being submitted, in the order
    /// they appear in the `/@/team/suite/version` suffix of an API URL.
    pub const SLUGS: [OptionKey; 3] = [OptionKey::Team, OptionKey::Suite, OptionKey::Version];

    /// Keys required by a client that talks to the server.
    pub const CREDENTIALS: [OptionKey; 2] = [OptionKey::ApiKey, OptionKey::ApiUrl];

    /// Name of the option as it appears in incoming parameters and files.
    pub const fn as_str(self) -> &'static str {
        match self {
            OptionKey::Team => "team",
            OptionKey::Suite => "suite",
            OptionKey::Version => "version",
            OptionKey::ApiKey => "api_key",
            OptionKey::ApiUrl => "api_url",
            OptionKey::Handshake => "handshake",
            OptionKey::Concurrency => "concurrency",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated option value, ready to be stored in [`ResolvedOptions`].
///
/// [`ResolvedOptions`]: crate::ResolvedOptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Text(String),
    Flag(bool),
}
