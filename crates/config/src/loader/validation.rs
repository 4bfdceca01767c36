//! Cross-field validation of resolved options.
//!
//! Responsibilities:
//! - Enforce that related options are either all present or all absent.
//!
//! Does NOT handle:
//! - Type validation of individual options (see arguments.rs).
//!
//! Invariants:
//! - Never mutates the resolved options.
//! - A fully unconfigured option set is valid; only partial presence fails.

use super::error::ConfigError;
use crate::types::{OptionKey, ResolvedOptions};

/// Options that must be provided together for `existing`.
///
/// Team, suite, and version always belong to the group. The API key and
/// URL join it when the client performs a handshake and at least one of
/// them was provided.
pub fn required_group(existing: &ResolvedOptions) -> Vec<OptionKey> {
    let mut group = OptionKey::SLUGS.to_vec();
    let has_credentials = OptionKey::CREDENTIALS
        .iter()
        .any(|key| existing.contains(*key));
    if existing.has_handshake() && has_credentials {
        group.extend(OptionKey::CREDENTIALS);
    }
    group
}

/// Check all-or-nothing presence of related options.
pub fn validate_options(existing: &ResolvedOptions) -> Result<(), ConfigError> {
    let group = required_group(existing);
    let (present, mut missing): (Vec<OptionKey>, Vec<OptionKey>) =
        group.into_iter().partition(|key| existing.contains(*key));

    if present.is_empty() || missing.is_empty() {
        return Ok(());
    }

    missing.sort_by_key(|key| key.as_str());
    Err(ConfigError::MissingOptions {
        params: missing.iter().map(|key| key.as_str().to_string()).collect(),
    })
}
