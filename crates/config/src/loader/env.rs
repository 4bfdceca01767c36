//! Environment variable overlay.
//!
//! Responsibilities:
//! - Overwrite `api_key` and `version` from `TOUCA_API_KEY` and `TOUCA_TEST_VERSION`.
//!
//! Does NOT handle:
//! - Any other environment variable; the overlay is limited to the two above.
//!
//! Invariants:
//! - Environment variables take precedence over caller arguments and file values.
//! - Unset or empty variables leave the resolved options untouched.
//! - Values are used verbatim (not trimmed) and never logged.

use secrecy::SecretString;

use crate::constants::{ENV_API_KEY, ENV_TEST_VERSION};
use crate::types::ResolvedOptions;

/// Read an environment variable, returning None if unset, empty, or not valid unicode.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Apply environment variable overrides to `existing`.
pub fn apply_environment_variables(existing: &mut ResolvedOptions) {
    if let Some(api_key) = env_var_or_none(ENV_API_KEY) {
        tracing::debug!(var = ENV_API_KEY, "Option api_key overridden by environment");
        existing.api_key = Some(SecretString::new(api_key.into()));
    }
    if let Some(version) = env_var_or_none(ENV_TEST_VERSION) {
        tracing::debug!(var = ENV_TEST_VERSION, "Option version overridden by environment");
        existing.version = Some(version);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_strings() {
        let key = "_TOUCA_TEST_ENV_VAR";
        temp_env::with_var_unset(key, || {
            assert!(env_var_or_none(key).is_none(), "Unset env var should return None");
        });

        temp_env::with_vars([(key, Some(""))], || {
            assert!(env_var_or_none(key).is_none(), "Empty env var should return None");
        });

        temp_env::with_vars([(key, Some(" padded "))], || {
            assert_eq!(
                env_var_or_none(key),
                Some(" padded ".to_string()),
                "Non-empty env var should be returned verbatim"
            );
        });
    }
}
