//! Environment variable tests.
//!
//! Responsibilities:
//! - Test `TOUCA_API_KEY` and `TOUCA_TEST_VERSION` overrides.
//! - Test that unset and empty variables leave options untouched.

use crate::loader::arguments::apply_arguments;
use crate::loader::env::apply_environment_variables;
use crate::types::{IncomingOptions, ResolvedOptions};
use serial_test::serial;

use super::{env_lock, without_touca_env};

#[test]
#[serial]
fn test_api_key_env_overrides_argument() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("TOUCA_API_KEY", Some("xyz"))], || {
        let mut existing = ResolvedOptions::new();
        let incoming = IncomingOptions::new().with_api_key("from-arguments");
        apply_arguments(&mut existing, &incoming).unwrap();

        apply_environment_variables(&mut existing);
        assert_eq!(existing.api_key(), Some("xyz"));
    });
}

#[test]
#[serial]
fn test_test_version_env_overrides_argument() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("TOUCA_TEST_VERSION", Some("v2.0"))], || {
        let mut existing = ResolvedOptions::new();
        existing.version = Some("v1.0".to_string());

        apply_environment_variables(&mut existing);
        assert_eq!(existing.version.as_deref(), Some("v2.0"));
    });
}

#[test]
#[serial]
fn test_env_sets_absent_options() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("TOUCA_API_KEY", Some("xyz")),
            ("TOUCA_TEST_VERSION", Some("v3")),
        ],
        || {
            let mut existing = ResolvedOptions::new();
            apply_environment_variables(&mut existing);
            assert_eq!(existing.api_key(), Some("xyz"));
            assert_eq!(existing.version.as_deref(), Some("v3"));
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [("TOUCA_API_KEY", Some("")), ("TOUCA_TEST_VERSION", Some(""))],
        || {
            let mut existing = ResolvedOptions::new();
            existing.version = Some("v1.0".to_string());

            apply_environment_variables(&mut existing);
            assert!(existing.api_key.is_none());
            assert_eq!(existing.version.as_deref(), Some("v1.0"));
        },
    );
}

#[test]
#[serial]
fn test_whitespace_env_value_used_verbatim() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("TOUCA_TEST_VERSION", Some(" v1 "))], || {
        let mut existing = ResolvedOptions::new();
        apply_environment_variables(&mut existing);
        assert_eq!(existing.version.as_deref(), Some(" v1 "));
    });
}

#[test]
#[serial]
fn test_unset_env_vars_leave_options_untouched() {
    let _lock = env_lock().lock().unwrap();

    without_touca_env(|| {
        let mut existing = ResolvedOptions::new();
        existing.team = Some("acme".to_string());
        apply_environment_variables(&mut existing);

        assert_eq!(existing.team.as_deref(), Some("acme"));
        assert!(existing.api_key.is_none());
        assert!(existing.version.is_none());
    });
}
