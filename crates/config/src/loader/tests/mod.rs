//! Tests for the option resolution stages.
//!
//! Responsibilities:
//! - Test each stage (file, arguments, environment, API URL, validation) in isolation.
//! - Test the full `update_options` pipeline and source precedence.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Run `f` with both Touca environment overrides unset.
pub fn without_touca_env<F: FnOnce() -> R, R>(f: F) -> R {
    temp_env::with_vars_unset(
        [
            crate::constants::ENV_API_KEY,
            crate::constants::ENV_TEST_VERSION,
        ],
        f,
    )
}
