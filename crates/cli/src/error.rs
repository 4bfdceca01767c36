//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).

use touca_config::ConfigError;

/// Structured exit codes for touca-options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - options resolved and printed.
    #[allow(dead_code)]
    Success = 0,

    /// General error - unhandled or generic failure (e.g. unreadable file).
    GeneralError = 1,

    /// Validation error - invalid, conflicting, or incomplete options.
    ///
    /// Scripts should fix the input and not retry with the same options.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::FileRead { .. } => ExitCode::GeneralError,
            ConfigError::MissingFile { .. }
            | ConfigError::MalformedFile { .. }
            | ConfigError::MissingSection { .. }
            | ConfigError::InvalidType { .. }
            | ConfigError::ConflictingOption { .. }
            | ConfigError::MissingOptions { .. }
            | ConfigError::MalformedUrl { .. } => ExitCode::ValidationError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ValidationError.as_i32(), 5);
    }

    #[test]
    fn test_config_error_in_chain_maps_to_validation() {
        let result: Result<(), ConfigError> = Err(ConfigError::MissingOptions {
            params: vec!["suite".to_string()],
        });
        let err = result.context("Invalid configuration").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::ValidationError);
    }

    #[test]
    fn test_other_errors_are_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
