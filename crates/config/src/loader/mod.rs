//! Option resolution from a configuration file, caller arguments,
//! environment variables, and the API URL.
//!
//! Responsibilities:
//! - Run the resolution stages in their fixed order through `update_options`.
//! - Expose each stage individually for callers that need finer control.
//!
//! Does NOT handle:
//! - Locating the configuration file or persisting options.
//! - Using the resolved options (transport, test case submission).
//!
//! Invariants / Assumptions:
//! - Stage order: file -> arguments -> environment -> API URL -> validation.
//! - Caller arguments take precedence over file values.
//! - Environment variables take precedence over caller arguments.
//! - Slugs decoded from the API URL must agree with every other source.
//! - On error both option sets may be partially updated and must be discarded.

mod api_url;
mod arguments;
mod env;
mod error;
mod file;
mod validation;

#[cfg(test)]
mod tests;

pub use api_url::{ApiUrl, reformat_parameters};
pub use arguments::{PARAMETER_RULES, ParameterKind, ParameterRule, apply_arguments};
pub use env::{apply_environment_variables, env_var_or_none};
pub use error::ConfigError;
pub use file::apply_config_file;
pub use validation::{required_group, validate_options};

use crate::types::{IncomingOptions, ResolvedOptions};

/// Resolve `incoming` parameters into `existing`.
///
/// `incoming` gains any option found in the configuration file that the
/// caller did not supply. `existing` receives the validated result.
pub fn update_options(
    existing: &mut ResolvedOptions,
    incoming: &mut IncomingOptions,
) -> Result<(), ConfigError> {
    apply_config_file(incoming)?;
    apply_arguments(existing, incoming)?;
    apply_environment_variables(existing);
    reformat_parameters(existing)?;
    validate_options(existing)
}
