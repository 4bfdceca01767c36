//! Option resolution for Touca clients.
//!
//! This crate merges a configuration file, caller-supplied parameters,
//! environment variables, and a structured API URL into one validated
//! set of client options. Start with [`update_options`].

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ApiUrl, ConfigError, PARAMETER_RULES, ParameterKind, ParameterRule, apply_arguments,
    apply_config_file, apply_environment_variables, env_var_or_none, reformat_parameters,
    required_group, update_options, validate_options,
};
pub use types::{IncomingOptions, OptionKey, OptionValue, REDACTED, ResolvedOptions};
