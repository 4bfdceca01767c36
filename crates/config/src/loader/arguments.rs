//! Caller argument merging.
//!
//! Responsibilities:
//! - Describe every recognized parameter in a declarative rule table.
//! - Validate and transform incoming values with a single generic loop.
//!
//! Does NOT handle:
//! - Defaulting absent options (see api_url.rs for `concurrency`).
//! - Cross-field validation (see validation.rs).
//!
//! Invariants:
//! - Rules are applied in table order; the first invalid value aborts the stage.
//! - Values already copied before a failure are not rolled back.
//! - Unrecognized incoming parameters are ignored.

use serde_json::Value;

use super::error::ConfigError;
use crate::constants::{CONCURRENCY_DISABLED, CONCURRENCY_ENABLED};
use crate::types::{IncomingOptions, OptionKey, OptionValue, ResolvedOptions};

/// How an incoming value is validated and transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Any string, copied verbatim.
    Text,
    /// Any boolean, copied verbatim.
    Flag,
    /// Exactly one of two string literals, mapped to `true` / `false`.
    Toggle {
        on: &'static str,
        off: &'static str,
    },
}

impl ParameterKind {
    /// Returns the transformed value, or `None` if `value` is not accepted.
    pub fn coerce(self, value: &Value) -> Option<OptionValue> {
        match (self, value) {
            (ParameterKind::Text, Value::String(s)) => Some(OptionValue::Text(s.clone())),
            (ParameterKind::Flag, Value::Bool(b)) => Some(OptionValue::Flag(*b)),
            (ParameterKind::Toggle { on, .. }, Value::String(s)) if s == on => {
                Some(OptionValue::Flag(true))
            }
            (ParameterKind::Toggle { off, .. }, Value::String(s)) if s == off => {
                Some(OptionValue::Flag(false))
            }
            _ => None,
        }
    }
}

/// A recognized parameter and the rule applied to it.
#[derive(Debug, Clone, Copy)]
pub struct ParameterRule {
    pub key: OptionKey,
    pub kind: ParameterKind,
}

const fn rule(key: OptionKey, kind: ParameterKind) -> ParameterRule {
    ParameterRule { key, kind }
}

/// Every parameter copied from incoming arguments, in application order.
pub const PARAMETER_RULES: &[ParameterRule] = &[
    rule(OptionKey::Team, ParameterKind::Text),
    rule(OptionKey::Suite, ParameterKind::Text),
    rule(OptionKey::Version, ParameterKind::Text),
    rule(OptionKey::ApiKey, ParameterKind::Text),
    rule(OptionKey::ApiUrl, ParameterKind::Text),
    rule(OptionKey::Handshake, ParameterKind::Flag),
    rule(
        OptionKey::Concurrency,
        ParameterKind::Toggle {
            on: CONCURRENCY_ENABLED,
            off: CONCURRENCY_DISABLED,
        },
    ),
];

/// Copy recognized parameters from `incoming` into `existing`.
pub fn apply_arguments(
    existing: &mut ResolvedOptions,
    incoming: &IncomingOptions,
) -> Result<(), ConfigError> {
    for rule in PARAMETER_RULES {
        let Some(value) = incoming.get(rule.key.as_str()) else {
            continue;
        };
        let coerced = rule.kind.coerce(value).ok_or_else(|| ConfigError::InvalidType {
            param: rule.key.as_str().to_string(),
        })?;
        existing.set(rule.key, coerced)?;
    }
    Ok(())
}
