//! API URL normalization and slug decoding.
//!
//! Responsibilities:
//! - Default `concurrency` when no source provided it.
//! - Normalize `api_url` to `scheme://authority[/base]`.
//! - Decode the `team/suite/version` slugs embedded after the `/@/` separator.
//!
//! Does NOT handle:
//! - Reaching the server; the URL is only parsed, never requested.
//!
//! Invariants:
//! - Must run after arguments and environment overlays so their values can be
//!   compared against decoded slugs.
//! - A decoded slug never replaces a different existing value.
//! - Slugs beyond the third are ignored; missing slugs leave their keys untouched.
//! - Authority and slugs are used as written: no percent-encoding, no dot
//!   segment removal, no default port elision.

use std::borrow::Cow;

use url::Url;

use super::error::ConfigError;
use crate::constants::{API_URL_SLUG_SEPARATOR, DEFAULT_CONCURRENCY, DEFAULT_URL_SCHEME};
use crate::types::{OptionKey, OptionValue, ResolvedOptions};

/// An API URL split into its server base and identity slugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrl {
    /// `scheme://authority[/base-path]` without a trailing slash.
    pub base: String,
    /// Non-empty path segments following the `/@/` separator.
    pub slugs: Vec<String>,
}

impl ApiUrl {
    /// Parse a long-format (`https://host/base/@/team/suite/version`) or
    /// short-format (`https://host/base`) API URL.
    ///
    /// Input without a scheme is parsed as `https://<input>`. Authority, base
    /// path and slugs are kept exactly as written.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let candidate = if trimmed.contains("://") {
            Cow::Borrowed(trimmed)
        } else {
            Cow::Owned(format!("{DEFAULT_URL_SCHEME}://{trimmed}"))
        };

        let url = Url::parse(&candidate).map_err(|source| ConfigError::MalformedUrl {
            url: raw.to_string(),
            source,
        })?;

        let (authority, path) = split_authority_and_path(&candidate);
        let mut parts = path
            .split(API_URL_SLUG_SEPARATOR)
            .map(|part| part.trim_matches('/'));
        let base_path = parts.next().unwrap_or_default();
        let suffix = parts.next().unwrap_or_default();

        let base = format!("{}://{}/{}", url.scheme(), authority, base_path)
            .trim_end_matches('/')
            .to_string();

        let slugs = suffix
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self { base, slugs })
    }
}

/// Split `scheme://authority/path?query#fragment` into authority and path.
///
/// `Url::path` percent-encodes and removes dot segments, which would change
/// slugs, so the input is split by hand once `Url` has accepted it.
fn split_authority_and_path(candidate: &str) -> (&str, &str) {
    let rest = candidate.split_once("://").map_or(candidate, |(_, rest)| rest);
    let rest = rest.split(['?', '#']).next().unwrap_or_default();
    match rest.find('/') {
        Some(index) => rest.split_at(index),
        None => (rest, ""),
    }
}

/// Apply defaults and decode `api_url` into `existing`.
pub fn reformat_parameters(existing: &mut ResolvedOptions) -> Result<(), ConfigError> {
    if existing.concurrency.is_none() {
        existing.concurrency = Some(DEFAULT_CONCURRENCY);
    }

    let api_url = match existing.api_url.as_deref() {
        Some(raw) if !raw.is_empty() => ApiUrl::parse(raw)?,
        _ => return Ok(()),
    };

    tracing::debug!(api_url = %api_url.base, slugs = api_url.slugs.len(), "Normalized API URL");
    if api_url.slugs.len() > OptionKey::SLUGS.len() {
        tracing::warn!(
            ignored = api_url.slugs.len() - OptionKey::SLUGS.len(),
            "Ignoring API URL path segments after team/suite/version"
        );
    }

    existing.api_url = Some(api_url.base);

    for (key, slug) in OptionKey::SLUGS.into_iter().zip(api_url.slugs) {
        let conflicts = existing.text(key).is_some_and(|current| current != slug);
        if conflicts {
            return Err(ConfigError::ConflictingOption {
                param: key.as_str().to_string(),
            });
        }
        existing.set(key, OptionValue::Text(slug))?;
    }

    Ok(())
}
