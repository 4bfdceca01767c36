//! Output formatters for resolved options.
//!
//! Provides two output formats: JSON and plain text.

use anyhow::Result;
use touca_config::constants::{CONCURRENCY_DISABLED, CONCURRENCY_ENABLED};
use touca_config::{OptionKey, REDACTED, ResolvedOptions};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, text", s),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format a resolved option set.
    fn format_options(&self, options: &ResolvedOptions) -> Result<String>;
}

/// Pretty-printed JSON object with absent options omitted.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_options(&self, options: &ResolvedOptions) -> Result<String> {
        Ok(serde_json::to_string_pretty(options)?)
    }
}

/// One `name: value` line per present option.
pub struct TextFormatter;

const TEXT_ORDER: [OptionKey; 7] = [
    OptionKey::ApiUrl,
    OptionKey::ApiKey,
    OptionKey::Team,
    OptionKey::Suite,
    OptionKey::Version,
    OptionKey::Handshake,
    OptionKey::Concurrency,
];

impl Formatter for TextFormatter {
    fn format_options(&self, options: &ResolvedOptions) -> Result<String> {
        let mut lines = Vec::new();
        for key in TEXT_ORDER {
            let value = match key {
                OptionKey::ApiKey => options.api_key.as_ref().map(|_| REDACTED.to_string()),
                OptionKey::Handshake => options.handshake.map(|v| v.to_string()),
                OptionKey::Concurrency => options.concurrency.map(|enabled| {
                    if enabled {
                        CONCURRENCY_ENABLED.to_string()
                    } else {
                        CONCURRENCY_DISABLED.to_string()
                    }
                }),
                _ => options.text(key).map(str::to_string),
            };
            if let Some(value) = value {
                lines.push(format!("{}: {}", key, value));
            }
        }
        Ok(lines.join("\n"))
    }
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Text => Box::new(TextFormatter),
    }
}
