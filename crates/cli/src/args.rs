//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Convert explicitly supplied flags into incoming option parameters.
//!
//! Non-responsibilities:
//! - Does not read environment variables; `update_options` applies the
//!   supported overrides itself.
//! - Does not resolve or validate options (see `touca_config`).

use clap::Parser;
use std::path::PathBuf;
use touca_config::{IncomingOptions, OptionKey};

#[derive(Parser)]
#[command(name = "touca-options")]
#[command(about = "Resolve Touca client options from flags, a configuration file, and the environment", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  touca-options --api-url https://api.touca.io/@/acme/students/v1.0\n  touca-options --config-file touca.json --revision v2.0\n  touca-options --team acme --suite students --revision v1.0 --offline -o text\n\nEnvironment:\n  TOUCA_API_KEY       overrides --api-key\n  TOUCA_TEST_VERSION  overrides --revision\n"
)]
pub struct Cli {
    /// API Key issued by the Touca server
    #[arg(long)]
    pub api_key: Option<String>,

    /// API URL issued by the Touca server (e.g., https://api.touca.io/@/team/suite/version)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Slug of team to which test results belong
    #[arg(long)]
    pub team: Option<String>,

    /// Slug of suite to which test results belong
    #[arg(long)]
    pub suite: Option<String>,

    /// Version of the code under test
    #[arg(long)]
    pub revision: Option<String>,

    /// Path to a configuration file with a top-level "touca" object
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Scope of test case declarations: "enabled" shares them across threads,
    /// "disabled" binds them to the declaring thread
    #[arg(long, value_name = "MODE")]
    pub concurrency: Option<String>,

    /// Disables all communications with the Touca server
    #[arg(long)]
    pub offline: bool,

    /// Output format (json, text)
    #[arg(short, long, default_value = "json")]
    pub output: String,
}

impl Cli {
    /// Build incoming parameters from the flags that were actually supplied.
    ///
    /// Flags left out are not inserted, so configuration file values can fill them.
    pub fn incoming_options(&self) -> IncomingOptions {
        let mut incoming = IncomingOptions::new();

        let text_flags = [
            (OptionKey::ApiKey, &self.api_key),
            (OptionKey::ApiUrl, &self.api_url),
            (OptionKey::Team, &self.team),
            (OptionKey::Suite, &self.suite),
            (OptionKey::Version, &self.revision),
            (OptionKey::Concurrency, &self.concurrency),
        ];
        for (key, value) in text_flags {
            if let Some(value) = value {
                incoming = incoming.with_option(key, value.clone());
            }
        }

        if self.offline {
            incoming = incoming.with_handshake(false);
        }
        if let Some(ref path) = self.config_file {
            incoming = incoming.with_config_file(path.clone());
        }

        incoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_supplied_flags_become_parameters() {
        let cli = Cli::try_parse_from(["touca-options", "--team", "acme"]).unwrap();
        let incoming = cli.incoming_options();

        assert_eq!(incoming.len(), 1);
        assert_eq!(incoming.get("team"), Some(&json!("acme")));
    }

    #[test]
    fn test_revision_maps_to_version() {
        let cli = Cli::try_parse_from(["touca-options", "--revision", "v2.0"]).unwrap();
        assert_eq!(cli.incoming_options().get("version"), Some(&json!("v2.0")));
    }

    #[test]
    fn test_offline_disables_handshake() {
        let cli = Cli::try_parse_from(["touca-options", "--offline"]).unwrap();
        assert_eq!(cli.incoming_options().get("handshake"), Some(&json!(false)));
    }

    #[test]
    fn test_config_file_maps_to_file_parameter() {
        let cli =
            Cli::try_parse_from(["touca-options", "--config-file", "touca.json"]).unwrap();
        assert_eq!(cli.incoming_options().get("file"), Some(&json!("touca.json")));
    }

    #[test]
    fn test_concurrency_passed_through_unvalidated() {
        let cli = Cli::try_parse_from(["touca-options", "--concurrency", "sometimes"]).unwrap();
        assert_eq!(
            cli.incoming_options().get("concurrency"),
            Some(&json!("sometimes"))
        );
    }
}
