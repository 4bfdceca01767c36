//! Touca options CLI - resolve client configuration from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments into incoming option parameters.
//! - Resolve them with `touca_config::update_options`.
//! - Print the resolved options in the requested format.
//!
//! Does NOT handle:
//! - Option precedence or validation rules (see `crates/config`).
//! - Talking to the Touca server.
//!
//! Invariants:
//! - Logs go to stderr so stdout only carries the formatted options.
//! - The API key is never printed.

mod args;
mod error;
mod formatters;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use error::ExitCodeExt;
use formatters::{OutputFormat, get_formatter};
use touca_config::{ResolvedOptions, update_options};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Failed to resolve options: {:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let format = OutputFormat::from_str(&cli.output)?;

    let mut existing = ResolvedOptions::new();
    let mut incoming = cli.incoming_options();
    update_options(&mut existing, &mut incoming).context("Invalid configuration")?;

    tracing::info!(
        configured = existing.is_configured(),
        handshake = existing.has_handshake(),
        "Options resolved"
    );

    get_formatter(format).format_options(&existing)
}
