//! Option type definitions for Touca client configuration.
//!
//! Responsibilities:
//! - Define the closed set of option keys and their typed values.
//! - Define the caller-supplied (`IncomingOptions`) and resolved (`ResolvedOptions`) option sets.
//!
//! Does NOT handle:
//! - Loading or merging options from any source (see `loader` module).
//!
//! Invariants:
//! - The API key is held as `secrecy::SecretString` to prevent accidental logging.

mod incoming;
mod key;
mod resolved;

pub use incoming::IncomingOptions;
pub use key::{OptionKey, OptionValue};
pub use resolved::{REDACTED, ResolvedOptions};
