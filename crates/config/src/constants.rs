//! Centralized constants for Touca option resolution.
//!
//! This module contains the fixed names and literals shared by the loader
//! stages and the CLI to avoid string duplication.

// =============================================================================
// Configuration File
// =============================================================================

/// Top-level field of the configuration file whose members become options.
pub const CONFIG_SECTION: &str = "touca";

/// Incoming parameter holding the path to the configuration file.
pub const FILE_OPTION: &str = "file";

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the `api_key` option when set to a non-empty value.
pub const ENV_API_KEY: &str = "TOUCA_API_KEY";

/// Overrides the `version` option when set to a non-empty value.
pub const ENV_TEST_VERSION: &str = "TOUCA_TEST_VERSION";

// =============================================================================
// API URL
// =============================================================================

/// Separates the server base path from the `team/suite/version` suffix.
pub const API_URL_SLUG_SEPARATOR: &str = "/@/";

/// Scheme assumed for API URLs given without one (e.g. `api.touca.io`).
pub const DEFAULT_URL_SCHEME: &str = "https";

// =============================================================================
// Concurrency
// =============================================================================

/// Accepted literal for enabling shared test case scope across threads.
pub const CONCURRENCY_ENABLED: &str = "enabled";

/// Accepted literal for binding test case scope to the declaring thread.
pub const CONCURRENCY_DISABLED: &str = "disabled";

/// Value of `concurrency` when no source provided one.
pub const DEFAULT_CONCURRENCY: bool = true;
