//! Shared utilities for argument processing.

use std::path::Path;

use crate::config::{self, API_URL_ENV, Settings};

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Build the effective settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `config_dir`: Resolved configuration directory
/// - `env_url`: Value of `DINESCOUT_API_URL`, if set
///
/// Output:
/// - Settings from `settings.conf`, then the environment, then `--api-url`
///
/// Details:
/// - Writes the commented template when no settings file exists yet.
pub fn resolve_settings(
    args: &crate::args::Args,
    config_dir: &Path,
    env_url: Option<&str>,
) -> Settings {
    let path = config::settings_path(config_dir);
    match config::ensure_settings_file(&path) {
        Ok(true) => tracing::info!(path = %path.display(), "wrote default settings"),
        Ok(false) => {}
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "cannot write default settings"),
    }
    let mut settings = config::load_settings(&path);
    if settings.override_api_url(env_url) {
        tracing::info!(var = API_URL_ENV, "api url taken from environment");
    }
    settings.override_api_url(args.api_url.as_deref());
    settings
}
