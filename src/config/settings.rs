use std::path::Path;

use tracing::{debug, warn};

use super::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Settings};
use crate::util::config::parse_key_value;

/// Commented template written on first run.
const SETTINGS_TEMPLATE: &str = "\
# dinescout settings
#
# Base URL of the restaurant directory API.
# DINESCOUT_API_URL and --api-url take precedence.
api_base_url = http://localhost:5000/api

# Restaurants per listing page, as served by the API (1-100).
page_size = 10

# Network timeouts in seconds.
connect_timeout_secs = 10
request_timeout_secs = 30

# Restaurant details kept in memory.
detail_cache_size = 64
";

/// What: Parse `settings.conf` content into `settings`.
///
/// Inputs:
/// - `content`: File content
/// - `settings`: Settings to update in place
///
/// Output:
/// - None (modifies `settings`)
///
/// Details:
/// - Unknown keys and unparsable values are logged and ignored.
/// - `page_size` is capped at `MAX_PAGE_SIZE`; zero or negative values
///   fall back to `DEFAULT_PAGE_SIZE`. Zero timeouts and cache sizes are ignored.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for (key, val) in content.lines().filter_map(parse_key_value) {
        match key.as_str() {
            "api_base_url" | "base_url" | "api_url" => {
                if !val.is_empty() {
                    settings.api_base_url = val;
                }
            }
            "page_size" => match val.parse::<i64>() {
                Ok(v) if v <= 0 => {
                    warn!(value = v, "non-positive page_size, using {DEFAULT_PAGE_SIZE}");
                    settings.page_size = DEFAULT_PAGE_SIZE;
                }
                Ok(v) => {
                    settings.page_size = usize::try_from(v).map_or(MAX_PAGE_SIZE, |v| v.min(MAX_PAGE_SIZE));
                }
                Err(_) => warn!(value = %val, "invalid page_size ignored"),
            },
            "connect_timeout_secs" => match val.parse::<u64>() {
                Ok(v) if v > 0 => settings.connect_timeout_secs = v,
                _ => warn!(value = %val, "invalid connect_timeout_secs ignored"),
            },
            "request_timeout_secs" => match val.parse::<u64>() {
                Ok(v) if v > 0 => settings.request_timeout_secs = v,
                _ => warn!(value = %val, "invalid request_timeout_secs ignored"),
            },
            "detail_cache_size" => match val.parse::<usize>() {
                Ok(v) if v > 0 => settings.detail_cache_size = v,
                _ => warn!(value = %val, "invalid detail_cache_size ignored"),
            },
            other => debug!(key = other, "unknown settings key ignored"),
        }
    }
}

/// What: Load settings from a file on top of the defaults.
///
/// Inputs:
/// - `path`: `settings.conf` location
///
/// Output:
/// - Parsed settings; defaults when the file is missing or unreadable
#[must_use]
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();
    match std::fs::read_to_string(path) {
        Ok(content) => parse_settings(&content, &mut settings),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file, using defaults");
        }
        Err(e) => warn!(path = %path.display(), error = %e, "cannot read settings, using defaults"),
    }
    settings
}

/// What: Write the commented template if no settings file exists.
///
/// Inputs:
/// - `path`: `settings.conf` location
///
/// Output:
/// - `Ok(true)` when the template was written
///
/// # Errors
/// - I/O errors from creating the file
pub fn ensure_settings_file(path: &Path) -> std::io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    std::fs::write(path, SETTINGS_TEMPLATE)?;
    Ok(true)
}
