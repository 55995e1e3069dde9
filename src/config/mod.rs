//! Runtime settings: defaults, `settings.conf` parsing and directory layout.

mod paths;
mod settings;

pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{ensure_settings_file, load_settings, parse_settings};

/// Results requested per listing page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Upper bound accepted for `page_size`.
pub const MAX_PAGE_SIZE: usize = 100;
/// Directory API used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
/// Environment variable overriding `api_base_url`.
pub const API_URL_ENV: &str = "DINESCOUT_API_URL";

/// Effective runtime settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the restaurant directory API.
    pub api_base_url: String,
    /// Page size the server uses for the default listing.
    pub page_size: usize,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Number of restaurant details kept in memory.
    pub detail_cache_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            detail_cache_size: 64,
        }
    }
}

impl Settings {
    /// What: Apply an API URL override when it is non-blank.
    ///
    /// Inputs:
    /// - `url`: Candidate from the environment or command line
    ///
    /// Output:
    /// - `true` when the base URL changed
    pub fn override_api_url(&mut self, url: Option<&str>) -> bool {
        match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(u) => {
                tracing::debug!(url = u, "api base url overridden");
                self.api_base_url = u.to_string();
                true
            }
            None => false,
        }
    }
}
