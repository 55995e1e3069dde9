//! Error types shared by the browsing core, the API client and the runtime.
//!
//! Three families exist:
//! - [`ValidationError`]: a command was refused before any state changed.
//! - [`ApiError`]: the restaurant API failed; it ends up as a `Failed` status.
//! - [`AppError`]: the runtime itself could not continue.

use thiserror::Error;

/// Problems with user input that block a command locally.
///
/// None of these ever reach a result source: the command is dropped and the
/// message is shown as a one-off notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Latitude, longitude or radius was left empty.
    #[error("Please enter latitude, longitude, and radius")]
    MissingLocationInput,
    /// A location field is not a usable number.
    #[error("Invalid {field}: '{value}'")]
    InvalidCoordinate {
        /// Which input was rejected (`latitude`, `longitude`, `radius`).
        field: &'static str,
        /// Raw text as entered.
        value: String,
    },
    /// Image search started without a file.
    #[error("Please select an image")]
    NoImageSelected,
    /// Listing pages are numbered from 1.
    #[error("Invalid page number {0}; pages start at 1")]
    InvalidPage(u32),
}

/// Failures reported by the restaurant API collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure, timeout or unexpected HTTP status.
    #[error("Network error: {0}")]
    Network(String),
    /// The requested page or restaurant does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
    /// The server rejected the search parameters.
    #[error("Invalid request: {0}")]
    Validation(String),
    /// The uploaded image cannot be processed.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
    /// The response body did not have the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Network(format!("request timed out: {err}"))
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Errors that abort the interactive runtime.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal or file I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),
    /// A one-shot directory request failed.
    #[error("Directory error: {0}")]
    Api(#[from] ApiError),
}

/// Result alias for runtime-level operations.
pub type Result<T> = std::result::Result<T, AppError>;
