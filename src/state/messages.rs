//! Messages exchanged between the event loop and the fetch worker.

use crate::error::ApiError;
use crate::state::types::{ImageSearchResult, ImageSelection, LocationQuery, Restaurant};

/// One outbound request, tagged with the generation of its target source.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchRequest {
    /// Default listing page.
    Listing {
        /// Generation token of the default listing.
        token: u64,
        /// 1-based page number.
        page: u32,
    },
    /// Search around a coordinate.
    Location {
        /// Generation token of the location source.
        token: u64,
        /// Validated coordinates and radius.
        query: LocationQuery,
    },
    /// Search by uploaded image.
    Image {
        /// Generation token of the image source.
        token: u64,
        /// File to upload.
        image: ImageSelection,
    },
}

impl FetchRequest {
    /// Token carried by this request.
    #[must_use]
    pub const fn token(&self) -> u64 {
        match self {
            Self::Listing { token, .. } | Self::Location { token, .. } | Self::Image { token, .. } => {
                *token
            }
        }
    }
}

/// Outcome of a [`FetchRequest`], echoing its token.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchResponse {
    /// Default listing page outcome.
    Listing {
        /// Echoed token.
        token: u64,
        /// Echoed page number.
        page: u32,
        /// Items or error.
        outcome: Result<Vec<Restaurant>, ApiError>,
    },
    /// Location search outcome.
    Location {
        /// Echoed token.
        token: u64,
        /// Items or error.
        outcome: Result<Vec<Restaurant>, ApiError>,
    },
    /// Image search outcome.
    Image {
        /// Echoed token.
        token: u64,
        /// Items plus detected cuisine, or error.
        outcome: Result<ImageSearchResult, ApiError>,
    },
}

/// Outcome of a detail lookup, keyed by restaurant id.
pub type DetailResponse = (String, Result<Restaurant, ApiError>);
