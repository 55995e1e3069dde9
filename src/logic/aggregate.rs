//! Derives the single visible result set from the three sources.

use crate::state::source::{DefaultListing, ImageResults, LocationResults};
use crate::state::types::{ActiveSource, Restaurant};
use crate::state::{BrowseState, Mode};

/// What the presentation layer renders, recomputed after every mutation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadModel<'a> {
    /// Restaurants to list.
    pub results: &'a [Restaurant],
    /// Whether a spinner should show.
    pub loading: bool,
    /// Error to show; only ever set when `results` is empty.
    pub error: Option<&'a str>,
    /// Cuisine detected by the image search, while searching.
    pub detected_cuisine: Option<&'a str>,
    /// Browsing or searching.
    pub mode: Mode,
    /// Source owning the display area.
    pub active: ActiveSource,
    /// Whether "load more" is available.
    pub can_load_more: bool,
}

impl ReadModel<'_> {
    /// Whether the home control should be offered.
    #[must_use]
    pub const fn show_home(&self) -> bool {
        matches!(self.mode, Mode::Searching(_))
    }

    /// What: Whether to show the "no restaurants found" hint.
    ///
    /// Output:
    /// - `true` when nothing is listed, loading or failed
    #[must_use]
    pub const fn empty_hint(&self) -> bool {
        self.results.is_empty() && !self.loading && self.error.is_none()
    }
}

/// What: Compute the read model for a state.
///
/// Inputs:
/// - `state`: Browsing state
///
/// Output:
/// - Borrowed read model
#[must_use]
pub fn compute(state: &BrowseState) -> ReadModel<'_> {
    compute_from(
        state.listing(),
        state.location(),
        state.image(),
        state.mode().mode(),
    )
}

/// What: Pick results, loading flag and error from the three sources.
///
/// Inputs:
/// - `listing`, `location`, `image`: Source states
/// - `mode`: Current mode
///
/// Output:
/// - Read model borrowing from the winning source
///
/// Details:
/// - Browsing shows the listing; its error only when it has no items.
/// - Searching prefers non-empty location items over image items, and a
///   location error over an image error; errors only when nothing is listed.
/// - The detected cuisine is hidden while browsing.
#[must_use]
pub fn compute_from<'a>(
    listing: &'a DefaultListing,
    location: &'a LocationResults,
    image: &'a ImageResults,
    mode: Mode,
) -> ReadModel<'a> {
    match mode {
        Mode::Browsing => {
            let src = listing.source();
            let results = src.items();
            let loading = src.is_loading();
            ReadModel {
                results,
                loading,
                error: if results.is_empty() {
                    src.error_message()
                } else {
                    None
                },
                detected_cuisine: None,
                mode,
                active: ActiveSource::Default,
                can_load_more: !results.is_empty() && !loading && listing.has_more(),
            }
        }
        Mode::Searching(kind) => {
            let loc = location.source();
            let img = image.source();
            let results = if loc.items().is_empty() {
                img.items()
            } else {
                loc.items()
            };
            ReadModel {
                results,
                loading: loc.is_loading() || img.is_loading(),
                error: if results.is_empty() {
                    loc.error_message().or_else(|| img.error_message())
                } else {
                    None
                },
                detected_cuisine: image.detected_cuisine(),
                mode,
                active: kind.into(),
                can_load_more: false,
            }
        }
    }
}
