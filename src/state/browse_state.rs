//! The single owned state record behind the browsing screen.

use crate::state::forms::SearchForms;
use crate::state::messages::{FetchRequest, FetchResponse};
use crate::state::mode::{Mode, SearchModeController};
use crate::state::source::{DefaultListing, ImageResults, LocationResults};

/// Three result sources, the mode flag and the popup forms.
///
/// Mutated only by the orchestrator functions in `crate::logic` and by
/// [`BrowseState::apply`]; read through `crate::logic::compute`.
#[derive(Clone, Debug, Default)]
pub struct BrowseState {
    /// Paginated default listing.
    pub(crate) listing: DefaultListing,
    /// Location search results.
    pub(crate) location: LocationResults,
    /// Image search results.
    pub(crate) image: ImageResults,
    /// Browsing/searching flag.
    pub(crate) mode: SearchModeController,
    /// Search popup inputs.
    pub forms: SearchForms,
}

impl BrowseState {
    /// Fresh state with a listing of `page_size` items per page.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            listing: DefaultListing::new(page_size),
            ..Self::default()
        }
    }

    /// What: Assemble a state from existing sources.
    ///
    /// Inputs:
    /// - `listing`, `location`, `image`: Source states
    /// - `mode`: Mode to start in
    ///
    /// Output:
    /// - State with closed, empty forms
    #[must_use]
    pub fn from_parts(
        listing: DefaultListing,
        location: LocationResults,
        image: ImageResults,
        mode: Mode,
    ) -> Self {
        let mut ctl = SearchModeController::default();
        if let Mode::Searching(kind) = mode {
            ctl.enter(kind);
        }
        Self {
            listing,
            location,
            image,
            mode: ctl,
            forms: SearchForms::default(),
        }
    }

    /// Default listing.
    #[must_use]
    pub const fn listing(&self) -> &DefaultListing {
        &self.listing
    }

    /// Location search results.
    #[must_use]
    pub const fn location(&self) -> &LocationResults {
        &self.location
    }

    /// Image search results.
    #[must_use]
    pub const fn image(&self) -> &ImageResults {
        &self.image
    }

    /// Mode controller.
    #[must_use]
    pub const fn mode(&self) -> &SearchModeController {
        &self.mode
    }

    /// Whether a search result set owns the display.
    #[must_use]
    pub const fn is_searching(&self) -> bool {
        self.mode.is_searching()
    }

    /// What: Leave search mode and restore the initial listing.
    ///
    /// Output:
    /// - Request for listing page 1
    ///
    /// Details:
    /// - Clears both search sources, rewinds pagination and starts page 1.
    /// - Runs the full cascade even when already browsing, so repeated calls
    ///   converge on the same state.
    pub fn exit_search(&mut self) -> FetchRequest {
        let was_searching = self.mode.exit();
        self.location.reset();
        self.image.reset();
        let token = self.listing.restart();
        tracing::info!(was_searching, token, "returning to default listing");
        FetchRequest::Listing { token, page: 1 }
    }

    /// What: Apply a fetch outcome to its source.
    ///
    /// Inputs:
    /// - `response`: Outcome echoing the request token
    ///
    /// Output:
    /// - `true` when the state changed, `false` when the response was stale
    pub fn apply(&mut self, response: FetchResponse) -> bool {
        match response {
            FetchResponse::Listing {
                token,
                page,
                outcome,
            } if self.mode.is_searching() => {
                tracing::debug!(page, "listing page arrived while searching");
                self.listing.complete_hidden(token, page, outcome)
            }
            FetchResponse::Listing {
                token,
                page,
                outcome,
            } => self.listing.complete(token, page, outcome),
            FetchResponse::Location { token, outcome } => self.location.complete(token, outcome),
            FetchResponse::Image { token, outcome } => self.image.complete(token, outcome),
        }
    }
}
