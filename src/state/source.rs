//! Result sources: one asynchronous fetch lifecycle each.
//!
//! Every fetch bumps the source's generation and hands the new value back as
//! a token. A response is applied only while its token still equals the
//! current generation; `reset` bumps the generation too, so anything in
//! flight at that point is dropped on arrival.

use crate::error::{ApiError, ValidationError};
use crate::state::types::{ImageSearchResult, Restaurant};

/// Lifecycle of a result source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SourceStatus {
    /// Never fetched, or cleared.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded.
    Ready,
    /// The last request failed with this message.
    Failed(String),
}

/// How a successful response is merged into the current items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Merge {
    /// Cumulative pagination.
    Append,
    /// Search results replace whatever was there.
    Replace,
}

/// Items, status and request generation shared by all three sources.
#[derive(Clone, Debug, Default)]
pub struct ResultSource {
    /// Restaurants in server order.
    items: Vec<Restaurant>,
    /// Current lifecycle state.
    status: SourceStatus,
    /// Token of the most recent fetch or reset.
    generation: u64,
}

impl ResultSource {
    /// What: Build a source in a given settled state.
    ///
    /// Inputs:
    /// - `items`: Restaurants to hold
    /// - `status`: Status to report
    ///
    /// Output:
    /// - Source at generation 0
    ///
    /// Details:
    /// - Used to restore snapshots and to set up aggregation scenarios.
    #[must_use]
    pub const fn from_parts(items: Vec<Restaurant>, status: SourceStatus) -> Self {
        Self {
            items,
            status,
            generation: 0,
        }
    }

    /// Restaurants currently held.
    #[must_use]
    pub fn items(&self) -> &[Restaurant] {
        &self.items
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> &SourceStatus {
        &self.status
    }

    /// Error message, present only while `Failed`.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SourceStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Current generation token.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, SourceStatus::Loading)
    }

    /// Whether the source is `Idle` with no items.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.status == SourceStatus::Idle && self.items.is_empty()
    }

    /// What: Mark a new fetch as started.
    ///
    /// Output:
    /// - Token the response must echo to be applied
    ///
    /// Details:
    /// - Items are kept while loading; the outcome decides what happens to them.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.status = SourceStatus::Loading;
        self.generation
    }

    /// Whether `token` belongs to the latest fetch.
    #[must_use]
    pub const fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }

    /// What: Return to `Idle` with no items and invalidate in-flight requests.
    ///
    /// Details:
    /// - Idempotent apart from the generation bump.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.items.clear();
        self.status = SourceStatus::Idle;
    }

    /// What: Apply a response if it is still current.
    ///
    /// Inputs:
    /// - `token`: Token echoed by the response
    /// - `outcome`: Items or error
    /// - `merge`: Append (pagination) or replace (search)
    ///
    /// Output:
    /// - `Some(received)` with the number of items received, `Some(0)` on failure,
    ///   `None` when the response was stale and ignored
    ///
    /// Details:
    /// - Failures keep items when appending and clear them when replacing.
    fn settle(
        &mut self,
        token: u64,
        outcome: Result<Vec<Restaurant>, ApiError>,
        merge: Merge,
    ) -> Option<usize> {
        if !self.is_current(token) {
            tracing::debug!(
                token,
                current = self.generation,
                "discarding stale response"
            );
            return None;
        }
        match outcome {
            Ok(received) => {
                let n = received.len();
                match merge {
                    Merge::Append => self.items.extend(received),
                    Merge::Replace => self.items = received,
                }
                self.status = SourceStatus::Ready;
                Some(n)
            }
            Err(err) => {
                if merge == Merge::Replace {
                    self.items.clear();
                }
                self.status = SourceStatus::Failed(err.to_string());
                Some(0)
            }
        }
    }
}

/// Default listing with cumulative pagination.
#[derive(Clone, Debug)]
pub struct DefaultListing {
    /// Shared source state.
    source: ResultSource,
    /// Page to request next.
    next_page: u32,
    /// Whether the last page returned anything.
    has_more: bool,
    /// Items per server page.
    page_size: usize,
}

impl Default for DefaultListing {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}

impl DefaultListing {
    /// New idle listing expecting `page_size` items per page (minimum 1).
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            source: ResultSource::default(),
            next_page: 1,
            has_more: true,
            page_size: page_size.max(1),
        }
    }

    /// Listing pre-populated with `items`, as if already loaded.
    #[must_use]
    pub fn with_items(page_size: usize, items: Vec<Restaurant>, status: SourceStatus) -> Self {
        let mut listing = Self::new(page_size);
        let pages = items.len() / listing.page_size;
        listing.next_page = u32::try_from(pages).unwrap_or(u32::MAX).saturating_add(1);
        listing.source = ResultSource::from_parts(items, status);
        listing
    }

    /// Shared source state.
    #[must_use]
    pub const fn source(&self) -> &ResultSource {
        &self.source
    }

    /// Page that would be requested next.
    #[must_use]
    pub const fn next_page(&self) -> u32 {
        self.next_page
    }

    /// Whether the last page returned items.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Items per server page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// What: Start fetching page `page`.
    ///
    /// Inputs:
    /// - `page`: 1-based page number
    ///
    /// Output:
    /// - `Ok(token)` on start; `Err(InvalidPage)` for page 0 with no state change
    ///
    /// # Errors
    /// - `ValidationError::InvalidPage` when `page == 0`
    pub fn fetch_page(&mut self, page: u32) -> Result<u64, ValidationError> {
        if page == 0 {
            return Err(ValidationError::InvalidPage(page));
        }
        Ok(self.source.begin())
    }

    /// What: Apply a listing response.
    ///
    /// Inputs:
    /// - `token`: Token from `fetch_page`
    /// - `page`: Page that was requested
    /// - `outcome`: Items or error
    ///
    /// Output:
    /// - `true` when applied, `false` when stale
    ///
    /// Details:
    /// - Success appends and sets `has_more` to whether anything came back.
    /// - Failure keeps the items already listed.
    pub fn complete(
        &mut self,
        token: u64,
        page: u32,
        outcome: Result<Vec<Restaurant>, ApiError>,
    ) -> bool {
        self.settle_page(token, page, outcome, true)
    }

    /// What: Apply a listing response that arrived while searching.
    ///
    /// Output:
    /// - `true` when applied, `false` when stale
    ///
    /// Details:
    /// - Items and `has_more` are updated as in [`Self::complete`], but
    ///   `next_page` holds; it only advances while browsing.
    pub fn complete_hidden(
        &mut self,
        token: u64,
        page: u32,
        outcome: Result<Vec<Restaurant>, ApiError>,
    ) -> bool {
        self.settle_page(token, page, outcome, false)
    }

    /// Shared body of `complete` and `complete_hidden`.
    fn settle_page(
        &mut self,
        token: u64,
        page: u32,
        outcome: Result<Vec<Restaurant>, ApiError>,
        advance: bool,
    ) -> bool {
        let failed = outcome.is_err();
        let Some(received) = self.source.settle(token, outcome, Merge::Append) else {
            return false;
        };
        if !failed {
            self.has_more = received > 0;
            if self.has_more && advance {
                self.next_page = page.saturating_add(1);
            }
        }
        true
    }

    /// Clear items and rewind pagination to page 1.
    pub fn reset(&mut self) {
        self.source.reset();
        self.next_page = 1;
        self.has_more = true;
    }

    /// What: Reset, then start fetching page 1.
    ///
    /// Output:
    /// - Token of the page-1 fetch
    pub fn restart(&mut self) -> u64 {
        self.reset();
        self.source.begin()
    }
}

/// Location search results.
#[derive(Clone, Debug, Default)]
pub struct LocationResults {
    /// Shared source state.
    source: ResultSource,
}

impl LocationResults {
    /// Results in a given settled state.
    #[must_use]
    pub const fn from_parts(items: Vec<Restaurant>, status: SourceStatus) -> Self {
        Self {
            source: ResultSource::from_parts(items, status),
        }
    }

    /// Shared source state.
    #[must_use]
    pub const fn source(&self) -> &ResultSource {
        &self.source
    }

    /// Start a location fetch and return its token.
    pub fn fetch(&mut self) -> u64 {
        self.source.begin()
    }

    /// What: Apply a location response.
    ///
    /// Output:
    /// - `true` when applied, `false` when stale
    ///
    /// Details:
    /// - Success replaces the items; failure clears them.
    pub fn complete(&mut self, token: u64, outcome: Result<Vec<Restaurant>, ApiError>) -> bool {
        self.source.settle(token, outcome, Merge::Replace).is_some()
    }

    /// Clear results.
    pub fn reset(&mut self) {
        self.source.reset();
    }
}

/// Image search results and the cuisine detected for them.
#[derive(Clone, Debug, Default)]
pub struct ImageResults {
    /// Shared source state.
    source: ResultSource,
    /// Cuisine inferred by the server, only after a success.
    detected_cuisine: Option<String>,
}

impl ImageResults {
    /// Results in a given settled state.
    #[must_use]
    pub const fn from_parts(
        items: Vec<Restaurant>,
        status: SourceStatus,
        detected_cuisine: Option<String>,
    ) -> Self {
        Self {
            source: ResultSource::from_parts(items, status),
            detected_cuisine,
        }
    }

    /// Shared source state.
    #[must_use]
    pub const fn source(&self) -> &ResultSource {
        &self.source
    }

    /// Cuisine detected by the last successful search.
    #[must_use]
    pub fn detected_cuisine(&self) -> Option<&str> {
        self.detected_cuisine.as_deref()
    }

    /// Start an image fetch and return its token.
    pub fn fetch(&mut self) -> u64 {
        self.source.begin()
    }

    /// What: Apply an image search response.
    ///
    /// Output:
    /// - `true` when applied, `false` when stale
    ///
    /// Details:
    /// - Success replaces items and records the cuisine.
    /// - Failure clears both.
    pub fn complete(&mut self, token: u64, outcome: Result<ImageSearchResult, ApiError>) -> bool {
        let (items, cuisine) = match outcome {
            Ok(res) => (Ok(res.restaurants), res.detected_cuisine),
            Err(e) => (Err(e), None),
        };
        if self.source.settle(token, items, Merge::Replace).is_none() {
            return false;
        }
        self.detected_cuisine = cuisine;
        true
    }

    /// Clear results and the detected cuisine.
    pub fn reset(&mut self) {
        self.source.reset();
        self.detected_cuisine = None;
    }
}
