//! Browsing state split into sources, mode, forms and the owning record.

pub mod browse_state;
pub mod forms;
pub mod messages;
pub mod mode;
pub mod source;
pub mod types;

pub use browse_state::BrowseState;
pub use forms::{ImageForm, LocationForm, SearchForms};
pub use messages::{DetailResponse, FetchRequest, FetchResponse};
pub use mode::{Mode, SearchModeController};
pub use source::{DefaultListing, ImageResults, LocationResults, ResultSource, SourceStatus};
pub use types::{
    ActiveSource, ImageSearchResult, ImageSelection, LocationQuery, Restaurant,
    RestaurantLocation, SearchKind,
};
