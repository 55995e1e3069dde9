//! User-facing commands that mutate the browsing state.
//!
//! Every command runs synchronously: competing sources are reset before the
//! returned [`FetchRequest`] is handed to the worker, so nothing that is
//! already in flight can resurface afterwards.

use crate::error::ValidationError;
use crate::state::{BrowseState, FetchRequest, ImageSelection, LocationQuery, SearchKind};

/// What: Parse the three raw location inputs.
///
/// Inputs:
/// - `lat`, `lon`, `radius`: Text as typed
///
/// Output:
/// - Validated query, or the first problem found
///
/// # Errors
/// - `MissingLocationInput` when any input is blank
/// - `InvalidCoordinate` when a value is not a finite number, latitude is
///   outside ±90, longitude outside ±180, or radius is not positive
pub fn parse_location(lat: &str, lon: &str, radius: &str) -> Result<LocationQuery, ValidationError> {
    let (lat, lon, radius) = (lat.trim(), lon.trim(), radius.trim());
    if lat.is_empty() || lon.is_empty() || radius.is_empty() {
        return Err(ValidationError::MissingLocationInput);
    }
    let query = LocationQuery {
        lat: number("latitude", lat, |v| (-90.0..=90.0).contains(&v))?,
        lon: number("longitude", lon, |v| (-180.0..=180.0).contains(&v))?,
        radius_km: number("radius", radius, |v| v > 0.0)?,
    };
    Ok(query)
}

/// Parse one finite number and check it against `ok`.
fn number(field: &'static str, raw: &str, ok: impl Fn(f64) -> bool) -> Result<f64, ValidationError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && ok(*v))
        .ok_or_else(|| ValidationError::InvalidCoordinate {
            field,
            value: raw.to_string(),
        })
}

/// What: Start the initial listing load.
///
/// Inputs:
/// - `state`: Browsing state
///
/// Output:
/// - Request for page 1
pub fn initial_load(state: &mut BrowseState) -> FetchRequest {
    let token = state.listing.restart();
    tracing::info!(token, "loading first listing page");
    FetchRequest::Listing { token, page: 1 }
}

/// What: Start a location search.
///
/// Inputs:
/// - `state`: Browsing state
/// - `lat`, `lon`, `radius`: Raw inputs
///
/// Output:
/// - Request for the location worker
///
/// # Errors
/// - Any `ValidationError` from [`parse_location`]; the state is untouched
///
/// Details:
/// - Enters search mode, clears image results so they cannot resurface as
///   the fallback, starts the location fetch, then clears and closes the form.
pub fn start_location_search(
    state: &mut BrowseState,
    lat: &str,
    lon: &str,
    radius: &str,
) -> Result<FetchRequest, ValidationError> {
    let query = parse_location(lat, lon, radius)?;
    state.mode.enter(SearchKind::Location);
    state.image.reset();
    let token = state.location.fetch();
    state.forms.location.clear();
    tracing::info!(
        lat = query.lat,
        lon = query.lon,
        radius_km = query.radius_km,
        token,
        "location search started"
    );
    Ok(FetchRequest::Location { token, query })
}

/// What: Submit whatever the location form holds.
///
/// # Errors
/// - As [`start_location_search`]; the form keeps its inputs
pub fn submit_location_form(state: &mut BrowseState) -> Result<FetchRequest, ValidationError> {
    let form = state.forms.location.clone();
    start_location_search(state, &form.lat, &form.lon, &form.radius)
}

/// What: Start an image search.
///
/// Inputs:
/// - `state`: Browsing state
/// - `file`: Selected image, if any
///
/// Output:
/// - Request for the image worker
///
/// # Errors
/// - `NoImageSelected` when `file` is `None`; the state is untouched
///
/// Details:
/// - Enters search mode and clears both search sources before fetching.
pub fn start_image_search(
    state: &mut BrowseState,
    file: Option<ImageSelection>,
) -> Result<FetchRequest, ValidationError> {
    let image = file.ok_or(ValidationError::NoImageSelected)?;
    state.mode.enter(SearchKind::Image);
    state.location.reset();
    state.image.reset();
    let token = state.image.fetch();
    state.forms.image.clear();
    tracing::info!(file = %image.path.display(), token, "image search started");
    Ok(FetchRequest::Image { token, image })
}

/// What: Submit the image form's current selection.
///
/// # Errors
/// - As [`start_image_search`]
pub fn submit_image_form(state: &mut BrowseState) -> Result<FetchRequest, ValidationError> {
    let selected = state.forms.image.selected.clone();
    start_image_search(state, selected)
}

/// What: Return to the default listing.
///
/// Output:
/// - Request for listing page 1
pub fn go_home(state: &mut BrowseState) -> FetchRequest {
    state.exit_search()
}

/// What: Fetch the next listing page.
///
/// Inputs:
/// - `state`: Browsing state
///
/// Output:
/// - `Some(request)` for page `items / page_size + 1`; `None` when searching,
///   while the listing is loading, or after an empty page
pub fn load_more(state: &mut BrowseState) -> Option<FetchRequest> {
    if state.is_searching() {
        tracing::debug!("load more ignored while searching");
        return None;
    }
    let listing = &mut state.listing;
    if listing.source().is_loading() || !listing.has_more() {
        tracing::debug!(
            loading = listing.source().is_loading(),
            has_more = listing.has_more(),
            "load more ignored"
        );
        return None;
    }
    let loaded = listing.source().items().len() / listing.page_size();
    let page = u32::try_from(loaded).ok()?.checked_add(1)?;
    let token = listing.fetch_page(page).ok()?;
    tracing::info!(page, token, "loading more restaurants");
    Some(FetchRequest::Listing { token, page })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::state::source::{DefaultListing, ImageResults, LocationResults, SourceStatus};
    use crate::state::{FetchResponse, ImageSearchResult, Mode};
    use crate::test_utils::restaurants;

    #[test]
    /// What: Blank location input is refused without touching state.
    ///
    /// Inputs:
    /// - `("", "12", "5")`
    ///
    /// Output:
    /// - `MissingLocationInput`; still browsing, generations unchanged
    fn location_search_requires_all_inputs() {
        let mut state = BrowseState::new(10);
        state.forms.location.lat = "1".into();
        let err = start_location_search(&mut state, "", "12", "5");
        assert_eq!(err, Err(ValidationError::MissingLocationInput));
        assert!(!state.is_searching());
        assert_eq!(state.location().source().generation(), 0);
        assert_eq!(state.image().source().generation(), 0);
        assert_eq!(state.forms.location.lat, "1");
    }

    #[test]
    /// What: Out-of-range and non-numeric inputs are refused.
    ///
    /// Inputs:
    /// - Latitude 91, longitude "east", radius 0
    ///
    /// Output:
    /// - `InvalidCoordinate` naming the field
    fn location_inputs_are_range_checked() {
        assert!(matches!(
            parse_location("91", "0", "1"),
            Err(ValidationError::InvalidCoordinate { field: "latitude", .. })
        ));
        assert!(matches!(
            parse_location("0", "east", "1"),
            Err(ValidationError::InvalidCoordinate { field: "longitude", .. })
        ));
        assert!(matches!(
            parse_location("0", "0", "0"),
            Err(ValidationError::InvalidCoordinate { field: "radius", .. })
        ));
        let q = parse_location(" 12.5 ", "77.1", "5").expect("valid");
        assert!((q.lat - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    /// What: Location search enters search mode and clears image results.
    ///
    /// Inputs:
    /// - Searching by image with items and cuisine, open location form
    ///
    /// Output:
    /// - Location loading, image cleared, form cleared and closed
    fn location_search_clears_image_and_form() {
        let mut state = BrowseState::from_parts(
            DefaultListing::new(10),
            LocationResults::default(),
            ImageResults::from_parts(restaurants(0..3), SourceStatus::Ready, Some("Pho".into())),
            Mode::Searching(SearchKind::Image),
        );
        state.forms.location.open = true;
        state.forms.location.lat = "10".into();
        let req = start_location_search(&mut state, "10", "20", "3").expect("started");
        assert!(matches!(req, FetchRequest::Location { token: 1, .. }));
        assert_eq!(state.mode().mode(), Mode::Searching(SearchKind::Location));
        assert!(state.image().source().is_cleared());
        assert_eq!(state.image().detected_cuisine(), None);
        assert!(state.location().source().is_loading());
        assert_eq!(state.forms.location, crate::state::LocationForm::default());
    }

    #[test]
    /// What: Image search without a file is refused.
    ///
    /// Inputs:
    /// - `None`
    ///
    /// Output:
    /// - `NoImageSelected`, no mode change
    fn image_search_requires_file() {
        let mut state = BrowseState::new(10);
        assert_eq!(
            start_image_search(&mut state, None),
            Err(ValidationError::NoImageSelected)
        );
        assert!(!state.is_searching());
    }

    #[test]
    /// What: Image search clears location results and stale image results.
    ///
    /// Inputs:
    /// - Location results present, then an image search
    ///
    /// Output:
    /// - Location cleared; a late location response is dropped
    fn image_search_supersedes_location() {
        let mut state = BrowseState::new(10);
        let FetchRequest::Location { token: loc_token, .. } =
            start_location_search(&mut state, "1", "2", "3").expect("location")
        else {
            panic!("expected location request");
        };
        state.forms.image.selected = Some(ImageSelection::new("dish.png"));
        let req = submit_image_form(&mut state).expect("image");
        assert!(matches!(req, FetchRequest::Image { .. }));
        assert!(state.forms.image.selected.is_none());
        assert!(!state.apply(FetchResponse::Location {
            token: loc_token,
            outcome: Ok(restaurants(0..4)),
        }));
        assert!(state.location().source().items().is_empty());
        assert!(state.image().source().is_loading());
    }

    #[test]
    /// What: Load more requests `floor(len / page_size) + 1` and appends.
    ///
    /// Inputs:
    /// - 23 listed items, page size 10
    ///
    /// Output:
    /// - Page 3 requested; 33 items after the response
    fn load_more_computes_next_page_and_appends() {
        let mut state = BrowseState::from_parts(
            DefaultListing::with_items(10, restaurants(0..23), SourceStatus::Ready),
            LocationResults::default(),
            ImageResults::default(),
            Mode::Browsing,
        );
        let Some(FetchRequest::Listing { token, page }) = load_more(&mut state) else {
            panic!("expected listing request");
        };
        assert_eq!(page, 3);
        assert!(load_more(&mut state).is_none(), "no double trigger while loading");
        assert!(state.apply(FetchResponse::Listing {
            token,
            page,
            outcome: Ok(restaurants(23..33)),
        }));
        assert_eq!(state.listing().source().items().len(), 33);
    }

    #[test]
    /// What: Load more is ignored while searching.
    ///
    /// Inputs:
    /// - State in location search
    ///
    /// Output:
    /// - `None`, listing untouched
    fn load_more_ignored_while_searching() {
        let mut state = BrowseState::new(10);
        start_location_search(&mut state, "1", "2", "3").expect("location");
        let before = state.listing().source().generation();
        assert!(load_more(&mut state).is_none());
        assert_eq!(state.listing().source().generation(), before);
    }

    #[test]
    /// What: Going home twice lands in the same state as once.
    ///
    /// Inputs:
    /// - Image search with results, then `go_home` twice
    ///
    /// Output:
    /// - Browsing, search sources idle, listing loading page 1, both times
    fn go_home_is_idempotent() {
        let mut state = BrowseState::new(10);
        let FetchRequest::Image { token, .. } =
            start_image_search(&mut state, Some(ImageSelection::new("a.jpg"))).expect("image")
        else {
            panic!("expected image request");
        };
        state.apply(FetchResponse::Image {
            token,
            outcome: Ok(ImageSearchResult {
                restaurants: restaurants(0..2),
                detected_cuisine: Some("Ramen".into()),
            }),
        });
        let first = go_home(&mut state);
        let snapshot = (
            state.is_searching(),
            state.listing().next_page(),
            state.location().source().is_cleared(),
            state.image().source().is_cleared(),
            state.listing().source().status().clone(),
        );
        let second = go_home(&mut state);
        assert!(matches!(first, FetchRequest::Listing { page: 1, .. }));
        assert!(matches!(second, FetchRequest::Listing { page: 1, .. }));
        assert_eq!(
            snapshot,
            (
                state.is_searching(),
                state.listing().next_page(),
                state.location().source().is_cleared(),
                state.image().source().is_cleared(),
                state.listing().source().status().clone(),
            )
        );
        assert_eq!(snapshot, (false, 1, true, true, SourceStatus::Loading));
    }

    #[test]
    /// What: A failed search keeps search mode.
    ///
    /// Inputs:
    /// - Location search that fails
    ///
    /// Output:
    /// - Still searching; error visible through the location source
    fn failed_search_stays_in_search_mode() {
        let mut state = BrowseState::new(10);
        let req = start_location_search(&mut state, "1", "2", "3").expect("location");
        state.apply(FetchResponse::Location {
            token: req.token(),
            outcome: Err(ApiError::Network("offline".into())),
        });
        assert!(state.is_searching());
        assert!(state.location().source().error_message().is_some());
    }
}
