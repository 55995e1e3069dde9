//! Core value types used by dinescout state.

use std::path::PathBuf;

/// Street-level location of a restaurant.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct RestaurantLocation {
    /// Street address as reported by the directory.
    pub address: String,
    /// City name.
    pub city: String,
    /// Latitude in decimal degrees, when known.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees, when known.
    pub longitude: Option<f64>,
}

/// One restaurant as delivered by the directory API.
///
/// Only `id` is interpreted by the browsing core; everything else is carried
/// through to the presenter. Optional fields are normalised at decode time
/// (empty strings become `None`).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Restaurant {
    /// Directory identifier, stringified when the server sends a number.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Comma-separated cuisine list.
    pub cuisines: String,
    /// Average cost for two people, in `currency`.
    pub average_cost_for_two: Option<u64>,
    /// Currency symbol or code.
    pub currency: String,
    /// Aggregate user rating, kept as text (`"4.3"`).
    pub aggregate_rating: Option<String>,
    /// Hero image URL.
    pub featured_image: Option<String>,
    /// Address and coordinates.
    pub location: RestaurantLocation,
    /// Directory page URL.
    pub url: Option<String>,
    /// Photo gallery URL.
    pub photos_url: Option<String>,
    /// Menu URL.
    pub menu_url: Option<String>,
    /// Events URL.
    pub events_url: Option<String>,
    /// Whether online delivery is offered.
    pub has_online_delivery: bool,
    /// Whether tables can be booked.
    pub has_table_booking: bool,
    /// Whether the restaurant is delivering right now.
    pub is_delivering_now: bool,
    /// Price bracket from 1 to 5.
    pub price_range: Option<u8>,
}

impl Restaurant {
    /// What: Rating text for list and detail display.
    ///
    /// Output:
    /// - The aggregate rating, or `"N/A"` when the directory has none.
    #[must_use]
    pub fn rating_label(&self) -> &str {
        self.aggregate_rating.as_deref().unwrap_or("N/A")
    }
}

/// Payload of a successful image search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageSearchResult {
    /// Restaurants serving the detected cuisine.
    pub restaurants: Vec<Restaurant>,
    /// Cuisine inferred from the uploaded image.
    pub detected_cuisine: Option<String>,
}

/// Validated parameters of a location search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocationQuery {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Search radius in kilometres.
    pub radius_km: f64,
}

/// Image chosen for an image search; read from disk by the fetch worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSelection {
    /// Path of the selected file.
    pub path: PathBuf,
}

impl ImageSelection {
    /// Build a selection from any path-like value.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File name for display, falling back to the full path.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }
}

/// The two alternate search modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchKind {
    /// Search around a coordinate.
    Location,
    /// Search by cuisine detected in an uploaded image.
    Image,
}

/// Which result source currently owns the display area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActiveSource {
    /// Paginated default listing.
    Default,
    /// Location search results.
    Location,
    /// Image search results.
    Image,
}

impl From<SearchKind> for ActiveSource {
    fn from(kind: SearchKind) -> Self {
        match kind {
            SearchKind::Location => Self::Location,
            SearchKind::Image => Self::Image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Rating label falls back to `N/A`.
    ///
    /// Inputs:
    /// - Restaurant without and with an aggregate rating
    ///
    /// Output:
    /// - `"N/A"` then the rating text
    fn rating_label_defaults_to_na() {
        let mut r = Restaurant::default();
        assert_eq!(r.rating_label(), "N/A");
        r.aggregate_rating = Some("4.1".into());
        assert_eq!(r.rating_label(), "4.1");
    }

    #[test]
    /// What: Image selections display their file name.
    ///
    /// Inputs:
    /// - A nested path
    ///
    /// Output:
    /// - Only the final component
    fn image_selection_display_name_uses_file_name() {
        let sel = ImageSelection::new("/tmp/photos/pizza.jpg");
        assert_eq!(sel.display_name(), "pizza.jpg");
    }

    #[test]
    /// What: Restaurants serialize with their field names for JSON output.
    ///
    /// Inputs:
    /// - Restaurant with id, name and city
    ///
    /// Output:
    /// - JSON object with nested location and null rating
    fn restaurant_serializes_to_json() {
        let r = Restaurant {
            id: "3".into(),
            name: "Noodle Bar".into(),
            location: RestaurantLocation {
                city: "Osaka".into(),
                ..RestaurantLocation::default()
            },
            ..Restaurant::default()
        };
        let v = serde_json::to_value(&r).expect("serialize");
        assert_eq!(v["id"], "3");
        assert_eq!(v["name"], "Noodle Bar");
        assert_eq!(v["location"]["city"], "Osaka");
        assert!(v["aggregate_rating"].is_null());
    }
}
