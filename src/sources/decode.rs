//! Decoding of directory JSON into typed records.

use serde_json::Value;

use crate::error::ApiError;
use crate::state::{ImageSearchResult, Restaurant, RestaurantLocation};
use crate::util::{f64_of, flag_of, s, ss, u64_of};

/// Keys under which list payloads have been observed.
const LIST_KEYS: [&str; 4] = ["restaurants", "results", "data", "items"];

/// What: Build a `Restaurant` from one JSON object.
///
/// Inputs:
/// - `v`: Object, optionally wrapped as `{"restaurant": {...}}`
///
/// Output:
/// - `Some(Restaurant)`; `None` when no id can be found
///
/// Details:
/// - Missing display fields default to empty/`None`/`false`.
/// - The rating is read from `user_rating.aggregate_rating` (string or number).
fn restaurant_from_json(v: &Value) -> Option<Restaurant> {
    let v = v.get("restaurant").filter(|inner| inner.is_object()).unwrap_or(v);
    let id = ss(v, &["id", "res_id", "_id"])?;
    let location = v.get("location").map_or_else(RestaurantLocation::default, |loc| {
        RestaurantLocation {
            address: s(loc, "address"),
            city: s(loc, "city"),
            latitude: f64_of(loc, &["latitude", "lat"]),
            longitude: f64_of(loc, &["longitude", "lon", "lng"]),
        }
    });
    let aggregate_rating = v
        .get("user_rating")
        .and_then(|r| ss(r, &["aggregate_rating"]))
        .or_else(|| ss(v, &["aggregate_rating", "rating"]));
    Some(Restaurant {
        id,
        name: s(v, "name"),
        cuisines: s(v, "cuisines"),
        average_cost_for_two: u64_of(v, &["average_cost_for_two"]),
        currency: s(v, "currency"),
        aggregate_rating,
        featured_image: ss(v, &["featured_image", "thumb"]),
        location,
        url: ss(v, &["url"]),
        photos_url: ss(v, &["photos_url"]),
        menu_url: ss(v, &["menu_url"]),
        events_url: ss(v, &["events_url"]),
        has_online_delivery: flag_of(v, "has_online_delivery"),
        has_table_booking: flag_of(v, "has_table_booking"),
        is_delivering_now: flag_of(v, "is_delivering_now"),
        price_range: u64_of(v, &["price_range"]).and_then(|p| u8::try_from(p).ok()),
    })
}

/// Locate the restaurant array in a payload.
fn list_of(v: &Value) -> Option<&Vec<Value>> {
    v.as_array().or_else(|| {
        LIST_KEYS
            .iter()
            .find_map(|k| v.get(*k).and_then(Value::as_array))
    })
}

/// Decode every usable entry of a list, logging the ones skipped.
fn decode_list(entries: &[Value]) -> Vec<Restaurant> {
    let items: Vec<Restaurant> = entries.iter().filter_map(restaurant_from_json).collect();
    let skipped = entries.len() - items.len();
    if skipped > 0 {
        tracing::warn!(skipped, "skipped restaurant entries without an id");
    }
    items
}

/// What: Decode a listing or location search body.
///
/// Inputs:
/// - `body`: Raw response text
///
/// Output:
/// - Restaurants in server order
///
/// # Errors
/// - `ApiError::Decode` when the body is not JSON or has no restaurant array
///
/// Details:
/// - Accepts a bare array or an object holding one under `restaurants`,
///   `results`, `data` or `items`.
pub fn restaurants_from_body(body: &str) -> Result<Vec<Restaurant>, ApiError> {
    let v: Value = serde_json::from_str(body)?;
    list_of(&v)
        .map(|entries| decode_list(entries))
        .ok_or_else(|| ApiError::Decode("expected a list of restaurants".into()))
}

/// What: Decode an image search body.
///
/// Inputs:
/// - `body`: Raw response text
///
/// Output:
/// - Restaurants plus the detected cuisine, if reported
///
/// # Errors
/// - `ApiError::Decode` when the body is not JSON or has no restaurant array
pub fn image_result_from_body(body: &str) -> Result<ImageSearchResult, ApiError> {
    let v: Value = serde_json::from_str(body)?;
    let restaurants = list_of(&v)
        .map(|entries| decode_list(entries))
        .ok_or_else(|| ApiError::Decode("expected a list of restaurants".into()))?;
    Ok(ImageSearchResult {
        restaurants,
        detected_cuisine: ss(
            &v,
            &["detected_cuisine", "detectedCuisine", "detectedFood", "detected_food", "cuisine"],
        ),
    })
}

/// What: Decode a single-restaurant body.
///
/// Inputs:
/// - `body`: Raw response text
///
/// Output:
/// - The restaurant
///
/// # Errors
/// - `ApiError::Decode` when the body is not JSON or lacks an id
pub fn restaurant_from_body(body: &str) -> Result<Restaurant, ApiError> {
    let v: Value = serde_json::from_str(body)?;
    restaurant_from_json(&v).ok_or_else(|| ApiError::Decode("restaurant without an id".into()))
}
