//! Restaurant directory access: the collaborator contract and its HTTP client.

use futures::future::BoxFuture;

use crate::error::ApiError;
use crate::state::{ImageSearchResult, LocationQuery, Restaurant};

mod decode;
mod http;
mod image;

pub use decode::{image_result_from_body, restaurant_from_body, restaurants_from_body};
pub use http::HttpApi;
pub use image::{ImageUpload, detect_mime, load_upload};

/// Operations the browsing core needs from the restaurant directory.
///
/// Futures are boxed so implementations can sit behind `Arc<dyn RestaurantApi>`
/// and be driven from spawned tasks.
pub trait RestaurantApi: Send + Sync {
    /// Fetch one page (1-based) of the default listing.
    fn list_restaurants(&self, page: u32) -> BoxFuture<'_, Result<Vec<Restaurant>, ApiError>>;

    /// Restaurants within `radius_km` of a coordinate.
    fn search_by_location(
        &self,
        query: LocationQuery,
    ) -> BoxFuture<'_, Result<Vec<Restaurant>, ApiError>>;

    /// Restaurants serving the cuisine recognised in an image.
    fn search_by_image(
        &self,
        upload: ImageUpload,
    ) -> BoxFuture<'_, Result<ImageSearchResult, ApiError>>;

    /// A single restaurant by id, for the detail view.
    fn get_restaurant(&self, id: String) -> BoxFuture<'_, Result<Restaurant, ApiError>>;
}
