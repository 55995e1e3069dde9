//! `reqwest`-backed implementation of [`RestaurantApi`].

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info, warn};

use super::RestaurantApi;
use super::decode::{image_result_from_body, restaurant_from_body, restaurants_from_body};
use super::image::ImageUpload;
use crate::config::Settings;
use crate::error::{ApiError, AppError};
use crate::state::{ImageSearchResult, LocationQuery, Restaurant};
use crate::util::percent_encode;

/// HTTP client for the restaurant directory.
///
/// Endpoints, relative to the configured base URL:
/// - `GET  /restaurants?page=N`
/// - `GET  /restaurants/location?lat=..&lon=..&radius=..`
/// - `POST /restaurants/image-search` (multipart field `image`)
/// - `GET  /restaurants/{id}`
#[derive(Clone, Debug)]
pub struct HttpApi {
    /// Pooled client with timeouts applied.
    client: reqwest::Client,
    /// Base URL without trailing slash.
    base_url: String,
}

impl HttpApi {
    /// What: Build a client from settings.
    ///
    /// Inputs:
    /// - `settings`: Base URL and timeouts
    ///
    /// Output:
    /// - Ready client
    ///
    /// # Errors
    /// - `AppError::Client` when the TLS backend cannot be initialised
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(format!("dinescout/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Client(e.to_string()))?;
        Ok(Self {
            client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for `path`.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// What: Send a request and return the body of a successful response.
    ///
    /// Inputs:
    /// - `req`: Prepared request
    /// - `what`: Short label for logs and messages
    ///
    /// Output:
    /// - Response text
    ///
    /// # Errors
    /// - Transport errors and non-success statuses mapped via [`status_error`]
    async fn body_of(req: reqwest::RequestBuilder, what: &str) -> Result<String, ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        info!(what, status = status.as_u16(), bytes = body.len(), "directory response");
        if status.is_success() {
            Ok(body)
        } else {
            let preview: String = body.chars().take(300).collect();
            warn!(what, status = status.as_u16(), preview = %preview, "directory returned non-success status");
            Err(status_error(status, what, &body))
        }
    }
}

/// What: Map an HTTP error status to an `ApiError`.
///
/// Inputs:
/// - `status`: Response status
/// - `what`: Label of the request
/// - `body`: Response text, used when it carries a message
///
/// Output:
/// - Variant matching the status class
fn status_error(status: StatusCode, what: &str, body: &str) -> ApiError {
    let detail = server_message(body).unwrap_or_else(|| format!("{what} returned {status}"));
    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound(detail),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::Validation(detail),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => ApiError::UnsupportedFormat(detail),
        _ => ApiError::Network(detail),
    }
}

/// Pull `error`/`message`/`detail` out of a JSON error body.
fn server_message(body: &str) -> Option<String> {
    let v: serde_json::Value = serde_json::from_str(body).ok()?;
    crate::util::ss(&v, &["error", "message", "detail"])
}

impl RestaurantApi for HttpApi {
    fn list_restaurants(&self, page: u32) -> BoxFuture<'_, Result<Vec<Restaurant>, ApiError>> {
        async move {
            let url = self.url(&format!("/restaurants?page={page}"));
            debug!(%url, "listing restaurants");
            let body = Self::body_of(self.client.get(&url), "listing").await?;
            restaurants_from_body(&body)
        }
        .boxed()
    }

    fn search_by_location(
        &self,
        query: LocationQuery,
    ) -> BoxFuture<'_, Result<Vec<Restaurant>, ApiError>> {
        async move {
            let url = self.url(&format!(
                "/restaurants/location?lat={}&lon={}&radius={}",
                query.lat, query.lon, query.radius_km
            ));
            debug!(%url, "searching by location");
            let body = Self::body_of(self.client.get(&url), "location search").await?;
            restaurants_from_body(&body)
        }
        .boxed()
    }

    fn search_by_image(
        &self,
        upload: ImageUpload,
    ) -> BoxFuture<'_, Result<ImageSearchResult, ApiError>> {
        async move {
            let url = self.url("/restaurants/image-search");
            debug!(%url, file = %upload.file_name, bytes = upload.bytes.len(), "searching by image");
            let part = Part::bytes(upload.bytes)
                .file_name(upload.file_name)
                .mime_str(upload.mime)
                .map_err(|e| ApiError::UnsupportedFormat(e.to_string()))?;
            let form = Form::new().part("image", part);
            let body =
                Self::body_of(self.client.post(&url).multipart(form), "image search").await?;
            image_result_from_body(&body)
        }
        .boxed()
    }

    fn get_restaurant(&self, id: String) -> BoxFuture<'_, Result<Restaurant, ApiError>> {
        async move {
            let url = self.url(&format!("/restaurants/{}", percent_encode(&id)));
            debug!(%url, "fetching restaurant");
            let body = Self::body_of(self.client.get(&url), "restaurant").await?;
            restaurant_from_body(&body)
        }
        .boxed()
    }
}
