//! End-to-end runtime tests against a scripted directory.
//!
//! Each test feeds typed lines into `dinescout::app::run`, closes the input
//! and checks what was rendered once the session went idle.

use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::sync::mpsc;

use dinescout::app;
use dinescout::config::Settings;
use dinescout::error::ApiError;
use dinescout::sources::{ImageUpload, RestaurantApi};
use dinescout::state::{ImageSearchResult, LocationQuery, Restaurant};

/// Directory answering from fixed data.
#[derive(Default)]
struct ScriptedApi {
    /// Listing pages, 1-based.
    pages: Vec<Vec<Restaurant>>,
    /// Listing failure returned instead of pages.
    listing_error: Option<ApiError>,
    /// Location search answer.
    nearby: Vec<Restaurant>,
    /// Image search answer.
    image: ImageSearchResult,
    /// Delay before every listing response.
    listing_delay: Option<Duration>,
}

impl RestaurantApi for ScriptedApi {
    fn list_restaurants(&self, page: u32) -> BoxFuture<'_, Result<Vec<Restaurant>, ApiError>> {
        async move {
            if let Some(delay) = self.listing_delay {
                tokio::time::sleep(delay).await;
            }
            if let Some(e) = &self.listing_error {
                return Err(e.clone());
            }
            let idx = usize::try_from(page).expect("page") - 1;
            Ok(self.pages.get(idx).cloned().unwrap_or_default())
        }
        .boxed()
    }

    fn search_by_location(
        &self,
        _query: LocationQuery,
    ) -> BoxFuture<'_, Result<Vec<Restaurant>, ApiError>> {
        async move { Ok(self.nearby.clone()) }.boxed()
    }

    fn search_by_image(
        &self,
        upload: ImageUpload,
    ) -> BoxFuture<'_, Result<ImageSearchResult, ApiError>> {
        async move {
            assert_eq!(upload.mime, "image/jpeg");
            Ok(self.image.clone())
        }
        .boxed()
    }

    fn get_restaurant(&self, id: String) -> BoxFuture<'_, Result<Restaurant, ApiError>> {
        async move {
            self.pages
                .iter()
                .flatten()
                .find(|r| r.id == id)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(format!("restaurant {id}")))
        }
        .boxed()
    }
}

fn named(prefix: &str, range: std::ops::Range<usize>) -> Vec<Restaurant> {
    range
        .map(|i| Restaurant {
            id: format!("{prefix}{i}"),
            name: format!("{prefix} place {i}"),
            aggregate_rating: Some("4.0".into()),
            ..Restaurant::default()
        })
        .collect()
}

/// Run a session over `lines` and return everything rendered.
async fn session(api: ScriptedApi, lines: &[&str]) -> String {
    let (tx, rx) = mpsc::unbounded_channel();
    for line in lines {
        tx.send((*line).to_string()).expect("send");
    }
    drop(tx);
    let settings = Settings {
        page_size: 2,
        ..Settings::default()
    };
    let mut out = Vec::new();
    tokio::time::timeout(
        Duration::from_secs(5),
        app::run(Arc::new(api), &settings, rx, &mut out),
    )
    .await
    .expect("session finished in time")
    .expect("session ok");
    String::from_utf8(out).expect("utf8")
}

/// The last rendered result screen.
fn last_screen(text: &str) -> &str {
    text.rfind("== ").map_or(text, |i| &text[i..])
}

#[tokio::test]
/// What: With no input the first page loads and the session ends.
///
/// Inputs:
/// - Two listing pages; empty input
///
/// Output:
/// - Page 1 rendered with the load-more hint
async fn initial_page_renders() {
    let api = ScriptedApi {
        pages: vec![named("d", 0..2), named("d", 2..3)],
        ..ScriptedApi::default()
    };
    let text = session(api, &[]).await;
    let screen = last_screen(&text);
    assert!(screen.starts_with("== All restaurants =="));
    assert!(screen.contains("d place 0"));
    assert!(screen.contains("d place 1"));
    assert!(screen.contains("`more`"));
}

#[tokio::test]
/// What: A location search ends on its own results with the home hint.
///
/// Inputs:
/// - `near 12.97 77.59 5`
///
/// Output:
/// - Last screen lists the nearby restaurants
async fn location_search_renders_results() {
    let api = ScriptedApi {
        pages: vec![named("d", 0..2)],
        nearby: named("n", 0..1),
        ..ScriptedApi::default()
    };
    let text = session(api, &["near 12.97 77.59 5"]).await;
    let screen = last_screen(&text);
    assert!(screen.starts_with("== Restaurants near you =="));
    assert!(screen.contains("n place 0"));
    assert!(!screen.contains("d place"));
    assert!(screen.contains("`home`"));
}

#[tokio::test]
/// What: An image search shows the detected cuisine.
///
/// Inputs:
/// - A `.jpg` file on disk; `image <path>`
///
/// Output:
/// - Last screen shows the cuisine and matching restaurants
async fn image_search_renders_cuisine() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("lunch.jpg");
    std::fs::write(&path, b"\xff\xd8\xff fake jpeg").expect("write");
    let api = ScriptedApi {
        pages: vec![named("d", 0..2)],
        image: ImageSearchResult {
            restaurants: named("p", 0..2),
            detected_cuisine: Some("Pizza".into()),
        },
        ..ScriptedApi::default()
    };
    let line = format!("image {}", path.display());
    let text = session(api, &[&line]).await;
    let screen = last_screen(&text);
    assert!(screen.starts_with("== Restaurants for your dish =="));
    assert!(screen.contains("Detected cuisine: Pizza"));
    assert!(screen.contains("p place 1"));
}

#[tokio::test]
/// What: Invalid input is alerted and the listing stays.
///
/// Inputs:
/// - `near 100 0 1`, `image` with no path
///
/// Output:
/// - Both alerts printed; last screen still browsing
async fn invalid_input_alerts() {
    let api = ScriptedApi {
        pages: vec![named("d", 0..2)],
        ..ScriptedApi::default()
    };
    let text = session(api, &["near 100 0 1", "image"]).await;
    assert!(text.contains("! Invalid latitude: '100'"));
    assert!(text.contains("! Please select an image"));
    assert!(last_screen(&text).starts_with("== All restaurants =="));
}

#[tokio::test]
/// What: Listing failures are shown on an empty screen.
///
/// Inputs:
/// - Listing that fails with a network error
///
/// Output:
/// - `Error:` line and no empty-result hint
async fn listing_failure_is_shown() {
    let api = ScriptedApi {
        listing_error: Some(ApiError::Network("connection refused".into())),
        ..ScriptedApi::default()
    };
    let text = session(api, &[]).await;
    let screen = last_screen(&text);
    assert!(screen.contains("Error: Network error: connection refused"));
    assert!(!screen.contains("No restaurants found"));
}

#[tokio::test]
/// What: `show` prints details fetched by id.
///
/// Inputs:
/// - `show d1`
///
/// Output:
/// - Detail block with the rating
async fn show_prints_details() {
    let api = ScriptedApi {
        pages: vec![named("d", 0..2)],
        ..ScriptedApi::default()
    };
    let text = session(api, &["show d1"]).await;
    assert!(text.contains("== d place 1 =="));
    assert!(text.contains("Rating:           4.0"));
}

#[tokio::test]
/// What: `quit` ends the session without waiting for slow fetches.
///
/// Inputs:
/// - Listing delayed by a minute; `quit`
///
/// Output:
/// - Session returns promptly showing only the loading state
async fn quit_does_not_wait_for_fetches() {
    let api = ScriptedApi {
        pages: vec![named("d", 0..2)],
        listing_delay: Some(Duration::from_secs(60)),
        ..ScriptedApi::default()
    };
    let text = session(api, &["quit"]).await;
    assert!(text.contains("Loading..."));
    assert!(!text.contains("d place"));
}
