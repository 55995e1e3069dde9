use std::sync::Arc;

use tokio::sync::mpsc;

use crate::error::ApiError;
use crate::sources::{RestaurantApi, load_upload};
use crate::state::{DetailResponse, FetchRequest, FetchResponse};

/// What: Run one fetch against the directory.
///
/// Inputs:
/// - `api`: Directory client
/// - `req`: Request carrying its token
///
/// Output:
/// - Response echoing the token and the outcome
///
/// Details:
/// - Image requests read the file first; read failures become the outcome.
pub async fn fetch(api: &dyn RestaurantApi, req: FetchRequest) -> FetchResponse {
    match req {
        FetchRequest::Listing { token, page } => FetchResponse::Listing {
            token,
            page,
            outcome: api.list_restaurants(page).await,
        },
        FetchRequest::Location { token, query } => FetchResponse::Location {
            token,
            outcome: api.search_by_location(query).await,
        },
        FetchRequest::Image { token, image } => {
            let outcome = match load_upload(&image).await {
                Ok(upload) => api.search_by_image(upload).await,
                Err(e) => Err(e),
            };
            FetchResponse::Image { token, outcome }
        }
    }
}

/// Log a failed outcome at warn level.
fn log_failure(what: &str, token: u64, outcome: Result<(), &ApiError>) {
    if let Err(e) = outcome {
        tracing::warn!(what, token, error = %e, "fetch failed");
    }
}

/// What: Spawn background worker for listing and search fetches.
///
/// Inputs:
/// - `api`: Directory client
/// - `req_rx`: Channel receiver for fetch requests
/// - `res_tx`: Channel sender for fetch responses
///
/// Details:
/// - Each request runs in its own task so a slow search never delays a
///   newer one; ordering is restored by the tokens, not by the worker.
pub fn spawn_fetch_worker(
    api: Arc<dyn RestaurantApi>,
    mut req_rx: mpsc::UnboundedReceiver<FetchRequest>,
    res_tx: mpsc::UnboundedSender<FetchResponse>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            tracing::debug!(token = req.token(), "fetch request received");
            let api = Arc::clone(&api);
            let res_tx = res_tx.clone();
            tokio::spawn(async move {
                let res = fetch(api.as_ref(), req).await;
                match &res {
                    FetchResponse::Listing { token, outcome, .. }
                    | FetchResponse::Location { token, outcome } => {
                        log_failure("restaurants", *token, outcome.as_ref().map(|_| ()));
                    }
                    FetchResponse::Image { token, outcome } => {
                        log_failure("image search", *token, outcome.as_ref().map(|_| ()));
                    }
                }
                let _ = res_tx.send(res);
            });
        }
        tracing::debug!("fetch worker stopped");
    });
}

/// What: Spawn background worker for restaurant details.
///
/// Inputs:
/// - `api`: Directory client
/// - `req_rx`: Channel receiver for restaurant ids
/// - `res_tx`: Channel sender for `(id, outcome)` pairs
pub fn spawn_details_worker(
    api: Arc<dyn RestaurantApi>,
    mut req_rx: mpsc::UnboundedReceiver<String>,
    res_tx: mpsc::UnboundedSender<DetailResponse>,
) {
    tokio::spawn(async move {
        while let Some(id) = req_rx.recv().await {
            let outcome = api.get_restaurant(id.clone()).await;
            if let Err(e) = &outcome {
                tracing::warn!(id = %id, error = %e, "restaurant details unavailable");
            }
            let _ = res_tx.send((id, outcome));
        }
    });
}
