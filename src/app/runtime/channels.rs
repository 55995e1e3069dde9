use std::sync::Arc;

use tokio::sync::mpsc;

use super::workers::{spawn_details_worker, spawn_fetch_worker};
use crate::sources::RestaurantApi;
use crate::state::{DetailResponse, FetchRequest, FetchResponse};

/// Senders the handlers use to start background work.
#[derive(Clone, Debug)]
pub struct Requests {
    /// Listing, location and image fetches.
    pub fetch_tx: mpsc::UnboundedSender<FetchRequest>,
    /// Restaurant ids for the detail view.
    pub details_tx: mpsc::UnboundedSender<String>,
}

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Holds the request senders and the response receivers between the
///   event loop and the background workers.
pub struct Channels {
    /// Request side, handed to handlers.
    pub requests: Requests,
    /// Fetch outcomes echoing their tokens.
    pub fetch_res_rx: mpsc::UnboundedReceiver<FetchResponse>,
    /// Detail lookups keyed by the requested id.
    pub details_res_rx: mpsc::UnboundedReceiver<DetailResponse>,
}

impl Channels {
    /// What: Create all channels and spawn the workers serving them.
    ///
    /// Inputs:
    /// - `api`: Directory client shared by the workers
    ///
    /// Output:
    /// - Channels ready for the event loop
    ///
    /// Details:
    /// - Must be called inside a Tokio runtime.
    pub fn new(api: Arc<dyn RestaurantApi>) -> Self {
        let (fetch_tx, fetch_req_rx) = mpsc::unbounded_channel();
        let (fetch_res_tx, fetch_res_rx) = mpsc::unbounded_channel();
        let (details_tx, details_req_rx) = mpsc::unbounded_channel();
        let (details_res_tx, details_res_rx) = mpsc::unbounded_channel();
        spawn_fetch_worker(Arc::clone(&api), fetch_req_rx, fetch_res_tx);
        spawn_details_worker(api, details_req_rx, details_res_tx);
        Self {
            requests: Requests {
                fetch_tx,
                details_tx,
            },
            fetch_res_rx,
            details_res_rx,
        }
    }
}
