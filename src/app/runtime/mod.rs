//! Async runtime: workers, channels and the event loop around a [`Session`].

use std::io::{BufRead, Write};
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::Settings;
use crate::error::Result;
use crate::sources::RestaurantApi;

mod channels;
mod event_loop;
mod handlers;
mod workers;

pub use channels::{Channels, Requests};
pub use handlers::{Flow, Session};
pub use workers::fetch;

/// What: Run the interactive front end.
///
/// Inputs:
/// - `api`: Directory client
/// - `settings`: Effective settings
/// - `input_rx`: Typed lines; closing it ends the session once idle
/// - `out`: Destination for everything rendered
///
/// Output:
/// - `Ok(())` after `quit` or end of input
///
/// # Errors
/// - I/O errors from `out`
///
/// Details:
/// - Requests the first listing page before reading any input.
pub async fn run(
    api: Arc<dyn RestaurantApi>,
    settings: &Settings,
    input_rx: mpsc::UnboundedReceiver<String>,
    out: &mut impl Write,
) -> Result<()> {
    let mut channels = Channels::new(api);
    let mut session = Session::new(settings);
    tracing::info!(
        page_size = settings.page_size,
        api = %settings.api_base_url,
        "session starting"
    );
    session.start(&channels.requests, out)?;
    out.flush()?;
    event_loop::run_loop(&mut session, &mut channels, input_rx, out).await?;
    out.flush()?;
    Ok(())
}

/// What: Forward stdin lines to a channel from a dedicated thread.
///
/// Output:
/// - Receiver yielding each line; it closes at end of input
///
/// Details:
/// - The thread stops at EOF, on a read error, or once the receiver is dropped.
#[must_use]
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "stdin read failed");
                    break;
                }
            }
        }
    });
    rx
}
