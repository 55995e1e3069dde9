use std::io::Write;

use tokio::select;
use tokio::sync::mpsc;

use super::channels::Channels;
use super::handlers::{Flow, Session};
use crate::app::commands;
use crate::error::Result;

/// What: Process one iteration of channel message handling.
///
/// Inputs:
/// - `session`: Browsing session
/// - `channels`: Worker channels
/// - `input_rx`: Typed lines
/// - `input_open`: Cleared once input ends
/// - `out`: Destination for rendering
///
/// Output:
/// - `Flow::Quit` when the loop should exit
///
/// # Errors
/// - I/O errors from `out`
///
/// Details:
/// - Worker responses are drained before input so a rendered screen is never
///   older than a response that already arrived.
async fn process_channel_messages(
    session: &mut Session,
    channels: &mut Channels,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
    input_open: &mut bool,
    out: &mut impl Write,
) -> Result<Flow> {
    select! {
        biased;
        Some(res) = channels.fetch_res_rx.recv() => {
            session.handle_fetch_response(res, out)?;
        }
        Some(detail) = channels.details_res_rx.recv() => {
            session.handle_detail(detail, out)?;
        }
        line = input_rx.recv(), if *input_open => match line {
            Some(line) => {
                if let Some(cmd) = commands::parse(&line) {
                    let flow = session.handle_command(cmd, &channels.requests, out)?;
                    out.flush()?;
                    return Ok(flow);
                }
            }
            None => {
                tracing::debug!(in_flight = session.in_flight(), "input closed");
                *input_open = false;
            }
        },
        else => return Ok(Flow::Quit),
    }
    out.flush()?;
    Ok(Flow::Continue)
}

/// What: Drive the session until `quit`, or until input ends with nothing in flight.
///
/// # Errors
/// - I/O errors from `out`
pub async fn run_loop(
    session: &mut Session,
    channels: &mut Channels,
    mut input_rx: mpsc::UnboundedReceiver<String>,
    out: &mut impl Write,
) -> Result<()> {
    let mut input_open = true;
    loop {
        if !input_open && session.in_flight() == 0 {
            tracing::info!("input finished and no requests pending");
            break;
        }
        let flow =
            process_channel_messages(session, channels, &mut input_rx, &mut input_open, out)
                .await?;
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}
