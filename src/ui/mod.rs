//! Plain-text presentation of the read model, restaurant details and alerts.
//!
//! Every renderer writes whole lines to any `std::io::Write`, so the binary
//! prints to stdout and tests capture into a `Vec<u8>`.

mod details;
mod results;

use std::io::{self, Write};

pub use details::render_detail;
pub use results::{EMPTY_HINT, render_results};

/// Commands understood by the front end.
const HELP: &str = "\
Commands:
  more                       load the next page of restaurants
  home                       leave search and show all restaurants
  near <lat> <lon> <radius>  restaurants within <radius> km of a point
  image <path>               restaurants serving the dish in a photo
  show <id>                  details of one restaurant
  list                       print the current results again
  cancel                     discard unfinished search input
  help                       this text
  quit                       exit";

/// What: Print the command overview.
///
/// # Errors
/// - I/O errors from `out`
pub fn render_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{HELP}")
}

/// What: Print a blocking alert, such as a rejected search input.
///
/// Inputs:
/// - `out`: Destination
/// - `message`: Alert text
///
/// # Errors
/// - I/O errors from `out`
pub fn render_alert(out: &mut impl Write, message: &impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "! {message}")
}

/// What: Print a one-line status notice.
///
/// # Errors
/// - I/O errors from `out`
pub fn render_notice(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "-- {message}")
}
