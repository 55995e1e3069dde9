use std::io::{self, Write};

use crate::logic::ReadModel;
use crate::state::{Mode, Restaurant, SearchKind};

/// Shown when nothing is listed, loading or failed.
pub const EMPTY_HINT: &str =
    "No restaurants found. Try adjusting your search. Type `home` to reset.";

/// Heading for the current mode.
const fn title(mode: Mode) -> &'static str {
    match mode {
        Mode::Browsing => "All restaurants",
        Mode::Searching(SearchKind::Location) => "Restaurants near you",
        Mode::Searching(SearchKind::Image) => "Restaurants for your dish",
    }
}

/// Write one restaurant card.
fn render_card(out: &mut impl Write, index: usize, r: &Restaurant) -> io::Result<()> {
    writeln!(out, "[{index}] {}  (id {})", r.name, r.id)?;
    if !r.cuisines.is_empty() {
        writeln!(out, "    {}", r.cuisines)?;
    }
    match r.average_cost_for_two {
        Some(cost) => writeln!(
            out,
            "    \u{2b50} {}   {} {cost} for two",
            r.rating_label(),
            r.currency
        ),
        None => writeln!(out, "    \u{2b50} {}", r.rating_label()),
    }
}

/// What: Render the visible result set and its controls.
///
/// Inputs:
/// - `out`: Destination
/// - `model`: Read model computed after the last mutation
///
/// Output:
/// - Heading, detected cuisine, loading/error/empty lines, cards and hints
///
/// # Errors
/// - I/O errors from `out`
///
/// Details:
/// - Cards are listed even while a page is loading so appended pages keep
///   the earlier ones visible.
pub fn render_results(out: &mut impl Write, model: &ReadModel<'_>) -> io::Result<()> {
    writeln!(out, "== {} ==", title(model.mode))?;
    if let Some(cuisine) = model.detected_cuisine {
        writeln!(out, "Detected cuisine: {cuisine}")?;
    }
    if let Some(err) = model.error {
        writeln!(out, "Error: {err}")?;
    }
    for (i, r) in model.results.iter().enumerate() {
        render_card(out, i + 1, r)?;
    }
    if model.loading {
        writeln!(out, "Loading...")?;
    }
    if model.empty_hint() {
        writeln!(out, "{EMPTY_HINT}")?;
    }
    if model.can_load_more {
        writeln!(out, "Type `more` for more restaurants.")?;
    }
    if model.show_home() {
        writeln!(out, "Type `home` to see all restaurants.")?;
    }
    Ok(())
}
