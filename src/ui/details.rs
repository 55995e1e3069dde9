use std::io::{self, Write};

use crate::state::Restaurant;

/// `Yes`/`No` label for a flag.
const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// What: Render the detail view of one restaurant.
///
/// Inputs:
/// - `out`: Destination
/// - `r`: Restaurant to describe
///
/// # Errors
/// - I/O errors from `out`
pub fn render_detail(out: &mut impl Write, r: &Restaurant) -> io::Result<()> {
    writeln!(out, "== {} ==", r.name)?;
    if !r.cuisines.is_empty() {
        writeln!(out, "Cuisines:         {}", r.cuisines)?;
    }
    if let Some(cost) = r.average_cost_for_two {
        writeln!(out, "Cost for two:     {} {cost}", r.currency)?;
    }
    if let Some(range) = r.price_range {
        writeln!(out, "Price range:      {range}/5")?;
    }
    writeln!(out, "Rating:           {}", r.rating_label())?;
    let place: Vec<&str> = [r.location.address.as_str(), r.location.city.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if !place.is_empty() {
        writeln!(out, "Address:          {}", place.join(", "))?;
    }
    writeln!(out, "Online delivery:  {}", yes_no(r.has_online_delivery))?;
    writeln!(out, "Table booking:    {}", yes_no(r.has_table_booking))?;
    writeln!(out, "Delivering now:   {}", yes_no(r.is_delivering_now))?;
    let links = [
        ("Menu", &r.menu_url),
        ("Photos", &r.photos_url),
        ("Events", &r.events_url),
        ("Website", &r.url),
    ];
    for (label, link) in links {
        if let Some(link) = link {
            writeln!(out, "{:<18}{link}", format!("{label}:"))?;
        }
    }
    Ok(())
}
