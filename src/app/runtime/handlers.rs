use std::io::Write;
use std::num::NonZeroUsize;

use lru::LruCache;
use tracing::{debug, info, warn};

use super::channels::Requests;
use crate::app::Command;
use crate::config::Settings;
use crate::error::Result;
use crate::logic::{self, compute};
use crate::state::{BrowseState, DetailResponse, FetchRequest, FetchResponse, ImageSelection, Restaurant};
use crate::ui;

/// Whether the event loop keeps going after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading input.
    Continue,
    /// Leave the loop.
    Quit,
}

/// Browsing state plus the runtime bookkeeping around it.
pub struct Session {
    /// State machine driving the visible results.
    pub state: BrowseState,
    /// Recently viewed restaurant details.
    details: LruCache<String, Restaurant>,
    /// Requests sent to workers and not yet answered.
    in_flight: usize,
}

impl Session {
    /// What: Create a session from settings.
    ///
    /// Inputs:
    /// - `settings`: Page size and detail cache size
    ///
    /// Output:
    /// - Idle session; nothing requested yet
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let cap = NonZeroUsize::new(settings.detail_cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            state: BrowseState::new(settings.page_size),
            details: LruCache::new(cap),
            in_flight: 0,
        }
    }

    /// Requests awaiting a response.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Hand a request to the fetch worker.
    fn dispatch(&mut self, requests: &Requests, req: FetchRequest) {
        if requests.fetch_tx.send(req).is_ok() {
            self.in_flight += 1;
        } else {
            warn!("fetch worker is gone; request dropped");
        }
    }

    /// What: Render the current read model.
    ///
    /// # Errors
    /// - I/O errors from `out`
    pub fn render(&self, out: &mut impl Write) -> Result<()> {
        ui::render_results(out, &compute(&self.state))?;
        Ok(())
    }

    /// What: Request the first listing page and show the loading state.
    ///
    /// # Errors
    /// - I/O errors from `out`
    pub fn start(&mut self, requests: &Requests, out: &mut impl Write) -> Result<()> {
        let req = logic::initial_load(&mut self.state);
        self.dispatch(requests, req);
        self.render(out)
    }

    /// What: Apply one user command.
    ///
    /// Inputs:
    /// - `cmd`: Parsed command
    /// - `requests`: Worker senders
    /// - `out`: Destination for rendering
    ///
    /// Output:
    /// - `Flow::Quit` for `quit`, otherwise `Flow::Continue`
    ///
    /// # Errors
    /// - I/O errors from `out`
    ///
    /// Details:
    /// - Validation failures are shown as alerts and leave the state as it was.
    /// - Every accepted search or page request re-renders immediately so the
    ///   loading state is visible.
    pub fn handle_command(
        &mut self,
        cmd: Command,
        requests: &Requests,
        out: &mut impl Write,
    ) -> Result<Flow> {
        debug!(?cmd, "command");
        match cmd {
            Command::More => match logic::load_more(&mut self.state) {
                Some(req) => {
                    self.dispatch(requests, req);
                    self.render(out)?;
                }
                None if self.state.is_searching() => {
                    ui::render_notice(out, "More pages are only available for all restaurants.")?;
                }
                None => ui::render_notice(out, "Nothing more to load right now.")?,
            },
            Command::Home => {
                let req = logic::go_home(&mut self.state);
                self.dispatch(requests, req);
                self.render(out)?;
            }
            Command::Near { lat, lon, radius } => {
                let form = &mut self.state.forms.location;
                form.lat = lat;
                form.lon = lon;
                form.radius = radius;
                form.open = true;
                match logic::submit_location_form(&mut self.state) {
                    Ok(req) => {
                        self.dispatch(requests, req);
                        self.render(out)?;
                    }
                    Err(e) => ui::render_alert(out, &e)?,
                }
            }
            Command::Image(path) => {
                let form = &mut self.state.forms.image;
                form.selected = path.map(ImageSelection::new);
                form.open = true;
                match logic::submit_image_form(&mut self.state) {
                    Ok(req) => {
                        self.dispatch(requests, req);
                        self.render(out)?;
                    }
                    Err(e) => ui::render_alert(out, &e)?,
                }
            }
            Command::Show(id) => {
                if let Some(r) = self.details.get(&id) {
                    debug!(id = %id, "details served from cache");
                    ui::render_detail(out, r)?;
                } else if requests.details_tx.send(id.clone()).is_ok() {
                    self.in_flight += 1;
                    ui::render_notice(out, &format!("Fetching restaurant {id}..."))?;
                } else {
                    warn!("details worker is gone; request dropped");
                }
            }
            Command::List => self.render(out)?,
            Command::Cancel => {
                self.state.forms.location.clear();
                self.state.forms.image.clear();
                ui::render_notice(out, "Search input discarded.")?;
            }
            Command::Help => ui::render_help(out)?,
            Command::Quit => {
                info!("quit requested");
                return Ok(Flow::Quit);
            }
            Command::Unknown(text) => {
                ui::render_alert(out, &format!("Unknown command `{text}`. Type `help`."))?;
            }
        }
        Ok(Flow::Continue)
    }

    /// What: Apply a fetch outcome and re-render when it was current.
    ///
    /// # Errors
    /// - I/O errors from `out`
    pub fn handle_fetch_response(
        &mut self,
        res: FetchResponse,
        out: &mut impl Write,
    ) -> Result<()> {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.state.apply(res) {
            self.render(out)?;
        } else {
            debug!(in_flight = self.in_flight, "stale response ignored");
        }
        Ok(())
    }

    /// What: Show a fetched restaurant and cache it.
    ///
    /// # Errors
    /// - I/O errors from `out`
    pub fn handle_detail(&mut self, (id, outcome): DetailResponse, out: &mut impl Write) -> Result<()> {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            Ok(r) => {
                ui::render_detail(out, &r)?;
                self.details.put(id, r);
            }
            Err(e) => ui::render_alert(out, &format!("Could not load restaurant {id}: {e}"))?,
        }
        Ok(())
    }
}
