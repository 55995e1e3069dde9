//! Browsing vs searching arbitration.

use crate::state::types::{ActiveSource, SearchKind};

/// Display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Default listing is shown.
    #[default]
    Browsing,
    /// A search result set is shown; the kind is the most recently started one.
    Searching(SearchKind),
}

/// Holds the search flag and remembers which search started last.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchModeController {
    /// Current mode.
    mode: Mode,
}

impl SearchModeController {
    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether a search result set owns the display.
    #[must_use]
    pub const fn is_searching(&self) -> bool {
        matches!(self.mode, Mode::Searching(_))
    }

    /// Source that currently owns the display area.
    #[must_use]
    pub fn active(&self) -> ActiveSource {
        match self.mode {
            Mode::Browsing => ActiveSource::Default,
            Mode::Searching(kind) => kind.into(),
        }
    }

    /// Enter (or re-enter) search mode for `kind`.
    pub const fn enter(&mut self, kind: SearchKind) {
        self.mode = Mode::Searching(kind);
    }

    /// What: Leave search mode.
    ///
    /// Output:
    /// - `true` if the controller was searching before the call
    ///
    /// Details:
    /// - Only flips the flag. The reset and re-fetch cascade that must follow
    ///   lives in `BrowseState::exit_search`.
    pub const fn exit(&mut self) -> bool {
        let was = self.is_searching();
        self.mode = Mode::Browsing;
        was
    }
}
