//! Library entry for dinescout exposing the browsing core for the binary and
//! integration tests.
//!
//! The core is a small state machine: three result sources (the paginated
//! listing, location search and image search), a browsing/searching mode,
//! and a read model derived from both after every change. Fetches carry a
//! generation token so that a response for a superseded request is dropped
//! instead of overwriting newer results.

pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod logic;
pub mod sources;
pub mod state;
pub mod ui;
pub mod util;

#[cfg(test)]
mod test_utils;
