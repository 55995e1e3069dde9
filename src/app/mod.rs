//! Interactive front end: command parsing and the async runtime.

pub mod commands;
pub mod runtime;

pub use commands::Command;
pub use runtime::{run, spawn_stdin_reader};
