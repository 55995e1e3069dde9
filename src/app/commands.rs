//! Parsing of typed command lines.

use std::path::PathBuf;

/// One line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Load the next listing page.
    More,
    /// Leave search mode and reload the listing.
    Home,
    /// Location search with raw inputs; missing ones are empty.
    Near {
        /// Latitude text.
        lat: String,
        /// Longitude text.
        lon: String,
        /// Radius text in km.
        radius: String,
    },
    /// Image search for a file, if one was named.
    Image(Option<PathBuf>),
    /// Detail view of one restaurant.
    Show(String),
    /// Print the current results again.
    List,
    /// Discard unfinished search input.
    Cancel,
    /// Print the command overview.
    Help,
    /// Exit.
    Quit,
    /// Anything not understood, with the original text.
    Unknown(String),
}

/// What: Parse one input line.
///
/// Inputs:
/// - `line`: Raw line without the newline
///
/// Output:
/// - `None` for blank lines; otherwise the command
///
/// Details:
/// - Command words are case-insensitive; arguments are kept as typed.
/// - `image` takes the rest of the line so paths may contain spaces.
#[must_use]
pub fn parse(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, r)| (w, r.trim()));
    let cmd = match word.to_ascii_lowercase().as_str() {
        "more" | "m" => Command::More,
        "home" | "h" => Command::Home,
        "near" | "location" | "loc" => {
            let mut parts = rest.split_whitespace().map(str::to_string);
            Command::Near {
                lat: parts.next().unwrap_or_default(),
                lon: parts.next().unwrap_or_default(),
                radius: parts.next().unwrap_or_default(),
            }
        }
        "image" | "img" => Command::Image((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "show" | "s" if !rest.is_empty() => Command::Show(rest.to_string()),
        "list" | "ls" => Command::List,
        "cancel" => Command::Cancel,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    };
    Some(cmd)
}
