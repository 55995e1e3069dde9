//! Configuration file parsing utilities.
//!
//! Helpers for the `key = value` format used by `settings.conf`.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a `key = value` line into a normalised key and a clean value.
///
/// Inputs:
/// - `line`: Raw line
///
/// Output:
/// - `Some((key, value))`; `None` for comments, blanks and lines without `=`
///
/// Details:
/// - Keys are lowercased with `.`, `-` and spaces folded to `_`.
/// - A ` #` inline comment is stripped from the value.
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    if skip_comment_or_empty(line) {
        return None;
    }
    let (raw_key, raw_val) = line.trim().split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    let val = strip_inline_comment(raw_val.trim());
    Some((key, val.to_string()))
}

/// Drop a trailing ` # comment` from a value.
fn strip_inline_comment(val: &str) -> &str {
    val.find(" #").map_or(val, |i| val[..i].trim_end())
}
