//! Small helpers for URL encoding, lenient JSON extraction and time formatting.
//!
//! The directory API is loose about types: ids, prices and ratings arrive as
//! numbers or strings, and flags as booleans or `0`/`1`. The extractors here
//! accept every representation seen in the wild and never fail.

pub mod config;

use serde_json::Value;
use std::fmt::Write;

/// What: Percent-encode a path segment according to RFC 3986.
///
/// Inputs:
/// - `input`: Raw segment (e.g. a restaurant id)
///
/// Output:
/// - Encoded segment; unreserved characters pass through unchanged
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~') {
            out.push(char::from(b));
        } else {
            let _ = write!(out, "%{b:02X}");
        }
    }
    out
}

/// What: Extract a string by key, defaulting to empty.
///
/// Inputs:
/// - `v`: JSON object
/// - `key`: Field name
///
/// Output:
/// - The string, a stringified number, or `""`
#[must_use]
pub fn s(v: &Value, key: &str) -> String {
    match v.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// What: Extract the first non-empty string among candidate keys.
///
/// Inputs:
/// - `v`: JSON object
/// - `keys`: Candidate field names, tried in order
///
/// Output:
/// - `Some(text)` for the first key with non-blank text (numbers stringified); `None` otherwise
#[must_use]
pub fn ss(v: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .map(|k| s(v, k))
        .find(|text| !text.trim().is_empty())
}

/// What: Extract an unsigned integer from a number or numeric string.
///
/// Inputs:
/// - `v`: JSON object
/// - `keys`: Candidate field names
///
/// Output:
/// - First convertible value; floats are truncated toward zero
#[must_use]
pub fn u64_of(v: &Value, keys: &[&str]) -> Option<u64> {
    keys.iter().find_map(|k| {
        let n = v.get(*k)?;
        n.as_u64()
            .or_else(|| n.as_i64().and_then(|i| u64::try_from(i).ok()))
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(truncate))
            .or_else(|| n.as_str().and_then(|s| s.trim().parse::<u64>().ok()))
    })
}

/// Truncate a non-negative float into `u64`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate(f: f64) -> u64 {
    f as u64
}

/// What: Extract a float from a number or numeric string.
///
/// Inputs:
/// - `v`: JSON object
/// - `keys`: Candidate field names
///
/// Output:
/// - First finite value found
#[must_use]
pub fn f64_of(v: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| {
        let n = v.get(*k)?;
        n.as_f64()
            .or_else(|| n.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
            .filter(|f| f.is_finite())
    })
}

/// What: Extract a flag from a boolean, `0`/`1`, or `"true"`/`"yes"`/`"1"`.
///
/// Inputs:
/// - `v`: JSON object
/// - `key`: Field name
///
/// Output:
/// - `true` only for truthy values; missing keys are `false`
#[must_use]
pub fn flag_of(v: &Value, key: &str) -> bool {
    match v.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => {
            let lv = s.trim().to_ascii_lowercase();
            lv == "true" || lv == "1" || lv == "yes" || lv == "on"
        }
        _ => false,
    }
}

/// What: Format the current local time for log lines.
///
/// Output:
/// - `"YYYY-MM-DD-T HH:MM:SS"`
#[must_use]
pub fn log_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    /// What: Percent-encoding escapes reserved characters only.
    ///
    /// Inputs:
    /// - `"a b/c~"`
    ///
    /// Output:
    /// - `"a%20b%2Fc~"`
    fn percent_encode_escapes_reserved() {
        assert_eq!(percent_encode("a b/c~"), "a%20b%2Fc~");
        assert_eq!(percent_encode("18382360"), "18382360");
    }

    #[test]
    /// What: String extraction tolerates numbers and blanks.
    ///
    /// Inputs:
    /// - Object with numeric id, blank url, text name
    ///
    /// Output:
    /// - Numeric id stringified, blank url skipped
    fn string_extractors_are_lenient() {
        let v = json!({"id": 42, "url": "  ", "name": "Cafe", "alt": "x"});
        assert_eq!(s(&v, "id"), "42");
        assert_eq!(s(&v, "missing"), "");
        assert_eq!(ss(&v, &["url", "alt"]), Some("x".into()));
        assert_eq!(ss(&v, &["url"]), None);
    }

    #[test]
    /// What: Numeric extractors accept several encodings.
    ///
    /// Inputs:
    /// - Integers, floats, numeric strings, negatives
    ///
    /// Output:
    /// - Converted values; negatives rejected for `u64_of`
    fn numeric_extractors_accept_strings() {
        let v = json!({"a": 700, "b": "1500", "c": 12.9, "d": -3, "e": "4.5"});
        assert_eq!(u64_of(&v, &["a"]), Some(700));
        assert_eq!(u64_of(&v, &["b"]), Some(1500));
        assert_eq!(u64_of(&v, &["c"]), Some(12));
        assert_eq!(u64_of(&v, &["d"]), None);
        assert_eq!(f64_of(&v, &["e"]), Some(4.5));
        assert_eq!(f64_of(&v, &["zz", "c"]), Some(12.9));
    }

    #[test]
    /// What: Flags accept booleans, integers and words.
    ///
    /// Inputs:
    /// - `true`, `1`, `0`, `"yes"`, missing
    ///
    /// Output:
    /// - Truthy values only
    fn flags_accept_mixed_encodings() {
        let v = json!({"a": true, "b": 1, "c": 0, "d": "yes", "e": "no"});
        assert!(flag_of(&v, "a"));
        assert!(flag_of(&v, "b"));
        assert!(!flag_of(&v, "c"));
        assert!(flag_of(&v, "d"));
        assert!(!flag_of(&v, "e"));
        assert!(!flag_of(&v, "missing"));
    }
}
