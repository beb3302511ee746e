//! Small text helpers shared by the extractors.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse runs of whitespace to single spaces and trim the ends.
///
/// Listing-page markup nests titles across indented lines, so the raw text
/// of a title element arrives with embedded newlines and runs of spaces.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(collapse_whitespace("  第95回\n    特集！  "), "第95回 特集！");
/// ```
pub fn collapse_whitespace(s: &str) -> String {
    RE_WHITESPACE.replace_all(s, " ").trim().to_string()
}
