//! Bookmark id lookup in replied-to messages
//!
//! The bot renders bookmarks as `ID:<id>: ...` lines. When the user answers
//! one of those lines with `/rm`, the id is read back out of the original
//! text. This is a contract with our own output format, not a general parser.

use once_cell::sync::Lazy;
use regex::Regex;

static REPLY_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ID:(\d+):").expect("reply id pattern is valid"));

/// Returns the digits between `ID:` and the next `:` in `text`
pub fn parse_reply_id(text: &str) -> Option<i64> {
    REPLY_ID_PATTERN
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|id| id.as_str().parse().ok())
}
