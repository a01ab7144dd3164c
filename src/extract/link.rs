//! URL detection

use once_cell::sync::Lazy;
use regex::Regex;

/// URL-like shape: optional scheme, dotted host ending in a 2+ letter segment,
/// optional path and query, followed by `#`, whitespace, or end of text.
///
/// The terminator sits outside the `url` group because the regex crate has no
/// lookahead; only the first match is ever used.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<url>(?:https?://)?\S+\.[a-z]{2,}(?:/[^\s#?]*)?(?:\?[^#\s]*)?)(?:#|\s|$)")
        .expect("URL pattern is valid")
});

/// Finds the first URL-shaped substring in `text`
///
/// Trailing slashes are stripped. This is a heuristic, not a URL grammar:
/// `file.txt` matches, `3.14` and `e.g.` do not.
pub fn find_url(text: &str) -> Option<String> {
    let captures = URL_PATTERN.captures(text)?;
    let url = captures.name("url")?.as_str().trim_end_matches('/');

    if url.is_empty() {
        return None;
    }

    Some(url.to_string())
}
