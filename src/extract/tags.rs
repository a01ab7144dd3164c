//! Hashtag detection and the stored tag string format

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#(\w+)").expect("tag pattern is valid"));

/// Finds every `#tag` in `text`, in order, without the `#`
pub fn find_tags(text: &str) -> Vec<String> {
    TAG_PATTERN
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|tag| tag.as_str().to_string())
        .collect()
}

/// Removes `#tag` tokens from `text` and collapses the remaining whitespace
pub fn strip_tags(text: &str) -> String {
    TAG_PATTERN
        .replace_all(text, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Joins tags for storage; an empty list is stored as `None`
pub fn join_tags(tags: &[String], delimiter: char) -> Option<String> {
    if tags.is_empty() {
        return None;
    }

    Some(tags.join(&delimiter.to_string()))
}

/// Splits a stored tag string back into its tags
pub fn split_tags(stored: Option<&str>, delimiter: char) -> Vec<String> {
    match stored {
        Some(s) if !s.is_empty() => s.split(delimiter).map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// Renders a stored tag string as space-separated hashtags
pub fn format_hashtags(stored: Option<&str>, delimiter: char) -> String {
    split_tags(stored, delimiter)
        .iter()
        .map(|tag| format!("#{}", tag))
        .collect::<Vec<_>>()
        .join(" ")
}
