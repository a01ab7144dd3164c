//! Rendering bookmarks as chat lines
//!
//! Every line starts with `ID:<id>:`; replying `/rm` to such a line removes
//! the bookmark, so the prefix must stay stable.

use crate::extract::format_hashtags;
use crate::storage::Bookmark;

/// `ID:<id>: <url> <title> <#tags>`, absent parts omitted
pub fn format_list_line(bookmark: &Bookmark, delimiter: char) -> String {
    let hashtags = format_hashtags(bookmark.tags.as_deref(), delimiter);
    join_parts(
        bookmark.id,
        [bookmark.url.as_str(), bookmark.title.as_deref().unwrap_or(""), hashtags.as_str()],
    )
}

/// `ID:<id>: <url> <#tags>`, tag suffix omitted when untagged
pub fn format_search_line(bookmark: &Bookmark, delimiter: char) -> String {
    let hashtags = format_hashtags(bookmark.tags.as_deref(), delimiter);
    join_parts(bookmark.id, [bookmark.url.as_str(), hashtags.as_str()])
}

fn join_parts<const N: usize>(id: i64, parts: [&str; N]) -> String {
    let body = parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    format!("ID:{}: {}", id, body)
}
