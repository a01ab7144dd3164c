//! Extraction of bookmark candidates from free-form chat text
//!
//! This module turns a line of text into:
//! - The first URL-shaped substring (if any)
//! - Every `#tag` token, in order of appearance
//!
//! It also owns the tag string format used by the store: tags joined with a
//! single delimiter character, with an empty tag list stored as NULL.

mod link;
mod tags;

pub use link::find_url;
pub use tags::{find_tags, format_hashtags, join_tags, split_tags, strip_tags};

/// Result of scanning a piece of text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    /// First URL-shaped substring, trailing slashes removed
    pub url: Option<String>,

    /// Tag tokens without the leading `#`, duplicates preserved
    pub tags: Vec<String>,
}

/// Extracts the first URL and all hashtags from `text`
///
/// The two scans are independent and both run over the whole input, so tags
/// may appear before, after, or around the URL.
///
/// # Example
///
/// ```
/// use linkeeper::extract::extract_url_and_tags;
///
/// let extracted = extract_url_and_tags("check out example.com #tech #news");
/// assert_eq!(extracted.url.as_deref(), Some("example.com"));
/// assert_eq!(extracted.tags, vec!["tech", "news"]);
/// ```
pub fn extract_url_and_tags(text: &str) -> Extracted {
    Extracted {
        url: find_url(text),
        tags: find_tags(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_url_and_tags(""), Extracted::default());
    }

    #[test]
    fn test_url_with_trailing_tags() {
        let extracted = extract_url_and_tags("check out example.com #tech #news");
        assert_eq!(extracted.url, Some("example.com".to_string()));
        assert_eq!(extracted.tags, vec!["tech", "news"]);
    }

    #[test]
    fn test_tags_before_url() {
        let extracted = extract_url_and_tags("#rust #async https://tokio.rs/blog/");
        assert_eq!(extracted.url, Some("https://tokio.rs/blog".to_string()));
        assert_eq!(extracted.tags, vec!["rust", "async"]);
    }

    #[test]
    fn test_tags_interleaved_with_url() {
        let extracted = extract_url_and_tags("#one news.ycombinator.com #two");
        assert_eq!(extracted.url, Some("news.ycombinator.com".to_string()));
        assert_eq!(extracted.tags, vec!["one", "two"]);
    }

    #[test]
    fn test_tags_without_url() {
        let extracted = extract_url_and_tags("just some #thoughts here #later");
        assert_eq!(extracted.url, None);
        assert_eq!(extracted.tags, vec!["thoughts", "later"]);
    }

    #[test]
    fn test_url_glued_to_tag() {
        let extracted = extract_url_and_tags("example.com#tech");
        assert_eq!(extracted.url, Some("example.com".to_string()));
        assert_eq!(extracted.tags, vec!["tech"]);
    }
}
