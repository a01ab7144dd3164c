//! HTML parser for extracting the page title

use scraper::{Html, Selector};

/// Extracts the trimmed text of the first `<title>` element
///
/// Returns `None` when there is no title element or it is blank.
///
/// # Example
///
/// ```
/// use linkeeper::title::extract_title;
///
/// let html = r#"<html><head><title>Test</title></head><body></body></html>"#;
/// assert_eq!(extract_title(html), Some("Test".to_string()));
/// ```
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}
