//! Page title lookup for newly saved bookmarks
//!
//! This module contains:
//! - The `TitleFetcher` seam used by the bookmark service
//! - An HTTP implementation built on reqwest
//! - HTML `<title>` extraction

mod fetcher;
mod parser;

pub use fetcher::{build_http_client, fetch_url, to_absolute_url, FetchResult, HttpTitleFetcher};
pub use parser::extract_title;

use async_trait::async_trait;

/// Looks up the title of a page
///
/// Implementations never fail: every network, status, or parse problem is
/// reported as an absent title.
#[async_trait]
pub trait TitleFetcher {
    async fn fetch_title(&self, url: &str) -> Option<String>;
}

/// Fetcher that never looks anything up
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTitle;

#[async_trait]
impl TitleFetcher for NoTitle {
    async fn fetch_title(&self, _url: &str) -> Option<String> {
        None
    }
}
