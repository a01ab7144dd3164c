//! HTTP fetcher implementation
//!
//! This module handles the single HTTP request made per saved bookmark:
//! - Building an HTTP client with a user agent and an explicit timeout
//! - Turning scheme-less bookmark URLs into absolute ones
//! - GET requests and error classification

use crate::config::FetcherConfig;
use crate::title::parser::extract_title;
use crate::title::TitleFetcher;
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched an HTML page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Page is not HTML (Content-Type mismatch)
    ContentMismatch {
        /// The actual Content-Type received
        content_type: String,
    },

    /// Non-success HTTP status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use linkeeper::config::FetcherConfig;
/// use linkeeper::title::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    let timeout = Duration::from_secs(config.timeout_secs);

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(timeout)
        .connect_timeout(timeout)
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Turns a bookmark URL into an absolute http(s) URL
///
/// Bookmarks are often saved without a scheme (`example.com`); those are
/// fetched over https.
pub fn to_absolute_url(url: &str) -> Result<Url, url::ParseError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Url::parse(url)
    } else {
        Url::parse(&format!("https://{}", url))
    }
}

/// Fetches a URL and classifies the outcome
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The absolute URL to fetch
///
/// # Returns
///
/// A FetchResult indicating success or the type of failure
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                e.to_string()
            };
            return FetchResult::NetworkError { error };
        }
    };

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    // A missing Content-Type is given the benefit of the doubt
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.is_empty() && !content_type.contains("html") {
        return FetchResult::ContentMismatch { content_type };
    }

    match response.text().await {
        Ok(body) => FetchResult::Success {
            final_url,
            status_code: status.as_u16(),
            body,
        },
        Err(e) => FetchResult::NetworkError {
            error: e.to_string(),
        },
    }
}

/// Title fetcher backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpTitleFetcher {
    client: Client,
}

impl HttpTitleFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TitleFetcher for HttpTitleFetcher {
    async fn fetch_title(&self, url: &str) -> Option<String> {
        let absolute = match to_absolute_url(url) {
            Ok(absolute) => absolute,
            Err(e) => {
                tracing::warn!("Cannot fetch title for {}: {}", url, e);
                return None;
            }
        };

        match fetch_url(&self.client, absolute.as_str()).await {
            FetchResult::Success {
                final_url, body, ..
            } => {
                let title = extract_title(&body);
                tracing::debug!("Fetched {} (title: {:?})", final_url, title);
                title
            }
            FetchResult::ContentMismatch { content_type } => {
                tracing::debug!("Skipping title for {}: content type {}", url, content_type);
                None
            }
            FetchResult::HttpError { status_code } => {
                tracing::warn!("Failed to fetch page {}: HTTP {}", url, status_code);
                None
            }
            FetchResult::NetworkError { error } => {
                tracing::warn!("Request for {} failed: {}", url, error);
                None
            }
        }
    }
}
