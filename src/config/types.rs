use serde::Deserialize;

/// Main configuration structure for Linkeeper
///
/// Every section is optional; a missing file or section falls back to the
/// defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub fetcher: FetcherConfig,
    pub telegram: TelegramConfig,
}

/// Bookmark database configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,

    /// Character joining tags into the stored tag string
    #[serde(rename = "tag-delimiter")]
    pub tag_delimiter: String,
}

impl StorageConfig {
    /// Returns the delimiter as a char
    ///
    /// Validation guarantees exactly one character; the fallback only covers
    /// configs built by hand without validation.
    pub fn delimiter(&self) -> char {
        self.tag_delimiter.chars().next().unwrap_or(DEFAULT_TAG_DELIMITER)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: "bookmarks.db".to_string(),
            tag_delimiter: DEFAULT_TAG_DELIMITER.to_string(),
        }
    }
}

/// Title fetcher configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Total request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// User agent sent with title requests
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            user_agent: format!("linkeeper/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Telegram transport configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    /// Base URL of the Bot API
    #[serde(rename = "api-base-url")]
    pub api_base_url: String,

    /// Long-poll timeout passed to getUpdates, in seconds
    #[serde(rename = "poll-timeout-secs")]
    pub poll_timeout_secs: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.telegram.org".to_string(),
            poll_timeout_secs: 30,
        }
    }
}

/// Delimiter used when none is configured
pub const DEFAULT_TAG_DELIMITER: char = '|';
