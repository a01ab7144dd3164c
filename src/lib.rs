//! Linkeeper: a conversational bookmark keeper
//!
//! This crate implements a chat bot that saves, lists, searches and removes
//! URL bookmarks tagged with hashtags, backed by a small SQLite store.

pub mod bot;
pub mod config;
pub mod extract;
pub mod service;
pub mod storage;
pub mod title;

use thiserror::Error;

/// Main error type for Linkeeper operations
#[derive(Debug, Error)]
pub enum LinkeeperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Telegram API error: {0}")]
    Telegram(String),

    #[error("No bot token provided, set the {0} environment variable")]
    MissingToken(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Linkeeper operations
pub type Result<T> = std::result::Result<T, LinkeeperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use extract::{extract_url_and_tags, Extracted};
pub use service::BookmarkService;
pub use storage::{Bookmark, BookmarkStore, SqliteStore};
pub use title::{HttpTitleFetcher, TitleFetcher};
