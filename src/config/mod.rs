//! Configuration module for Linkeeper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use linkeeper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("linkeeper.toml")).unwrap();
//! println!("Bookmarks live in: {}", config.storage.database_path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetcherConfig, StorageConfig, TelegramConfig, DEFAULT_TAG_DELIMITER,
};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};

use crate::LinkeeperError;

/// Environment variable holding the Telegram bot token
pub const TOKEN_ENV_VAR: &str = "TG_TOKEN";

/// Checks the bot token read from [`TOKEN_ENV_VAR`]
///
/// An unset or blank token is fatal: the bot cannot start without one.
pub fn bot_token(value: Option<String>) -> Result<String, LinkeeperError> {
    value
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or(LinkeeperError::MissingToken(TOKEN_ENV_VAR))
}
