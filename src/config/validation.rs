use crate::config::types::{Config, FetcherConfig, StorageConfig, TelegramConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_storage_config(&config.storage)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_telegram_config(&config.telegram)?;
    Ok(())
}

/// Validates storage configuration
fn validate_storage_config(config: &StorageConfig) -> Result<(), ConfigError> {
    if config.database_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty".to_string(),
        ));
    }

    validate_delimiter(&config.tag_delimiter)
}

/// Validates the tag delimiter
///
/// Tags are runs of word characters, so any non-word, non-space character
/// can never appear inside one.
fn validate_delimiter(delimiter: &str) -> Result<(), ConfigError> {
    let mut chars = delimiter.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(ConfigError::Validation(format!(
                "tag_delimiter must be exactly one character, got '{}'",
                delimiter
            )))
        }
    };

    if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
        return Err(ConfigError::Validation(format!(
            "tag_delimiter cannot be a word character or whitespace, got '{}'",
            delimiter
        )));
    }

    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > 60 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 60, got {}",
            config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates telegram configuration
fn validate_telegram_config(config: &TelegramConfig) -> Result<(), ConfigError> {
    if config.poll_timeout_secs > 50 {
        return Err(ConfigError::Validation(format!(
            "poll_timeout_secs must be at most 50, got {}",
            config.poll_timeout_secs
        )));
    }

    Url::parse(&config.api_base_url)
        .map_err(|e| ConfigError::Validation(format!("Invalid api_base_url: {}", e)))?;

    Ok(())
}
