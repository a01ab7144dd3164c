//! Storage module for persisting bookmarks
//!
//! This module handles all database operations, including:
//! - SQLite database initialization and schema management
//! - Bookmark insertion and deletion by id
//! - Exact URL lookup and substring search over text fields and tags

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStore;
pub use traits::{BookmarkStore, StorageError, StorageResult};

use std::path::Path;

/// Opens (creating if needed) the bookmark database at `path`
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file
///
/// # Returns
///
/// * `Ok(SqliteStore)` - Store with an initialized schema
/// * `Err(StorageError)` - Failed to open the database
pub fn open_store(path: &Path) -> StorageResult<SqliteStore> {
    let store = SqliteStore::open(path)?;
    tracing::debug!("Using database: {}", path.display());
    Ok(store)
}

/// A bookmark row as stored in the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub id: i64,
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Tags joined with the configured delimiter, `None` when untagged
    pub tags: Option<String>,
}

/// A bookmark that has not been assigned an id yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBookmark {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
}

impl NewBookmark {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_tags(mut self, tags: Option<String>) -> Self {
        self.tags = tags;
        self
    }
}
