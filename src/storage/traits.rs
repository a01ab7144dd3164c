//! Storage traits and error types
//!
//! This module defines the trait interface for storage backends and
//! associated error types.

use crate::storage::{Bookmark, NewBookmark};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for bookmark storage backends
///
/// Every call is independent; no operation relies on state left behind by a
/// previous one other than the persisted rows themselves.
pub trait BookmarkStore {
    /// Inserts a bookmark and returns the id assigned to it
    fn insert(&self, bookmark: &NewBookmark) -> StorageResult<i64>;

    /// Deletes the bookmark with the given id
    ///
    /// Deleting an id that does not exist is not an error.
    fn delete_by_id(&self, id: i64) -> StorageResult<()>;

    /// Returns all bookmarks in id order
    fn list_all(&self) -> StorageResult<Vec<Bookmark>>;

    /// Finds the bookmark whose url equals `url` exactly (case-sensitive)
    fn find_by_exact_url(&self, url: &str) -> StorageResult<Option<Bookmark>>;

    /// Finds bookmarks matching a free-text term or any of the given tags
    ///
    /// A row qualifies when `term` is a substring of its url, title or
    /// description, or when any tag is a substring of its stored tags.
    /// With neither a term nor tags the result is empty.
    fn find_by_pattern(&self, term: Option<&str>, tags: &[String])
        -> StorageResult<Vec<Bookmark>>;
}
