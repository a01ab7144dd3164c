//! Bookmark service: the operations behind every bot command
//!
//! Each operation comes in two forms:
//! - A typed form (`save`, `find`, `bookmarks`, `delete`) returning a
//!   `ServiceResult` so callers can branch on what went wrong
//! - A message form (`submit`, `search`, `list_all`, `remove`) that never
//!   fails and renders the user-facing replies

mod bookmarks;
mod format;
pub mod messages;

pub use bookmarks::BookmarkService;
pub use format::{format_list_line, format_search_line};

use crate::storage::{Bookmark, StorageError};
use thiserror::Error;

/// Errors surfaced by the typed service operations
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no URL found in input")]
    MissingUrl,

    #[error("no search term or tags given")]
    MissingTerm,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// Whether the error comes from the user's input rather than the store
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::MissingUrl | Self::MissingTerm)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// What happened when a bookmark was saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The URL was new
    Added(Bookmark),

    /// A bookmark with the same URL existed; it was deleted and this one
    /// inserted under a fresh id
    Replaced { previous_id: i64, bookmark: Bookmark },
}

impl SaveOutcome {
    pub fn bookmark(&self) -> &Bookmark {
        match self {
            Self::Added(bookmark) => bookmark,
            Self::Replaced { bookmark, .. } => bookmark,
        }
    }
}
