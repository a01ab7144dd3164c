//! Bookmark service implementation

use crate::extract::{extract_url_and_tags, join_tags, strip_tags};
use crate::service::format::{format_list_line, format_search_line};
use crate::service::{messages, SaveOutcome, ServiceError, ServiceResult};
use crate::storage::{Bookmark, BookmarkStore, NewBookmark};
use crate::title::TitleFetcher;

/// Orchestrates extraction, title lookup and storage
pub struct BookmarkService<S, F> {
    store: S,
    fetcher: F,
    delimiter: char,
}

impl<S, F> BookmarkService<S, F>
where
    S: BookmarkStore,
    F: TitleFetcher,
{
    /// Creates a service over `store`, joining tags with `delimiter`
    pub fn new(store: S, fetcher: F, delimiter: char) -> Self {
        Self {
            store,
            fetcher,
            delimiter,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saves the first URL in `text` with the text's hashtags
    ///
    /// An existing bookmark with the exact same URL is deleted first and the
    /// new one inserted under a fresh id.
    pub async fn save(&self, text: &str) -> ServiceResult<SaveOutcome> {
        let extracted = extract_url_and_tags(text);
        let url = extracted.url.ok_or(ServiceError::MissingUrl)?;
        let tags = join_tags(&extracted.tags, self.delimiter);

        let title = self.fetcher.fetch_title(&url).await;
        tracing::info!("URL detected: {} (title: {:?})", url, title);

        let existing = self.store.find_by_exact_url(&url)?;
        if let Some(existing) = &existing {
            tracing::info!(
                "Bookmark already exists: {} {} {:?}",
                existing.id,
                existing.url,
                existing.tags
            );
            self.store.delete_by_id(existing.id)?;
        }

        let new_bookmark = NewBookmark::new(url).with_title(title).with_tags(tags);
        let id = self.store.insert(&new_bookmark)?;
        tracing::info!(
            "Saved bookmark {} with url {} and tags {:?}",
            id,
            new_bookmark.url,
            new_bookmark.tags
        );

        let bookmark = Bookmark {
            id,
            url: new_bookmark.url,
            title: new_bookmark.title,
            description: new_bookmark.description,
            tags: new_bookmark.tags,
        };

        Ok(match existing {
            Some(previous) => SaveOutcome::Replaced {
                previous_id: previous.id,
                bookmark,
            },
            None => SaveOutcome::Added(bookmark),
        })
    }

    /// Saves a bookmark and returns the confirmation to show the user
    pub async fn submit(&self, text: &str) -> String {
        match self.save(text).await {
            Ok(SaveOutcome::Added(_)) => messages::ADDED.to_string(),
            Ok(SaveOutcome::Replaced { .. }) => messages::UPDATED.to_string(),
            Err(e) if e.is_user_error() => {
                tracing::debug!("Nothing to add: {}", e);
                messages::NO_URL.to_string()
            }
            Err(e) => {
                tracing::error!("Failed to add bookmark: {}", e);
                messages::ADD_FAILED.to_string()
            }
        }
    }

    /// Finds bookmarks matching the search text
    ///
    /// The term is the URL found in `text`, or else the text with its hashtags
    /// removed. Hashtags become tag filters. A row matches on the term or on
    /// any one tag.
    pub fn find(&self, text: &str) -> ServiceResult<Vec<Bookmark>> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ServiceError::MissingTerm);
        }

        let extracted = extract_url_and_tags(text);
        let term = extracted.url.unwrap_or_else(|| strip_tags(text));
        let term = if term.is_empty() { None } else { Some(term) };

        if term.is_none() && extracted.tags.is_empty() {
            return Err(ServiceError::MissingTerm);
        }

        tracing::debug!("Searching for {:?} with tags {:?}", term, extracted.tags);
        let found = self.store.find_by_pattern(term.as_deref(), &extracted.tags)?;

        Ok(found)
    }

    /// Searches and renders one line per match
    pub fn search(&self, text: &str) -> Vec<String> {
        match self.find(text) {
            Ok(found) if found.is_empty() => vec![messages::NO_MATCHES.to_string()],
            Ok(found) => found
                .iter()
                .map(|bookmark| format_search_line(bookmark, self.delimiter))
                .collect(),
            Err(e) if e.is_user_error() => {
                tracing::debug!("Nothing to search for: {}", e);
                vec![messages::NO_SEARCH_TERM.to_string()]
            }
            Err(e) => {
                tracing::error!("Failed to search bookmarks: {}", e);
                vec![messages::SEARCH_FAILED.to_string()]
            }
        }
    }

    /// Returns every stored bookmark in id order
    pub fn bookmarks(&self) -> ServiceResult<Vec<Bookmark>> {
        Ok(self.store.list_all()?)
    }

    /// Lists all bookmarks, one line each
    pub fn list_all(&self) -> Vec<String> {
        match self.bookmarks() {
            Ok(all) if all.is_empty() => vec![messages::NO_BOOKMARKS.to_string()],
            Ok(all) => all
                .iter()
                .map(|bookmark| format_list_line(bookmark, self.delimiter))
                .collect(),
            Err(e) => {
                tracing::error!("Failed to list bookmarks: {}", e);
                vec![messages::LIST_FAILED.to_string()]
            }
        }
    }

    /// Deletes a bookmark by id; a missing id is not an error
    pub fn delete(&self, id: i64) -> ServiceResult<()> {
        tracing::info!("Removing bookmark with id {}", id);
        self.store.delete_by_id(id)?;
        Ok(())
    }

    /// Removes a bookmark and returns the confirmation
    ///
    /// The confirmation is the same whether or not the id existed.
    pub fn remove(&self, id: i64) -> String {
        match self.delete(id) {
            Ok(()) => messages::removed(id),
            Err(e) => {
                tracing::error!("Failed to remove bookmark {}: {}", id, e);
                messages::REMOVE_FAILED.to_string()
            }
        }
    }
}
