//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the BookmarkStore trait.

use crate::storage::schema::initialize_schema;
use crate::storage::traits::{BookmarkStore, StorageResult};
use crate::storage::{Bookmark, NewBookmark};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};

const SELECT_COLUMNS: &str = "SELECT id, url, title, description, tags FROM bookmarks";

/// SQLite storage backend
///
/// Holds only the database path; each operation opens its own connection and
/// drops it when done.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Opens the database at `path`, creating the file and schema if needed
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStore)` - Successfully opened/created database
    /// * `Err(StorageError)` - Failed to open database
    pub fn open(path: &Path) -> StorageResult<Self> {
        let store = Self {
            path: path.to_path_buf(),
        };

        let conn = store.connect()?;
        initialize_schema(&conn)?;

        Ok(store)
    }

    /// Path of the underlying database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> StorageResult<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch("PRAGMA synchronous = NORMAL;")?;
        Ok(conn)
    }
}

fn bookmark_from_row(row: &Row<'_>) -> rusqlite::Result<Bookmark> {
    Ok(Bookmark {
        id: row.get(0)?,
        url: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        tags: row.get(4)?,
    })
}

/// Wraps `value` as a `%value%` LIKE pattern, escaping `%`, `_` and `\`
fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl BookmarkStore for SqliteStore {
    fn insert(&self, bookmark: &NewBookmark) -> StorageResult<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO bookmarks (url, title, description, tags) VALUES (?1, ?2, ?3, ?4)",
            params![
                bookmark.url,
                bookmark.title,
                bookmark.description,
                bookmark.tags
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn delete_by_id(&self, id: i64) -> StorageResult<()> {
        let conn = self.connect()?;
        let deleted = conn.execute("DELETE FROM bookmarks WHERE id = ?1", params![id])?;
        tracing::debug!("Deleted {} row(s) for bookmark id {}", deleted, id);
        Ok(())
    }

    fn list_all(&self) -> StorageResult<Vec<Bookmark>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))?;

        let rows = stmt.query_map([], bookmark_from_row)?;

        let mut bookmarks = Vec::new();
        for row in rows {
            bookmarks.push(row?);
        }

        Ok(bookmarks)
    }

    fn find_by_exact_url(&self, url: &str) -> StorageResult<Option<Bookmark>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "{} WHERE url = ?1 ORDER BY id LIMIT 1",
            SELECT_COLUMNS
        ))?;

        let bookmark = stmt.query_row(params![url], bookmark_from_row).optional()?;

        Ok(bookmark)
    }

    fn find_by_pattern(
        &self,
        term: Option<&str>,
        tags: &[String],
    ) -> StorageResult<Vec<Bookmark>> {
        let mut clauses = Vec::new();
        let mut values = Vec::new();

        if let Some(term) = term {
            values.push(like_pattern(term));
            let n = values.len();
            clauses.push(format!("url LIKE ?{n} ESCAPE '\\'"));
            clauses.push(format!("title LIKE ?{n} ESCAPE '\\'"));
            clauses.push(format!("description LIKE ?{n} ESCAPE '\\'"));
        }

        for tag in tags {
            values.push(like_pattern(tag));
            clauses.push(format!("tags LIKE ?{} ESCAPE '\\'", values.len()));
        }

        if clauses.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "{} WHERE {} ORDER BY id",
            SELECT_COLUMNS,
            clauses.join(" OR ")
        );

        let conn = self.connect()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values.iter()), bookmark_from_row)?;

        let mut bookmarks = Vec::new();
        for row in rows {
            bookmarks.push(row?);
        }

        Ok(bookmarks)
    }
}
