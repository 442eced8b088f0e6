//! Snippet storage operations backed by redb.

use crate::{db::tables::SNIPPETS, error::AppError, models::snippet::Snippet};
use redb::{ReadableDatabase, ReadableTable};
use std::sync::Arc;

/// Accessor for the snippet table.
pub struct SnippetDb {
    db: Arc<redb::Database>,
}

impl SnippetDb {
    /// Initialize the snippet table if it does not exist yet.
    ///
    /// # Returns
    /// A new [`SnippetDb`] accessor bound to `db`.
    ///
    /// # Errors
    /// Returns an error when redb transaction/table initialization fails.
    pub fn new(db: Arc<redb::Database>) -> Result<Self, AppError> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(SNIPPETS)?;
        write_txn.commit()?;
        Ok(Self { db })
    }

    /// Insert a new snippet row.
    ///
    /// Snippet ids are assigned once; inserting an id that already exists is
    /// a conflict, not an update.
    ///
    /// # Arguments
    /// - `snippet`: Snippet row to persist.
    ///
    /// # Returns
    /// `Ok(())` when the insert commits.
    ///
    /// # Errors
    /// Returns [`AppError::Conflict`] when the id already exists, or a
    /// storage/serialization error otherwise.
    pub fn create(&self, snippet: &Snippet) -> Result<(), AppError> {
        let encoded = bincode::serialize(snippet)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut snippets = write_txn.open_table(SNIPPETS)?;
            if snippets.get(snippet.id.as_str())?.is_some() {
                return Err(AppError::Conflict(format!(
                    "Snippet id '{}' already exists",
                    snippet.id
                )));
            }
            snippets.insert(snippet.id.as_str(), encoded.as_slice())?;
        }
        write_txn.commit()?;

        tracing::debug!(id = %snippet.id, "Stored snippet");
        Ok(())
    }

    /// Fetch a snippet by id.
    ///
    /// # Returns
    /// `Ok(Some(snippet))` when found, `Ok(None)` when missing.
    ///
    /// # Errors
    /// Returns an error when storage access or deserialization fails.
    pub fn get(&self, id: &str) -> Result<Option<Snippet>, AppError> {
        let read_txn = self.db.begin_read()?;
        let snippets = read_txn.open_table(SNIPPETS)?;
        match snippets.get(id)? {
            Some(value) => Ok(Some(bincode::deserialize(value.value())?)),
            None => Ok(None),
        }
    }
}
