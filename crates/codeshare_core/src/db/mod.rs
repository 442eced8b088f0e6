//! Database layer for CodeShare.

/// Snippet storage helpers.
pub mod snippet;
/// redb table definitions.
pub mod tables;

use crate::error::AppError;
use std::path::Path;
use std::sync::Arc;


/// Database handle with access to snippet storage.
pub struct Database {
    pub db: Arc<redb::Database>,
    pub snippets: snippet::SnippetDb,
}

impl Database {
    /// Open (or create) the database under the given directory path.
    ///
    /// # Arguments
    /// - `path`: Directory that holds the redb data file.
    ///
    /// # Returns
    /// A fully initialized [`Database`].
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, redb cannot open
    /// the data file, or table initialization fails.
    pub fn new(path: &str) -> Result<Self, AppError> {
        let dir = Path::new(path);
        std::fs::create_dir_all(dir).map_err(|err| {
            AppError::StorageMessage(format!(
                "Failed to create database directory '{}': {}",
                dir.display(),
                err
            ))
        })?;

        let data_file = dir.join(tables::REDB_FILE_NAME);
        let db = Arc::new(redb::Database::create(&data_file)?);
        let snippets = snippet::SnippetDb::new(db.clone())?;

        tracing::debug!("Opened snippet database at {}", data_file.display());
        Ok(Self { db, snippets })
    }
}
