//! Core domain library for CodeShare (config, storage, models, share state).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants.
pub mod constants;
/// Database access layer.
pub mod db;
/// Application error types (storage/domain).
pub mod error;
/// Data models for API requests and persistence.
pub mod models;
/// Client-side editor session state.
pub mod session;
/// Share-state tracking between editor content and last-shared snapshot.
pub mod share;
/// Snippet identifier generation.
pub mod slug;

pub use config::Config;
pub use constants::{DEFAULT_CLI_SERVER_URL, DEFAULT_MAX_SNIPPET_SIZE, DEFAULT_PORT};
pub use db::Database;
pub use error::AppError;
pub use models::snippet::{Language, Snippet, SnippetBody};
pub use session::EditorSession;
pub use share::{ShareState, ShareTracker, Snapshot};
