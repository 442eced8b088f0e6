//! HTTP request handlers.

/// Snippet endpoints.
pub mod snippet;
