//! Data models shared between storage, server, and clients.

/// Snippet rows and wire payloads.
pub mod snippet;
