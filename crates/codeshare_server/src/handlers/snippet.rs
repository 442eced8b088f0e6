//! Snippet HTTP handlers.

use crate::{error::HttpError, AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use codeshare_core::models::snippet::{Snippet, SnippetBody};
use codeshare_core::{slug, AppError};

/// Fetch a snippet by id.
///
/// # Arguments
/// - `state`: Application state.
/// - `id`: Snippet identifier from the path.
///
/// # Returns
/// The stored `{code, language}` pair as JSON.
///
/// # Errors
/// Returns 404 when the id is unknown.
pub async fn get_snippet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SnippetBody>, HttpError> {
    let snippet = state.db.snippets.get(&id)?.ok_or(AppError::NotFound)?;
    Ok(Json(SnippetBody::from(&snippet)))
}

/// Persist a snippet under a client-generated id.
///
/// Ids are write-once: posting to an existing id is a conflict, never an
/// update.
///
/// # Arguments
/// - `state`: Application state.
/// - `id`: Snippet identifier from the path.
/// - `body`: Code and language payload.
///
/// # Returns
/// The stored `{code, language}` pair as JSON.
///
/// # Errors
/// Returns 400 for invalid ids or oversized code, 409 for an id that is
/// already taken.
pub async fn save_snippet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SnippetBody>,
) -> Result<Json<SnippetBody>, HttpError> {
    if !slug::is_valid_snippet_id(&id) {
        return Err(AppError::BadRequest(format!(
            "Snippet id '{}' is not a valid URL path segment",
            id
        ))
        .into());
    }

    if body.code.len() > state.config.max_snippet_size {
        return Err(AppError::BadRequest(format!(
            "Snippet size exceeds maximum of {} bytes",
            state.config.max_snippet_size
        ))
        .into());
    }

    let snippet = Snippet::new(id, body);
    state.db.snippets.create(&snippet)?;

    tracing::info!(id = %snippet.id, language = %snippet.language, "Snippet shared");
    Ok(Json(SnippetBody::from(&snippet)))
}
