//! Share-state tracking between the editor and the last persisted snapshot.
//!
//! The tracker decides whether the share button is enabled (`Dirty`) or the
//! copy-link affordance is shown (`Clean`). It only becomes active once a
//! snippet id exists; a fresh, never-shared document has an inert tracker
//! that always reports `Dirty`.

use crate::models::snippet::{Language, SnippetBody};

/// UI-facing share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareState {
    /// Unsaved changes: share enabled, copy-link hidden.
    Dirty,
    /// Content matches the last share: share disabled, copy-link shown.
    Clean,
}

/// The `(code, language)` pair most recently confirmed persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub code: String,
    pub language: Language,
}

impl Snapshot {
    /// Compare against current editor content.
    pub fn matches(&self, code: &str, language: Language) -> bool {
        self.language == language && self.code == code
    }
}

impl From<SnippetBody> for Snapshot {
    fn from(body: SnippetBody) -> Self {
        Self {
            code: body.code,
            language: body.language,
        }
    }
}

/// Tracks the last-shared snapshot for a snippet id, if any.
///
/// The snapshot mutates only through [`ShareTracker::record_shared`], which
/// callers invoke strictly after a successful share response. Failed shares
/// leave the tracker untouched by never calling it.
#[derive(Debug, Clone, Default)]
pub struct ShareTracker {
    snippet_id: Option<String>,
    snapshot: Option<Snapshot>,
}

impl ShareTracker {
    /// Inert tracker for a fresh, never-shared document.
    pub fn inert() -> Self {
        Self::default()
    }

    /// Tracker for a snippet that was just loaded from the server.
    ///
    /// # Arguments
    /// - `snippet_id`: The id from the URL path.
    /// - `snapshot`: The loaded content, which is by definition persisted.
    pub fn loaded(snippet_id: String, snapshot: Snapshot) -> Self {
        Self {
            snippet_id: Some(snippet_id),
            snapshot: Some(snapshot),
        }
    }

    /// Whether the tracker has no snippet id and therefore never reports
    /// `Clean`.
    pub fn is_inert(&self) -> bool {
        self.snippet_id.is_none()
    }

    /// The snippet id this tracker is bound to, when shared or loaded.
    pub fn snippet_id(&self) -> Option<&str> {
        self.snippet_id.as_deref()
    }

    /// Record a successful share of `snapshot` under `snippet_id`.
    ///
    /// From this point the tracker compares edits against the new snapshot.
    pub fn record_shared(&mut self, snippet_id: String, snapshot: Snapshot) {
        self.snippet_id = Some(snippet_id);
        self.snapshot = Some(snapshot);
    }

    /// Reconcile current editor content against the last-shared snapshot.
    ///
    /// # Returns
    /// `Clean` only when an id is present and the content exactly equals the
    /// snapshot; otherwise `Dirty`.
    pub fn state_for(&self, code: &str, language: Language) -> ShareState {
        match (&self.snippet_id, &self.snapshot) {
            (Some(_), Some(snapshot)) if snapshot.matches(code, language) => ShareState::Clean,
            _ => ShareState::Dirty,
        }
    }
}
