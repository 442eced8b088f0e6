//! Editor session state shared by UI front ends.
//!
//! [`EditorSession`] is a plain value type owning the editor content, the
//! share tracker, and the browser-style path. It performs no I/O: callers
//! fetch and post over whatever transport they use and feed the outcomes in.
//! That keeps the reconciliation logic testable without any UI toolkit, and
//! means a stale response can simply be dropped by the caller instead of
//! being applied.

use crate::models::snippet::{Language, SnippetBody};
use crate::share::{ShareState, ShareTracker, Snapshot};

/// Default document shown for a fresh, unshared session.
pub const DEFAULT_CODE: &str = r#"<html>
  <head>
    <title>HTML Sample</title>
    <style type="text/css">
      h1 {
        color: #CCA3A3;
      }
    </style>
  </head>
  <body>
    <h1>Heading No.1</h1>
    <input disabled type="button" value="Click me" />
  </body>
</html>"#;

/// Default language for a fresh session.
pub const DEFAULT_LANGUAGE: Language = Language::Html;

/// Client-side editor state: content, share tracker, and current path.
#[derive(Debug, Clone)]
pub struct EditorSession {
    code: String,
    language: Language,
    tracker: ShareTracker,
    path: String,
}

impl EditorSession {
    /// Fresh session with the default document and an inert tracker.
    pub fn fresh() -> Self {
        Self {
            code: DEFAULT_CODE.to_string(),
            language: DEFAULT_LANGUAGE,
            tracker: ShareTracker::inert(),
            path: "/".to_string(),
        }
    }

    /// Build a session from a load attempt for `id`.
    ///
    /// # Arguments
    /// - `id`: The snippet id taken from the URL path.
    /// - `body`: The fetched snippet, or `None` when the fetch failed for any
    ///   reason (missing id, non-200 status, transport error).
    ///
    /// # Returns
    /// A populated, `Clean` session at `/{id}` on success; the fresh session
    /// at the root otherwise (the not-found fallback).
    pub fn from_load(id: &str, body: Option<SnippetBody>) -> Self {
        match body {
            Some(body) => Self {
                code: body.code.clone(),
                language: body.language,
                tracker: ShareTracker::loaded(id.to_string(), Snapshot::from(body)),
                path: format!("/{}", id),
            },
            None => Self::fresh(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Current browser-style path (`/` or `/{id}`).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The id this session is bound to, once shared or loaded.
    pub fn snippet_id(&self) -> Option<&str> {
        self.tracker.snippet_id()
    }

    /// Replace the editor code.
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    /// Replace the editor language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Current share state reconciled against the last snapshot.
    pub fn share_state(&self) -> ShareState {
        self.tracker.state_for(&self.code, self.language)
    }

    /// Whether the share button is actionable.
    pub fn share_enabled(&self) -> bool {
        self.share_state() == ShareState::Dirty
    }

    /// The copy-link URL, shown only when the content is `Clean`.
    pub fn copy_link(&self) -> Option<&str> {
        match self.share_state() {
            ShareState::Clean => Some(&self.path),
            ShareState::Dirty => None,
        }
    }

    /// Current content as the wire payload a share would send.
    pub fn body(&self) -> SnippetBody {
        SnippetBody {
            code: self.code.clone(),
            language: self.language,
        }
    }

    /// Record a confirmed share of the current content under `id`.
    ///
    /// Callers invoke this only after a 200 response; a failed share simply
    /// never calls it, leaving content, tracker, and path untouched.
    pub fn share_succeeded(&mut self, id: String) {
        self.path = format!("/{}", id);
        let snapshot = Snapshot {
            code: self.code.clone(),
            language: self.language,
        };
        self.tracker.record_shared(id, snapshot);
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::fresh()
    }
}
