//! Snippet data models and the language tag enum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language tag attached to a snippet.
///
/// This is deliberately a closed enum rather than an open string: the server
/// and clients agree on the set of tags the editor can highlight. To support
/// a new language, add a variant here plus its tag arm in [`Language::as_str`]
/// and [`Language::from_str`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Html,
    Javascript,
    Css,
    Typescript,
    Json,
}

impl Language {
    /// Wire/display tag for this language.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Html => "html",
            Language::Javascript => "javascript",
            Language::Css => "css",
            Language::Typescript => "typescript",
            Language::Json => "json",
        }
    }

    /// All supported language tags, in display order.
    pub fn all() -> &'static [Language] {
        &[
            Language::Html,
            Language::Javascript,
            Language::Css,
            Language::Typescript,
            Language::Json,
        ]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language tag '{}'", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Language::Html),
            "javascript" => Ok(Language::Javascript),
            "css" => Ok(Language::Css),
            "typescript" => Ok(Language::Typescript),
            "json" => Ok(Language::Json),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Snippet row stored in the database.
///
/// The id is assigned once at creation and never changes; snippets are not
/// updated or deleted after their first successful share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub code: String,
    pub language: Language,
    pub created_at: DateTime<Utc>,
}

/// Wire payload for both the save request body and the fetch response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetBody {
    pub code: String,
    pub language: Language,
}

impl Snippet {
    /// Create a new snippet with the given pre-generated id.
    ///
    /// # Arguments
    /// - `id`: Generator-assigned identifier (see [`crate::slug`]).
    /// - `body`: Code and language pair to persist.
    ///
    /// # Returns
    /// A new [`Snippet`] stamped with the current time.
    pub fn new(id: String, body: SnippetBody) -> Self {
        Self {
            id,
            code: body.code,
            language: body.language,
            created_at: Utc::now(),
        }
    }
}

impl From<&Snippet> for SnippetBody {
    fn from(value: &Snippet) -> Self {
        Self {
            code: value.code.clone(),
            language: value.language,
        }
    }
}
