#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Glossa resource service.
//!
//! The web UI only consumes these payloads; ownership of resource data stays
//! with the service, so every type here is treated as immutable once decoded.
use serde::{Deserialize, Serialize};

/// RFC9457-compatible problem document surfaced on validation/runtime errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
}

/// A single translatable string resource as listed by the resource service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Resource {
    /// Resource key, unique within one listing.
    pub key: String,
    /// Display name of the last editor.
    pub editor: String,
    /// Source-language text.
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Translated text, absent until someone translates the resource.
    pub translation: Option<String>,
}

impl Resource {
    /// Build an untranslated resource.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        editor: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            editor: editor.into(),
            source: source.into(),
            translation: None,
        }
    }

    /// Attach a translation to the resource.
    #[must_use]
    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    /// Whether a non-blank translation is present.
    #[must_use]
    pub fn is_translated(&self) -> bool {
        self.translation
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty())
    }
}
