//! Core data rows produced by the extraction pipeline.

use serde::{Deserialize, Serialize};

/// A file handed over by the upload collaborator.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original filename; the per-file identifier in reports.
    pub name: String,

    /// Raw PDF bytes.
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Create an uploaded file from a name and its raw bytes.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), bytes }
    }
}

/// One (article, author) pair extracted from a paper.
///
/// Rows share a title when a paper has multiple authors. Fields carry what the
/// model returned verbatim; nothing is inferred or repaired here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRow {
    /// Article title (Portuguese variant preferred when both exist).
    pub title: String,

    /// One author name.
    pub author: String,

    /// The author's e-mail, or empty when the article lists none.
    #[serde(default)]
    pub email: String,
}

impl ArticleRow {
    /// Create a row from its three fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self { title: title.into(), author: author.into(), email: email.into() }
    }

    /// Whether the article listed an e-mail for this author.
    #[must_use]
    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }
}
