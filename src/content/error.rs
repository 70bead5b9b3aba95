//! Errors raised while loading and rendering posts

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

#[derive(Debug, Error)]
pub enum ContentError {
    /// The header block is unbalanced or not a YAML mapping
    #[error("Malformed front-matter in {path:?}: {reason}")]
    MalformedFrontMatter { path: PathBuf, reason: String },

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Failed to render post {slug}: {reason}")]
    Render { slug: String, reason: String },

    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the requested post does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PostNotFound(_))
    }
}
