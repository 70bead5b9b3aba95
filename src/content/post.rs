//! Post identifiers, summaries and details

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

use super::PostMetadata;

/// Extension every post file carries
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Filename stem of a post, used as lookup key and URL segment.
///
/// Always satisfies `id + ".md" == file name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Derive the identifier from a post file name like `hello.md`
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(MARKDOWN_EXTENSION)?;
        Self::parse(stem)
    }

    /// Validate an identifier supplied by a caller.
    ///
    /// Rejects anything that could resolve outside the posts directory or
    /// that still carries the extension.
    pub fn parse(slug: &str) -> Option<Self> {
        let invalid = slug.is_empty()
            || slug == "."
            || slug == ".."
            || slug.contains(['/', '\\', '\0'])
            || slug.ends_with(MARKDOWN_EXTENSION);
        if invalid {
            None
        } else {
            Some(Self(slug.to_string()))
        }
    }

    /// Name of the file this identifier was derived from
    pub fn file_name(&self) -> String {
        format!("{}{}", self.0, MARKDOWN_EXTENSION)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PostId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Metadata-only view of a post, used for listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSummary {
    pub slug: PostId,

    #[serde(flatten)]
    pub metadata: PostMetadata,
}

impl PostSummary {
    pub fn new(slug: PostId, metadata: PostMetadata) -> Self {
        Self { slug, metadata }
    }

    pub fn title(&self) -> Option<&str> {
        self.metadata.title()
    }

    /// Publication timestamp, if the `date` field parses
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        self.metadata.published_at()
    }
}

/// A post with its rendered body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub summary: PostSummary,

    /// Rendered HTML content
    pub content_html: String,
}

impl PostDetail {
    pub fn slug(&self) -> &PostId {
        &self.summary.slug
    }

    pub fn metadata(&self) -> &PostMetadata {
        &self.summary.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trips_to_file_name() {
        for name in ["hello.md", "2024-01-01-new-year.md", "a.b.md", "日本語.md"] {
            let id = PostId::from_file_name(name).unwrap();
            assert_eq!(id.file_name(), name);
            assert!(!id.as_str().ends_with(".md"));
        }
    }

    #[test]
    fn test_non_post_file_names() {
        assert_eq!(PostId::from_file_name("notes.txt"), None);
        assert_eq!(PostId::from_file_name("post.markdown"), None);
        assert_eq!(PostId::from_file_name(".md"), None);
        assert_eq!(PostId::from_file_name("double.md.md"), None);
    }

    #[test]
    fn test_parse_rejects_paths() {
        assert!(PostId::parse("hello").is_some());
        assert!(PostId::parse("").is_none());
        assert!(PostId::parse("..").is_none());
        assert!(PostId::parse("../secret").is_none());
        assert!(PostId::parse("nested/post").is_none());
        assert!(PostId::parse("hello.md").is_none());
    }

    #[test]
    fn test_summary_serializes_flat() {
        let (metadata, _) =
            PostMetadata::parse("---\ntitle: First\ndate: 2024-01-01\ncover: a.png\n---\n")
                .unwrap();
        let summary = PostSummary::new(PostId::parse("a").unwrap(), metadata);
        let detail = PostDetail {
            summary,
            content_html: "<p>hi</p>\n".to_string(),
        };

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "slug": "a",
                "title": "First",
                "date": "2024-01-01",
                "cover": "a.png",
                "content_html": "<p>hi</p>\n",
            })
        );
    }
}
