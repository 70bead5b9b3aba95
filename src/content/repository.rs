//! Post repository - reads posts from the posts directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::{ContentError, Result};
use super::{
    MarkdownRenderer, PostDetail, PostId, PostMetadata, PostSummary, MARKDOWN_EXTENSION,
};

/// Reads posts from a flat directory of `<slug>.md` files.
///
/// Nothing is cached: every call goes back to the filesystem.
#[derive(Debug, Clone)]
pub struct PostRepository {
    posts_dir: PathBuf,
    renderer: MarkdownRenderer,
}

impl PostRepository {
    pub fn new<P: AsRef<Path>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
            renderer: MarkdownRenderer::new(),
        }
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// List the identifier of every post file.
    ///
    /// Entries come back in file name order so repeated calls agree; callers
    /// should not read any other meaning into it.
    pub fn list_identifiers(&self) -> Result<Vec<PostId>> {
        let mut ids = Vec::new();

        for entry in WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.posts_dir).to_path_buf();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("filesystem loop"));
                ContentError::io(path, source)
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(file_name) = entry.file_name().to_str() else {
                tracing::warn!("Skipping non UTF-8 file name {:?}", entry.path());
                continue;
            };

            match PostId::from_file_name(file_name) {
                Some(id) => ids.push(id),
                None if file_name.ends_with(MARKDOWN_EXTENSION) => {
                    tracing::warn!("Skipping {:?}: not a usable post identifier", entry.path());
                }
                None => {}
            }
        }

        tracing::debug!("Found {} posts in {:?}", ids.len(), self.posts_dir);
        Ok(ids)
    }

    /// Load a post's metadata, discarding the body
    pub fn load_summary(&self, slug: &str) -> Result<PostSummary> {
        let (id, path, content) = self.read_post(slug)?;
        let (metadata, _) = parse_front_matter(&path, &content)?;
        Ok(PostSummary::new(id, metadata))
    }

    /// Load a post's metadata and render its body
    pub async fn load_detail(&self, slug: &str) -> Result<PostDetail> {
        let (id, path, content) = self.read_post(slug)?;
        let (metadata, body) = parse_front_matter(&path, &content)?;

        tracing::debug!("Rendering {}", id);
        let content_html = self
            .renderer
            .render(body)
            .await
            .map_err(|e| ContentError::Render {
                slug: id.to_string(),
                reason: e.to_string(),
            })?;

        Ok(PostDetail {
            summary: PostSummary::new(id, metadata),
            content_html,
        })
    }

    /// Load the summary of every post, in enumeration order
    pub fn list_all_summaries(&self) -> Result<Vec<PostSummary>> {
        self.list_identifiers()?
            .iter()
            .map(|id| self.load_summary(id.as_str()))
            .collect()
    }

    fn read_post(&self, slug: &str) -> Result<(PostId, PathBuf, String)> {
        let id = PostId::parse(slug).ok_or_else(|| ContentError::PostNotFound(slug.to_string()))?;
        let path = self.posts_dir.join(id.file_name());

        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(ContentError::PostNotFound(slug.to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ContentError::PostNotFound(slug.to_string()))
            }
            Err(e) => return Err(ContentError::io(path, e)),
        }

        tracing::debug!("Reading {:?}", path);
        let content = fs::read_to_string(&path).map_err(|e| ContentError::io(&path, e))?;
        Ok((id, path, content))
    }
}

fn parse_front_matter<'c>(path: &Path, content: &'c str) -> Result<(PostMetadata, &'c str)> {
    PostMetadata::parse(content).map_err(|e| ContentError::MalformedFrontMatter {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
