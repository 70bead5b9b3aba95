//! postdeck: markdown post loading and rendering for static blogs
//!
//! Posts live in a flat directory as `<slug>.md` files with a YAML
//! front-matter header. This crate lists them newest first and renders a
//! single post's body to HTML for whatever builds the pages.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod service;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{PostDetail, PostId, PostRepository, PostSummary};
use service::{DetailService, ListingService};

/// A blog rooted at a base directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    repository: PostRepository,
}

impl Blog {
    /// Open a blog, reading `_config.yml` from the base directory if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        let repository = PostRepository::new(base_dir.join(&config.posts_dir));

        Ok(Self {
            config,
            base_dir,
            repository,
        })
    }

    /// Read posts from another directory (relative to the base directory)
    pub fn with_posts_dir<P: AsRef<Path>>(mut self, posts_dir: P) -> Self {
        self.repository = PostRepository::new(self.base_dir.join(posts_dir));
        self
    }

    pub fn posts_dir(&self) -> &Path {
        self.repository.posts_dir()
    }

    pub fn repository(&self) -> &PostRepository {
        &self.repository
    }

    /// Every post identifier, for static route enumeration
    pub fn list_identifiers(&self) -> content::Result<Vec<PostId>> {
        self.repository.list_identifiers()
    }

    /// All post summaries, newest first
    pub fn sorted_summaries(&self) -> content::Result<Vec<PostSummary>> {
        ListingService::new(&self.repository).sorted_summaries()
    }

    /// One post with its rendered body
    pub async fn post_detail(&self, slug: &str) -> content::Result<PostDetail> {
        DetailService::new(&self.repository).post_detail(slug).await
    }
}
