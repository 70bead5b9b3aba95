//! Single post lookup

use crate::content::{PostDetail, PostRepository, Result};

/// Fetches one fully rendered post.
///
/// Errors from the repository pass through untouched, so a
/// `ContentError::PostNotFound` can be turned into a not-found page.
pub struct DetailService<'a> {
    repository: &'a PostRepository,
}

impl<'a> DetailService<'a> {
    pub fn new(repository: &'a PostRepository) -> Self {
        Self { repository }
    }

    pub async fn post_detail(&self, slug: &str) -> Result<PostDetail> {
        self.repository.load_detail(slug).await
    }
}
