//! Content module - front-matter, markdown and post loading

mod error;
mod frontmatter;
mod markdown;
mod post;
mod repository;

pub use error::{ContentError, Result};
pub use frontmatter::{parse_date_string, FrontMatterError, PostMetadata};
pub use markdown::{MarkdownRenderer, RenderError};
pub use post::{PostDetail, PostId, PostSummary, MARKDOWN_EXTENSION};
pub use repository::PostRepository;
