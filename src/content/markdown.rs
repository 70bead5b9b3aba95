//! Markdown rendering

use pulldown_cmark::{html, Event, Options, Parser};
use thiserror::Error;

/// The render task panicked or was cancelled before producing output
#[derive(Debug, Error)]
#[error("markdown render task failed: {0}")]
pub struct RenderError(#[from] tokio::task::JoinError);

/// Converts markdown bodies into HTML fragments.
///
/// The option set is fixed: plain CommonMark with no extensions, so the same
/// input always renders to the same bytes.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self {
            options: Options::empty(),
        }
    }

    /// Render markdown to HTML on the blocking pool.
    ///
    /// Resolves once the whole document has been converted.
    pub async fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let renderer = *self;
        let markdown = markdown.to_string();
        let html = tokio::task::spawn_blocking(move || renderer.render_blocking(&markdown)).await?;
        Ok(html)
    }

    /// Render markdown to HTML on the current thread
    pub fn render_blocking(&self, markdown: &str) -> String {
        // Parse fully before serialising
        let events: Vec<Event> = Parser::new_ext(markdown, self.options).collect();

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
