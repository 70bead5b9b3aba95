//! Show one rendered post

use anyhow::Result;
use std::io::Write;

use crate::Blog;

/// Print a post's HTML body, or the whole post as JSON
pub async fn run(blog: &Blog, slug: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let post = match blog.post_detail(slug).await {
        Ok(post) => post,
        Err(e) if e.is_not_found() => anyhow::bail!("post not found: {}", slug),
        Err(e) => return Err(e.into()),
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &post)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", post.content_html)?;
    }

    Ok(())
}
