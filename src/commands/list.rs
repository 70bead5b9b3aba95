//! List posts newest first

use anyhow::Result;
use std::io::Write;

use crate::helpers::date::format_date;
use crate::Blog;

const NO_DATE: &str = "----------";

/// Print sorted post summaries, as text or as a JSON array
pub fn run(blog: &Blog, json: bool, out: &mut impl Write) -> Result<()> {
    let posts = blog.sorted_summaries()?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &posts)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Posts ({}):", posts.len())?;
    for post in &posts {
        let date = post
            .published_at()
            .map(|d| format_date(&d, &blog.config.date_format))
            .unwrap_or_else(|| NO_DATE.to_string());
        writeln!(
            out,
            "  {}  {} [{}]",
            date,
            post.title().unwrap_or("Untitled"),
            post.slug
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn blog_with_posts() -> (TempDir, Blog) {
        let dir = TempDir::new().unwrap();
        let posts = dir.path().join("posts");
        fs::create_dir(&posts).unwrap();
        fs::write(posts.join("a.md"), "---\ntitle: First\ndate: 2024-01-01\n---\n").unwrap();
        fs::write(posts.join("b.md"), "---\ntitle: Second\ndate: 2024-3-5\n---\n").unwrap();
        fs::write(posts.join("c.md"), "No header\n").unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        (dir, blog)
    }

    #[test]
    fn test_list_text() {
        let (_dir, blog) = blog_with_posts();
        let mut out = Vec::new();
        run(&blog, false, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Posts (3):\n  2024-03-05  Second [b]\n  2024-01-01  First [a]\n  ----------  Untitled [c]\n"
        );
    }

    #[test]
    fn test_list_json() {
        let (_dir, blog) = blog_with_posts();
        let mut out = Vec::new();
        run(&blog, true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "slug": "b", "title": "Second", "date": "2024-3-5" },
                { "slug": "a", "title": "First", "date": "2024-01-01" },
                { "slug": "c" },
            ])
        );
    }
}
