use postdeck::content::ContentError;
use postdeck::Blog;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_post(dir: &Path, name: &str, title: &str, date: &str) {
    fs::write(
        dir.join(name),
        format!("---\ntitle: {title}\ndate: {date}\n---\n# {title}\n\nBody of {title}.\n"),
    )
    .unwrap();
}

fn site() -> (TempDir, Blog) {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("posts")).unwrap();
    let blog = Blog::new(dir.path()).unwrap();
    (dir, blog)
}

#[test]
fn sorted_summaries_newest_first() {
    let (dir, blog) = site();
    let posts = dir.path().join("posts");
    write_post(&posts, "a.md", "First", "2024-01-01");
    write_post(&posts, "b.md", "Second", "2024-03-05");

    let titles: Vec<_> = blog
        .sorted_summaries()
        .unwrap()
        .iter()
        .map(|p| p.title().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Second", "First"]);
}

#[test]
fn unpadded_dates_sort_by_calendar() {
    let (dir, blog) = site();
    let posts = dir.path().join("posts");
    write_post(&posts, "a.md", "December", "2024-12-01");
    write_post(&posts, "b.md", "March", "2024-3-5");

    let slugs: Vec<_> = blog
        .sorted_summaries()
        .unwrap()
        .iter()
        .map(|p| p.slug.to_string())
        .collect();
    assert_eq!(slugs, vec!["a", "b"]);
}

#[test]
fn sorted_output_is_descending_and_stable() {
    let (dir, blog) = site();
    let posts = dir.path().join("posts");
    let dates = [
        "2023-05-01",
        "2024-01-01",
        "2023-5-1",
        "2022-12-31",
        "2024-01-01",
        "2023-05-01",
    ];
    for (i, date) in dates.iter().enumerate() {
        write_post(&posts, &format!("post-{i}.md"), &format!("Post {i}"), date);
    }

    let first = blog.sorted_summaries().unwrap();
    for pair in first.windows(2) {
        assert!(pair[0].published_at() >= pair[1].published_at());
    }

    let second = blog.sorted_summaries().unwrap();
    assert_eq!(first, second);

    let slugs: Vec<_> = first.iter().map(|p| p.slug.to_string()).collect();
    assert_eq!(
        slugs,
        vec!["post-1", "post-4", "post-0", "post-2", "post-5", "post-3"]
    );
}

#[test]
fn identifiers_round_trip_to_file_names() {
    let (dir, blog) = site();
    let posts = dir.path().join("posts");
    write_post(&posts, "hello-world.md", "Hello", "2024-01-01");
    write_post(&posts, "second.post.md", "Second", "2024-01-02");
    fs::write(posts.join("README.txt"), "ignored").unwrap();

    let mut names: Vec<_> = fs::read_dir(&posts)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .filter(|n| n.ends_with(".md"))
        .collect();
    names.sort();

    let ids: Vec<_> = blog
        .list_identifiers()
        .unwrap()
        .iter()
        .map(|id| id.file_name())
        .collect();
    assert_eq!(ids, names);
}

#[tokio::test]
async fn post_detail_is_idempotent() {
    let (dir, blog) = site();
    write_post(&dir.path().join("posts"), "a.md", "First", "2024-01-01");

    let first = blog.post_detail("a").await.unwrap();
    let second = blog.post_detail("a").await.unwrap();
    assert_eq!(first.content_html, second.content_html);
    assert_eq!(
        first.content_html,
        "<h1>First</h1>\n<p>Body of First.</p>\n"
    );
}

#[tokio::test]
async fn missing_post_is_not_found() {
    let (_dir, blog) = site();
    let err = blog.post_detail("nonexistent").await.unwrap_err();
    assert!(matches!(err, ContentError::PostNotFound(_)));
}

#[test]
fn missing_posts_directory_fails_listing() {
    let dir = TempDir::new().unwrap();
    let blog = Blog::new(dir.path()).unwrap();
    assert!(matches!(
        blog.sorted_summaries(),
        Err(ContentError::Io { .. })
    ));
}

#[test]
fn config_selects_posts_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("_config.yml"),
        "title: Tech Blog\nposts_dir: content\n",
    )
    .unwrap();
    fs::create_dir(dir.path().join("content")).unwrap();
    write_post(&dir.path().join("content"), "only.md", "Only", "2024-01-01");

    let blog = Blog::new(dir.path()).unwrap();
    assert_eq!(blog.config.title, "Tech Blog");
    let ids = blog.list_identifiers().unwrap();
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0].as_str(), "only");
}
