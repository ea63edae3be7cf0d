//! End-to-end pipeline test: JSON feeds in a temp content directory, through
//! layout and generate, to a browsable HTML tree.

use frontpage::{generate, layout, load};
use std::fs;
use tempfile::TempDir;

fn write_fixture_feeds(tmp: &TempDir, article_count: usize) {
    let articles: Vec<String> = (0..article_count)
        .map(|i| {
            // Descending timestamps so the feed order is already newest-first.
            let day = article_count - i;
            format!(
                r#"{{
                    "_id": "a{i}",
                    "slug": "story-{i}",
                    "title": "Story {i}",
                    "content": "<p>Body of story {i}. <img src=\"https://cdn.example/{i}.jpg\"> More text follows here.</p>",
                    "status": "published",
                    "image_urls": [],
                    "createdAt": "2026-01-{day:02}T09:00:00Z",
                    "categoryIds": ["c1"],
                    "tagIds": [{{"id": "t1", "name": "wire"}}]
                }}"#
            )
        })
        .collect();
    fs::write(
        tmp.path().join("articles.json"),
        format!(r#"{{"data": [{}]}}"#, articles.join(",")),
    )
    .unwrap();

    fs::write(
        tmp.path().join("categories.json"),
        r#"[
            {"_id": "c1", "name": "World", "slug": "world", "parentId": null},
            {"_id": "c2", "name": "Europe", "slug": "europe", "parentId": "c1"}
        ]"#,
    )
    .unwrap();

    fs::write(
        tmp.path().join("tags.json"),
        r#"{"tags": [{"id": "t1", "name": "wire"}]}"#,
    )
    .unwrap();

    fs::write(
        tmp.path().join("config.toml"),
        "[site]\ntitle = \"Pipeline Gazette\"\n",
    )
    .unwrap();
}

#[test]
fn full_pipeline_produces_site() {
    let tmp = TempDir::new().unwrap();
    write_fixture_feeds(&tmp, 21);

    // Stage 1: layout
    let feeds = load::load(tmp.path()).unwrap();
    assert_eq!(feeds.articles.len(), 21);
    assert_eq!(feeds.config.site.title, "Pipeline Gazette");

    let manifest = layout::Manifest::build(feeds);
    assert_eq!(manifest.pages.len(), 2);

    let manifest_path = tmp.path().join("layout.json");
    fs::write(
        &manifest_path,
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();

    // Stage 2: generate
    let dist = tmp.path().join("dist");
    generate::generate(&manifest_path, &dist).unwrap();

    let index = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(index.contains("Pipeline Gazette"));
    // Newest article is the hero.
    assert!(index.contains("Story 0"));
    // Body-embedded images are picked up by the resolver.
    assert!(index.contains("https://cdn.example/0.jpg"));
    // Second layout page's column section is stacked into the same document.
    assert!(index.contains("Story 20"));

    // One page per article slug.
    for i in 0..21 {
        assert!(dist.join(format!("story-{i}.html")).exists());
    }

    // Category pages for the root and its child.
    let world = fs::read_to_string(dist.join("world/index.html")).unwrap();
    assert!(world.contains("Latest news"));
    assert!(fs::read_to_string(dist.join("world/europe/index.html"))
        .unwrap()
        .contains("No stories in this category yet."));
}

#[test]
fn empty_content_directory_builds_an_empty_site() {
    let tmp = TempDir::new().unwrap();

    let feeds = load::load(tmp.path()).unwrap();
    let manifest = layout::Manifest::build(feeds);
    assert!(manifest.pages.is_empty());

    let manifest_path = tmp.path().join("layout.json");
    fs::write(&manifest_path, serde_json::to_string(&manifest).unwrap()).unwrap();

    let dist = tmp.path().join("dist");
    generate::generate(&manifest_path, &dist).unwrap();

    let index = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(index.contains("<!DOCTYPE html>"));
    assert!(!index.contains(r#"<section class="column-section""#));
}

#[test]
fn drafts_never_reach_the_site() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("articles.json"),
        r#"[
            {"id": "pub", "slug": "published-story", "title": "Published",
             "content": "", "status": "published", "createdAt": "2026-01-02T00:00:00Z"},
            {"id": "dft", "slug": "draft-story", "title": "Unfinished",
             "content": "", "status": "draft", "createdAt": "2026-01-03T00:00:00Z"}
        ]"#,
    )
    .unwrap();

    let feeds = load::load(tmp.path()).unwrap();
    assert_eq!(feeds.drafts, 1);
    let manifest = layout::Manifest::build(feeds);

    let manifest_path = tmp.path().join("layout.json");
    fs::write(&manifest_path, serde_json::to_string(&manifest).unwrap()).unwrap();
    let dist = tmp.path().join("dist");
    generate::generate(&manifest_path, &dist).unwrap();

    assert!(dist.join("published-story.html").exists());
    assert!(!dist.join("draft-story.html").exists());
    assert!(!fs::read_to_string(dist.join("index.html"))
        .unwrap()
        .contains("Unfinished"));
}
