//! CLI output formatting for both pipeline stages.
//!
//! Output is information-centric, not file-centric: the primary display for
//! every entity (article, zone, category) is its semantic identity — title
//! and positional index — with counts and paths as indented context lines.
//!
//! ## Layout
//!
//! ```text
//! Articles
//!     42 published (3 drafts excluded)
//!
//! Pages
//! 001 front
//!     Hero: Summit talks resume
//!     Secondary: 2    Slider: 4    Sidebar: 4 (peek)
//!     Columns: 11
//! 002 section
//!     Columns: 11
//!
//! Categories
//! 001 World
//!     001 Europe
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! 001 World → world/index.html
//!     001 Europe → world/europe/index.html
//! Generated 42 article pages, 3 category pages
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::layout::{LayoutPage, Manifest};
use crate::load::Feeds;
use crate::taxonomy;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// One zone-count context line for a layout page.
fn zone_counts(page: &LayoutPage) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(lead) = &page.lead {
        lines.push(format!("    Hero: {}", lead.hero.title));
        lines.push(format!(
            "    Secondary: {}    Slider: {}    Sidebar: {} (peek)",
            lead.secondary.len(),
            page.slider.len(),
            page.sidebar.len()
        ));
    }
    if let Some(columns) = &page.columns {
        lines.push(format!("    Columns: {}", columns.len()));
    }
    lines
}

/// Format the layout stage output: feed inventory plus the partitioned page
/// sequence.
pub fn format_layout_output(feeds_drafts: usize, manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Articles".to_string());
    let drafts_note = if feeds_drafts > 0 {
        format!(" ({} drafts excluded)", feeds_drafts)
    } else {
        String::new()
    };
    lines.push(format!(
        "    {} published{}",
        manifest.articles.len(),
        drafts_note
    ));

    lines.push(String::new());
    lines.push("Pages".to_string());
    for (i, page) in manifest.pages.iter().enumerate() {
        let kind = if page.lead.is_some() { "front" } else { "section" };
        lines.push(format!("{} {}", format_index(i + 1), kind));
        lines.extend(zone_counts(page));
    }
    if manifest.pages.is_empty() {
        lines.push("    (no published articles)".to_string());
    }

    let tree = taxonomy::category_tree(&manifest.categories);
    if !tree.is_empty() {
        lines.push(String::new());
        lines.push("Categories".to_string());
        for (i, node) in tree.iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), node.category.name));
            for (j, child) in node.children.iter().enumerate() {
                lines.push(format!("{}{} {}", indent(1), format_index(j + 1), child.name));
            }
        }
    }

    if !manifest.tags.is_empty() {
        lines.push(String::new());
        lines.push(format!("Tags: {}", manifest.tags.len()));
    }

    lines
}

/// Print layout output to stdout.
pub fn print_layout_output(feeds_drafts: usize, manifest: &Manifest) {
    for line in format_layout_output(feeds_drafts, manifest) {
        println!("{}", line);
    }
}

/// Format the generate stage output: the site map that was written.
pub fn format_generate_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Home → index.html".to_string()];

    let tree = taxonomy::category_tree(&manifest.categories);
    let mut category_pages = 0;
    for (i, node) in tree.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}/index.html",
            format_index(i + 1),
            node.category.name,
            node.category.slug
        ));
        category_pages += 1;
        for (j, child) in node.children.iter().enumerate() {
            lines.push(format!(
                "{}{} {} → {}/{}/index.html",
                indent(1),
                format_index(j + 1),
                child.name,
                node.category.slug,
                child.slug
            ));
            category_pages += 1;
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} article pages, {} category pages",
        manifest.articles.len(),
        category_pages
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(manifest: &Manifest) {
    for line in format_generate_output(manifest) {
        println!("{}", line);
    }
}

/// Format the check summary: what would be built, without building it.
pub fn format_check_output(feeds: &Feeds) -> Vec<String> {
    let pages = crate::layout::paginate(&feeds.articles);
    vec![
        format!(
            "{} published articles ({} drafts excluded)",
            feeds.articles.len(),
            feeds.drafts
        ),
        format!(
            "{} categories, {} tags",
            feeds.categories.len(),
            feeds.tags.len()
        ),
        format!("{} layout pages", pages.len()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::layout;
    use crate::types::{Article, Category, Status};
    use chrono::{TimeZone, Utc};

    fn articles(n: usize) -> Vec<Article> {
        (0..n)
            .map(|i| Article {
                id: format!("a{i}"),
                slug: format!("story-{i}"),
                title: format!("Story {i}"),
                content: String::new(),
                status: Status::Published,
                image_urls: vec![],
                created_at: Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
                category_refs: vec![],
                tag_refs: vec![],
                excerpt: None,
            })
            .collect()
    }

    fn manifest(n: usize) -> Manifest {
        let articles = articles(n);
        Manifest {
            pages: layout::paginate(&articles),
            articles,
            categories: vec![
                Category {
                    id: "c1".into(),
                    name: "World".into(),
                    slug: "world".into(),
                    parent_id: None,
                },
                Category {
                    id: "c2".into(),
                    name: "Europe".into(),
                    slug: "europe".into(),
                    parent_id: Some("c1".into()),
                },
            ],
            tags: vec![],
            config: SiteConfig::default(),
        }
    }

    #[test]
    fn layout_output_shows_page_kinds() {
        let lines = format_layout_output(0, &manifest(21));
        let text = lines.join("\n");
        assert!(text.contains("001 front"));
        assert!(text.contains("002 section"));
        assert!(text.contains("Hero: Story 0"));
        assert!(text.contains("Sidebar: 4 (peek)"));
    }

    #[test]
    fn layout_output_reports_drafts() {
        let lines = format_layout_output(3, &manifest(1));
        assert!(lines.join("\n").contains("(3 drafts excluded)"));
    }

    #[test]
    fn empty_layout_is_reported_not_omitted() {
        let lines = format_layout_output(0, &manifest(0));
        assert!(lines.join("\n").contains("(no published articles)"));
    }

    #[test]
    fn generate_output_maps_category_tree() {
        let lines = format_generate_output(&manifest(2));
        let text = lines.join("\n");
        assert!(text.contains("Home → index.html"));
        assert!(text.contains("001 World → world/index.html"));
        assert!(text.contains("001 Europe → world/europe/index.html"));
        assert!(text.contains("2 article pages, 2 category pages"));
    }
}
