//! HTML site generation.
//!
//! Stage 2 of the frontpage pipeline. Takes the layout manifest and renders
//! the final static site.
//!
//! ## Generated Pages
//!
//! - **Front page** (`/index.html`): every layout page rendered in order —
//!   hero + secondary pair + sidebar, slider strip, then the column sections
//! - **Article pages** (`/{slug}.html`): full story with date and badges
//! - **Category pages** (`/{category}/index.html`, `/{category}/{child}/index.html`):
//!   a "latest news" strip of the 4 most recent stories, then the remainder
//!   partitioned with the same column layout
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── summit-talks-resume.html        # Article pages (one per slug)
//! ├── world/
//! │   ├── index.html                  # Root category page
//! │   └── europe/
//! │       └── index.html              # Child category page
//! └── ...
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping; article
//! bodies are the one deliberate `PreEscaped` (they are trusted rich text
//! from the newsroom's own feed). CSS is embedded at compile time from
//! `static/style.css`.

use crate::config::SiteConfig;
use crate::content;
use crate::layout::{ColumnBlock, LayoutPage, LeadBlock, Manifest};
use crate::taxonomy::{self, CategoryNode};
use crate::types::{Article, Category, Tag};
use chrono::Utc;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS: &str = include_str!("../static/style.css");

/// Number of stories in a category page's "latest news" strip. Unlike the
/// front-page sidebar, this strip consumes: the strip's stories are excluded
/// from the column layout below it.
const CATEGORY_STRIP_LEN: usize = 4;

/// Stories linked in the footer's "latest news" list.
const FOOTER_NEWS_LEN: usize = 2;

/// Render context shared by every page: lookup tables, category tree, and
/// the link prefix back to the site root (`""`, `"../"`, `"../../"`).
struct Ctx<'a> {
    config: &'a SiteConfig,
    categories: &'a [Category],
    tags: &'a [Tag],
    tree: Vec<CategoryNode>,
    articles: &'a [Article],
    root: &'a str,
}

impl<'a> Ctx<'a> {
    fn new(manifest: &'a Manifest, root: &'a str) -> Self {
        Self {
            config: &manifest.config,
            categories: &manifest.categories,
            tags: &manifest.tags,
            tree: taxonomy::category_tree(&manifest.categories),
            articles: &manifest.articles,
            root,
        }
    }

    fn article_url(&self, article: &Article) -> String {
        format!("{}{}.html", self.root, article.slug)
    }

    fn category_url(&self, node: &CategoryNode) -> String {
        format!("{}{}/", self.root, node.category.slug)
    }

    fn child_url(&self, root_cat: &Category, child: &Category) -> String {
        format!("{}{}/{}/", self.root, root_cat.slug, child.slug)
    }
}

pub fn generate(manifest_path: &Path, output_dir: &Path) -> Result<(), GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;

    fs::create_dir_all(output_dir)?;

    // Front page
    let ctx = Ctx::new(&manifest, "");
    let index_html = render_front_page(&manifest.pages, &ctx);
    fs::write(output_dir.join("index.html"), index_html.into_string())?;
    println!("Generated index.html");

    // Article pages
    for article in &manifest.articles {
        let page = render_article_page(article, &ctx);
        fs::write(
            output_dir.join(format!("{}.html", article.slug)),
            page.into_string(),
        )?;
    }
    println!("Generated {} article pages", manifest.articles.len());

    // Category pages (roots and their direct children)
    let tree = taxonomy::category_tree(&manifest.categories);
    let mut category_pages = 0;
    for node in &tree {
        let dir = output_dir.join(&node.category.slug);
        fs::create_dir_all(&dir)?;
        let ctx = Ctx::new(&manifest, "../");
        let page = render_category_page(&node.category, None, &ctx);
        fs::write(dir.join("index.html"), page.into_string())?;
        category_pages += 1;

        for child in &node.children {
            let child_dir = dir.join(&child.slug);
            fs::create_dir_all(&child_dir)?;
            let ctx = Ctx::new(&manifest, "../../");
            let page = render_category_page(child, Some(&node.category), &ctx);
            fs::write(child_dir.join("index.html"), page.into_string())?;
            category_pages += 1;
        }
    }
    println!("Generated {} category pages", category_pages);

    println!("Site generated at {}", output_dir.display());
    Ok(())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (CSS) }
            }
            body {
                (content)
            }
        }
    }
}

/// Masthead: site title linking home, today's date, optional tagline.
fn masthead(ctx: &Ctx) -> Markup {
    let today = Utc::now().format("%A, %B %-d, %Y").to_string();
    html! {
        header.masthead {
            h1 { a href={ (ctx.root) "index.html" } { (ctx.config.site.title) } }
            @if !ctx.config.site.tagline.is_empty() {
                p.tagline { (ctx.config.site.tagline) }
            }
            div.dateline { (today) }
        }
    }
}

/// Category navigation bar: "All" plus one entry per root category.
fn category_nav(ctx: &Ctx, current_slug: &str) -> Markup {
    html! {
        nav.category-nav {
            ul {
                li class=[current_slug.is_empty().then_some("current")] {
                    a href={ (ctx.root) "index.html" } { "All" }
                }
                @for node in &ctx.tree {
                    li class=[(node.category.slug == current_slug).then_some("current")] {
                        a href=(ctx.category_url(node)) { (node.category.name) }
                    }
                }
            }
        }
    }
}

/// Category and tag badges for one article. Duplicate names are rendered
/// twice when the feed carries duplicate references.
fn badges(article: &Article, ctx: &Ctx) -> Markup {
    let category_names = taxonomy::resolve_names(&article.category_refs, ctx.categories);
    let tag_names = taxonomy::resolve_names(&article.tag_refs, ctx.tags);
    html! {
        div.badges {
            @for name in &category_names {
                span.badge.badge-category { (name) }
            }
            @for name in &tag_names {
                span.badge.badge-tag { "#" (name) }
            }
        }
    }
}

fn dateline(article: &Article) -> Markup {
    html! {
        div.story-date { (article.created_at.format("%b %-d, %Y")) }
    }
}

/// `<img>` for a story's resolved image. With `placeholder` true, a missing
/// image falls back to the configured placeholder URL; otherwise the element
/// is omitted entirely.
fn story_image(article: &Article, ctx: &Ctx, class: &str, placeholder: bool) -> Markup {
    let url = match (content::first_image(article), placeholder) {
        (Some(url), _) => Some(url),
        (None, true) => Some(ctx.config.images.placeholder.clone()),
        (None, false) => None,
    };
    html! {
        @if let Some(url) = url {
            img class=(class) src=(url) alt=(article.title) loading="lazy";
        }
    }
}

// ============================================================================
// Zone Renderers
// ============================================================================

/// Hero story and secondary pair, with the sidebar alongside.
fn render_lead_section(lead: &LeadBlock, sidebar: &[Article], ctx: &Ctx) -> Markup {
    html! {
        section.lead-section {
            div.lead-main {
                article.hero {
                    h2 { a href=(ctx.article_url(&lead.hero)) { (lead.hero.title) } }
                    (story_image(&lead.hero, ctx, "hero-image", false))
                    p.excerpt { (content::excerpt(&lead.hero.content, ctx.config.excerpts.hero_words)) }
                    (badges(&lead.hero, ctx))
                    (dateline(&lead.hero))
                    a.read-more href=(ctx.article_url(&lead.hero)) { "Read more" }
                }
                div.secondary-pair {
                    @for story in &lead.secondary {
                        article.secondary {
                            (story_image(story, ctx, "secondary-image", true))
                            h3 { a href=(ctx.article_url(story)) { (story.title) } }
                            (badges(story, ctx))
                            (dateline(story))
                            p.excerpt { (content::article_excerpt(story, ctx.config.excerpts.words)) }
                        }
                    }
                }
            }
            @if !sidebar.is_empty() {
                aside.sidebar {
                    h3 { "Latest news" }
                    ul {
                        @for story in sidebar {
                            li {
                                div.sidebar-text {
                                    a.sidebar-title href=(ctx.article_url(story)) { (story.title) }
                                    p.excerpt { (content::excerpt(&story.content, ctx.config.excerpts.words)) }
                                    (badges(story, ctx))
                                    (dateline(story))
                                }
                                (story_image(story, ctx, "sidebar-thumb", false))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_slider(slider: &[Article], ctx: &Ctx) -> Markup {
    html! {
        @if !slider.is_empty() {
            section.slider {
                @for story in slider {
                    article.slider-card {
                        (story_image(story, ctx, "slider-image", false))
                        h4 { a href=(ctx.article_url(story)) { (story.title) } }
                        (badges(story, ctx))
                        (dateline(story))
                        p.excerpt { (content::article_excerpt(story, ctx.config.excerpts.words)) }
                    }
                }
            }
        }
    }
}

/// One brief row: thumbnail plus linked title.
fn brief_row(story: &Article, ctx: &Ctx) -> Markup {
    html! {
        div.brief {
            (story_image(story, ctx, "brief-thumb", false))
            a href=(ctx.article_url(story)) { (story.title) }
        }
    }
}

/// Lead story within a column: image above a linked heading.
fn column_lead(story: &Article, ctx: &Ctx, heading_class: &str) -> Markup {
    html! {
        article class=(heading_class) {
            (story_image(story, ctx, "column-image", false))
            h3 { a href=(ctx.article_url(story)) { (story.title) } }
        }
    }
}

fn render_columns(columns: &ColumnBlock, ctx: &Ctx) -> Markup {
    html! {
        section.column-section {
            div.column {
                @if let Some(story) = &columns.left_lead {
                    (column_lead(story, ctx, "column-lead"))
                }
                @for story in &columns.left_briefs {
                    (brief_row(story, ctx))
                }
            }
            div.column {
                @if let Some(story) = &columns.center_feature {
                    article.column-feature {
                        (story_image(story, ctx, "feature-image", false))
                        h2 { a href=(ctx.article_url(story)) { (story.title) } }
                        (dateline(story))
                    }
                }
                @for story in &columns.center_briefs {
                    (brief_row(story, ctx))
                }
            }
            div.column {
                @if let Some(story) = &columns.right_lead {
                    (column_lead(story, ctx, "column-lead"))
                }
                @for story in &columns.right_briefs {
                    (brief_row(story, ctx))
                }
            }
        }
    }
}

/// Render a full layout-page sequence: the first page's lead, sidebar, and
/// slider, then every column section in order, stacked into one document.
fn render_pages(pages: &[LayoutPage], ctx: &Ctx) -> Markup {
    html! {
        @for page in pages {
            @if let Some(lead) = &page.lead {
                (render_lead_section(lead, &page.sidebar, ctx))
            }
            (render_slider(&page.slider, ctx))
            @if let Some(columns) = &page.columns {
                (render_columns(columns, ctx))
            }
        }
    }
}

// ============================================================================
// Footer
// ============================================================================

const STOCK_ABOUT: &str = "An independent newsroom. We focus on reliable \
reporting and the latest updates, at home and around the world.";

/// First resolved category name, uppercased, for the footer's kicker line.
fn kicker(article: &Article, categories: &[Category]) -> String {
    taxonomy::resolve_names(&article.category_refs, categories)
        .first()
        .map(|name| name.to_uppercase())
        .unwrap_or_else(|| "NEWS".to_string())
}

fn footer(ctx: &Ctx) -> Markup {
    let about = if ctx.config.footer.about.is_empty() {
        STOCK_ABOUT
    } else {
        &ctx.config.footer.about
    };
    let copyright = if ctx.config.footer.copyright.is_empty() {
        &ctx.config.site.title
    } else {
        &ctx.config.footer.copyright
    };
    html! {
        footer.site-footer {
            div.footer-top {
                span.footer-brand { (ctx.config.site.title) }
                nav.footer-nav {
                    @for node in ctx.tree.iter().take(6) {
                        a href=(ctx.category_url(node)) { (node.category.name) }
                    }
                }
            }
            div.footer-main {
                div.footer-about {
                    h3 { "About us" }
                    p { (about) }
                }
                div.footer-news {
                    h3 { "Latest news" }
                    ul {
                        @for article in ctx.articles.iter().take(FOOTER_NEWS_LEN) {
                            li {
                                a href=(ctx.article_url(article)) { (article.title) }
                                div.kicker {
                                    (kicker(article, ctx.categories))
                                    span.kicker-date { (article.created_at.format("%b %-d, %Y")) }
                                }
                            }
                        }
                    }
                }
            }
            div.footer-categories {
                h3 { "Categories" }
                div.footer-tree {
                    @for node in &ctx.tree {
                        div.footer-branch {
                            a.footer-root href=(ctx.category_url(node)) { (node.category.name) }
                            @if !node.children.is_empty() {
                                ul {
                                    @for child in &node.children {
                                        li {
                                            a href=(ctx.child_url(&node.category, child)) { (child.name) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div.footer-bottom {
                "© " (Utc::now().format("%Y")) " " (copyright) ". All rights reserved."
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

fn render_front_page(pages: &[LayoutPage], ctx: &Ctx) -> Markup {
    let content = html! {
        (masthead(ctx))
        (category_nav(ctx, ""))
        main.front-page {
            (render_pages(pages, ctx))
        }
        (footer(ctx))
    };
    base_document(&ctx.config.site.title, content)
}

fn render_article_page(article: &Article, ctx: &Ctx) -> Markup {
    let title = format!("{} - {}", article.title, ctx.config.site.title);
    let content = html! {
        (masthead(ctx))
        (category_nav(ctx, ""))
        main.article-page {
            article {
                h1 { (article.title) }
                (badges(article, ctx))
                (dateline(article))
                div.article-body {
                    // Trusted rich text from the newsroom's own feed
                    (PreEscaped(article.content.clone()))
                }
            }
        }
        (footer(ctx))
    };
    base_document(&title, content)
}

/// A category page: the 4 most recent stories as a strip, the remainder in
/// column sections. Here the strip consumes — its stories do not reappear
/// below, unlike the front page's sidebar peek.
fn render_category_page(category: &Category, parent: Option<&Category>, ctx: &Ctx) -> Markup {
    let in_cat: Vec<Article> = ctx
        .articles
        .iter()
        .filter(|a| taxonomy::in_category(a, category))
        .cloned()
        .collect();
    let (strip, rest) = in_cat.split_at(CATEGORY_STRIP_LEN.min(in_cat.len()));
    let pages = crate::layout::paginate(rest);

    let nav_slug = parent.map(|p| p.slug.as_str()).unwrap_or(&category.slug);
    let title = format!("{} - {}", category.name, ctx.config.site.title);
    let content = html! {
        (masthead(ctx))
        (category_nav(ctx, nav_slug))
        main.category-page {
            header.category-header {
                h2 {
                    @if let Some(parent) = parent {
                        (parent.name) " › "
                    }
                    (category.name)
                }
            }
            @if in_cat.is_empty() {
                p.empty-category { "No stories in this category yet." }
            } @else {
                section.latest-strip {
                    h3 { "Latest news" }
                    div.strip-grid {
                        @for story in strip {
                            article.strip-card {
                                (story_image(story, ctx, "strip-image", true))
                                h4 { a href=(ctx.article_url(story)) { (story.title) } }
                                (dateline(story))
                                p.excerpt { (content::article_excerpt(story, ctx.config.excerpts.words)) }
                            }
                        }
                    }
                }
                (render_pages(&pages, ctx))
            }
        }
        (footer(ctx))
    };
    base_document(&title, content)
}

// ============================================================================
// Tests
// ============================================================================
