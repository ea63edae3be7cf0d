//! Per-article content helpers: display image selection and plain-text
//! excerpts.
//!
//! Both helpers are pure functions over a single article's fields. Malformed
//! or empty markup is a normal input, not a failure — absence is represented
//! as `None` or an empty string, never an error.

use crate::types::Article;
use once_cell::sync::Lazy;
use regex::Regex;

/// First `src` attribute of an `<img>` tag. Single-match scan; quoting style
/// and attribute order inside the tag don't matter.
static IMG_SRC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<img[^>]+src=["']([^"'>]+)["']"#).unwrap());

/// Default word budget for excerpts (sidebar, slider, secondary stories).
pub const EXCERPT_WORDS: usize = 15;

/// Resolve the display image for an article.
///
/// Preference order: the first entry of `image_urls`, then the first
/// `<img src>` found in the body, then `None`. Callers substitute their own
/// placeholder URL — this function never fabricates one.
pub fn first_image(article: &Article) -> Option<String> {
    if let Some(url) = article.image_urls.first() {
        return Some(url.clone());
    }
    IMG_SRC
        .captures(&article.content)
        .map(|caps| caps[1].to_string())
}

/// Strip HTML tags from a string (simple angle-bracket stripping).
pub fn plain_text(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}

/// Plain-text excerpt of an HTML body, truncated to `word_budget` words.
///
/// Words are whitespace-separated runs of the stripped text, rejoined with
/// single spaces. `...` is appended only when words were actually dropped.
/// Empty input yields an empty string.
pub fn excerpt(html: &str, word_budget: usize) -> String {
    let text = plain_text(html);
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut out = words[..word_budget.min(words.len())].join(" ");
    if words.len() > word_budget {
        out.push_str("...");
    }
    out
}

/// The excerpt shown for an article: the feed-provided one when present,
/// otherwise derived from the body.
pub fn article_excerpt(article: &Article, word_budget: usize) -> String {
    match &article.excerpt {
        Some(e) if !e.trim().is_empty() => e.clone(),
        _ => excerpt(&article.content, word_budget),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::types::Status;

    fn article(image_urls: Vec<&str>, content: &str) -> Article {
        Article {
            id: "a1".into(),
            slug: "a1".into(),
            title: "Title".into(),
            content: content.into(),
            status: Status::Published,
            image_urls: image_urls.into_iter().map(String::from).collect(),
            created_at: Utc::now(),
            category_refs: vec![],
            tag_refs: vec![],
            excerpt: None,
        }
    }

    #[test]
    fn image_urls_win_over_body() {
        let a = article(
            vec!["https://cdn.example/a.jpg"],
            r#"<img src="https://cdn.example/b.jpg">"#,
        );
        assert_eq!(first_image(&a).as_deref(), Some("https://cdn.example/a.jpg"));
    }

    #[test]
    fn falls_back_to_first_img_tag() {
        let a = article(
            vec![],
            r#"<p>intro</p><IMG class="wide" SRC='https://cdn.example/b.jpg' alt="x">"#,
        );
        assert_eq!(first_image(&a).as_deref(), Some("https://cdn.example/b.jpg"));
    }

    #[test]
    fn no_image_is_none_not_error() {
        let a = article(vec![], "<p>no pictures here</p>");
        assert_eq!(first_image(&a), None);

        let malformed = article(vec![], "<img src=broken <p>");
        assert_eq!(first_image(&malformed), None);
    }

    #[test]
    fn excerpt_truncates_with_ellipsis() {
        assert_eq!(excerpt("<p>one two three four</p>", 2), "one two...");
    }

    #[test]
    fn excerpt_exact_budget_has_no_ellipsis() {
        assert_eq!(excerpt("<p>one two</p>", 2), "one two");
    }

    #[test]
    fn excerpt_of_empty_is_empty() {
        assert_eq!(excerpt("", 15), "");
        assert_eq!(excerpt("<p></p>", 15), "");
    }

    #[test]
    fn excerpt_collapses_whitespace() {
        assert_eq!(excerpt("<p>one\n  two</p>\n<p>three</p>", 5), "one two three");
    }

    #[test]
    fn feed_excerpt_preferred_when_present() {
        let mut a = article(vec![], "<p>one two three four five</p>");
        a.excerpt = Some("Hand-written summary".into());
        assert_eq!(article_excerpt(&a, 2), "Hand-written summary");

        a.excerpt = Some("   ".into());
        assert_eq!(article_excerpt(&a, 2), "one two...");
    }
}
