//! Shared types used across both pipeline stages.
//!
//! These types deserialize directly from the exported JSON feeds and are
//! serialized into `layout.json` between stages (layout → generate), so the
//! field names carry `alias` attributes matching the feed's camelCase keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication state of an article. Only `published` articles enter the
/// layout; drafts are counted during `check` but never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Draft,
    Published,
}

/// A content item from the article feed.
///
/// Feeds exported from different backends disagree on id fields (`id` vs
/// `_id`) and key casing; the aliases below accept both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Stable identifier (`id` or `_id` in the feed)
    #[serde(default, alias = "_id")]
    pub id: String,
    /// URL-safe unique key; article pages are generated at `{slug}.html`
    pub slug: String,
    pub title: String,
    /// Rich-text HTML body
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: Status,
    /// Ordered image URLs; the first entry is the preferred display image
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(alias = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Category references — bare ids or inline objects, in feed order
    #[serde(default, alias = "categoryIds")]
    pub category_refs: Vec<TaxonomyRef>,
    /// Tag references — same dual shape as categories
    #[serde(default, alias = "tagIds")]
    pub tag_refs: Vec<TaxonomyRef>,
    /// Pre-computed excerpt, when the feed provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

/// A category from the category feed. At most two levels deep: a category
/// with no `parent_id` is a root; anything else is a direct child.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Empty string and null both mean "root"
    #[serde(default, alias = "parentId", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl Category {
    /// Whether this category sits at the top level of the tree.
    pub fn is_root(&self) -> bool {
        self.parent_id.as_deref().is_none_or(str::is_empty)
    }
}

/// A tag from the tag feed. Flat, no hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
}

/// A reference from an article to a category or tag.
///
/// Feeds embed these in two shapes: a bare identifier string, or an inline
/// object that already carries the name (and sometimes the id and slug).
/// The untagged enum makes the discrimination a single serde decision
/// instead of property probing at every use site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaxonomyRef {
    Id(String),
    Inline(InlineRef),
}

/// The embedded-object shape of a [`TaxonomyRef`]. `name` may be absent —
/// some backends embed objects that carry only the id, and those still
/// resolve through the lookup table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineRef {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}
