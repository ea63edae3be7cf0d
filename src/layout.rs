//! Layout partitioning — the front-page zone structure.
//!
//! [`paginate`] is the one component with cross-item, positional logic: it
//! slices an ordered article list into a sequence of [`LayoutPage`]s that the
//! generate stage renders verbatim. It owns no state, performs no I/O, and is
//! re-run from scratch whenever the article list changes.
//!
//! ## Zone map
//!
//! Page 1 (the front page head):
//!
//! ```text
//! [0]        hero
//! [1..3]     secondary pair
//! [3..7]     slider strip
//! [7..11]    sidebar "latest news"   ← lookahead, see below
//! [7..18]    first column block
//! ```
//!
//! Pages 2..: windows of 11 articles (from index 18), one column block each;
//! a final partial window still yields a page.
//!
//! A column block partitions its ≤11 articles positionally:
//!
//! ```text
//! [0]     left lead       [4]     center feature    [7]     right lead
//! [1..4]  left briefs     [5..7]  center briefs     [8..11] right briefs
//! ```
//!
//! ## The sidebar lookahead
//!
//! The sidebar window overlaps the first column block: indices 7..11 appear
//! in both. This is a peek, not a cursor advance — the sidebar is a preview
//! of upcoming stories, and those stories still take their positional slot in
//! the columns below. Do not "fix" this into strict non-overlap; the overlap
//! is the product behavior.

use crate::config::SiteConfig;
use crate::load::Feeds;
use crate::types::{Article, Category, Tag};
use serde::{Deserialize, Serialize};

/// Articles consumed by the lead block (hero + secondary pair).
pub const LEAD_LEN: usize = 3;
/// Articles consumed by the slider strip.
pub const SLIDER_LEN: usize = 4;
/// Articles shown in the sidebar (peeked, not consumed).
pub const SIDEBAR_LEN: usize = 4;
/// Articles consumed by one column block.
pub const COLUMN_LEN: usize = 11;

/// Hero story plus up to two secondary stories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadBlock {
    pub hero: Article,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary: Vec<Article>,
}

/// A three-column section of up to 11 articles. Every slot is
/// optional-presence: a short window fills slots left to right and omits the
/// rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_lead: Option<Article>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub left_briefs: Vec<Article>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_feature: Option<Article>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub center_briefs: Vec<Article>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_lead: Option<Article>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub right_briefs: Vec<Article>,
}

impl ColumnBlock {
    /// Number of articles placed in this block.
    pub fn len(&self) -> usize {
        self.left_lead.iter().count()
            + self.left_briefs.len()
            + self.center_feature.iter().count()
            + self.center_briefs.len()
            + self.right_lead.iter().count()
            + self.right_briefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One full cycle of zones. The first page carries the lead block, slider,
/// and sidebar; subsequent pages carry only a column block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutPage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<LeadBlock>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slider: Vec<Article>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sidebar: Vec<Article>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<ColumnBlock>,
}

impl LayoutPage {
    /// Number of articles consumed by this page (the sidebar peek does not
    /// count — those articles belong to the column block).
    pub fn consumed(&self) -> usize {
        let lead = self
            .lead
            .as_ref()
            .map(|l| 1 + l.secondary.len())
            .unwrap_or(0);
        lead + self.slider.len() + self.columns.as_ref().map(ColumnBlock::len).unwrap_or(0)
    }
}

/// Partition an ordered article list into the page sequence.
///
/// The input is expected to be pre-filtered to published articles and already
/// in display order (the loader sorts newest-first); the partitioner itself
/// is domain-agnostic over any ordered list. Category-restricted layouts are
/// produced by filtering the list before calling this.
pub fn paginate(articles: &[Article]) -> Vec<LayoutPage> {
    if articles.is_empty() {
        return Vec::new();
    }

    let lead = LeadBlock {
        hero: articles[0].clone(),
        secondary: window(articles, 1, LEAD_LEN).to_vec(),
    };
    let slider = window(articles, LEAD_LEN, LEAD_LEN + SLIDER_LEN).to_vec();

    // Sidebar peeks at the first four column-block articles without
    // consuming them.
    let column_start = LEAD_LEN + SLIDER_LEN;
    let sidebar = window(articles, column_start, column_start + SIDEBAR_LEN).to_vec();
    let columns = column_block(window(articles, column_start, column_start + COLUMN_LEN));

    let mut pages = vec![LayoutPage {
        lead: Some(lead),
        slider,
        sidebar,
        columns,
    }];

    let rest = window(articles, column_start + COLUMN_LEN, articles.len());
    for chunk in rest.chunks(COLUMN_LEN) {
        pages.push(LayoutPage {
            columns: column_block(chunk),
            ..LayoutPage::default()
        });
    }

    pages
}

/// Manifest output from the layout stage: the partitioned page sequence plus
/// the normalized collections the generate stage still needs (article pages,
/// category pages, footer). Written to `layout.json` between stages.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub pages: Vec<LayoutPage>,
    pub articles: Vec<Article>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub config: SiteConfig,
}

impl Manifest {
    /// Partition the loaded feeds into the layout manifest.
    pub fn build(feeds: Feeds) -> Self {
        Self {
            pages: paginate(&feeds.articles),
            articles: feeds.articles,
            categories: feeds.categories,
            tags: feeds.tags,
            config: feeds.config,
        }
    }
}

/// Clamped subslice. Out-of-range bounds collapse to an empty window.
fn window(articles: &[Article], from: usize, to: usize) -> &[Article] {
    let from = from.min(articles.len());
    let to = to.min(articles.len());
    &articles[from..to]
}

/// Partition one ≤11-article window into column slots. Empty windows produce
/// no block at all.
fn column_block(window: &[Article]) -> Option<ColumnBlock> {
    if window.is_empty() {
        return None;
    }
    let slice = |from: usize, to: usize| -> Vec<Article> {
        window[from.min(window.len())..to.min(window.len())].to_vec()
    };
    Some(ColumnBlock {
        left_lead: window.first().cloned(),
        left_briefs: slice(1, 4),
        center_feature: window.get(4).cloned(),
        center_briefs: slice(5, 7),
        right_lead: window.get(7).cloned(),
        right_briefs: slice(8, 11),
    })
}
