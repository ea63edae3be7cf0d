//! Category/tag reference resolution and the two-level category tree.
//!
//! Articles reference categories and tags either by bare id or by inline
//! object (see [`TaxonomyRef`]). Resolution turns a reference sequence into
//! display names against a lookup table, preserving order and silently
//! dropping anything unresolved — a shorter output than input is normal.
//!
//! Categories form a forest at most two levels deep: roots (no parent) and
//! their direct children. Deeper nesting is not modeled; a grandchild whose
//! parent id matches no root simply doesn't appear in the tree.

use crate::types::{Article, Category, Tag, TaxonomyRef};
use serde::Serialize;

/// Lookup-table entry: anything with a key to match bare ids against and a
/// display name. Categories key on `_id`, tags on `id`; the trait hides that
/// difference from [`resolve_names`].
pub trait Keyed {
    fn key(&self) -> &str;
    fn name(&self) -> &str;
}

impl Keyed for Category {
    fn key(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Keyed for Tag {
    fn key(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

/// Resolve references to display names against a lookup table.
///
/// Bare ids are looked up by key; inline objects carrying a name contribute
/// it without touching the table; inline objects without a name act like a
/// bare id. Unknown ids are dropped. Duplicate references produce duplicate
/// names — no deduplication happens here.
pub fn resolve_names<T: Keyed>(refs: &[TaxonomyRef], table: &[T]) -> Vec<String> {
    let lookup = |id: &str| {
        table
            .iter()
            .find(|entry| entry.key() == id)
            .map(|entry| entry.name().to_string())
    };
    refs.iter()
        .filter_map(|r| match r {
            TaxonomyRef::Id(id) => lookup(id),
            TaxonomyRef::Inline(inline) => match &inline.name {
                Some(name) => Some(name.clone()),
                None => inline.id.as_deref().and_then(|id| lookup(id)),
            },
        })
        .collect()
}

/// A root category with its direct children.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryNode {
    pub category: Category,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Category>,
}

/// Build the two-level category forest, in source order.
pub fn category_tree(categories: &[Category]) -> Vec<CategoryNode> {
    categories
        .iter()
        .filter(|c| c.is_root())
        .map(|root| CategoryNode {
            category: root.clone(),
            children: categories
                .iter()
                .filter(|c| c.parent_id.as_deref() == Some(root.id.as_str()))
                .cloned()
                .collect(),
        })
        .collect()
}

/// Whether an article references the given category.
///
/// Bare refs match on id; inline refs match on id or slug (feeds that embed
/// objects don't always carry the id through).
pub fn in_category(article: &Article, category: &Category) -> bool {
    article.category_refs.iter().any(|r| match r {
        TaxonomyRef::Id(id) => *id == category.id,
        TaxonomyRef::Inline(inline) => {
            inline.id.as_deref() == Some(category.id.as_str())
                || inline.slug.as_deref() == Some(category.slug.as_str())
        }
    })
}
