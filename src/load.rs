//! Feed loading and normalization.
//!
//! Stage 1 input for the frontpage pipeline. Reads the exported JSON feeds
//! from the content root and produces the normalized in-memory collections
//! the layout consumes:
//!
//! ```text
//! content/
//! ├── config.toml         # Site configuration (optional)
//! ├── articles.json       # Article feed
//! ├── categories.json     # Category feed
//! └── tags.json           # Tag feed
//! ```
//!
//! ## Envelope Normalization
//!
//! Backends disagree on feed shape. Each file may be a bare JSON array or an
//! envelope object, all accepted uniformly:
//!
//! ```text
//! [ ... ]
//! { "data": [ ... ] }
//! { "articles": [ ... ] }   (likewise "posts", "categories", "tags")
//! ```
//!
//! ## Normalization Rules
//!
//! - Only `published` articles survive; drafts are counted for reporting.
//! - Articles are ordered newest-first (`created_at` descending); the feed
//!   order breaks ties.
//! - A missing feed file is an empty collection, not an error. Malformed
//!   JSON is an error — silent data loss is worse than a failed build.

use crate::config::{self, SiteConfig};
use crate::types::{Article, Category, Status, Tag};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Malformed feed {0}: {1}")]
    Feed(PathBuf, serde_json::Error),
}

/// Normalized output of the load stage.
#[derive(Debug)]
pub struct Feeds {
    /// Published articles, newest first.
    pub articles: Vec<Article>,
    /// Articles excluded by the status filter.
    pub drafts: usize,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub config: SiteConfig,
}

/// Load and normalize all feeds from the content root.
pub fn load(root: &Path) -> Result<Feeds, LoadError> {
    let raw: Vec<Article> = read_feed(&root.join("articles.json"), &["data", "articles", "posts"])?;
    let categories = read_feed(&root.join("categories.json"), &["data", "categories"])?;
    let tags = read_feed(&root.join("tags.json"), &["data", "tags"])?;
    let config = config::load_config(root)?;

    let total = raw.len();
    let mut articles: Vec<Article> = raw
        .into_iter()
        .filter(|a| a.status == Status::Published)
        .collect();
    let drafts = total - articles.len();
    articles.sort_by_key(|a| Reverse(a.created_at));

    Ok(Feeds {
        articles,
        drafts,
        categories,
        tags,
        config,
    })
}

/// Read one feed file, unwrapping any known envelope shape. A missing file
/// yields an empty collection.
fn read_feed<T: DeserializeOwned>(path: &Path, envelope_keys: &[&str]) -> Result<Vec<T>, LoadError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    let value: Value =
        serde_json::from_str(&content).map_err(|e| LoadError::Feed(path.to_path_buf(), e))?;
    let items = unwrap_envelope(value, envelope_keys);
    serde_json::from_value(items).map_err(|e| LoadError::Feed(path.to_path_buf(), e))
}

/// Bare arrays pass through; envelope objects are unwrapped at the first
/// known key holding an array. Anything else normalizes to an empty list.
fn unwrap_envelope(value: Value, keys: &[&str]) -> Value {
    match value {
        Value::Array(_) => value,
        Value::Object(mut map) => keys
            .iter()
            .find_map(|k| match map.remove(*k) {
                Some(inner @ Value::Array(_)) => Some(inner),
                _ => None,
            })
            .unwrap_or_else(|| Value::Array(Vec::new())),
        _ => Value::Array(Vec::new()),
    }
}
