//! # Frontpage
//!
//! A minimal static front-page generator for newsroom article feeds. Your
//! exported JSON feeds are the data source: articles become stories placed
//! into a newspaper-style zone layout, categories become navigation and
//! section pages, and everything renders to plain HTML.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Frontpage processes content through two independent stages, connected by
//! a JSON manifest:
//!
//! ```text
//! 1. Layout    content/    →  layout.json   (feeds → partitioned zones)
//! 2. Generate  layout.json →  dist/         (final HTML site)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the layout manifest is human-readable JSON you can
//!   inspect to see exactly which story landed in which zone.
//! - **Decoupling**: the partitioning logic never touches HTML; any renderer
//!   can consume the manifest.
//! - **Testability**: each stage is a pure function over plain data, so unit
//!   tests exercise the layout algorithm without rendering a single tag.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`load`] | reads and normalizes the JSON feeds (envelope unwrapping, publish filter, ordering) |
//! | [`layout`] | the core partitioner — slices the article list into hero/secondary/slider/sidebar/column zones |
//! | [`content`] | per-article helpers: display-image resolution and plain-text excerpts |
//! | [`taxonomy`] | category/tag reference resolution and the two-level category tree |
//! | [`generate`] | renders the manifest to the final HTML site using Maud |
//! | [`config`] | `config.toml` loading and validation |
//! | [`types`] | shared types serialized between stages (`Article`, `Category`, `Tag`) |
//! | [`output`] | CLI output formatting — information-first display of pipeline results |
//!
//! # Design Decisions
//!
//! ## The Layout Is a Pure Function
//!
//! [`layout::paginate`] owns no state: it maps an ordered article list to a
//! page sequence and nothing else. Status filtering, ordering, and category
//! restriction all happen *before* it runs, so the same function drives the
//! front page and every category page. When the feed changes, the whole
//! layout is rebuilt — there is no incremental update to get wrong.
//!
//! ## The Sidebar Peeks
//!
//! The front page's "latest news" sidebar previews the first four column
//! stories without consuming them; the same stories keep their slots in the
//! columns below. Category pages do the opposite — their latest-news strip
//! consumes. Both behaviors are the product's, documented in [`layout`].
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system: malformed markup is a build error, interpolation is
//! auto-escaped, and there is no template directory to ship or get out of
//! sync. The one `PreEscaped` in the codebase is the article body, which is
//! the newsroom's own trusted rich text.
//!
//! ## Feeds Over Fetches
//!
//! Frontpage never talks to a network. Retrieval, retries, and backoff
//! belong to whatever exports the feeds; the loader reads local JSON and
//! treats a missing file as an empty collection. A feed that fails to export
//! produces an empty (but valid) site, never a crashed build.

pub mod config;
pub mod content;
pub mod generate;
pub mod layout;
pub mod load;
pub mod output;
pub mod taxonomy;
pub mod types;
