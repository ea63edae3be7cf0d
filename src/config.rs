//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the content root. All
//! options have stock defaults; user files are sparse overrides:
//!
//! ```toml
//! [site]
//! title = "The Morning Post"
//! tagline = "News that matters"
//!
//! [images]
//! placeholder = "https://placehold.co/600x400?text=No+Image"
//!
//! [excerpts]
//! words = 15        # sidebar, slider, secondary stories
//! hero_words = 40   # hero story
//!
//! [footer]
//! about = "..."     # about-us paragraph
//! copyright = "..."
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub images: ImagesSection,
    pub excerpts: ExcerptsSection,
    pub footer: FooterSection,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation("site.title must not be empty".into()));
        }
        if self.excerpts.words == 0 || self.excerpts.hero_words == 0 {
            return Err(ConfigError::Validation(
                "excerpts.words and excerpts.hero_words must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Masthead settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Site name shown in the masthead and page titles.
    pub title: String,
    /// Short line under the masthead. Empty hides it.
    pub tagline: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "The Daily Edition".to_string(),
            tagline: String::new(),
        }
    }
}

/// Image fallback settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesSection {
    /// URL substituted when an article resolves to no image at all.
    pub placeholder: String,
}

impl Default for ImagesSection {
    fn default() -> Self {
        Self {
            placeholder: "https://placehold.co/600x400?text=No+Image".to_string(),
        }
    }
}

/// Excerpt word budgets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExcerptsSection {
    /// Budget for sidebar, slider, and secondary stories.
    pub words: usize,
    /// Budget for the hero story.
    pub hero_words: usize,
}

impl Default for ExcerptsSection {
    fn default() -> Self {
        Self {
            words: crate::content::EXCERPT_WORDS,
            hero_words: 40,
        }
    }
}

/// Footer content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterSection {
    /// About-us paragraph. The stock text is used when empty.
    pub about: String,
    /// Copyright line. The site title is used when empty.
    pub copyright: String,
}

impl Default for FooterSection {
    fn default() -> Self {
        Self {
            about: String::new(),
            copyright: String::new(),
        }
    }
}

/// Load `config.toml` from the content root, falling back to defaults when
/// the file doesn't exist.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("config.toml");
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A documented stock `config.toml`, printed by `frontpage gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = SiteConfig::default();
    format!(
        r#"# frontpage configuration
# All options are optional - defaults shown below.

[site]
# Site name shown in the masthead and page titles
title = {title:?}
# Short line under the masthead (empty = hidden)
tagline = {tagline:?}

[images]
# Substituted when an article has no image of its own
placeholder = {placeholder:?}

[excerpts]
# Word budget for sidebar, slider, and secondary stories
words = {words}
# Word budget for the hero story
hero_words = {hero_words}

[footer]
# About-us paragraph (empty = stock text)
about = ""
# Copyright line (empty = site title)
copyright = ""
"#,
        title = defaults.site.title,
        tagline = defaults.site.tagline,
        placeholder = defaults.images.placeholder,
        words = defaults.excerpts.words,
        hero_words = defaults.excerpts.hero_words,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.title, "The Daily Edition");
        assert_eq!(config.excerpts.words, 15);
        assert_eq!(config.excerpts.hero_words, 40);
    }

    #[test]
    fn sparse_override_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[site]\ntitle = \"Morning Post\"\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.title, "Morning Post");
        assert_eq!(config.excerpts.words, 15);
        assert!(config.images.placeholder.contains("placehold.co"));
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[site]\ntitel = \"typo\"\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn zero_word_budget_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[excerpts]\nwords = 0\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn stock_config_parses_back() {
        let stock = stock_config_toml();
        let config: SiteConfig = toml::from_str(&stock).unwrap();
        config.validate().unwrap();
    }
}
