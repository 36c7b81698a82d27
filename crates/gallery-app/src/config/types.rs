//! Configuration types for Photo Gallery
//!
//! Defines `Settings` and its sections, all of which fall back to defaults
//! field by field when missing from `.gallery/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use gallery_core::OrderKey;

/// Application settings (.gallery/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub gallery: GallerySettings,

    #[serde(default)]
    pub translation: TranslationSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Which collection to show and how to order it first
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GallerySettings {
    /// Collection name, resolved to `<collections_dir>/<collection>.json`
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Directory holding collection documents, relative to the project root
    #[serde(default = "default_collections_dir")]
    pub collections_dir: PathBuf,

    /// Ordering applied on first render
    #[serde(default)]
    pub default_order: OrderKey,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            collection: default_collection(),
            collections_dir: default_collections_dir(),
            default_order: OrderKey::Date,
        }
    }
}

impl GallerySettings {
    pub fn collections_path(&self, base: &Path) -> PathBuf {
        resolve(base, &self.collections_dir)
    }
}

fn default_collection() -> String {
    "gallery".to_string()
}

fn default_collections_dir() -> PathBuf {
    PathBuf::from("collections")
}

/// Dictionary location and language selection
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TranslationSettings {
    /// Visitor language; empty means negotiate from the environment
    #[serde(default)]
    pub language: String,

    /// Language consulted for codes the visitor's dictionary lacks
    #[serde(default = "default_fallback_language")]
    pub fallback_language: String,

    /// Directory holding `<lang>.json` dictionaries
    #[serde(default = "default_dictionary_dir")]
    pub dictionary_dir: PathBuf,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            language: String::new(),
            fallback_language: default_fallback_language(),
            dictionary_dir: default_dictionary_dir(),
        }
    }
}

impl TranslationSettings {
    pub fn dictionary_path(&self, base: &Path) -> PathBuf {
        resolve(base, &self.dictionary_dir)
    }

    /// Configured language, if one is set
    pub fn configured_language(&self) -> Option<&str> {
        let lang = self.language.trim();
        (!lang.is_empty()).then_some(lang)
    }
}

fn default_fallback_language() -> String {
    "en".to_string()
}

fn default_dictionary_dir() -> PathBuf {
    PathBuf::from("dictionary")
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show item descriptions on cards and in the detail overlay
    #[serde(default = "default_true")]
    pub show_descriptions: bool,

    /// Show item locations on cards
    #[serde(default = "default_true")]
    pub show_location: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_descriptions: true,
            show_location: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn resolve(base: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        base.join(dir)
    }
}
