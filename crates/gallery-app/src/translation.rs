//! Dictionary-based translation of display codes
//!
//! Group headers and ordering-control captions are resolved through the
//! [`Translator`] seam. The shipped implementation, [`Dictionary`], reads one
//! JSON document per language from the dictionary directory:
//!
//! ```json
//! { "groupings": { "category-street": "Street" }, "orderings.category": "Theme" }
//! ```
//!
//! Nested objects and flat dotted keys may be mixed; both flatten to the same
//! code space (`groupings.category-street`, `orderings.category`).

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;

use serde_json::Value;

use gallery_core::prelude::*;

/// Environment variable that overrides the visitor's language
pub const LANGUAGE_ENV_VAR: &str = "GALLERY_LANG";

/// Wrap an unresolved code so it stands out in the rendered gallery
pub fn fallback_label(code: &str) -> String {
    format!("[[{}]]", code)
}

/// Whether a label is the visibly flagged fallback for an unknown code
pub fn is_fallback_label(label: &str) -> bool {
    label.starts_with("[[") && label.ends_with("]]")
}

/// Maps codes to localized display strings
#[cfg_attr(test, mockall::automock)]
pub trait Translator: Send + Sync {
    /// Resolve `code`, or `None` when no dictionary knows it
    fn lookup(&self, code: &str) -> Option<String>;

    /// Resolve `code`, substituting a flagged fallback for unknown codes
    fn translate(&self, code: &str) -> String;
}

// ─────────────────────────────────────────────────────────────────────────────
// Dictionary
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory dictionary for one language with an optional fallback language
#[derive(Debug, Default)]
pub struct Dictionary {
    language: String,
    entries: HashMap<String, String>,
    fallback: HashMap<String, String>,
    /// Codes already reported as missing, so each warns once
    reported: Mutex<HashSet<String>>,
}

impl Dictionary {
    pub fn empty(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }

    /// Build a dictionary from a JSON document
    pub fn from_json(language: impl Into<String>, json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let mut entries = HashMap::new();
        flatten_into(None, &value, &mut entries);
        Ok(Self {
            language: language.into(),
            entries,
            ..Self::default()
        })
    }

    /// Use `fallback`'s entries for codes this dictionary lacks
    pub fn with_fallback(mut self, fallback: Dictionary) -> Self {
        self.fallback = fallback.entries;
        self
    }

    /// Load `<dir>/<language>.json`, falling back to `<dir>/<fallback>.json`
    ///
    /// Never fails: a missing or malformed file yields an empty dictionary and
    /// a warning, so every label renders as a flagged fallback instead.
    pub async fn load(dir: &Path, language: &str, fallback_language: &str) -> Self {
        let primary = Self::load_file(dir, language).await;
        if fallback_language == language {
            return primary;
        }
        let fallback = Self::load_file(dir, fallback_language).await;
        primary.with_fallback(fallback)
    }

    async fn load_file(dir: &Path, language: &str) -> Self {
        let path = dir.join(format!("{}.json", language));
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => match Self::from_json(language, &content) {
                Ok(dict) => {
                    debug!("Loaded {} entries from {:?}", dict.len(), path);
                    dict
                }
                Err(e) => {
                    warn!("Failed to parse dictionary {:?}: {}", path, e);
                    Self::empty(language)
                }
            },
            Err(e) => {
                warn!("Failed to read dictionary {:?}: {}", path, e);
                Self::empty(language)
            }
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Dictionary {
    fn lookup(&self, code: &str) -> Option<String> {
        self.entries
            .get(code)
            .or_else(|| self.fallback.get(code))
            .cloned()
    }

    fn translate(&self, code: &str) -> String {
        if let Some(label) = self.lookup(code) {
            return label;
        }
        if let Ok(mut reported) = self.reported.lock() {
            if reported.insert(code.to_string()) {
                warn!(
                    "No translation for '{}' in language '{}'",
                    code, self.language
                );
            }
        }
        fallback_label(code)
    }
}

/// Flatten nested objects into dotted codes; scalars are stringified
fn flatten_into(prefix: Option<&str>, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let code = match prefix {
                    Some(p) => format!("{}.{}", p, key),
                    None => key.clone(),
                };
                flatten_into(Some(&code), child, out);
            }
        }
        Value::String(s) => {
            if let Some(code) = prefix {
                out.insert(code.to_string(), s.clone());
            }
        }
        Value::Number(_) | Value::Bool(_) => {
            if let Some(code) = prefix {
                out.insert(code.to_string(), value.to_string());
            }
        }
        Value::Null | Value::Array(_) => {}
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Language Negotiation
// ─────────────────────────────────────────────────────────────────────────────

/// Pick the visitor's language from configuration and the environment
///
/// Priority: configured language, `GALLERY_LANG`, the language part of
/// `LANG`, then `fallback`.
pub fn negotiate_language(configured: Option<&str>, fallback: &str) -> String {
    negotiate_language_from(
        configured,
        std::env::var(LANGUAGE_ENV_VAR).ok().as_deref(),
        std::env::var("LANG").ok().as_deref(),
        fallback,
    )
}

fn negotiate_language_from(
    configured: Option<&str>,
    gallery_lang: Option<&str>,
    lang: Option<&str>,
    fallback: &str,
) -> String {
    let from_locale = lang.and_then(|l| {
        let code: String = l.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
        if code.len() == 2 {
            Some(code.to_ascii_lowercase())
        } else {
            None
        }
    });

    configured
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().to_string())
        .or_else(|| {
            gallery_lang
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.trim().to_string())
        })
        .or(from_locale)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const EN: &str = r#"{
        "groupings": { "category-street": "Street", "category-food": "Food" },
        "orderings.category": "Theme",
        "count": 3
    }"#;

    #[test]
    fn test_nested_and_flat_keys_flatten() {
        let dict = Dictionary::from_json("en", EN).unwrap();
        assert_eq!(dict.lookup("groupings.category-street").as_deref(), Some("Street"));
        assert_eq!(dict.lookup("orderings.category").as_deref(), Some("Theme"));
        assert_eq!(dict.lookup("count").as_deref(), Some("3"));
        assert_eq!(dict.len(), 4);
    }

    #[test]
    fn test_unknown_code_is_flagged() {
        let dict = Dictionary::from_json("en", EN).unwrap();
        let label = dict.translate("groupings.category-night");
        assert_eq!(label, "[[groupings.category-night]]");
        assert!(is_fallback_label(&label));
        // Second miss returns the same fallback without failing
        assert_eq!(dict.translate("groupings.category-night"), label);
    }

    #[test]
    fn test_fallback_language_fills_gaps() {
        let fr = Dictionary::from_json("fr", r#"{"groupings.category-food": "Cuisine"}"#)
            .unwrap()
            .with_fallback(Dictionary::from_json("en", EN).unwrap());

        assert_eq!(fr.translate("groupings.category-food"), "Cuisine");
        assert_eq!(fr.translate("groupings.category-street"), "Street");
        assert_eq!(fr.language(), "fr");
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(Dictionary::from_json("en", "{{").is_err());
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let temp = tempdir().unwrap();
        let dict = Dictionary::load(temp.path(), "de", "de").await;
        assert!(dict.is_empty());
        assert_eq!(dict.translate("orderings.date"), "[[orderings.date]]");
    }

    #[tokio::test]
    async fn test_load_with_fallback_file() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("en.json"), EN).unwrap();
        std::fs::write(
            temp.path().join("pt.json"),
            r#"{"groupings": {"category-street": "Rua"}}"#,
        )
        .unwrap();

        let dict = Dictionary::load(temp.path(), "pt", "en").await;
        assert_eq!(dict.translate("groupings.category-street"), "Rua");
        assert_eq!(dict.translate("groupings.category-food"), "Food");
    }

    #[test]
    fn test_negotiation_priority() {
        assert_eq!(
            negotiate_language_from(Some("fr"), Some("de"), Some("pt_BR.UTF-8"), "en"),
            "fr"
        );
        assert_eq!(
            negotiate_language_from(None, Some("de"), Some("pt_BR.UTF-8"), "en"),
            "de"
        );
        assert_eq!(
            negotiate_language_from(Some("  "), None, Some("pt_BR.UTF-8"), "en"),
            "pt"
        );
        assert_eq!(negotiate_language_from(None, None, Some("C"), "en"), "en");
        assert_eq!(negotiate_language_from(None, None, None, "en"), "en");
    }
}
