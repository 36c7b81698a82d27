//! Gallery items and the collections that hold them
//!
//! Collections are described by JSON documents:
//!
//! ```json
//! {
//!   "groupings": ["category", "country"],
//!   "items": [
//!     {
//!       "date": "2021-06-01",
//!       "date_display": "1 June 2021",
//!       "location": "Lisbon",
//!       "description": "Tram 28",
//!       "file": "lisbon/tram.jpg",
//!       "category": "street",
//!       "country": "pt"
//!     }
//!   ]
//! }
//! ```
//!
//! A bare array of items is also accepted; it carries no grouping keys.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::{OrderKey, DATE_KEY};

/// Value substituted when an item has no value for a grouping key
pub const UNKNOWN_GROUP_VALUE: &str = "unknown";

// ─────────────────────────────────────────────────────────────────────────────
// Item
// ─────────────────────────────────────────────────────────────────────────────

/// A single photo (or other media) record of a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Primary timestamp (`YYYY-MM-DD`, RFC 3339, or `YYYY-MM-DDTHH:MM:SS`)
    pub date: String,

    /// Human-readable date shown to the visitor
    #[serde(default, alias = "dateString")]
    pub date_display: Option<String>,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub description: String,

    /// Media file reference, relative to the collection
    #[serde(default)]
    pub file: String,

    /// Remaining fields; grouping keys are looked up here
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,

    /// Display label derived for the current ordering (never persisted)
    #[serde(skip)]
    pub translated_group: Option<String>,
}

impl Item {
    /// Create an item dated `date` with empty descriptive fields
    pub fn new(date: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            date_display: None,
            location: String::new(),
            description: String::new(),
            file: file.into(),
            fields: BTreeMap::new(),
            translated_group: None,
        }
    }

    /// Builder-style helper for setting a grouping-key field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Milliseconds since the Unix epoch, or `None` when the date is unparseable
    pub fn timestamp_millis(&self) -> Option<i64> {
        parse_timestamp_millis(&self.date)
    }

    /// The year portion of the date (its first four characters)
    pub fn year(&self) -> &str {
        match self.date.char_indices().nth(4) {
            Some((idx, _)) => &self.date[..idx],
            None => &self.date,
        }
    }

    /// Date string shown in the gallery
    pub fn display_date(&self) -> &str {
        self.date_display.as_deref().unwrap_or(&self.date)
    }

    /// Stringified value of a grouping-key field
    ///
    /// The named fields (`location`, `description`, `file`, `date_display`)
    /// are checked first, then the remaining fields. Scalars are stringified;
    /// missing, empty, null, and structured values map to
    /// [`UNKNOWN_GROUP_VALUE`].
    pub fn group_value(&self, key: &str) -> String {
        let named = match key {
            "location" => Some(self.location.as_str()),
            "description" => Some(self.description.as_str()),
            "file" => Some(self.file.as_str()),
            "date_display" | "dateString" => self.date_display.as_deref(),
            _ => None,
        };
        if let Some(value) = named {
            return if value.is_empty() {
                UNKNOWN_GROUP_VALUE.to_string()
            } else {
                value.to_string()
            };
        }

        match self.fields.get(key) {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => UNKNOWN_GROUP_VALUE.to_string(),
        }
    }

    /// Current derived group label, empty when none has been computed
    pub fn group_label(&self) -> &str {
        self.translated_group.as_deref().unwrap_or("")
    }
}

/// Parse the accepted date layouts into epoch milliseconds
pub fn parse_timestamp_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc().timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

// ─────────────────────────────────────────────────────────────────────────────
// Collection
// ─────────────────────────────────────────────────────────────────────────────

/// A named, ordered set of items plus the grouping keys valid for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    pub name: String,
    pub items: Vec<Item>,
    /// Valid grouping keys, in declaration order, without duplicates
    pub groupings: Vec<String>,
}

/// On-disk shapes accepted for a collection document
#[derive(Deserialize)]
#[serde(untagged)]
enum CollectionDocument {
    Full {
        items: Vec<Item>,
        #[serde(default)]
        groupings: Vec<String>,
    },
    Bare(Vec<Item>),
}

impl Collection {
    pub fn new(name: impl Into<String>, items: Vec<Item>, groupings: Vec<String>) -> Self {
        let mut deduped: Vec<String> = Vec::with_capacity(groupings.len());
        for key in groupings {
            let key = key.trim().to_string();
            if key.is_empty() || key.eq_ignore_ascii_case(DATE_KEY) || deduped.contains(&key) {
                continue;
            }
            deduped.push(key);
        }
        Self {
            name: name.into(),
            items,
            groupings: deduped,
        }
    }

    /// Parse a collection document
    pub fn from_json(name: &str, json: &str) -> Result<Self> {
        let doc: CollectionDocument = serde_json::from_str(json)
            .map_err(|e| Error::collection_parse(name, e.to_string()))?;
        Ok(match doc {
            CollectionDocument::Full { items, groupings } => Self::new(name, items, groupings),
            CollectionDocument::Bare(items) => Self::new(name, items, Vec::new()),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_grouping(&self, key: &str) -> bool {
        self.groupings.iter().any(|g| g == key)
    }

    /// Whether `key` names an ordering this collection supports
    pub fn supports(&self, key: &OrderKey) -> bool {
        match key {
            OrderKey::Date => true,
            OrderKey::Group(name) => self.has_grouping(name),
        }
    }

    /// All ordering controls: the date key first, then the grouping keys
    pub fn order_keys(&self) -> Vec<OrderKey> {
        std::iter::once(OrderKey::Date)
            .chain(self.groupings.iter().cloned().map(OrderKey::Group))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let json = r#"{
            "groupings": ["category", "date", "category", "country"],
            "items": [
                {"date": "2021-06-01", "dateString": "June 2021", "file": "a.jpg",
                 "category": "street", "country": "pt"}
            ]
        }"#;
        let collection = Collection::from_json("travel", json).unwrap();

        assert_eq!(collection.name, "travel");
        assert_eq!(collection.groupings, vec!["category", "country"]);
        assert_eq!(collection.len(), 1);

        let item = &collection.items[0];
        assert_eq!(item.display_date(), "June 2021");
        assert_eq!(item.group_value("category"), "street");
        assert!(item.translated_group.is_none());
    }

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[{"date": "2020-01-01", "file": "x.jpg"}]"#;
        let collection = Collection::from_json("misc", json).unwrap();
        assert!(collection.groupings.is_empty());
        assert_eq!(collection.items[0].display_date(), "2020-01-01");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = Collection::from_json("broken", "{\"items\": 3}").unwrap_err();
        assert!(matches!(err, Error::CollectionParse { .. }));
    }

    #[test]
    fn test_group_value_stringifies_scalars() {
        let item = Item::new("2020-01-01", "a.jpg")
            .with_field("rating", 4)
            .with_field("favourite", true)
            .with_field("empty", "")
            .with_field("tags", serde_json::json!(["a", "b"]));

        assert_eq!(item.group_value("rating"), "4");
        assert_eq!(item.group_value("favourite"), "true");
        assert_eq!(item.group_value("empty"), UNKNOWN_GROUP_VALUE);
        assert_eq!(item.group_value("tags"), UNKNOWN_GROUP_VALUE);
        assert_eq!(item.group_value("missing"), UNKNOWN_GROUP_VALUE);
    }

    #[test]
    fn test_group_value_reads_named_fields() {
        let json = r#"{
            "groupings": ["location"],
            "items": [
                {"date": "2021-06-01", "file": "a.jpg", "location": "Lisbon"},
                {"date": "2019-04-02", "file": "b.jpg", "location": "Kyoto"},
                {"date": "2018-01-01", "file": "c.jpg"}
            ]
        }"#;
        let collection = Collection::from_json("travel", json).unwrap();
        let values: Vec<String> = collection
            .items
            .iter()
            .map(|i| i.group_value("location"))
            .collect();

        assert_eq!(values, vec!["Lisbon", "Kyoto", UNKNOWN_GROUP_VALUE]);
        assert_eq!(collection.items[0].group_value("file"), "a.jpg");
        assert_eq!(collection.items[0].group_value("dateString"), UNKNOWN_GROUP_VALUE);
    }

    #[test]
    fn test_year_truncates_date() {
        assert_eq!(Item::new("2019-08-14", "a").year(), "2019");
        assert_eq!(Item::new("201", "a").year(), "201");
        assert_eq!(Item::new("2019-08-14T10:00:00Z", "a").year(), "2019");
    }

    #[test]
    fn test_timestamp_layouts() {
        let day = parse_timestamp_millis("2020-01-01").unwrap();
        let midnight = parse_timestamp_millis("2020-01-01T00:00:00").unwrap();
        let rfc = parse_timestamp_millis("2020-01-01T00:00:00Z").unwrap();
        assert_eq!(day, midnight);
        assert_eq!(day, rfc);
        assert!(parse_timestamp_millis("2020-01-02").unwrap() > day);
        assert!(parse_timestamp_millis("last summer").is_none());
    }

    #[test]
    fn test_order_keys_start_with_date() {
        let collection = Collection::new(
            "travel",
            Vec::new(),
            vec!["category".into(), "country".into()],
        );
        let keys = collection.order_keys();
        assert_eq!(keys[0], OrderKey::Date);
        assert_eq!(keys[1], OrderKey::group("category"));
        assert!(collection.supports(&OrderKey::group("country")));
        assert!(!collection.supports(&OrderKey::group("colour")));
        assert!(collection.supports(&OrderKey::Date));
    }
}
