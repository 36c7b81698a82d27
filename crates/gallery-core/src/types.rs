//! Ordering primitives shared by every gallery crate
//!
//! - [`Direction`] - ascending/descending axis
//! - [`OrderKey`] - the distinguished date key or a named grouping key
//! - [`SortSpec`] - the currently applied ordering of a collection view

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of the distinguished date ordering control
pub const DATE_KEY: &str = "date";

// ─────────────────────────────────────────────────────────────────────────────
// Direction
// ─────────────────────────────────────────────────────────────────────────────

/// Sort direction for the primary or secondary axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// The opposite direction
    pub fn flip(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// Orient an ascending comparison result along this direction
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }

    /// Arrow glyph used by ordering controls
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Asc => "↑",
            Direction::Desc => "↓",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => write!(f, "asc"),
            Direction::Desc => write!(f, "desc"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// OrderKey
// ─────────────────────────────────────────────────────────────────────────────

/// Identifier of an ordering control
///
/// Serialized as its plain name (`"date"`, `"category"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderKey {
    /// Chronological ordering on the item's primary timestamp
    #[default]
    Date,
    /// Ordering by the translated label of a grouping-key field
    Group(String),
}

impl OrderKey {
    /// Parse a control name; `"date"` (any case) is the date key
    pub fn parse(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case(DATE_KEY) {
            OrderKey::Date
        } else {
            OrderKey::Group(trimmed.to_string())
        }
    }

    pub fn group(name: impl Into<String>) -> Self {
        OrderKey::Group(name.into())
    }

    pub fn is_date(&self) -> bool {
        matches!(self, OrderKey::Date)
    }

    /// Control name as used in collection files and translation codes
    pub fn name(&self) -> &str {
        match self {
            OrderKey::Date => DATE_KEY,
            OrderKey::Group(name) => name,
        }
    }
}

impl From<String> for OrderKey {
    fn from(value: String) -> Self {
        OrderKey::parse(&value)
    }
}

impl From<&str> for OrderKey {
    fn from(value: &str) -> Self {
        OrderKey::parse(value)
    }
}

impl From<OrderKey> for String {
    fn from(value: OrderKey) -> Self {
        value.name().to_string()
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SortSpec
// ─────────────────────────────────────────────────────────────────────────────

/// The ordering currently applied to a collection view
///
/// `direction` orders groups (or items, for the date key); `secondary` orders
/// items chronologically inside a group. For the date key the two axes
/// collapse into one and `secondary` mirrors `direction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub order: OrderKey,
    pub direction: Direction,
    pub grouped: bool,
    pub secondary: Direction,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(OrderKey::Date)
    }
}

impl SortSpec {
    /// Initial state for a freshly selected control: ascending, ungrouped
    pub fn new(order: OrderKey) -> Self {
        Self {
            order,
            direction: Direction::Asc,
            grouped: false,
            secondary: Direction::Asc,
        }
    }

    /// Re-establish the date-key invariant (`secondary == direction`)
    pub fn normalized(mut self) -> Self {
        if self.order.is_date() {
            self.secondary = self.direction;
        }
        self
    }

    /// The `(direction, grouped)` pair driving the same-key toggle cycle
    pub fn cycle_state(&self) -> (Direction, bool) {
        (self.direction, self.grouped)
    }
}
