//! Sort/Group engine
//!
//! Orders a collection's items for a [`SortSpec`] and derives the group label
//! of every item:
//!
//! 1. The requested spec is resolved against the collection's grouping keys.
//!    An unknown key falls back to the date key without grouping.
//! 2. Every item receives a `translated_group` label: the year for the date
//!    key, otherwise the translation of `groupings.<key>-<value>`.
//! 3. Items are stably sorted: by label (locale-aware, along `direction`),
//!    then chronologically (along `secondary` for grouping keys, along
//!    `direction` for the date key).
//! 4. When grouping is requested, contiguous runs of equal labels become
//!    [`GroupRun`]s; otherwise the whole sequence is a single unlabeled run.

use std::cmp::Ordering;
use std::ops::Range;

use gallery_core::prelude::*;
use gallery_core::{Item, OrderKey, SortSpec};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::translation::Translator;

/// Translation namespace for group labels
pub const GROUP_CODE_NAMESPACE: &str = "groupings";

/// Composite translation code for an item's value at a grouping key
pub fn group_code(key: &str, value: &str) -> String {
    format!("{}.{}-{}", GROUP_CODE_NAMESPACE, key, value)
}

/// A contiguous run of items sharing one group label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRun {
    /// Header label, `None` for the single run of an ungrouped view
    pub label: Option<String>,
    /// Positions of the run's items in the ordered sequence
    pub range: Range<usize>,
}

impl GroupRun {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Result of ordering a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordered {
    /// The spec actually applied (after falling back from unknown keys)
    pub spec: SortSpec,
    /// Group runs covering the ordered items in sequence
    pub runs: Vec<GroupRun>,
}

/// Resolve `requested` against the grouping keys a collection declares
///
/// An unknown grouping key is not an error: the view falls back to date
/// ordering in the requested direction, without grouping.
pub fn effective_spec(requested: &SortSpec, groupings: &[String]) -> SortSpec {
    match &requested.order {
        OrderKey::Group(name) if !groupings.iter().any(|g| g == name) => {
            warn!(
                "Ordering '{}' is not offered by this collection, using date",
                name
            );
            SortSpec {
                order: OrderKey::Date,
                direction: requested.direction,
                grouped: false,
                secondary: requested.direction,
            }
        }
        _ => requested.clone(),
    }
}

/// Order `items` in place for `requested` and compute group runs
///
/// Overwrites each item's `translated_group`. The original order of `items`
/// is not preserved.
pub fn apply(
    items: &mut [Item],
    requested: &SortSpec,
    groupings: &[String],
    translator: &dyn Translator,
) -> Ordered {
    let spec = effective_spec(requested, groupings);

    derive_labels(items, &spec.order, translator);
    items.sort_by(|a, b| compare(a, b, &spec));

    let runs = if spec.grouped {
        group_runs(items)
    } else {
        single_run(items.len())
    };

    debug!(
        "Ordered {} items by {} {} (grouped: {}, {} runs)",
        items.len(),
        spec.order,
        spec.direction,
        spec.grouped,
        runs.len()
    );

    Ordered { spec, runs }
}

/// Compute the display label of every item for `order`
///
/// Runs over all items before sorting; the comparator depends on it.
pub fn derive_labels(items: &mut [Item], order: &OrderKey, translator: &dyn Translator) {
    for item in items.iter_mut() {
        let label = match order {
            OrderKey::Date => item.year().to_string(),
            OrderKey::Group(key) => translator.translate(&group_code(key, &item.group_value(key))),
        };
        item.translated_group = Some(label);
    }
}

/// Total order over labeled items for `spec`
pub fn compare(a: &Item, b: &Item, spec: &SortSpec) -> Ordering {
    if spec.order.is_date() {
        return spec.direction.apply(compare_dates(a, b));
    }

    match locale_compare(a.group_label(), b.group_label()) {
        Ordering::Equal => spec.secondary.apply(compare_dates(a, b)),
        by_label => spec.direction.apply(by_label),
    }
}

/// Chronological comparison; unparseable dates sort before parseable ones
pub fn compare_dates(a: &Item, b: &Item) -> Ordering {
    a.timestamp_millis().cmp(&b.timestamp_millis())
}

/// Locale-aware string comparison
///
/// Letters compare with accents and case folded away first, so `Égypte`
/// sorts next to `Egypte`. Ties are broken by accents, then lowercase before
/// uppercase at the first differing position, then raw code points.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| {
            a.nfd()
                .flat_map(char::to_lowercase)
                .cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Split an ordered, labeled sequence where `translated_group` changes
pub fn group_runs(items: &[Item]) -> Vec<GroupRun> {
    let mut runs: Vec<GroupRun> = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        let label = item.group_label();
        match runs.last_mut() {
            Some(run) if run.label.as_deref() == Some(label) => run.range.end = idx + 1,
            _ => runs.push(GroupRun {
                label: Some(label.to_string()),
                range: idx..idx + 1,
            }),
        }
    }
    runs
}

fn single_run(len: usize) -> Vec<GroupRun> {
    if len == 0 {
        return Vec::new();
    }
    vec![GroupRun {
        label: None,
        range: 0..len,
    }]
}
