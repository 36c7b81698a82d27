//! View assembly - turns an ordered collection into a renderable gallery
//!
//! The assembled [`GalleryView`] is a plain snapshot: ordering controls,
//! then groups of item cards. Every card carries its position in the ordered
//! sequence so the detail navigator can step through it.

use serde::Serialize;

use gallery_core::{Direction, Item, OrderKey, SortSpec};

use crate::sort::Ordered;
use crate::translation::Translator;

/// Translation namespace for ordering-control captions
pub const CONTROL_CODE_NAMESPACE: &str = "orderings";

// ─────────────────────────────────────────────────────────────────────────────
// Render targets
// ─────────────────────────────────────────────────────────────────────────────

/// Containers a gallery renders into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderTarget {
    /// The collection body holding every group
    CollectionBody,
    /// The single-item overlay
    DetailOverlay,
}

impl RenderTarget {
    pub fn selector(&self) -> &'static str {
        match self {
            RenderTarget::CollectionBody => "#collection",
            RenderTarget::DetailOverlay => "#detail-overlay",
        }
    }
}

/// Controls of the detail overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailControl {
    Next,
    Prev,
    Close,
}

impl DetailControl {
    /// Controls in display order
    pub const ALL: [DetailControl; 3] = [
        DetailControl::Prev,
        DetailControl::Next,
        DetailControl::Close,
    ];

    pub fn selector(&self) -> &'static str {
        match self {
            DetailControl::Next => "#detail-next",
            DetailControl::Prev => "#detail-prev",
            DetailControl::Close => "#detail-close",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// View snapshot
// ─────────────────────────────────────────────────────────────────────────────

/// One ordering control as shown in the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderControl {
    pub key: OrderKey,
    pub caption: String,
    pub active: bool,
    /// Direction shown on the control, only for the active one
    pub direction: Option<Direction>,
    pub grouped: bool,
}

/// Display data for a single item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCard {
    /// Position in the ordered sequence
    pub index: usize,
    pub file: String,
    pub date: String,
    pub location: String,
    pub description: String,
}

impl ItemCard {
    fn from_item(index: usize, item: &Item) -> Self {
        Self {
            index,
            file: item.file.clone(),
            date: item.display_date().to_string(),
            location: item.location.clone(),
            description: item.description.clone(),
        }
    }
}

/// A group container: optional header plus its cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView {
    pub label: Option<String>,
    pub items: Vec<ItemCard>,
}

/// Complete gallery snapshot for one render pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryView {
    pub collection: String,
    pub spec: SortSpec,
    pub controls: Vec<OrderControl>,
    pub groups: Vec<GroupView>,
    pub len: usize,
}

impl GalleryView {
    /// View with controls but no items (before the collection arrives)
    pub fn empty(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            spec: SortSpec::default(),
            controls: Vec::new(),
            groups: Vec::new(),
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All cards in ordered sequence
    pub fn cards(&self) -> impl Iterator<Item = &ItemCard> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }

    /// Card at `index` in the ordered sequence
    pub fn card(&self, index: usize) -> Option<&ItemCard> {
        self.cards().nth(index)
    }

    /// Label of the group containing `index`
    pub fn group_of(&self, index: usize) -> Option<&str> {
        self.groups
            .iter()
            .find(|g| g.items.iter().any(|c| c.index == index))
            .and_then(|g| g.label.as_deref())
    }
}

/// Caption for an ordering control, falling back to the raw key name
pub fn control_caption(key: &OrderKey, translator: &dyn Translator) -> String {
    translator
        .lookup(&format!("{}.{}", CONTROL_CODE_NAMESPACE, key.name()))
        .unwrap_or_else(|| key.name().to_string())
}

/// Build the header controls for `keys` with `spec` applied
pub fn order_controls(
    keys: &[OrderKey],
    spec: &SortSpec,
    translator: &dyn Translator,
) -> Vec<OrderControl> {
    keys.iter()
        .map(|key| {
            let active = *key == spec.order;
            OrderControl {
                key: key.clone(),
                caption: control_caption(key, translator),
                active,
                direction: active.then_some(spec.direction),
                grouped: active && spec.grouped,
            }
        })
        .collect()
}

/// Assemble groups of cards from items already ordered by the sort engine
pub fn assemble(
    collection: &str,
    items: &[Item],
    ordered: &Ordered,
    controls: Vec<OrderControl>,
) -> GalleryView {
    let groups = ordered
        .runs
        .iter()
        .map(|run| GroupView {
            label: run.label.clone(),
            items: run
                .range
                .clone()
                .filter_map(|idx| items.get(idx).map(|item| ItemCard::from_item(idx, item)))
                .collect(),
        })
        .collect();

    GalleryView {
        collection: collection.to_string(),
        spec: ordered.spec.clone(),
        controls,
        groups,
        len: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort;
    use crate::translation::Dictionary;

    fn items() -> Vec<Item> {
        vec![
            Item::new("2020-01-01", "a.jpg").with_location("Porto"),
            Item::new("2021-06-01", "b.jpg").with_location("Lisbon"),
            Item::new("2020-12-31", "c.jpg").with_location("Faro"),
        ]
    }

    #[test]
    fn test_assemble_grouped_by_year() {
        let mut items = items();
        let spec = SortSpec {
            order: OrderKey::Date,
            direction: gallery_core::Direction::Asc,
            grouped: true,
            secondary: gallery_core::Direction::Asc,
        };
        let dict = Dictionary::empty("en");
        let ordered = sort::apply(&mut items, &spec, &[], &dict);
        let view = assemble("travel", &items, &ordered, Vec::new());

        assert_eq!(view.groups.len(), 2);
        assert_eq!(view.groups[0].label.as_deref(), Some("2020"));
        assert_eq!(view.groups[0].items.len(), 2);
        assert_eq!(view.groups[1].items[0].location, "Lisbon");
        assert_eq!(view.len, 3);

        let indices: Vec<usize> = view.cards().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(view.group_of(2), Some("2021"));
    }

    #[test]
    fn test_assemble_ungrouped_is_single_unlabeled_group() {
        let mut items = items();
        let dict = Dictionary::empty("en");
        let ordered = sort::apply(&mut items, &SortSpec::default(), &[], &dict);
        let view = assemble("travel", &items, &ordered, Vec::new());

        assert_eq!(view.groups.len(), 1);
        assert!(view.groups[0].label.is_none());
        assert_eq!(view.card(1).map(|c| c.file.as_str()), Some("c.jpg"));
        assert!(view.card(3).is_none());
    }

    #[test]
    fn test_controls_mark_active_key() {
        let dict = Dictionary::from_json("en", r#"{"orderings": {"category": "Theme"}}"#).unwrap();
        let keys = vec![OrderKey::Date, OrderKey::group("category")];
        let spec = SortSpec {
            order: OrderKey::group("category"),
            direction: gallery_core::Direction::Desc,
            grouped: true,
            secondary: gallery_core::Direction::Asc,
        };

        let controls = order_controls(&keys, &spec, &dict);
        assert_eq!(controls[0].caption, "date");
        assert!(!controls[0].active);
        assert_eq!(controls[0].direction, None);
        assert_eq!(controls[1].caption, "Theme");
        assert!(controls[1].active);
        assert!(controls[1].grouped);
        assert_eq!(controls[1].direction, Some(gallery_core::Direction::Desc));
    }

    #[test]
    fn test_render_target_selectors_are_stable() {
        assert_eq!(RenderTarget::CollectionBody.selector(), "#collection");
        assert_eq!(RenderTarget::DetailOverlay.selector(), "#detail-overlay");
        assert_eq!(DetailControl::Next.selector(), "#detail-next");
        assert_eq!(DetailControl::Prev.selector(), "#detail-prev");
        assert_eq!(DetailControl::Close.selector(), "#detail-close");
    }

    #[test]
    fn test_empty_view() {
        let view = GalleryView::empty("travel");
        assert!(view.is_empty());
        assert_eq!(view.cards().count(), 0);
    }
}
