//! Collection view builder
//!
//! Owns one gallery's collection snapshot, its remembered [`SortSpec`], and
//! the detail navigator. Every redraw re-sorts the cached collection in place
//! and assembles a fresh [`GalleryView`].

use gallery_core::prelude::*;
use gallery_core::{Collection, OrderKey, SortSpec};

use crate::detail::DetailNavigator;
use crate::sort;
use crate::toggle::{self, Control};
use crate::translation::Translator;
use crate::view::{self, GalleryView};

#[derive(Debug, Clone)]
pub struct CollectionViewBuilder {
    name: String,
    collection: Option<Collection>,
    spec: SortSpec,
    detail: DetailNavigator,
    renders: u64,
}

impl CollectionViewBuilder {
    /// Builder for collection `name`, first ordered by `initial_order`
    pub fn new(name: impl Into<String>, initial_order: OrderKey) -> Self {
        Self {
            name: name.into(),
            collection: None,
            spec: SortSpec::new(initial_order).normalized(),
            detail: DetailNavigator::default(),
            renders: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn spec(&self) -> &SortSpec {
        &self.spec
    }

    pub fn collection(&self) -> Option<&Collection> {
        self.collection.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.collection.is_some()
    }

    pub fn detail(&self) -> &DetailNavigator {
        &self.detail
    }

    pub fn detail_mut(&mut self) -> &mut DetailNavigator {
        &mut self.detail
    }

    /// Number of completed render passes
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Ordering controls offered right now (only date until loaded)
    pub fn order_keys(&self) -> Vec<OrderKey> {
        match &self.collection {
            Some(collection) => collection.order_keys(),
            None => vec![OrderKey::Date],
        }
    }

    /// Cache the fetched collection
    ///
    /// Returns `false` if a collection was already attached; the first one
    /// stays in place.
    pub fn attach(&mut self, collection: Collection) -> bool {
        if self.collection.is_some() {
            debug!(
                "Collection '{}' already attached, ignoring duplicate",
                self.name
            );
            return false;
        }

        if !collection.supports(&self.spec.order) {
            warn!(
                "Initial ordering '{}' is not offered by '{}', using date",
                self.spec.order, self.name
            );
            self.spec = SortSpec::default();
        }

        self.detail.resize(collection.len());
        self.collection = Some(collection);
        true
    }

    /// Primary click on the ordering control for `key`
    ///
    /// Keys the collection does not offer are rejected and leave the spec
    /// untouched.
    pub fn click(&mut self, key: &OrderKey) -> Result<&SortSpec> {
        let supported = match &self.collection {
            Some(collection) => collection.supports(key),
            None => key.is_date(),
        };
        if !supported {
            return Err(Error::unknown_order_key(key.name()));
        }

        self.spec = toggle::transition(&self.spec, &Control::Order(key.clone()));
        debug!("Ordering now {:?}", self.spec);
        Ok(&self.spec)
    }

    /// Alternate click on the date control
    pub fn secondary_click(&mut self) -> &SortSpec {
        self.spec = toggle::transition(&self.spec, &Control::Secondary);
        &self.spec
    }

    /// Re-order the collection for the current spec and assemble a view
    pub fn render(&mut self, translator: &dyn Translator) -> GalleryView {
        let Some(collection) = self.collection.as_mut() else {
            let mut empty = GalleryView::empty(self.name.clone());
            empty.spec = self.spec.clone();
            empty.controls = view::order_controls(&[OrderKey::Date], &self.spec, translator);
            return empty;
        };

        let ordered = sort::apply(
            &mut collection.items,
            &self.spec,
            &collection.groupings,
            translator,
        );
        let controls = view::order_controls(&collection.order_keys(), &ordered.spec, translator);
        let gallery = view::assemble(&self.name, &collection.items, &ordered, controls);

        self.detail.resize(gallery.len);
        self.renders += 1;
        gallery
    }
}
