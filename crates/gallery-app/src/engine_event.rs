//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use crate::view::{GalleryView, ItemCard, RenderTarget};

#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// The collection arrived and was attached
    CollectionLoaded {
        name: String,
        items: usize,
        groupings: Vec<String>,
    },

    /// The collection fetch failed; a retry may follow
    CollectionFailed { name: String, error: String },

    /// A fresh view was assembled into `target`
    ViewRendered {
        target: RenderTarget,
        view: Box<GalleryView>,
    },

    /// The detail overlay now shows `card`
    DetailOpened {
        target: RenderTarget,
        index: usize,
        card: ItemCard,
    },

    DetailClosed,

    /// A user action was rejected
    Error { message: String },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short name used for logging and the headless protocol
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::CollectionLoaded { .. } => "collection_loaded",
            EngineEvent::CollectionFailed { .. } => "collection_failed",
            EngineEvent::ViewRendered { .. } => "view_rendered",
            EngineEvent::DetailOpened { .. } => "detail_opened",
            EngineEvent::DetailClosed => "detail_closed",
            EngineEvent::Error { .. } => "error",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
