//! gallery-app - Ordering, view assembly, and application state for Photo Gallery
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the Engine that serializes every redraw through one message
//! channel, the sort/group engine and toggle state machine behind the
//! ordering controls, configuration loading, translation, and collection
//! sources.

pub mod actions;
pub mod builder;
pub mod config;
pub mod detail;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod sort;
pub mod source;
pub mod state;
pub mod toggle;
pub mod translation;
pub mod view;

// Re-export primary types
pub use builder::CollectionViewBuilder;
pub use detail::DetailNavigator;
pub use engine::{Engine, EngineOptions};
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use source::{CollectionSource, FsCollectionSource, LocalCollectionSource, MemoryCollectionSource};
pub use state::{AppPhase, AppState, FetchState, UiMode};
pub use translation::{Dictionary, Translator};
pub use view::{
    DetailControl, GalleryView, GroupView, ItemCard, OrderControl, RenderTarget,
};
