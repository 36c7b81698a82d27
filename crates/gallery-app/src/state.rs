//! Application state (Model in TEA pattern)

use std::sync::Arc;

use gallery_core::prelude::*;

use crate::builder::CollectionViewBuilder;
use crate::config::Settings;
use crate::translation::Translator;
use crate::view::{GalleryView, ItemCard};

/// Lifecycle of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// The grouped collection
    Gallery,
    /// The single-item overlay
    Detail,
}

/// Progress of the one collection fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Failed { message: String },
}

impl FetchState {
    /// Whether a fetch may be issued from this state
    pub fn can_fetch(&self) -> bool {
        matches!(self, FetchState::NotLoaded | FetchState::Failed { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FetchState::NotLoaded => "not loaded",
            FetchState::Loading => "loading",
            FetchState::Loaded => "loaded",
            FetchState::Failed { .. } => "failed",
        }
    }
}

/// Complete application state
pub struct AppState {
    pub phase: AppPhase,

    pub settings: Settings,

    /// Collection, ordering, and detail navigator for the gallery on screen
    pub builder: CollectionViewBuilder,

    pub translator: Arc<dyn Translator>,

    pub fetch: FetchState,

    /// Latest assembled view
    pub view: GalleryView,

    /// Bumped on every redraw
    pub view_generation: u64,

    /// Selected card in the ordered sequence
    pub selected: usize,

    /// Last user-facing error, shown in the status bar
    pub last_error: Option<String>,

    /// Bumped on every reported error
    pub error_generation: u64,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("phase", &self.phase)
            .field("collection", &self.builder.name())
            .field("spec", self.builder.spec())
            .field("fetch", &self.fetch)
            .field("view_generation", &self.view_generation)
            .field("selected", &self.selected)
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl AppState {
    pub fn new(settings: Settings, translator: Arc<dyn Translator>) -> Self {
        let builder = CollectionViewBuilder::new(
            settings.gallery.collection.clone(),
            settings.gallery.default_order.clone(),
        );
        let view = GalleryView::empty(builder.name());
        Self {
            phase: AppPhase::Running,
            settings,
            builder,
            translator,
            fetch: FetchState::NotLoaded,
            view,
            view_generation: 0,
            selected: 0,
            last_error: None,
            error_generation: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.builder.detail().is_open() {
            UiMode::Detail
        } else {
            UiMode::Gallery
        }
    }

    /// Re-order and re-assemble the gallery
    pub fn redraw(&mut self) {
        self.view = self.builder.render(self.translator.as_ref());
        self.view_generation += 1;
        if self.selected >= self.view.len {
            self.selected = self.view.len.saturating_sub(1);
        }
    }

    /// Record a user-facing error
    pub fn report_error(&mut self, error: &Error) {
        warn!("{}", error);
        self.last_error = Some(error.to_string());
        self.error_generation += 1;
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn selected_card(&self) -> Option<&ItemCard> {
        self.view.card(self.selected)
    }

    /// Card shown in the detail overlay
    pub fn open_card(&self) -> Option<&ItemCard> {
        self.builder
            .detail()
            .current()
            .and_then(|idx| self.view.card(idx))
    }
}
