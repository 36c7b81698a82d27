//! Engine - single owner of gallery state for TUI and headless runners
//!
//! Every toggle, fetch completion, and detail step is a [`Message`] on one
//! FIFO channel, applied strictly in order by `handler::update`. The only
//! concurrent work is the collection fetch, which reports back through the
//! same channel. The latest assembled view is published on a `watch`
//! channel, so a slow consumer only ever sees the newest snapshot.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};

use gallery_core::prelude::*;

use crate::config::{self, Settings};
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::source::{CollectionSource, FsCollectionSource};
use crate::state::{AppState, FetchState};
use crate::translation::{negotiate_language, Dictionary, Translator};
use crate::view::{GalleryView, RenderTarget};

/// Overrides applied on top of `.gallery/config.toml`
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    pub collection: Option<String>,
    pub language: Option<String>,
}

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit the matching EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    fetch: FetchState,
    view_generation: u64,
    open_detail: Option<usize>,
    error_generation: u64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            fetch: state.fetch.clone(),
            view_generation: state.view_generation,
            open_detail: state.builder.detail().current(),
            error_generation: state.error_generation,
        }
    }
}

/// Orchestration engine for Photo Gallery.
pub struct Engine<S = FsCollectionSource> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the message channel.
    /// Clone this to give to input sources.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    source: Arc<S>,

    /// Latest assembled view
    view_tx: watch::Sender<GalleryView>,

    /// Event broadcaster for external consumers
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine<FsCollectionSource> {
    /// Create an Engine for the gallery project at `project_path`.
    ///
    /// - Initializes `.gallery/` (non-fatal if it fails)
    /// - Loads settings and applies `options`
    /// - Negotiates the language and loads its dictionary
    /// - Reads collections from the configured directory
    pub async fn from_project(project_path: &Path, options: EngineOptions) -> Self {
        if let Err(e) = config::init_config_dir(project_path) {
            warn!("Failed to initialize .gallery directory: {}", e);
        }

        let mut settings = config::load_settings(project_path);
        if let Some(collection) = options.collection {
            settings.gallery.collection = collection;
        }
        if let Some(language) = options.language {
            settings.translation.language = language;
        }

        let translation = &settings.translation;
        let language = negotiate_language(
            translation.configured_language(),
            &translation.fallback_language,
        );
        let dictionary = Dictionary::load(
            &translation.dictionary_path(project_path),
            &language,
            &translation.fallback_language,
        )
        .await;
        info!(
            "Language '{}' ({} dictionary entries)",
            language,
            dictionary.len()
        );

        let source = FsCollectionSource::new(settings.gallery.collections_path(project_path));
        Engine::new(settings, Arc::new(dictionary), Arc::new(source))
    }
}

impl<S> Engine<S>
where
    S: CollectionSource + Sync + 'static,
{
    /// Create an Engine over an explicit translator and collection source.
    ///
    /// Must be called inside a Tokio runtime (spawns the signal handler).
    pub fn new(settings: Settings, translator: Arc<dyn Translator>, source: Arc<S>) -> Self {
        let state = AppState::new(settings, translator);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (view_tx, _) = watch::channel(state.view.clone());
        let (event_tx, _) = broadcast::channel(256);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            source,
            view_tx,
            event_tx,
        }
    }

    /// Request the collection fetch
    pub fn start(&mut self) {
        info!("Starting gallery '{}'", self.state.builder.name());
        self.process_message(Message::FetchCollection);
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind, older events are dropped
    /// (`broadcast::error::RecvError::Lagged`).
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Watch the latest assembled view
    pub fn watch_view(&self) -> watch::Receiver<GalleryView> {
        self.view_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.source);

        let post = StateSnapshot::capture(&self.state);
        if pre != post {
            self.publish(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Runners call this before
    /// drawing so a burst of clicks produces a single frame.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn shutdown(&mut self) {
        info!("Shutting down gallery '{}'", self.state.builder.name());
        self.emit(EngineEvent::Shutdown);
    }

    fn publish(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        let state = &self.state;

        if pre.fetch != post.fetch {
            match &post.fetch {
                FetchState::Loaded => {
                    if let Some(collection) = state.builder.collection() {
                        self.emit(EngineEvent::CollectionLoaded {
                            name: collection.name.clone(),
                            items: collection.len(),
                            groupings: collection.groupings.clone(),
                        });
                    }
                }
                FetchState::Failed { message } => {
                    self.emit(EngineEvent::CollectionFailed {
                        name: state.builder.name().to_string(),
                        error: message.clone(),
                    });
                }
                FetchState::NotLoaded | FetchState::Loading => {}
            }
        }

        if pre.view_generation != post.view_generation {
            self.view_tx.send_replace(state.view.clone());
            self.emit(EngineEvent::ViewRendered {
                target: RenderTarget::CollectionBody,
                view: Box::new(state.view.clone()),
            });
        }

        if pre.open_detail != post.open_detail {
            match (post.open_detail, state.open_card()) {
                (Some(index), Some(card)) => self.emit(EngineEvent::DetailOpened {
                    target: RenderTarget::DetailOverlay,
                    index,
                    card: card.clone(),
                }),
                _ => self.emit(EngineEvent::DetailClosed),
            }
        }

        let fetch_failed = matches!(post.fetch, FetchState::Failed { .. }) && pre.fetch != post.fetch;
        if pre.error_generation != post.error_generation && !fetch_failed {
            if let Some(message) = &state.last_error {
                self.emit(EngineEvent::Error {
                    message: message.clone(),
                });
            }
        }
    }

    /// send() only fails without subscribers, which is fine
    fn emit(&self, event: EngineEvent) {
        trace!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}
