//! Headless mode - NDJSON event output for scripted use
//!
//! Outputs one JSON object per line on stdout. Each object has an `event`
//! field naming its type, along with event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"collection_loaded","collection":"gallery","items":3,"groupings":["category"],"timestamp":1704700001000}
//! {"event":"view_rendered","target":"#collection","order":"date","direction":"asc","grouped":false,...}
//! {"event":"detail_opened","target":"#detail-overlay","index":0,"file":"a.jpg",...}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use gallery_app::{DetailControl, EngineEvent, GalleryView, ItemCard};
use gallery_core::{Direction, OrderKey};

/// One group of a rendered view, as file references
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlessGroup {
    pub label: Option<String>,
    pub items: Vec<String>,
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    CollectionLoaded {
        collection: String,
        items: usize,
        groupings: Vec<String>,
        timestamp: i64,
    },

    CollectionFailed {
        collection: String,
        error: String,
        timestamp: i64,
    },

    /// The collection body was re-rendered
    ViewRendered {
        target: &'static str,
        collection: String,
        order: OrderKey,
        direction: Direction,
        grouped: bool,
        secondary: Direction,
        controls: Vec<String>,
        groups: Vec<HeadlessGroup>,
        timestamp: i64,
    },

    DetailOpened {
        target: &'static str,
        index: usize,
        file: String,
        date: String,
        location: String,
        description: String,
        controls: Vec<&'static str>,
        timestamp: i64,
    },

    DetailClosed {
        timestamp: i64,
    },

    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    Shutdown {
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn view_rendered(target: &'static str, view: &GalleryView) -> Self {
        Self::ViewRendered {
            target,
            collection: view.collection.clone(),
            order: view.spec.order.clone(),
            direction: view.spec.direction,
            grouped: view.spec.grouped,
            secondary: view.spec.secondary,
            controls: view.controls.iter().map(|c| c.caption.clone()).collect(),
            groups: view
                .groups
                .iter()
                .map(|g| HeadlessGroup {
                    label: g.label.clone(),
                    items: g.items.iter().map(|c| c.file.clone()).collect(),
                })
                .collect(),
            timestamp: Self::now(),
        }
    }

    pub fn detail_opened(target: &'static str, index: usize, card: &ItemCard) -> Self {
        Self::DetailOpened {
            target,
            index,
            file: card.file.clone(),
            date: card.date.clone(),
            location: card.location.clone(),
            description: card.description.clone(),
            controls: DetailControl::ALL.iter().map(|c| c.selector()).collect(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}

impl From<&EngineEvent> for HeadlessEvent {
    fn from(event: &EngineEvent) -> Self {
        let timestamp = Self::now();
        match event {
            EngineEvent::CollectionLoaded {
                name,
                items,
                groupings,
            } => Self::CollectionLoaded {
                collection: name.clone(),
                items: *items,
                groupings: groupings.clone(),
                timestamp,
            },
            EngineEvent::CollectionFailed { name, error } => Self::CollectionFailed {
                collection: name.clone(),
                error: error.clone(),
                timestamp,
            },
            EngineEvent::ViewRendered { target, view } => {
                Self::view_rendered(target.selector(), view)
            }
            EngineEvent::DetailOpened {
                target,
                index,
                card,
            } => Self::detail_opened(target.selector(), *index, card),
            EngineEvent::DetailClosed => Self::DetailClosed { timestamp },
            EngineEvent::Error { message } => Self::error(message.clone(), false),
            EngineEvent::Shutdown => Self::Shutdown { timestamp },
        }
    }
}
