//! Message types for the application (TEA pattern)

use gallery_core::{Collection, OrderKey};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Collection Fetch
    // ─────────────────────────────────────────────────────────
    /// Fetch the collection if it is not loaded or loading yet
    FetchCollection,

    /// Retry after a failed fetch
    RetryFetch,

    /// The fetch task finished successfully
    CollectionLoaded { collection: Collection },

    /// The fetch task failed
    CollectionFetchFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Ordering Controls
    // ─────────────────────────────────────────────────────────
    /// Primary click on an ordering control
    ClickOrder { key: OrderKey },

    /// Primary click on the n-th ordering control (0 = date)
    ClickOrderAt { position: usize },

    /// Alternate click on the date control
    ClickSecondary,

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,

    // ─────────────────────────────────────────────────────────
    // Detail Overlay
    // ─────────────────────────────────────────────────────────
    /// Open the item at `index` in the ordered sequence
    OpenDetail { index: usize },

    /// Open the selected item
    OpenSelected,

    DetailNext,
    DetailPrev,
    CloseDetail,
}
