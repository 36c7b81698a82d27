//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{fetch, keys::handle_key, navigation, ordering, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Collection Fetch
        // ─────────────────────────────────────────────────────────
        Message::FetchCollection => fetch::handle_fetch(state),
        Message::RetryFetch => fetch::handle_retry(state),
        Message::CollectionLoaded { collection } => fetch::handle_loaded(state, collection),
        Message::CollectionFetchFailed { error } => fetch::handle_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Ordering Controls
        // ─────────────────────────────────────────────────────────
        Message::ClickOrder { key } => ordering::handle_click(state, &key),
        Message::ClickOrderAt { position } => ordering::handle_click_at(state, position),
        Message::ClickSecondary => ordering::handle_secondary_click(state),

        // ─────────────────────────────────────────────────────────
        // Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => navigation::handle_select_next(state),
        Message::SelectPrev => navigation::handle_select_prev(state),
        Message::SelectFirst => navigation::handle_select_first(state),
        Message::SelectLast => navigation::handle_select_last(state),

        // ─────────────────────────────────────────────────────────
        // Detail Overlay
        // ─────────────────────────────────────────────────────────
        Message::OpenDetail { index } => navigation::handle_open_detail(state, index),
        Message::OpenSelected => {
            let index = state.selected;
            navigation::handle_open_detail(state, index)
        }
        Message::DetailNext => navigation::handle_detail_next(state),
        Message::DetailPrev => navigation::handle_detail_prev(state),
        Message::CloseDetail => navigation::handle_close_detail(state),
    }
}
