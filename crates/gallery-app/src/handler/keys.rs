//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FetchState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode() {
        UiMode::Gallery => handle_key_gallery(state, key),
        UiMode::Detail => handle_key_detail(key),
    }
}

fn handle_key_gallery(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(position) = key.digit() {
        return Some(Message::ClickOrderAt { position });
    }

    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Ordering controls
        InputKey::Char('d') => Some(Message::ClickOrderAt { position: 0 }),
        InputKey::Char('s') => Some(Message::ClickSecondary),

        // Retry a failed fetch
        InputKey::Char('r') if matches!(state.fetch, FetchState::Failed { .. }) => {
            Some(Message::RetryFetch)
        }

        // Selection
        InputKey::Down | InputKey::Char('j') | InputKey::Right | InputKey::Tab => {
            Some(Message::SelectNext)
        }
        InputKey::Up | InputKey::Char('k') | InputKey::Left | InputKey::BackTab => {
            Some(Message::SelectPrev)
        }
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),

        InputKey::Enter if !state.view.is_empty() => Some(Message::OpenSelected),

        _ => None,
    }
}

fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('n') | InputKey::Right | InputKey::Char('l') => Some(Message::DetailNext),
        InputKey::Char('p') | InputKey::Left | InputKey::Char('h') => Some(Message::DetailPrev),
        InputKey::Esc | InputKey::Enter | InputKey::Char('x') => Some(Message::CloseDetail),
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
