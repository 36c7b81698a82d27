//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's TestBackend so widgets and full frames can be rendered
//! and inspected without a real terminal.

use std::sync::Arc;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

use gallery_app::config::Settings;
use gallery_app::handler::update;
use gallery_app::{AppState, Dictionary, Message};
use gallery_core::{Collection, Item};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24 terminal
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with [`crate::render::view`]
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        let buffer = self.buffer();
        let mut content = String::new();
        if line < buffer.area.height {
            for x in 0..buffer.area.width {
                content.push_str(buffer[(x, line)].symbol());
            }
        }
        content.contains(text)
    }

    /// All content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}

// ─────────────────────────────────────────────────────────
// State fixtures
// ─────────────────────────────────────────────────────────

pub const TEST_DICTIONARY: &str = r#"{
    "groupings": {
        "category-street": "Street",
        "category-food": "Food"
    },
    "orderings": { "date": "Date", "category": "Theme" }
}"#;

pub fn test_collection() -> Collection {
    Collection::new(
        "gallery",
        vec![
            Item::new("2020-01-01", "tram.jpg")
                .with_field("category", "street")
                .with_location("Lisbon")
                .with_description("Tram 28 climbing"),
            Item::new("2021-06-01", "ramen.jpg")
                .with_field("category", "food")
                .with_location("Tokyo"),
            Item::new("2020-12-31", "alley.jpg")
                .with_field("category", "street")
                .with_location("Osaka"),
        ],
        vec!["category".to_string()],
    )
}

/// AppState that has not fetched yet
pub fn test_state() -> AppState {
    let dictionary =
        Dictionary::from_json("en", TEST_DICTIONARY).expect("test dictionary must parse");
    AppState::new(Settings::default(), Arc::new(dictionary))
}

/// AppState with [`test_collection`] loaded and rendered by date
pub fn loaded_state() -> AppState {
    let mut state = test_state();
    update(&mut state, Message::FetchCollection);
    update(
        &mut state,
        Message::CollectionLoaded {
            collection: test_collection(),
        },
    );
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        use ratatui::widgets::Paragraph;

        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello\nWorld"), term.area());

        assert!(term.buffer_contains("Hello"));
        assert!(!term.buffer_contains("Goodbye"));
        assert!(term.line_contains(1, "World"));
        assert!(!term.line_contains(0, "World"));
    }

    #[test]
    fn test_loaded_state_fixture() {
        let state = loaded_state();
        assert_eq!(state.view.len, 3);
        assert_eq!(state.view_generation, 1);
    }
}
