//! Full-frame rendering tests

use super::view;
use crate::test_utils::{loaded_state, test_state, TestTerminal};
use gallery_app::handler::update;
use gallery_app::{FetchState, Message};
use gallery_core::OrderKey;

#[test]
fn test_view_before_load() {
    let state = test_state();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Photo Gallery"));
    assert!(term.buffer_contains("Waiting to load"));
    assert!(term.buffer_contains("0 items"));
}

#[test]
fn test_view_loaded_by_date() {
    let state = loaded_state();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    let content = term.content();
    let tram = content.find("tram.jpg").expect("tram rendered");
    let alley = content.find("alley.jpg").expect("alley rendered");
    let ramen = content.find("ramen.jpg").expect("ramen rendered");
    assert!(tram < alley && alley < ramen);
    assert!(term.buffer_contains("[1] Theme"));
    assert!(term.buffer_contains("3 items"));
}

#[test]
fn test_view_grouped_by_category() {
    let mut state = loaded_state();
    let key = OrderKey::group("category");
    for _ in 0..3 {
        update(&mut state, Message::ClickOrder { key: key.clone() });
    }

    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Food (1)"));
    assert!(term.buffer_contains("Street (2)"));
}

#[test]
fn test_view_detail_overlay() {
    let mut state = loaded_state();
    update(&mut state, Message::OpenDetail { index: 0 });

    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Lisbon"));
    assert!(term.buffer_contains("1/3"));
    assert!(term.buffer_contains("Close"));
}

#[test]
fn test_view_failed_fetch() {
    let mut state = test_state();
    update(&mut state, Message::FetchCollection);
    update(
        &mut state,
        Message::CollectionFetchFailed {
            error: "Collection 'gallery' not found".to_string(),
        },
    );
    assert!(matches!(state.fetch, FetchState::Failed { .. }));

    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));
    assert!(term.buffer_contains("Could not load collection"));
    assert!(term.buffer_contains("Failed"));
}

#[test]
fn test_view_hides_descriptions_when_disabled() {
    let mut state = loaded_state();
    state.settings.ui.show_descriptions = false;

    let mut term = TestTerminal::with_size(120, 24);
    term.draw_with(|frame| view(frame, &state));
    assert!(!term.buffer_contains("Tram 28"));
}
