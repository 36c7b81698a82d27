//! Ordering control handlers

use gallery_core::OrderKey;

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_click(state: &mut AppState, key: &OrderKey) -> UpdateResult {
    match state.builder.click(key) {
        Ok(_) => {
            state.clear_error();
            state.redraw();
        }
        Err(e) => state.report_error(&e),
    }
    UpdateResult::none()
}

/// Click the control at `position` in header order
pub fn handle_click_at(state: &mut AppState, position: usize) -> UpdateResult {
    match state.builder.order_keys().get(position).cloned() {
        Some(key) => handle_click(state, &key),
        None => UpdateResult::none(),
    }
}

/// Record the secondary flip; the redraw shows the new marker, order is unchanged
pub fn handle_secondary_click(state: &mut AppState) -> UpdateResult {
    if !state.builder.spec().order.is_date() {
        return UpdateResult::none();
    }
    state.builder.secondary_click();
    state.redraw();
    UpdateResult::none()
}
