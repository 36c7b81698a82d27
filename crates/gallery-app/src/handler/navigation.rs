//! Selection and detail overlay handlers

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    if state.selected + 1 < state.view.len {
        state.selected += 1;
    }
    UpdateResult::none()
}

pub fn handle_select_prev(state: &mut AppState) -> UpdateResult {
    state.selected = state.selected.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_select_first(state: &mut AppState) -> UpdateResult {
    state.selected = 0;
    UpdateResult::none()
}

pub fn handle_select_last(state: &mut AppState) -> UpdateResult {
    state.selected = state.view.len.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_open_detail(state: &mut AppState, index: usize) -> UpdateResult {
    match state.builder.detail_mut().open(index) {
        Ok(idx) => state.selected = idx,
        Err(e) => state.report_error(&e),
    }
    UpdateResult::none()
}

pub fn handle_detail_next(state: &mut AppState) -> UpdateResult {
    match state.builder.detail_mut().next() {
        Ok(idx) => state.selected = idx,
        Err(e) => state.report_error(&e),
    }
    UpdateResult::none()
}

pub fn handle_detail_prev(state: &mut AppState) -> UpdateResult {
    match state.builder.detail_mut().prev() {
        Ok(idx) => state.selected = idx,
        Err(e) => state.report_error(&e),
    }
    UpdateResult::none()
}

pub fn handle_close_detail(state: &mut AppState) -> UpdateResult {
    state.builder.detail_mut().close();
    UpdateResult::none()
}
