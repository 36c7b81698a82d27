//! Collection fetch lifecycle handlers

use gallery_core::prelude::*;
use gallery_core::Collection;

use crate::state::{AppState, FetchState};

use super::{UpdateAction, UpdateResult};

/// Issue the fetch unless one is loaded or in flight
pub fn handle_fetch(state: &mut AppState) -> UpdateResult {
    if !state.fetch.can_fetch() {
        debug!(
            "Skipping fetch of '{}': {}",
            state.builder.name(),
            state.fetch.label()
        );
        return UpdateResult::none();
    }

    state.fetch = FetchState::Loading;
    state.clear_error();
    UpdateResult::action(UpdateAction::FetchCollection {
        name: state.builder.name().to_string(),
    })
}

/// Retry is only meaningful after a failure
pub fn handle_retry(state: &mut AppState) -> UpdateResult {
    if matches!(state.fetch, FetchState::Failed { .. }) {
        info!("Retrying fetch of '{}'", state.builder.name());
        handle_fetch(state)
    } else {
        UpdateResult::none()
    }
}

pub fn handle_loaded(state: &mut AppState, collection: Collection) -> UpdateResult {
    if collection.name != state.builder.name() {
        warn!(
            "Ignoring collection '{}' (showing '{}')",
            collection.name,
            state.builder.name()
        );
        return UpdateResult::none();
    }

    if state.builder.attach(collection) {
        state.fetch = FetchState::Loaded;
        state.redraw();
    }
    UpdateResult::none()
}

pub fn handle_failed(state: &mut AppState, error: String) -> UpdateResult {
    if state.builder.is_loaded() {
        return UpdateResult::none();
    }

    error!("Failed to fetch '{}': {}", state.builder.name(), error);
    state.last_error = Some(error.clone());
    state.error_generation += 1;
    state.fetch = FetchState::Failed { message: error };
    UpdateResult::none()
}
