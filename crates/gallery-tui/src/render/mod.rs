//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use gallery_app::AppState;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Reads the latest assembled gallery from `state`; never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let ui = &state.settings.ui;

    frame.render_widget(
        widgets::GalleryHeader::new(&state.view, &state.fetch),
        areas.header,
    );

    frame.render_widget(
        widgets::GalleryBody::new(&state.view, &state.fetch)
            .selected(state.selected)
            .show_location(ui.show_location)
            .show_description(ui.show_descriptions),
        areas.body,
    );

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if let Some(card) = state.open_card() {
        let overlay = widgets::DetailOverlay::new(card, state.view.len)
            .group(state.view.group_of(card.index))
            .show_description(ui.show_descriptions);
        frame.render_widget(overlay, area);
    }
}
