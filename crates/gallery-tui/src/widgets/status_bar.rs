//! Status bar widget
//!
//! Shows fetch state, item count, the active ordering, and the last error.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use gallery_app::{AppState, UiMode};

use crate::theme::{palette, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// "by <caption> <arrow>", plus a marker when grouped
    fn ordering(&self) -> Option<String> {
        let control = self.state.view.controls.iter().find(|c| c.active)?;
        let arrow = control.direction.map(|d| d.arrow()).unwrap_or_default();
        let grouped = if control.grouped { ", grouped" } else { "" };
        Some(format!("by {} {}{}", control.caption, arrow, grouped))
    }

    fn hints(&self) -> &'static str {
        match self.state.ui_mode() {
            UiMode::Gallery => "d/1-9 order  s 2nd  ⏎ open  q quit",
            UiMode::Detail => "n/p step  esc close",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (icon, label, status_style) = styles::fetch_indicator(&self.state.fetch);

        let mut spans = vec![
            Span::styled(format!(" {} {}", icon, label), status_style),
            Span::styled(" │ ", styles::text_muted()),
            Span::styled(
                format!("{} items", self.state.view.len),
                styles::text_secondary(),
            ),
        ];

        if let Some(ordering) = self.ordering() {
            spans.push(Span::styled(" │ ", styles::text_muted()));
            spans.push(Span::styled(ordering, styles::text_secondary()));
        }

        spans.push(Span::styled(" │ ", styles::text_muted()));
        match &self.state.last_error {
            Some(error) => spans.push(Span::styled(error.clone(), styles::error())),
            None => spans.push(Span::styled(self.hints(), styles::text_muted())),
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);
    }
}
