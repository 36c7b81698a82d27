//! Header with the collection title and ordering controls

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use gallery_app::{FetchState, GalleryView, OrderControl};

use crate::theme::{palette, styles};

const APP_TITLE: &str = "Photo Gallery";

/// Header showing the app title, collection name, and ordering controls
pub struct GalleryHeader<'a> {
    view: &'a GalleryView,
    fetch: &'a FetchState,
}

impl<'a> GalleryHeader<'a> {
    pub fn new(view: &'a GalleryView, fetch: &'a FetchState) -> Self {
        Self { view, fetch }
    }
}

/// Keyboard shortcut for the control at `position`
pub fn control_shortcut(position: usize) -> String {
    if position == 0 {
        "d".to_string()
    } else {
        position.to_string()
    }
}

/// Text shown for one control, including its state markers when active
pub fn control_label(control: &OrderControl, secondary: gallery_core::Direction) -> String {
    let mut label = control.caption.clone();
    if let Some(direction) = control.direction {
        label.push(' ');
        label.push_str(direction.arrow());
        if control.key.is_date() {
            label.push_str(" s");
            label.push_str(secondary.arrow());
        }
    }
    if control.grouped {
        label.push_str(" ▤");
    }
    label
}

impl Widget for GalleryHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Title row
        let (icon, label, status_style) = styles::fetch_indicator(self.fetch);
        let title = Line::from(vec![
            Span::styled(APP_TITLE, styles::accent_bold()),
            Span::styled("  ", styles::text_muted()),
            Span::styled(self.view.collection.as_str(), styles::text_primary()),
            Span::raw("  "),
            Span::styled(format!("{} {}", icon, label), status_style),
        ]);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        if inner.height < 2 {
            return;
        }

        // Controls row, clipped at the right edge
        let mut spans = Vec::new();
        let mut used = 0usize;
        for (position, control) in self.view.controls.iter().enumerate() {
            let shortcut = format!("[{}] ", control_shortcut(position));
            let text = control_label(control, self.view.spec.secondary);
            let width = shortcut.width() + text.width() + 2;
            if used + width > inner.width as usize && !spans.is_empty() {
                break;
            }
            used += width;

            let style = if control.active {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(shortcut, styles::text_muted()));
            spans.push(Span::styled(text, style));
            spans.push(Span::raw("  "));
        }
        buf.set_line(inner.x, inner.y + 1, &Line::from(spans), inner.width);
    }
}
