//! Collection body: group headers followed by their item cards

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use gallery_app::translation::is_fallback_label;
use gallery_app::{FetchState, GalleryView, ItemCard};

use crate::theme::{palette, styles};

const DATE_COLUMN: usize = 12;

/// The grouped collection as a scrollable list
pub struct GalleryBody<'a> {
    view: &'a GalleryView,
    fetch: &'a FetchState,
    selected: usize,
    show_location: bool,
    show_description: bool,
}

impl<'a> GalleryBody<'a> {
    pub fn new(view: &'a GalleryView, fetch: &'a FetchState) -> Self {
        Self {
            view,
            fetch,
            selected: 0,
            show_location: true,
            show_description: true,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn show_location(mut self, show: bool) -> Self {
        self.show_location = show;
        self
    }

    pub fn show_description(mut self, show: bool) -> Self {
        self.show_description = show;
        self
    }

    /// All lines plus the line index of the selected card
    fn lines(&self) -> (Vec<Line<'a>>, usize) {
        let mut lines = Vec::new();
        let mut selected_line = 0;

        for (i, group) in self.view.groups.iter().enumerate() {
            if let Some(label) = &group.label {
                if i > 0 {
                    lines.push(Line::default());
                }
                lines.push(Line::from(vec![
                    Span::styled(label.clone(), styles::group_header(is_fallback_label(label))),
                    Span::styled(format!(" ({})", group.items.len()), styles::text_muted()),
                ]));
            }

            for card in &group.items {
                if card.index == self.selected {
                    selected_line = lines.len();
                }
                lines.push(self.card_line(card));
            }
        }

        (lines, selected_line)
    }

    fn card_line(&self, card: &'a ItemCard) -> Line<'a> {
        let is_selected = card.index == self.selected;
        let base = if is_selected {
            styles::selected()
        } else {
            styles::text_primary()
        };

        let mut spans = vec![
            Span::styled(if is_selected { "▸ " } else { "  " }, styles::accent()),
            Span::styled(format!("{:<width$}", card.date, width = DATE_COLUMN), base),
        ];
        if self.show_location && !card.location.is_empty() {
            spans.push(Span::styled(format!(" {}", card.location), base));
        }
        spans.push(Span::styled(format!("  {}", card.file), styles::text_muted()));
        if self.show_description && !card.description.is_empty() {
            spans.push(Span::styled(
                format!("  {}", card.description),
                styles::text_secondary(),
            ));
        }
        Line::from(spans)
    }

    fn placeholder(&self) -> Option<(String, Style)> {
        match self.fetch {
            FetchState::NotLoaded => Some(("Waiting to load…".to_string(), styles::text_muted())),
            FetchState::Loading => Some((
                format!("Loading {}…", self.view.collection),
                styles::text_secondary(),
            )),
            FetchState::Failed { message } => Some((
                format!("Could not load collection: {}  (r to retry)", message),
                styles::error(),
            )),
            FetchState::Loaded if self.view.is_empty() => {
                Some(("This collection has no items".to_string(), styles::text_muted()))
            }
            FetchState::Loaded => None,
        }
    }
}

impl Widget for GalleryBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(format!(" {} ", self.view.collection))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if let Some((text, style)) = self.placeholder() {
            Paragraph::new(Line::styled(text, style))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let (lines, selected_line) = self.lines();
        let height = inner.height as usize;
        let offset = if selected_line >= height {
            selected_line + 1 - height
        } else {
            0
        };

        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(inner, buf);
    }
}
