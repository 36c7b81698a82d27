//! Single-item detail overlay with prev/next/close controls

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use gallery_app::ItemCard;

use super::modal_overlay::{centered_rect, clear_area, dim_background, render_shadow};
use crate::theme::styles;

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 12;

pub struct DetailOverlay<'a> {
    card: &'a ItemCard,
    total: usize,
    group: Option<&'a str>,
    show_description: bool,
}

impl<'a> DetailOverlay<'a> {
    pub fn new(card: &'a ItemCard, total: usize) -> Self {
        Self {
            card,
            total,
            group: None,
            show_description: true,
        }
    }

    pub fn group(mut self, group: Option<&'a str>) -> Self {
        self.group = group;
        self
    }

    pub fn show_description(mut self, show: bool) -> Self {
        self.show_description = show;
        self
    }

    fn field(name: &'static str, value: &'a str) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{:<10}", name), styles::text_muted()),
            Span::styled(value, styles::text_primary()),
        ])
    }

    fn controls(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled("◀ p", styles::accent()),
            Span::styled(" Prev   ", styles::text_secondary()),
            Span::styled(
                format!("{}/{}", self.card.index + 1, self.total),
                styles::text_primary(),
            ),
            Span::styled("   Next ", styles::text_secondary()),
            Span::styled("n ▶", styles::accent()),
            Span::styled("   Esc", styles::accent()),
            Span::styled(" Close", styles::text_secondary()),
        ])
    }
}

impl Widget for DetailOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        render_shadow(buf, modal);
        clear_area(buf, modal);

        let title = format!(" {} ", self.card.file);
        let block = styles::modal_block(&title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![
            Self::field("Date", &self.card.date),
            Self::field("Location", &self.card.location),
        ];
        if let Some(group) = self.group {
            lines.push(Self::field("Group", group));
        }
        if self.show_description && !self.card.description.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled(
                self.card.description.as_str(),
                styles::text_secondary(),
            ));
        }

        let body_height = inner.height.saturating_sub(1);
        let body = Rect::new(inner.x, inner.y, inner.width, body_height);
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(body, buf);

        let footer = Rect::new(inner.x, inner.y + body_height, inner.width, 1);
        Paragraph::new(self.controls())
            .alignment(Alignment::Center)
            .render(footer, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn card() -> ItemCard {
        ItemCard {
            index: 1,
            file: "harbour.jpg".to_string(),
            date: "June 2021".to_string(),
            location: "Porto".to_string(),
            description: "Boats at dusk".to_string(),
        }
    }

    #[test]
    fn test_overlay_shows_item_and_controls() {
        let mut term = TestTerminal::new();
        let card = card();
        term.render_widget(
            DetailOverlay::new(&card, 5).group(Some("Street")),
            term.area(),
        );

        assert!(term.buffer_contains("harbour.jpg"));
        assert!(term.buffer_contains("June 2021"));
        assert!(term.buffer_contains("Porto"));
        assert!(term.buffer_contains("Street"));
        assert!(term.buffer_contains("Boats at dusk"));
        assert!(term.buffer_contains("2/5"));
        assert!(term.buffer_contains("Prev"));
        assert!(term.buffer_contains("Close"));
    }

    #[test]
    fn test_overlay_without_description() {
        let mut term = TestTerminal::new();
        let card = card();
        term.render_widget(
            DetailOverlay::new(&card, 5).show_description(false),
            term.area(),
        );

        assert!(!term.buffer_contains("Boats at dusk"));
        assert!(!term.buffer_contains("Group"));
    }

    #[test]
    fn test_overlay_compact_terminal() {
        let mut term = TestTerminal::with_size(30, 8);
        let card = card();
        term.render_widget(DetailOverlay::new(&card, 5), term.area());
        assert!(term.buffer_contains("harbour"));
    }
}
