//! Overlay drawing helpers for the detail view

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// `width` x `height` rect centred in `area`, clamped to its size
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use gallery_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let modal = centered_rect(40, 10, area);
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Restyle every cell of `area` in muted colours behind an overlay
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let area = area.intersection(buf.area);
    buf.set_style(
        area,
        Style::default()
            .fg(palette::TEXT_MUTED)
            .bg(palette::DEEPEST_BG),
    );
}

/// One-cell drop shadow along the right and bottom edges of `modal`
///
/// Cells outside the buffer are skipped.
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right = Rect::new(
        modal.right(),
        modal.y.saturating_add(1),
        1,
        modal.height,
    );
    let bottom = Rect::new(
        modal.x.saturating_add(1),
        modal.bottom(),
        modal.width,
        1,
    );

    for edge in [right, bottom] {
        for position in edge.positions() {
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_char(' ');
                cell.set_style(style);
            }
        }
    }
}

/// Blank out the modal area before drawing into it
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}
