//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and ordering controls
    pub header: Rect,

    /// Grouped collection body
    pub body: Rect,

    /// One-line status bar
    pub status: Rect,
}

/// Header: top border + title row + controls row + bottom border
pub const HEADER_HEIGHT: u16 = 4;

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.body.y, 4);
        assert_eq!(layout.body.height, 19);
        assert_eq!(layout.status.y, 23);
        assert_eq!(layout.status.height, 1);
    }

    #[test]
    fn test_create_layout_small_terminal() {
        let layout = create(Rect::new(0, 0, 40, 6));
        let total = layout.header.height + layout.body.height + layout.status.height;
        assert_eq!(total, 6);
    }
}
