//! Layout definitions for the TUI
//!
//! The screen splits into a totals strip, the entry list, and a one-line
//! status bar. Dialog and toast placement helpers live here too.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Totals strip across the top (income, expense, balance)
    pub totals: Rect,
    /// Entry list
    pub entries: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from the available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Totals strip
                Constraint::Min(3),    // Entry list
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            totals: vertical[0],
            entries: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the totals strip: three equal cards
pub struct TotalsLayout {
    pub income: Rect,
    pub expense: Rect,
    pub balance: Rect,
}

impl TotalsLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(area);

        Self {
            income: chunks[0],
            expense: chunks[1],
            balance: chunks[2],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Create a fixed-size rect anchored to the bottom-right corner, for toasts
pub fn bottom_right_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + r.width.saturating_sub(width + 1);
    let y = r.y + r.height.saturating_sub(height + 1);
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.totals.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.entries.height, 20);
    }

    #[test]
    fn test_centered_rect_fixed_fits_small_screens() {
        let r = centered_rect_fixed(100, 100, Rect::new(0, 0, 40, 10));
        assert_eq!(r.width, 40);
        assert_eq!(r.height, 10);
    }

    #[test]
    fn test_bottom_right_rect() {
        let r = bottom_right_rect(30, 3, Rect::new(0, 0, 80, 24));
        assert_eq!(r.x, 49);
        assert_eq!(r.y, 20);
        assert_eq!(r.width, 30);
        assert_eq!(r.height, 3);
    }
}
