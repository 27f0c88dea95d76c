//! Layout calculations for the guide TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// The main layout areas.
pub struct AppLayout {
    pub tab_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
    pub hotkey_bar: Rect,
}

impl AppLayout {
    /// Calculate layout based on terminal size.
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tab bar
                Constraint::Min(8),    // Screen content
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Hotkey bar
            ])
            .split(area);

        Self {
            tab_bar: chunks[0],
            content: chunks[1],
            status_bar: chunks[2],
            hotkey_bar: chunks[3],
        }
    }
}

/// Split the regions screen into search box and list.
pub fn search_and_list(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Split the audio screen into category strip and clip list.
pub fn categories_and_clips(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Calculate fixed-size centered popup.
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
