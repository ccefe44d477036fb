//! Layout calculation helpers for the TUI.
//!
//! Single source of truth for the screen layout so that the per-frame cache
//! in `App::update_layout` and rendering always agree.

use ratatui::layout::{Constraint, Layout, Rect};

/// Layout of the main screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct MainLayout {
    /// Title, theme indicator and filter tabs (1 line).
    pub header: Rect,
    /// Task list (grows).
    pub list: Rect,
    /// Remaining count and notices (1 line).
    pub stats: Rect,
    /// Suggestion panel.
    pub suggestions: Rect,
    /// New-task composer.
    pub input: Rect,
    /// Key hints (1 line).
    pub footer: Rect,
    /// Rows available for tasks inside the list border.
    pub list_visible_height: usize,
}

/// Height of the suggestion panel including borders.
pub const SUGGESTION_PANEL_HEIGHT: u16 = 8;

const MAIN_LAYOUT_CONSTRAINTS: [Constraint; 6] = [
    Constraint::Length(1),                       // Header
    Constraint::Min(3),                          // Task list
    Constraint::Length(1),                       // Stats
    Constraint::Length(SUGGESTION_PANEL_HEIGHT), // Suggestions
    Constraint::Length(3),                       // Input
    Constraint::Length(1),                       // Footer
];

/// Calculates the main screen layout.
#[must_use]
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::vertical(MAIN_LAYOUT_CONSTRAINTS).split(area);

    MainLayout {
        header: chunks[0],
        list: chunks[1],
        stats: chunks[2],
        suggestions: chunks[3],
        input: chunks[4],
        footer: chunks[5],
        list_visible_height: chunks[1].height.saturating_sub(2) as usize,
    }
}
