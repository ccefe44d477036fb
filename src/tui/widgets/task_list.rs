//! Task list widget.
//!
//! Renders the filtered view one row per task, or the empty-state
//! placeholder when the view has no rows.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::{FilterMode, Task};
use crate::tui::Theme;

/// Width of the selection marker, checkbox and star columns.
const ROW_PREFIX_WIDTH: usize = 2 + 4 + 2;

/// One row of the list.
#[derive(Debug, Clone, Copy)]
pub struct TaskRow<'a> {
    pub task: &'a Task,
    /// The row is animating out.
    pub removing: bool,
}

/// Headline and hint shown when the filtered view is empty.
#[must_use]
pub const fn empty_state_text(mode: FilterMode) -> (&'static str, &'static str) {
    match mode {
        FilterMode::All => ("No tasks yet", "Type below and press Enter to add one."),
        FilterMode::Active => ("Nothing left to do", "Every task is completed."),
        FilterMode::Completed => (
            "No completed tasks",
            "Press Ctrl+D to complete the selected task.",
        ),
        FilterMode::Priority => (
            "No priority tasks",
            "Press Ctrl+P to star the selected task.",
        ),
    }
}

/// Cuts `text` to at most `max_width` terminal cells, ending in `…` when cut.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// First row index to draw so that `selected` stays visible.
#[must_use]
pub const fn scroll_offset(selected: usize, visible_height: usize) -> usize {
    if visible_height == 0 {
        return 0;
    }
    selected.saturating_sub(visible_height - 1)
}

/// Bordered list of tasks.
pub struct TaskListWidget<'a> {
    rows: &'a [TaskRow<'a>],
    selected: usize,
    filter: FilterMode,
    theme: &'a Theme,
}

impl<'a> TaskListWidget<'a> {
    #[must_use]
    pub const fn new(
        rows: &'a [TaskRow<'a>],
        selected: usize,
        filter: FilterMode,
        theme: &'a Theme,
    ) -> Self {
        Self {
            rows,
            selected,
            filter,
            theme,
        }
    }

    fn row_line(&self, row: &TaskRow<'_>, is_selected: bool, text_width: usize) -> Line<'static> {
        let task = row.task;
        let marker = if is_selected { "› " } else { "  " };
        let checkbox = if task.completed { "[x] " } else { "[ ] " };
        let star = if task.priority { "★ " } else { "☆ " };

        let text_style = if row.removing {
            self.theme.removing_style()
        } else if task.completed {
            self.theme.completed_style()
        } else if is_selected {
            self.theme.highlight_style()
        } else {
            self.theme.normal_style()
        };
        let star_style = if task.priority {
            self.theme.warning_style()
        } else {
            self.theme.muted_style()
        };
        let checkbox_style = if task.completed {
            self.theme.success_style()
        } else {
            self.theme.muted_style()
        };
        let marker_style = if is_selected {
            self.theme.highlight_style()
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(checkbox, checkbox_style),
            Span::styled(star, star_style),
            Span::styled(truncate_to_width(&task.text, text_width), text_style),
        ])
    }
}

impl Widget for TaskListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Tasks ({}) ", self.filter.name());
        let block = Block::default()
            .title(title)
            .title_style(self.theme.header_style())
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.rows.is_empty() {
            let (headline, hint) = empty_state_text(self.filter);
            let text = vec![
                Line::from(Span::styled(headline, self.theme.header_style())),
                Line::from(Span::styled(hint, self.theme.muted_style())),
            ];
            Paragraph::new(text).render(inner, buf);
            return;
        }

        let height = inner.height as usize;
        let text_width = (inner.width as usize).saturating_sub(ROW_PREFIX_WIDTH);
        let offset = scroll_offset(self.selected, height);

        let lines: Vec<Line> = self
            .rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, row)| self.row_line(row, i == self.selected, text_width))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
