//! Main screen rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::core::{FilterMode, remaining_label};
use crate::tui::widgets::{SuggestionPanelWidget, TaskListWidget, TaskRow};

impl App {
    pub(crate) fn render_main(&self, frame: &mut Frame) {
        let layout = self.layout.main;

        self.render_header(frame, layout.header);
        self.render_task_list(frame, layout.list);
        self.render_stats(frame, layout.stats);
        frame.render_widget(
            SuggestionPanelWidget::new(&self.suggestions.panel, &self.theme),
            layout.suggestions,
        );
        self.render_input(frame, layout.input);
        self.render_footer(frame, layout.footer);
    }

    /// Title, theme glyph and filter tabs on one line.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(" Taskpad ", self.theme.header_style()),
            Span::styled(self.theme.toggle_icon(), self.theme.warning_style()),
            Span::raw("  "),
        ];

        for (i, mode) in FilterMode::all().iter().enumerate() {
            let style = if *mode == self.session.filter() {
                self.theme.highlight_style()
            } else {
                self.theme.muted_style()
            };
            let label = if *mode == self.session.filter() {
                format!("[F{} {}]", i + 1, mode.name())
            } else {
                format!(" F{} {} ", i + 1, mode.name())
            };
            spans.push(Span::styled(label, style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_task_list(&self, frame: &mut Frame, area: Rect) {
        let rows: Vec<TaskRow> = self
            .visible_tasks()
            .into_iter()
            .map(|task| TaskRow {
                task,
                removing: self.removals.is_removing(task.id),
            })
            .collect();

        let widget = TaskListWidget::new(&rows, self.list.selected, self.session.filter(), &self.theme);
        frame.render_widget(widget, area);
    }

    /// Remaining count, followed by the persistence notice if any.
    fn render_stats(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            format!(" {}", remaining_label(self.session.remaining_count())),
            self.theme.muted_style(),
        )];
        if let Some(notice) = &self.notice {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(format!("⚠ {notice}"), self.theme.error_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" New Task ")
            .title_style(self.theme.header_style())
            .border_style(self.theme.border_style());

        let mut textarea = self.input.textarea.clone();
        textarea.set_block(block);
        textarea.set_style(self.theme.normal_style());
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_style(self.theme.placeholder_style());

        frame.render_widget(&textarea, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hints = [
            ("[Enter] ", "Add  "),
            ("[^D] ", "Done  "),
            ("[^P] ", "Star  "),
            ("[^X] ", "Delete  "),
            ("[^L] ", "Clear done  "),
            ("[Tab] ", "Filter  "),
            ("[^T] ", "Theme  "),
            ("[^E] ", "Use suggestion  "),
            ("[^C] ", "Quit"),
        ];

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in hints {
            spans.push(Span::styled(key, self.theme.highlight_style()));
            spans.push(Span::styled(label, self.theme.muted_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
