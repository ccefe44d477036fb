//! Suggestion panel widget.
//!
//! Shows the placeholder prompt, loading and error states, the suggestions
//! for the current input, or the confirmation after one was picked.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::core::{ActionKind, SimilarTask, Suggestion, SuggestionKind};
use crate::tui::Theme;

use super::task_list::truncate_to_width;

/// Prompt shown while the input is too short for suggestions.
pub const SUGGESTION_PLACEHOLDER: &str = "Start typing to get AI-powered suggestions";

/// Shown between the debounce firing and the provider answering.
pub const SUGGESTION_LOADING: &str = "Getting smart suggestions...";

/// Shown when the provider found nothing.
pub const NO_SUGGESTIONS: &str = "No specific suggestions found";

/// A selectable row in the suggestion panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionEntry {
    /// One task from the similar-tasks group.
    Similar(SimilarTask),
    /// A single-line suggestion.
    Action {
        kind: ActionKind,
        label: String,
    },
}

/// Flattens suggestions into selectable rows, in display order.
#[must_use]
pub fn suggestion_entries(suggestions: &[Suggestion]) -> Vec<SuggestionEntry> {
    let mut entries = Vec::new();
    for suggestion in suggestions {
        if let Suggestion::Similar(tasks) = suggestion {
            entries.extend(tasks.iter().cloned().map(SuggestionEntry::Similar));
        } else if let Some(kind) = suggestion.action_kind() {
            entries.push(SuggestionEntry::Action {
                kind,
                label: suggestion.label(),
            });
        }
    }
    entries
}

/// What the suggestion panel currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SuggestionPanel {
    /// Prompt to start typing.
    #[default]
    Placeholder,
    /// A request is in flight.
    Loading,
    /// Suggestions are available.
    Showing {
        suggestions: Vec<Suggestion>,
        /// Index into [`suggestion_entries`].
        selected: usize,
    },
    /// The provider returned nothing.
    NoSuggestions,
    /// Confirmation after picking a suggestion.
    Message(String),
    /// The provider failed.
    Error(String),
}

const fn kind_icon(kind: SuggestionKind) -> &'static str {
    match kind {
        SuggestionKind::Similar => "≈",
        SuggestionKind::Category => "◆",
        SuggestionKind::Reminder => "◷",
        SuggestionKind::Delegate => "➜",
    }
}

const fn similar_icon(task: &SimilarTask) -> &'static str {
    if task.completed { "✓" } else { "○" }
}

/// Bordered suggestion panel.
pub struct SuggestionPanelWidget<'a> {
    panel: &'a SuggestionPanel,
    theme: &'a Theme,
}

impl<'a> SuggestionPanelWidget<'a> {
    #[must_use]
    pub const fn new(panel: &'a SuggestionPanel, theme: &'a Theme) -> Self {
        Self { panel, theme }
    }

    fn suggestion_lines(
        &self,
        suggestions: &[Suggestion],
        selected: usize,
        width: usize,
    ) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let mut index = 0;

        for suggestion in suggestions {
            match suggestion {
                Suggestion::Similar(tasks) => {
                    lines.push(Line::from(Span::styled(
                        format!("{} {}", kind_icon(SuggestionKind::Similar), suggestion.label()),
                        self.theme.muted_style(),
                    )));
                    for task in tasks {
                        let text = format!("{} {}", similar_icon(task), task.text);
                        lines.push(self.entry_line(&text, index == selected, width, 2));
                        index += 1;
                    }
                }
                other => {
                    let text = format!("{} {}", kind_icon(other.kind()), other.label());
                    lines.push(self.entry_line(&text, index == selected, width, 0));
                    index += 1;
                }
            }
        }
        lines
    }

    fn entry_line(
        &self,
        text: &str,
        is_selected: bool,
        width: usize,
        indent: usize,
    ) -> Line<'static> {
        let (prefix, style) = if is_selected {
            ("> ", self.theme.highlight_style())
        } else {
            ("  ", self.theme.normal_style())
        };
        let pad = " ".repeat(indent);
        let avail = width.saturating_sub(prefix.len() + indent);
        Line::from(vec![
            Span::styled(prefix, style),
            Span::raw(pad),
            Span::styled(truncate_to_width(text, avail), style),
        ])
    }
}

impl Widget for SuggestionPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Suggestions ")
            .title_style(self.theme.header_style())
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());

        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match self.panel {
            SuggestionPanel::Placeholder => vec![Line::from(Span::styled(
                SUGGESTION_PLACEHOLDER,
                self.theme.placeholder_style(),
            ))],
            SuggestionPanel::Loading => vec![Line::from(Span::styled(
                format!("⟳ {SUGGESTION_LOADING}"),
                self.theme.muted_style(),
            ))],
            SuggestionPanel::NoSuggestions => vec![Line::from(Span::styled(
                NO_SUGGESTIONS,
                self.theme.muted_style(),
            ))],
            SuggestionPanel::Message(text) => vec![Line::from(Span::styled(
                format!("✓ {text}"),
                self.theme.success_style(),
            ))],
            SuggestionPanel::Error(text) => vec![Line::from(Span::styled(
                format!("⚠ {text}"),
                self.theme.error_style(),
            ))],
            SuggestionPanel::Showing {
                suggestions,
                selected,
            } => self.suggestion_lines(suggestions, *selected, inner.width as usize),
        };

        Paragraph::new(lines).render(inner, buf);
    }
}
