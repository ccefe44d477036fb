//! Event handling logic for the App.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::core::FilterMode;
use crate::tui::widgets::SuggestionPanel;

impl App {
    /// Handles pasted text from bracketed paste mode.
    ///
    /// The composer holds a single line, so line breaks in the pasted text
    /// become spaces. Other control characters are dropped to keep the
    /// display intact.
    pub fn handle_paste(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        let normalized = text.replace("\r\n", " ").replace(['\r', '\n'], " ");
        let filtered: String = normalized.chars().filter(|c| !c.is_control()).collect();
        if filtered.is_empty() {
            return;
        }

        self.input.textarea.insert_str(&filtered);
        self.on_input_changed();
    }

    /// Handles a key event.
    ///
    /// Application shortcuts are checked first; every other key goes to the
    /// composer. Shortcuts use Ctrl or keys that never produce text, so
    /// typing is never swallowed.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && self.handle_ctrl_key(key.code) {
            return;
        }

        match key.code {
            KeyCode::Enter => self.add_task_from_input(),
            KeyCode::Esc => self.reset_input(),
            KeyCode::Up => self.select_prev(),
            KeyCode::Down => self.select_next(),
            KeyCode::Tab => self.set_filter(self.session.filter().next()),
            KeyCode::BackTab => self.set_filter(self.session.filter().prev()),
            KeyCode::F(n @ 1..=4) => {
                if let Some(mode) = FilterMode::all().get(usize::from(n) - 1) {
                    self.set_filter(*mode);
                }
            }
            _ => {
                let before = self.input.text();
                self.input.textarea.input(key);
                if self.input.text() != before {
                    self.on_input_changed();
                }
            }
        }
    }

    /// Handles Ctrl shortcuts. Returns `false` for keys left to the composer.
    fn handle_ctrl_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('c') => self.should_quit = true,
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_task_id() {
                    self.request_toggle_complete(id);
                }
            }
            KeyCode::Char('p') => {
                if let Some(id) = self.selected_task_id() {
                    self.toggle_priority(id);
                }
            }
            KeyCode::Char('x') => {
                if let Some(id) = self.selected_task_id() {
                    self.request_delete(id);
                }
            }
            KeyCode::Char('l') => self.clear_completed(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('e') => self.activate_suggestion(),
            KeyCode::Up => self.suggestion_up(),
            KeyCode::Down => self.suggestion_down(),
            _ => return false,
        }
        true
    }

    /// Clears the composer and resets the suggestion panel.
    fn reset_input(&mut self) {
        self.input.clear();
        self.cancel_suggestions();
        self.suggestions.panel = SuggestionPanel::Placeholder;
    }

    /// Processes pending events from background tasks.
    ///
    /// This method should be called regularly in the main event loop.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_suggestion_event(event);
        }
    }
}
