//! Rendering methods for the App.
//!
//! The screen is a single view, drawn top to bottom:
//! - **Header**: title, theme indicator and filter tabs
//! - **Task list**: filtered tasks or the empty state
//! - **Stats**: remaining count and the last persistence notice
//! - **Suggestions**: the suggestion panel
//! - **Input**: the new-task composer
//! - **Footer**: key hints

mod main_screen;

use ratatui::{Frame, widgets::Block};

use super::App;

impl App {
    /// Renders the application UI.
    ///
    /// Uses the cached layout from `self.layout.main`, which must be updated
    /// with [`App::update_layout`] before each frame.
    pub fn render(&self, frame: &mut Frame) {
        frame.render_widget(Block::default().style(self.theme.base_style()), frame.area());
        self.render_main(frame);
    }
}
