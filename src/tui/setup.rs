//! Terminal setup and configuration utilities.

use std::io::stdout;

use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use tracing::{debug, warn};

/// Guard that enables bracketed paste and disables it again on drop.
///
/// With bracketed paste a multi-line paste arrives as one `Event::Paste`
/// instead of a burst of key events, so an embedded newline cannot submit a
/// half-pasted task. The guard restores the terminal even if the
/// application panics.
pub struct TerminalEventGuard {
    bracketed_paste_enabled: bool,
}

impl TerminalEventGuard {
    #[must_use]
    pub fn new() -> Self {
        let bracketed_paste_enabled = match execute!(stdout(), EnableBracketedPaste) {
            Ok(()) => {
                debug!("bracketed paste enabled");
                true
            }
            Err(e) => {
                warn!(error = %e, "could not enable bracketed paste");
                false
            }
        };

        Self {
            bracketed_paste_enabled,
        }
    }
}

impl Default for TerminalEventGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalEventGuard {
    fn drop(&mut self) {
        if self.bracketed_paste_enabled {
            let _ = execute!(stdout(), DisableBracketedPaste);
        }
    }
}
