//! Centralized theme and styling.

use ratatui::style::{Color, Modifier, Style};

use crate::core::ThemeMode;

/// Application theme with consistent colors and styles.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Which variant this palette belongs to.
    pub mode: ThemeMode,
    /// Background color.
    pub bg: Color,
    /// Primary foreground color.
    pub fg: Color,
    /// Accent/highlight color.
    pub accent: Color,
    /// Success color.
    pub success: Color,
    /// Warning color, also used for priority stars.
    pub warning: Color,
    /// Error color.
    pub error: Color,
    /// Muted/secondary text color.
    pub muted: Color,
    /// Border color.
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Returns the palette for `mode`.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Light palette.
    #[must_use]
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            success: Color::Green,
            warning: Color::Rgb(0xb5, 0x89, 0x00),
            error: Color::Red,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }

    /// Dark palette.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::LightRed,
            muted: Color::Gray,
            border: Color::DarkGray,
        }
    }

    /// Glyph shown in the header: the theme a toggle would switch to.
    #[must_use]
    pub const fn toggle_icon(&self) -> &'static str {
        match self.mode {
            ThemeMode::Light => "☾",
            ThemeMode::Dark => "☀",
        }
    }

    /// Base style filling the whole screen.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Style for the header/title.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text.
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Style for muted/secondary text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for borders.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for highlighted/selected items.
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the text of a completed task.
    #[must_use]
    pub fn completed_style(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// Style for a row that is animating out of the list.
    #[must_use]
    pub fn removing_style(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::DIM | Modifier::ITALIC)
    }

    /// Style for the placeholder text in the input.
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::DIM)
    }
}
