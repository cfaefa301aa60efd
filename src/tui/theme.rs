//! TUI color theme.

use ratatui::style::{Color, Modifier, Style};

/// Color palette used across all panels.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Color,
    pub title: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub notice_info: Color,
    pub notice_error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Rgb(107, 114, 128),      // #6B7280 gray
            title: Color::Rgb(59, 130, 246),        // #3B82F6 blue
            text_primary: Color::Rgb(229, 231, 235), // #E5E7EB light gray
            text_muted: Color::Rgb(107, 114, 128),  // #6B7280 gray
            accent: Color::Rgb(6, 182, 212),        // #06B6D4 cyan
            notice_info: Color::Rgb(34, 197, 94),   // #22C55E green
            notice_error: Color::Rgb(239, 68, 68),  // #EF4444 red
        }
    }
}

impl Theme {
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }
}
