//! Color theme and styling for the guide TUI.

use ratatui::style::{Color, Modifier, Style};

/// Guide UI color theme.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct GuideTheme {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Accents
    pub accent: Color,
    pub muted: Color,
    pub selection: Color,

    // Quiz feedback
    pub correct: Color,
    pub incorrect: Color,
    pub countdown_low: Color,

    // Narration
    pub narration_active: Color,
    pub narration_paused: Color,
}

impl Default for GuideTheme {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            accent: Color::Yellow,
            muted: Color::DarkGray,
            selection: Color::Cyan,

            correct: Color::Green,
            incorrect: Color::Red,
            countdown_low: Color::Red,

            narration_active: Color::LightGreen,
            narration_paused: Color::Yellow,
        }
    }
}

impl GuideTheme {
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::DIM)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected row of a list.
    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn correct_style(&self) -> Style {
        Style::default()
            .fg(self.correct)
            .add_modifier(Modifier::BOLD)
    }

    pub fn incorrect_style(&self) -> Style {
        Style::default()
            .fg(self.incorrect)
            .add_modifier(Modifier::BOLD)
    }

    /// Countdown style; turns urgent under thirty seconds.
    pub fn countdown_style(&self, remaining_seconds: u32) -> Style {
        if remaining_seconds <= 30 {
            Style::default()
                .fg(self.countdown_low)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.foreground)
        }
    }

    /// Style for the paragraph currently being narrated.
    pub fn narration_style(&self, paused: bool) -> Style {
        if paused {
            Style::default().fg(self.narration_paused)
        } else {
            Style::default()
                .fg(self.narration_active)
                .add_modifier(Modifier::BOLD)
        }
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}
