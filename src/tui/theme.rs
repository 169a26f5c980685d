//! Theme and color definitions for the dashboard
//!
//! Dark scheme with a tech-blue accent, blue for Democrats, red for Republicans.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::Party;

/// Theme configuration for the dashboard
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border color
    pub border: Color,
    /// Title / accent color
    pub title: Color,
    /// Democratic candidates
    pub dem: Color,
    /// Republican candidates
    pub gop: Color,
    /// Listed in both primaries
    pub both: Color,
    /// Listed in neither primary
    pub none: Color,
    /// Highlight color
    pub highlight: Color,
    /// Inactive/dim color
    pub inactive: Color,
    /// Normal text color
    pub text: Color,
    /// Warning banner background
    pub warning_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::DarkGray,
            title: Color::Rgb(0, 191, 255),
            dem: Color::Blue,
            gop: Color::Red,
            both: Color::Magenta,
            none: Color::Gray,
            highlight: Color::Yellow,
            inactive: Color::DarkGray,
            text: Color::White,
            warning_bg: Color::Rgb(120, 80, 0),
        }
    }
}

impl Theme {
    /// Get style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get style for titles
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Get style for table headers
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Color for a party label
    pub fn party_color(&self, party: Party) -> Color {
        match party {
            Party::Dem => self.dem,
            Party::Gop => self.gop,
            Party::Both => self.both,
            Party::None => self.none,
        }
    }

    pub fn party_style(&self, party: Party) -> Style {
        Style::default().fg(self.party_color(party))
    }

    /// Get style for highlighted text
    pub fn highlight_style(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    /// Get style for inactive/dim text
    pub fn inactive_style(&self) -> Style {
        Style::default().fg(self.inactive)
    }

    /// Get style for normal text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get style for the failed-fetch banner
    pub fn warning_style(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.warning_bg)
            .add_modifier(Modifier::BOLD)
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);
