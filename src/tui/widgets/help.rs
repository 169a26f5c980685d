//! Help overlay

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::theme::THEME;

const HELP_LINES: &[&str] = &[
    "  r / F5        refresh all races",
    "  Tab / →       next tab",
    "  Shift-Tab / ← previous tab",
    "  ↑ / k         scroll up",
    "  ↓ / j         scroll down",
    "  ?             toggle this help",
    "  q / Esc       quit",
];

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered(area, 46, HELP_LINES.len() as u16 + 2);
    let lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::from(*l)).collect();
    let help = Paragraph::new(lines).style(THEME.text_style()).block(
        Block::default()
            .title(" Keys ")
            .title_style(THEME.title_style())
            .borders(Borders::ALL)
            .border_style(THEME.highlight_style()),
    );

    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
