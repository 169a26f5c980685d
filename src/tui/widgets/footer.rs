//! Footer status bar and failed-fetch banner

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::DashboardApp;
use crate::tui::theme::THEME;

/// Render the footer status bar
pub fn render_footer(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let mut spans = vec![
        Span::raw("  Last updated: "),
        Span::styled(formatted_last_update(app), THEME.highlight_style()),
        Span::raw("  |  Candidates: "),
        Span::styled(app.snapshot.rows.len().to_string(), THEME.highlight_style()),
        Span::styled(
            "  |  r refresh  Tab switch  ↑↓ scroll  ? help  q quit ",
            THEME.inactive_style(),
        ),
    ];

    if app.refreshing {
        spans.push(Span::styled("[REFRESHING]", THEME.title_style()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the warning banner for races that returned no data
pub fn render_banner(f: &mut Frame, area: Rect, warning: &str) {
    let line = Line::from(Span::styled(format!(" ⚠ {} ", warning), THEME.warning_style()));
    f.render_widget(Paragraph::new(line).style(THEME.warning_style()), area);
}

/// Local time of the last fetch, or a placeholder before the first one
pub fn formatted_last_update(app: &DashboardApp) -> String {
    app.last_update()
        .map(|ts| {
            ts.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| "never".to_string())
}
