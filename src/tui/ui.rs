//! Main UI rendering logic
//!
//! Orchestrates the layout and renders all widgets.

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::domain::Party;
use crate::tui::app::{DashboardApp, Tab};
use crate::tui::widgets;

/// Render the entire UI
pub fn render(f: &mut Frame, app: &DashboardApp) {
    let warning = app.snapshot.warning();
    let banner_height = if warning.is_some() { 1 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(1),             // Title
        Constraint::Length(banner_height), // Failed-race banner
        Constraint::Length(3),             // Metric cards
        Constraint::Length(3),             // Tabs
        Constraint::Min(8),                // Tab body
        Constraint::Length(1),             // Footer status bar
    ])
    .split(f.area());

    widgets::render_title(f, chunks[0]);
    if let Some(warning) = warning.as_deref() {
        widgets::render_banner(f, chunks[1], warning);
    }
    widgets::render_metrics(f, chunks[2], app);
    widgets::render_tabs(f, chunks[3], app);

    let rows = app.visible_rows();
    match app.tab {
        Tab::Overview => widgets::render_odds_table(f, chunks[4], &rows, app.scroll_offset),
        Tab::Democrats => widgets::render_party_chart(f, chunks[4], Party::Dem, &rows),
        Tab::Republicans => widgets::render_party_chart(f, chunks[4], Party::Gop, &rows),
        Tab::Conditional => widgets::render_conditional(f, chunks[4], &rows, app.scroll_offset),
    }

    widgets::render_footer(f, chunks[5], app);

    if app.show_help {
        let area = f.area();
        widgets::render_help(f, area);
    }
}
