//! Title, metric cards and tab bar

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::odds::format_pct;
use crate::tui::app::{DashboardApp, Tab};
use crate::tui::theme::THEME;

/// Render the dashboard title line
pub fn render_title(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" PolyElection Dashboard: 2028 Presidential Odds ", THEME.title_style()),
        Span::styled(" powered by the Polymarket Gamma API", THEME.inactive_style()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Render the three "top odds" cards
pub fn render_metrics(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let chunks = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    let cards = [
        ("Top Dem Odds", app.top_dem(), THEME.dem),
        ("Top GOP Odds", app.top_gop(), THEME.gop),
        ("Top President Odds", app.top_president(), THEME.highlight),
    ];

    for ((title, value, color), chunk) in cards.into_iter().zip(chunks.iter()) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .title_style(THEME.title_style())
            .borders(Borders::ALL)
            .border_style(THEME.border_style());
        let text = Paragraph::new(Line::from(Span::styled(
            format!("{}%", format_pct(value)),
            ratatui::style::Style::default().fg(color),
        )))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(text, *chunk);
    }
}

/// Render the tab bar
pub fn render_tabs(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(THEME.text_style())
        .highlight_style(THEME.highlight_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(THEME.border_style()),
        );
    f.render_widget(tabs, area);
}
