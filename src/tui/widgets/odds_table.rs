//! Full odds table, sorted by President %

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::domain::RaceId;
use crate::odds::{format_pct, OddsRow};
use crate::tui::theme::THEME;

/// Render the overview table
pub fn render_odds_table(f: &mut Frame, area: Rect, rows: &[&OddsRow], scroll: usize) {
    let header_cells = [
        "Candidate",
        "Dem Primary %",
        "GOP Primary %",
        "President %",
        "P(Pres | Primary) %",
        "Party",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(THEME.header_style()));
    let header = Row::new(header_cells).height(1);

    let body = rows.iter().skip(scroll).map(|r| {
        Row::new(vec![
            Cell::from(r.candidate.clone()).style(THEME.text_style()),
            odds_cell(r, RaceId::Democratic, r.dem_primary_pct),
            odds_cell(r, RaceId::Republican, r.gop_primary_pct),
            odds_cell(r, RaceId::President, r.president_pct),
            conditional_cell(r.conditional_pct),
            Cell::from(r.party.as_str()).style(THEME.party_style(r.party)),
        ])
    });

    let table = Table::new(
        body,
        [
            Constraint::Min(22),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(20),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " Full Candidate Odds ({}), sorted by presidency probability ",
                rows.len()
            ))
            .title_style(THEME.title_style())
            .border_style(THEME.border_style()),
    );

    f.render_widget(table, area);
}

/// Unlisted races are dimmed so they read differently from a quoted 0%
fn odds_cell(row: &OddsRow, race: RaceId, value: f64) -> Cell<'static> {
    let style = if row.listed_in.contains(&race) {
        THEME.text_style()
    } else {
        THEME.inactive_style()
    };
    Cell::from(format_pct(value)).style(style)
}

pub(crate) fn conditional_cell(value: f64) -> Cell<'static> {
    let style = if value.is_nan() {
        THEME.inactive_style()
    } else {
        THEME.highlight_style()
    };
    Cell::from(format_pct(value)).style(style)
}
