//! Presidency % against P(President | Win Primary) %

use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Row, Table};

use super::odds_table::conditional_cell;
use crate::domain::Party;
use crate::odds::{format_pct, OddsRow};
use crate::tui::theme::THEME;

/// Scatter next to the per-candidate table
pub fn render_conditional(f: &mut Frame, area: Rect, rows: &[&OddsRow], scroll: usize) {
    let [chart_area, table_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);

    render_scatter(f, chart_area, rows);
    render_table(f, table_area, rows, scroll);
}

fn render_scatter(f: &mut Frame, area: Rect, rows: &[&OddsRow]) {
    let dem = scatter_points(rows, Party::Dem);
    let gop = scatter_points(rows, Party::Gop);
    let x_max = axis_max(dem.iter().chain(gop.iter()).map(|(x, _)| *x));
    let y_max = axis_max(dem.iter().chain(gop.iter()).map(|(_, y)| *y));

    let datasets = vec![
        Dataset::default()
            .name("DEM")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(THEME.party_style(Party::Dem))
            .data(&dem),
        Dataset::default()
            .name("GOP")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(THEME.party_style(Party::Gop))
            .data(&gop),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Presidency % vs Conditional % ")
                .title_style(THEME.title_style())
                .borders(Borders::ALL)
                .border_style(THEME.border_style()),
        )
        .x_axis(
            Axis::default()
                .title("Presidency %")
                .style(THEME.inactive_style())
                .bounds([0.0, x_max])
                .labels(axis_labels(x_max)),
        )
        .y_axis(
            Axis::default()
                .title("Conditional %")
                .style(THEME.inactive_style())
                .bounds([0.0, y_max])
                .labels(axis_labels(y_max)),
        );

    f.render_widget(chart, area);
}

fn render_table(f: &mut Frame, area: Rect, rows: &[&OddsRow], scroll: usize) {
    let header = Row::new(
        ["Candidate", "Party", "President %", "P(Pres | Primary) %"]
            .iter()
            .map(|h| Cell::from(*h).style(THEME.header_style())),
    );

    let body = rows.iter().skip(scroll).map(|r| {
        Row::new(vec![
            Cell::from(r.candidate.clone()).style(THEME.text_style()),
            Cell::from(r.party.as_str()).style(THEME.party_style(r.party)),
            Cell::from(format_pct(r.president_pct)).style(THEME.text_style()),
            conditional_cell(r.conditional_pct),
        ])
    });

    let table = Table::new(
        body,
        [
            Constraint::Min(18),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Probability of Winning Presidency Given Winning Primary ")
            .title_style(THEME.title_style())
            .border_style(THEME.border_style()),
    );

    f.render_widget(table, area);
}

/// (President %, conditional %) for one party, skipping undefined conditionals
pub fn scatter_points(rows: &[&OddsRow], party: Party) -> Vec<(f64, f64)> {
    rows.iter()
        .filter(|r| r.party == party && r.conditional_pct.is_finite())
        .map(|r| (r.president_pct, r.conditional_pct))
        .collect()
}

/// Axis upper bound with 10% headroom; 1.0 when there is nothing to plot
pub fn axis_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.filter(|v| v.is_finite()).fold(0.0, f64::max);
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

fn axis_labels(max: f64) -> Vec<Line<'static>> {
    [0.0, max / 2.0, max]
        .iter()
        .map(|v| Line::from(format!("{:.0}", v)))
        .collect()
}
