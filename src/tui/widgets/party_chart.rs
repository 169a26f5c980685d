//! Top candidates of one party as a horizontal bar chart of President %

use ratatui::{
    layout::{Direction, Rect},
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::domain::Party;
use crate::odds::{format_pct, OddsRow};
use crate::tui::theme::THEME;

/// Bars carry hundredths of a percent so two decimals survive the u64 scale
const SCALE: f64 = 100.0;

pub fn render_party_chart(f: &mut Frame, area: Rect, party: Party, rows: &[&OddsRow]) {
    let (title, primary_label) = match party {
        Party::Dem => (" Democrats: Presidency % (primary % in brackets) ", "Dem"),
        Party::Gop => (" Republicans: Presidency % (primary % in brackets) ", "GOP"),
        Party::Both | Party::None => (" Presidency % ", "Primary"),
    };

    let block = Block::default()
        .title(title)
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());

    if rows.is_empty() {
        let empty = Paragraph::new(format!("  No {} candidates listed", primary_label))
            .style(THEME.inactive_style())
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let bars: Vec<Bar> = rows
        .iter()
        .map(|r| {
            let primary = match party {
                Party::Gop => r.gop_primary_pct,
                _ => r.dem_primary_pct,
            };
            Bar::default()
                .value(bar_value(r.president_pct))
                .label(Line::from(r.candidate.clone()))
                .text_value(format!(
                    "{}% [{}: {}%]",
                    format_pct(r.president_pct),
                    primary_label,
                    format_pct(primary)
                ))
                .style(Style::default().fg(THEME.party_color(party)))
                .value_style(THEME.text_style().bg(THEME.party_color(party)))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}

/// Bar length for a percentage; NaN and negatives collapse to zero
pub fn bar_value(pct: f64) -> u64 {
    if pct.is_finite() && pct > 0.0 {
        (pct * SCALE).round() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_value() {
        assert_eq!(bar_value(15.25), 1525);
        assert_eq!(bar_value(0.0), 0);
        assert_eq!(bar_value(f64::NAN), 0);
        assert_eq!(bar_value(-3.0), 0);
    }
}
