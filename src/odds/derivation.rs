//! Party inference, conditional probability and the final sorted table.

use serde::Serialize;

use crate::domain::{CandidateRow, Party, RaceId};

/// One row of the finished odds table, probabilities in percent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OddsRow {
    #[serde(rename = "Candidate")]
    pub candidate: String,
    #[serde(rename = "Dem Primary %")]
    pub dem_primary_pct: f64,
    #[serde(rename = "GOP Primary %")]
    pub gop_primary_pct: f64,
    #[serde(rename = "President %")]
    pub president_pct: f64,
    /// NaN when undefined; serialized as null
    #[serde(rename = "P(President | Win Primary) %")]
    pub conditional_pct: f64,
    #[serde(rename = "party")]
    pub party: Party,
    /// Races whose market list named this candidate
    #[serde(rename = "listed_in")]
    pub listed_in: Vec<RaceId>,
}

impl OddsRow {
    pub fn has_conditional(&self) -> bool {
        !self.conditional_pct.is_nan()
    }
}

/// P(President | Win Primary) ≈ P(President) / P(Primary).
///
/// NaN for BOTH/NONE and whenever the matching primary probability is zero.
pub fn conditional_probability(row: &CandidateRow, party: Party) -> f64 {
    let primary = match party {
        Party::Dem => row.odds(RaceId::Democratic),
        Party::Gop => row.odds(RaceId::Republican),
        Party::Both | Party::None => f64::NAN,
    };

    if primary.is_nan() || primary == 0.0 {
        return f64::NAN;
    }
    row.odds(RaceId::President) / primary
}

/// Scale a probability to percent, rounded to two decimals with ties to even.
/// NaN stays NaN.
pub fn to_percent(probability: f64) -> f64 {
    let pct = probability * 100.0;
    (pct * 100.0).round_ties_even() / 100.0
}

/// Two-decimal percent for display, "NaN" when undefined
pub fn format_pct(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.2}", value)
    }
}

/// Build the final table sorted by President % descending.
///
/// The sort is stable, so ties keep aggregation order.
pub fn derive_table(rows: Vec<CandidateRow>) -> Vec<OddsRow> {
    let mut table: Vec<OddsRow> = rows
        .into_iter()
        .map(|row| {
            let party = row.party();
            let conditional = conditional_probability(&row, party);
            let listed_in = RaceId::ALL
                .into_iter()
                .filter(|race| row.is_listed(*race))
                .collect();

            OddsRow {
                dem_primary_pct: to_percent(row.odds(RaceId::Democratic)),
                gop_primary_pct: to_percent(row.odds(RaceId::Republican)),
                president_pct: to_percent(row.odds(RaceId::President)),
                conditional_pct: to_percent(conditional),
                party,
                listed_in,
                candidate: row.name,
            }
        })
        .collect();

    table.sort_by(|a, b| b.president_pct.total_cmp(&a.president_pct));
    table
}
