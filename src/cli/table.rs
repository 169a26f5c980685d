//! `polyodds table`: fetch once and print the odds table.

use clap::Args;
use tabled::Tabled;

use super::output::{self, OutputMode};
use crate::adapters::GammaEventsClient;
use crate::config::AppConfig;
use crate::domain::Party;
use crate::odds::{format_pct, OddsRow};
use crate::services::{OddsPipeline, OddsSnapshot};

#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// Output as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
    /// Only show one party (dem, gop, both, none).
    #[arg(long)]
    pub party: Option<Party>,
    /// Limit to the first N rows.
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Debug, Tabled)]
pub struct OddsTableRow {
    #[tabled(rename = "Candidate")]
    pub candidate: String,
    #[tabled(rename = "Dem Primary %")]
    pub dem_primary: String,
    #[tabled(rename = "GOP Primary %")]
    pub gop_primary: String,
    #[tabled(rename = "President %")]
    pub president: String,
    #[tabled(rename = "P(President | Win Primary) %")]
    pub conditional: String,
    #[tabled(rename = "party")]
    pub party: String,
}

impl From<&OddsRow> for OddsTableRow {
    fn from(row: &OddsRow) -> Self {
        Self {
            candidate: row.candidate.clone(),
            dem_primary: format_pct(row.dem_primary_pct),
            gop_primary: format_pct(row.gop_primary_pct),
            president: format_pct(row.president_pct),
            conditional: format_pct(row.conditional_pct),
            party: row.party.to_string(),
        }
    }
}

/// Apply party filter and row limit, keeping table order
pub fn select_rows<'a>(snapshot: &'a OddsSnapshot, args: &TableArgs) -> Vec<&'a OddsRow> {
    snapshot
        .rows
        .iter()
        .filter(|r| args.party.map_or(true, |p| r.party == p))
        .take(args.top.unwrap_or(usize::MAX))
        .collect()
}

pub async fn run(args: TableArgs, config: &AppConfig) -> anyhow::Result<()> {
    let client = GammaEventsClient::new(&config.api)?;
    let pipeline = OddsPipeline::new(client, config.races.clone());
    let snapshot = pipeline.run().await;

    print_snapshot(&snapshot, &args)
}

fn print_snapshot(snapshot: &OddsSnapshot, args: &TableArgs) -> anyhow::Result<()> {
    if let Some(warning) = snapshot.warning() {
        output::print_warn(&format!("Warning: {warning}"));
    }

    let rows = select_rows(snapshot, args);
    match OutputMode::from_json_flag(args.json) {
        OutputMode::Json => {
            let filtered = OddsSnapshot {
                fetched_at: snapshot.fetched_at,
                races: snapshot.races.clone(),
                rows: rows.into_iter().cloned().collect(),
            };
            output::print_item(&filtered)?;
        }
        OutputMode::Table => {
            let table: Vec<OddsTableRow> = rows.into_iter().map(OddsTableRow::from).collect();
            output::print_table(&table);
            output::print_kv(
                "Last updated",
                &snapshot
                    .fetched_at
                    .with_timezone(&chrono::Local)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CandidateRow;
    use crate::odds::derive_table;

    fn snapshot() -> OddsSnapshot {
        let rows = vec![
            CandidateRow {
                name: "Jane Doe".to_string(),
                dem_odds: Some(0.6),
                rep_odds: None,
                pres_odds: Some(0.15),
            },
            CandidateRow {
                name: "J.D. Vance".to_string(),
                dem_odds: None,
                rep_odds: Some(0.5),
                pres_odds: Some(0.3),
            },
            CandidateRow {
                name: "Solo".to_string(),
                dem_odds: None,
                rep_odds: None,
                pres_odds: Some(0.01),
            },
        ];
        OddsSnapshot {
            rows: derive_table(rows),
            ..OddsSnapshot::empty()
        }
    }

    #[test]
    fn test_table_row_conversion() {
        let snap = snapshot();
        let jane = OddsTableRow::from(&snap.rows[1]);
        assert_eq!(jane.candidate, "Jane Doe");
        assert_eq!(jane.dem_primary, "60.00");
        assert_eq!(jane.president, "15.00");
        assert_eq!(jane.conditional, "25.00");
        assert_eq!(jane.party, "DEM");

        let solo = OddsTableRow::from(&snap.rows[2]);
        assert_eq!(solo.conditional, "NaN");
        assert_eq!(solo.party, "NONE");
    }

    #[test]
    fn test_select_rows_filters_and_limits() {
        let snap = snapshot();

        let gop = select_rows(
            &snap,
            &TableArgs {
                party: Some(Party::Gop),
                ..TableArgs::default()
            },
        );
        assert_eq!(gop.len(), 1);
        assert_eq!(gop[0].candidate, "J.D. Vance");

        let top = select_rows(
            &snap,
            &TableArgs {
                top: Some(2),
                ..TableArgs::default()
            },
        );
        let names: Vec<_> = top.iter().map(|r| r.candidate.as_str()).collect();
        assert_eq!(names, vec!["J.D. Vance", "Jane Doe"]);
    }
}
