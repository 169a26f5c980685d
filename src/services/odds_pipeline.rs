//! End-to-end odds run: fetch each race, fold into candidate rows, derive the table.
//!
//! Races are fetched one after another. A race that fails contributes no markets
//! and is reported in the snapshot instead of aborting the run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::adapters::EventSource;
use crate::config::RaceConfig;
use crate::domain::{MarketRecord, Party, RaceId};
use crate::odds::{derive_table, Observation, OddsBook, OddsRow};

/// Outcome of fetching one race
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchStatus {
    Fetched { markets: usize },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceFetch {
    pub race: RaceId,
    pub slug: String,
    #[serde(flatten)]
    pub status: FetchStatus,
}

impl RaceFetch {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, FetchStatus::Failed { .. })
    }
}

/// Finished result of one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct OddsSnapshot {
    pub fetched_at: DateTime<Utc>,
    pub races: Vec<RaceFetch>,
    pub rows: Vec<OddsRow>,
}

impl OddsSnapshot {
    pub fn empty() -> Self {
        Self {
            fetched_at: Utc::now(),
            races: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn failed_races(&self) -> Vec<&RaceFetch> {
        self.races.iter().filter(|r| r.is_failed()).collect()
    }

    pub fn has_failures(&self) -> bool {
        self.races.iter().any(RaceFetch::is_failed)
    }

    /// One-line summary of failed races, if any
    pub fn warning(&self) -> Option<String> {
        let failed = self.failed_races();
        if failed.is_empty() {
            return None;
        }
        let details: Vec<String> = failed
            .iter()
            .map(|r| match &r.status {
                FetchStatus::Failed { reason } => format!("{} ({})", r.race.label(), reason),
                FetchStatus::Fetched { .. } => r.race.label().to_string(),
            })
            .collect();
        Some(format!(
            "No data for {} race(s): {}",
            failed.len(),
            details.join("; ")
        ))
    }

    /// Rows of one party, in table order
    pub fn rows_for_party(&self, party: Party) -> Vec<&OddsRow> {
        self.rows.iter().filter(|r| r.party == party).collect()
    }

    /// Highest value of a column, 0.0 for an empty table
    pub fn top(&self, column: impl Fn(&OddsRow) -> f64) -> f64 {
        self.rows.iter().map(column).fold(0.0, f64::max)
    }
}

pub struct OddsPipeline<S> {
    source: S,
    races: RaceConfig,
}

impl<S: EventSource> OddsPipeline<S> {
    pub fn new(source: S, races: RaceConfig) -> Self {
        Self { source, races }
    }

    /// Fetch all three races from scratch and build the table.
    pub async fn run(&self) -> OddsSnapshot {
        let mut races = Vec::with_capacity(RaceId::ALL.len());
        let mut fetched: Vec<(RaceId, Vec<MarketRecord>)> = Vec::with_capacity(RaceId::ALL.len());

        for (race, slug) in self.races.in_order() {
            let (markets, status) = self.fetch_race(race, &slug).await;
            fetched.push((race, markets));
            races.push(RaceFetch { race, slug, status });
        }

        let observations = fetched.iter().flat_map(|(race, markets)| {
            markets
                .iter()
                .map(move |market| Observation::from_market(*race, market))
        });
        let book = OddsBook::from_observations(observations);
        debug!("Aggregated {} candidates", book.len());

        let rows = derive_table(book.into_rows());
        info!("Odds table ready: {} candidates", rows.len());

        OddsSnapshot {
            fetched_at: Utc::now(),
            races,
            rows,
        }
    }

    async fn fetch_race(&self, race: RaceId, slug: &str) -> (Vec<MarketRecord>, FetchStatus) {
        match self.source.fetch_event_markets(slug).await {
            Ok(markets) => {
                info!("Fetched {} active markets for {} ({})", markets.len(), race, slug);
                let count = markets.len();
                (markets, FetchStatus::Fetched { markets: count })
            }
            Err(e) => {
                warn!("Fetch failed for {} ({}): {}", race, slug, e);
                (
                    Vec::new(),
                    FetchStatus::Failed {
                        reason: e.to_string(),
                    },
                )
            }
        }
    }
}
