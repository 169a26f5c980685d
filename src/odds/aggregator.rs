//! Merge per-race observations into one row per canonical candidate.

use std::collections::HashMap;

use crate::domain::{CandidateRow, MarketRecord, RaceId};

use super::extractor::yes_probability;
use super::normalizer::canonical_name;

/// One candidate probability seen in one race
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub race: RaceId,
    pub name: String,
    pub probability: f64,
}

impl Observation {
    pub fn new(race: RaceId, name: impl Into<String>, probability: f64) -> Self {
        Self {
            race,
            name: name.into(),
            probability,
        }
    }

    /// Normalize the label and extract the yes-probability of a market
    pub fn from_market(race: RaceId, market: &MarketRecord) -> Self {
        Self {
            race,
            name: canonical_name(market.group_item_title.as_deref()),
            probability: yes_probability(market),
        }
    }
}

/// Candidate rows in first-sighting order
#[derive(Debug, Clone, Default)]
pub struct OddsBook {
    rows: Vec<CandidateRow>,
    index: HashMap<String, usize>,
}

impl OddsBook {
    /// Fold a stream of observations into a finished book
    pub fn from_observations<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = Observation>,
    {
        observations
            .into_iter()
            .fold(Self::default(), |book, obs| book.with(obs))
    }

    /// Apply one observation; later values for the same race and name are dropped
    pub fn with(mut self, obs: Observation) -> Self {
        let idx = match self.index.get(&obs.name) {
            Some(&idx) => idx,
            None => {
                let idx = self.rows.len();
                self.index.insert(obs.name.clone(), idx);
                self.rows.push(CandidateRow::new(obs.name));
                idx
            }
        };
        self.rows[idx].record(obs.race, obs.probability);
        self
    }

    pub fn get(&self, name: &str) -> Option<&CandidateRow> {
        self.index.get(name).map(|&idx| &self.rows[idx])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[CandidateRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<CandidateRow> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_write_wins_per_race() {
        let book = OddsBook::from_observations([
            Observation::new(RaceId::Democratic, "Jane Doe", 0.6),
            Observation::new(RaceId::Democratic, "Jane Doe", 0.1),
            Observation::new(RaceId::President, "Jane Doe", 0.15),
        ]);

        assert_eq!(book.len(), 1);
        let row = book.get("Jane Doe").unwrap();
        assert_eq!(row.dem_odds, Some(0.6));
        assert_eq!(row.pres_odds, Some(0.15));
        assert_eq!(row.rep_odds, None);
    }

    #[test]
    fn test_rows_keep_first_sighting_order() {
        let book = OddsBook::from_observations([
            Observation::new(RaceId::Democratic, "B", 0.2),
            Observation::new(RaceId::Republican, "A", 0.3),
            Observation::new(RaceId::President, "C", 0.1),
            Observation::new(RaceId::President, "A", 0.2),
        ]);

        let names: Vec<_> = book.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_aliases_merge_into_one_row() {
        let gop = MarketRecord {
            group_item_title: Some("jd vance".to_string()),
            active: true,
            outcome_prices: Some(json!(r#"["0.5", "0.5"]"#)),
            last_trade_price: None,
        };
        let pres = MarketRecord {
            group_item_title: Some("J.D. Vance".to_string()),
            active: true,
            outcome_prices: None,
            last_trade_price: Some(0.28),
        };

        let book = OddsBook::from_observations([
            Observation::from_market(RaceId::Republican, &gop),
            Observation::from_market(RaceId::President, &pres),
        ]);

        assert_eq!(book.len(), 1);
        let row = book.get("J.D. Vance").unwrap();
        assert_eq!(row.rep_odds, Some(0.5));
        assert_eq!(row.pres_odds, Some(0.28));
    }

    #[test]
    fn test_null_and_absent_titles_share_unknown_row() {
        let absent: MarketRecord =
            serde_json::from_value(json!({ "active": true, "lastTradePrice": 0.02 })).unwrap();
        let null: MarketRecord = serde_json::from_value(
            json!({ "groupItemTitle": null, "active": true, "lastTradePrice": 0.04 }),
        )
        .unwrap();

        let book = OddsBook::from_observations([
            Observation::from_market(RaceId::Democratic, &absent),
            Observation::from_market(RaceId::President, &null),
        ]);

        assert_eq!(book.len(), 1);
        let row = book.get("Unknown").unwrap();
        assert_eq!(row.dem_odds, Some(0.02));
        assert_eq!(row.pres_odds, Some(0.04));
    }

    #[test]
    fn test_empty_stream() {
        let book = OddsBook::from_observations(Vec::new());
        assert!(book.is_empty());
    }
}
