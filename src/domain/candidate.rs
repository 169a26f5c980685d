use serde::{Deserialize, Serialize};

use super::race::RaceId;

/// Party affiliation inferred from which primary lists the candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Party {
    Dem,
    Gop,
    Both,
    None,
}

impl Party {
    /// Classify from primary probabilities. Exactly one label applies.
    pub fn infer(dem_odds: f64, rep_odds: f64) -> Self {
        match (dem_odds > 0.0, rep_odds > 0.0) {
            (true, false) => Party::Dem,
            (false, true) => Party::Gop,
            (true, true) => Party::Both,
            (false, false) => Party::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Party::Dem => "DEM",
            Party::Gop => "GOP",
            Party::Both => "BOTH",
            Party::None => "NONE",
        }
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Party {
    type Err = &'static str;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dem" | "democratic" => Ok(Party::Dem),
            "gop" | "rep" | "republican" => Ok(Party::Gop),
            "both" => Ok(Party::Both),
            "none" => Ok(Party::None),
            _ => Err("invalid party; expected dem|gop|both|none"),
        }
    }
}

/// Per-candidate odds across the three races, probabilities in [0, 1].
///
/// A slot is `None` until the candidate shows up in that race's market list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRow {
    pub name: String,
    pub dem_odds: Option<f64>,
    pub rep_odds: Option<f64>,
    pub pres_odds: Option<f64>,
}

impl CandidateRow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dem_odds: None,
            rep_odds: None,
            pres_odds: None,
        }
    }

    fn slot(&self, race: RaceId) -> Option<f64> {
        match race {
            RaceId::Democratic => self.dem_odds,
            RaceId::Republican => self.rep_odds,
            RaceId::President => self.pres_odds,
        }
    }

    fn slot_mut(&mut self, race: RaceId) -> &mut Option<f64> {
        match race {
            RaceId::Democratic => &mut self.dem_odds,
            RaceId::Republican => &mut self.rep_odds,
            RaceId::President => &mut self.pres_odds,
        }
    }

    /// Probability for a race; an unlisted race reads as 0.0
    pub fn odds(&self, race: RaceId) -> f64 {
        self.slot(race).unwrap_or(0.0)
    }

    /// Whether any market in this race named the candidate
    pub fn is_listed(&self, race: RaceId) -> bool {
        self.slot(race).is_some()
    }

    /// Store a probability unless a non-zero value is already recorded.
    ///
    /// Returns true when the slot changed.
    pub fn record(&mut self, race: RaceId, probability: f64) -> bool {
        let slot = self.slot_mut(race);
        match *slot {
            Some(current) if current != 0.0 => false,
            _ => {
                *slot = Some(probability);
                true
            }
        }
    }

    pub fn party(&self) -> Party {
        Party::infer(self.odds(RaceId::Democratic), self.odds(RaceId::Republican))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_inference_is_total() {
        assert_eq!(Party::infer(0.4, 0.0), Party::Dem);
        assert_eq!(Party::infer(0.0, 0.4), Party::Gop);
        assert_eq!(Party::infer(0.1, 0.2), Party::Both);
        assert_eq!(Party::infer(0.0, 0.0), Party::None);
    }

    #[test]
    fn test_first_non_zero_wins() {
        let mut row = CandidateRow::new("Jane Doe");
        assert!(row.record(RaceId::Democratic, 0.6));
        assert!(!row.record(RaceId::Democratic, 0.9));
        assert_eq!(row.odds(RaceId::Democratic), 0.6);
    }

    #[test]
    fn test_zero_slot_can_be_replaced() {
        let mut row = CandidateRow::new("Jane Doe");
        assert!(row.record(RaceId::President, 0.0));
        assert!(row.is_listed(RaceId::President));
        assert!(row.record(RaceId::President, 0.05));
        assert_eq!(row.odds(RaceId::President), 0.05);
    }

    #[test]
    fn test_unlisted_reads_as_zero() {
        let row = CandidateRow::new("Nobody");
        assert!(!row.is_listed(RaceId::Republican));
        assert_eq!(row.odds(RaceId::Republican), 0.0);
        assert_eq!(row.party(), Party::None);
    }

    #[test]
    fn test_party_parse() {
        assert_eq!("gop".parse::<Party>(), Ok(Party::Gop));
        assert_eq!("DEM".parse::<Party>(), Ok(Party::Dem));
        assert!("green".parse::<Party>().is_err());
    }
}
