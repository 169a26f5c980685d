use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEMOCRATIC_NOMINEE_2028: &str = "democratic-presidential-nominee-2028";
pub const REPUBLICAN_NOMINEE_2028: &str = "republican-presidential-nominee-2028";
pub const PRESIDENTIAL_WINNER_2028: &str = "presidential-election-winner-2028";

/// One of the three tracked races
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceId {
    /// Democratic presidential nominee
    Democratic,
    /// Republican presidential nominee
    Republican,
    /// Presidential election winner
    President,
}

impl RaceId {
    /// Processing order: both primaries first, then the general.
    pub const ALL: [RaceId; 3] = [RaceId::Democratic, RaceId::Republican, RaceId::President];

    pub fn as_str(&self) -> &'static str {
        match self {
            RaceId::Democratic => "democratic",
            RaceId::Republican => "republican",
            RaceId::President => "president",
        }
    }

    /// Gamma event slug used when no override is configured
    pub fn default_slug(&self) -> &'static str {
        match self {
            RaceId::Democratic => DEMOCRATIC_NOMINEE_2028,
            RaceId::Republican => REPUBLICAN_NOMINEE_2028,
            RaceId::President => PRESIDENTIAL_WINNER_2028,
        }
    }

    /// Human readable label for tables and banners
    pub fn label(&self) -> &'static str {
        match self {
            RaceId::Democratic => "Dem Primary",
            RaceId::Republican => "GOP Primary",
            RaceId::President => "President",
        }
    }
}

impl std::fmt::Display for RaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RaceId {
    type Err = &'static str;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "democratic" | "dem" => Ok(Self::Democratic),
            "republican" | "gop" | "rep" => Ok(Self::Republican),
            "president" | "pres" => Ok(Self::President),
            _ => Err("invalid race; expected democratic|republican|president"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_order() {
        assert_eq!(
            RaceId::ALL,
            [RaceId::Democratic, RaceId::Republican, RaceId::President]
        );
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("GOP".parse::<RaceId>(), Ok(RaceId::Republican));
        assert_eq!(" dem ".parse::<RaceId>(), Ok(RaceId::Democratic));
        assert_eq!("president".parse::<RaceId>(), Ok(RaceId::President));
        assert!("senate".parse::<RaceId>().is_err());
    }

    #[test]
    fn test_default_slugs_are_distinct() {
        let slugs: std::collections::HashSet<_> =
            RaceId::ALL.iter().map(|r| r.default_slug()).collect();
        assert_eq!(slugs.len(), 3);
    }
}
