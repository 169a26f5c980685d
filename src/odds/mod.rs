//! Odds computation: extraction, name normalization, aggregation and derivation.

pub mod aggregator;
pub mod derivation;
pub mod extractor;
pub mod normalizer;

pub use aggregator::{Observation, OddsBook};
pub use derivation::{conditional_probability, derive_table, format_pct, to_percent, OddsRow};
pub use extractor::yes_probability;
pub use normalizer::{canonical_name, NAME_ALIASES, UNKNOWN_CANDIDATE};
