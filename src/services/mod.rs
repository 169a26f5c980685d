pub mod odds_pipeline;

pub use odds_pipeline::{FetchStatus, OddsPipeline, OddsSnapshot, RaceFetch};
