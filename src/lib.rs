pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod odds;
pub mod services;
pub mod tui;

pub use adapters::{EventSource, GammaEventsClient};
pub use config::AppConfig;
pub use domain::{CandidateRow, MarketRecord, Party, RaceId};
pub use error::{OddsError, Result};
pub use odds::{derive_table, OddsRow};
pub use services::{OddsPipeline, OddsSnapshot};
