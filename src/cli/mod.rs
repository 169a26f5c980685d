//! polyodds CLI
//!
//! Commands:
//! - `polyodds table` - Fetch once and print the odds table (default)
//! - `polyodds dashboard` - Interactive terminal dashboard with manual refresh
//! - `polyodds races` - Show the race slugs in effect

pub mod output;
pub mod table;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::error::OddsError;

pub use table::TableArgs;

/// 2028 presidential odds from Polymarket
#[derive(Parser, Debug)]
#[command(name = "polyodds")]
#[command(author, version, about = "Polymarket 2028 election odds with P(President | Win Primary)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config directory
    #[arg(short, long, default_value = "config", global = true)]
    pub config: String,

    /// Request timeout in seconds (overrides config)
    #[arg(long, global = true, env = "POLYODDS_TIMEOUT")]
    pub timeout: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch all races once and print the table
    Table(TableArgs),

    /// Interactive dashboard (r = refresh, q = quit)
    Dashboard,

    /// List races and their Gamma event slugs
    Races,
}

impl Cli {
    /// Load config from the chosen directory and apply CLI overrides
    pub fn load_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = AppConfig::load_from(&self.config)?;
        if let Some(timeout) = self.timeout {
            config.api.timeout_secs = timeout;
        }
        if let Err(errors) = config.validate() {
            return Err(OddsError::Validation(errors.join("; ")).into());
        }
        Ok(config)
    }
}

/// Print each race with the slug that will be fetched
pub fn show_races(config: &AppConfig) {
    for (race, slug) in config.races.in_order() {
        output::print_kv(&format!("{:<12}", race.label()), &slug);
    }
    output::print_kv(&format!("{:<12}", "Endpoint"), &config.api.base_url);
}
