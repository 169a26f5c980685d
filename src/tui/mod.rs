//! Terminal User Interface module
//!
//! Interactive dashboard over the derived odds table: metric cards, per-party
//! charts, the conditional view and a manual refresh.

pub mod app;
pub mod event;
pub mod runner;
pub mod theme;
pub mod ui;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use app::{DashboardApp, Tab, TOP_PER_PARTY};
pub use event::KeyAction;
pub use runner::DashboardRunner;
pub use theme::Theme;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::adapters::GammaEventsClient;
use crate::config::AppConfig;
use crate::error::Result;
use crate::services::OddsPipeline;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to normal mode
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard against the live Gamma API
pub async fn run_dashboard(config: &AppConfig) -> Result<()> {
    let client = GammaEventsClient::new(&config.api)?;
    let pipeline = OddsPipeline::new(client, config.races.clone());
    DashboardRunner::new(pipeline).run().await
}
