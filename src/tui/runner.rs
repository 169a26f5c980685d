//! Dashboard runner
//!
//! Drives the pipeline on start-up and on every refresh key, and owns the
//! terminal for the lifetime of the dashboard.

use std::io;
use std::time::Duration;

use ratatui::prelude::*;
use tracing::info;

use crate::adapters::EventSource;
use crate::error::{OddsError, Result};
use crate::services::OddsPipeline;
use crate::tui::app::DashboardApp;
use crate::tui::event::KeyAction;
use crate::tui::{init_terminal, restore_terminal, ui};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Dashboard runner that ties the pipeline to the TUI
pub struct DashboardRunner<S> {
    pipeline: OddsPipeline<S>,
    app: DashboardApp,
}

impl<S: EventSource> DashboardRunner<S> {
    pub fn new(pipeline: OddsPipeline<S>) -> Self {
        Self {
            pipeline,
            app: DashboardApp::new(),
        }
    }

    /// Run the pipeline and swap in the new snapshot
    pub async fn refresh(&mut self) {
        self.app.begin_refresh();
        let snapshot = self.pipeline.run().await;
        info!(
            candidates = snapshot.rows.len(),
            failed = snapshot.failed_races().len(),
            "Dashboard refreshed"
        );
        self.app.set_snapshot(snapshot);
    }

    /// Run the dashboard until the user quits
    pub async fn run(mut self) -> Result<()> {
        info!("Starting dashboard...");

        let mut terminal = init_terminal()
            .map_err(|e| OddsError::Internal(format!("Failed to init terminal: {}", e)))?;

        let result = self.event_loop(&mut terminal).await;

        restore_terminal()
            .map_err(|e| OddsError::Internal(format!("Failed to restore terminal: {}", e)))?;

        info!("Dashboard stopped");
        result
    }

    async fn event_loop(&mut self, terminal: &mut Term) -> Result<()> {
        self.app.begin_refresh();
        self.draw(terminal)?;
        self.refresh().await;

        while self.app.is_running() {
            self.draw(terminal)?;

            if !crossterm::event::poll(Duration::from_millis(100))? {
                continue;
            }
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                if self.app.apply(KeyAction::from(key)) {
                    // Paint the [REFRESHING] marker before blocking on the fetch
                    self.draw(terminal)?;
                    self.refresh().await;
                }
            }
        }

        Ok(())
    }

    fn draw(&self, terminal: &mut Term) -> Result<()> {
        terminal
            .draw(|f| ui::render(f, &self.app))
            .map_err(|e| OddsError::Internal(format!("Failed to render: {}", e)))?;
        Ok(())
    }
}
