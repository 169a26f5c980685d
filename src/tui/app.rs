//! Dashboard state management
//!
//! Holds the latest snapshot plus view state (tab, scroll, overlays).

use chrono::{DateTime, Utc};

use crate::domain::Party;
use crate::odds::OddsRow;
use crate::services::OddsSnapshot;
use crate::tui::event::KeyAction;

/// Rows shown in each party chart
pub const TOP_PER_PARTY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Democrats,
    Republicans,
    Conditional,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Democrats, Tab::Republicans, Tab::Conditional];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview Table",
            Tab::Democrats => "Top Democrats",
            Tab::Republicans => "Top Republicans",
            Tab::Conditional => "Conditional",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Dashboard application state
pub struct DashboardApp {
    /// Latest pipeline result
    pub snapshot: OddsSnapshot,
    /// Selected tab
    pub tab: Tab,
    /// Scroll offset for table tabs
    pub scroll_offset: usize,
    /// Is the app running
    pub running: bool,
    /// Show help overlay
    pub show_help: bool,
    /// A refresh is in flight
    pub refreshing: bool,
    /// Completed pipeline runs
    pub refresh_count: u64,
}

impl Default for DashboardApp {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardApp {
    pub fn new() -> Self {
        Self {
            snapshot: OddsSnapshot::empty(),
            tab: Tab::Overview,
            scroll_offset: 0,
            running: true,
            show_help: false,
            refreshing: false,
            refresh_count: 0,
        }
    }

    /// Check if app should continue running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Signal the app to quit
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn begin_refresh(&mut self) {
        self.refreshing = true;
    }

    /// Replace the snapshot after a pipeline run
    pub fn set_snapshot(&mut self, snapshot: OddsSnapshot) {
        self.snapshot = snapshot;
        self.refreshing = false;
        self.refresh_count += 1;
        self.clamp_scroll();
    }

    /// Timestamp of the last completed fetch
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        (self.refresh_count > 0).then_some(self.snapshot.fetched_at)
    }

    /// Rows backing the current tab, in table order
    pub fn visible_rows(&self) -> Vec<&OddsRow> {
        match self.tab {
            Tab::Overview => self.snapshot.rows.iter().collect(),
            Tab::Democrats => top_for_party(&self.snapshot, Party::Dem),
            Tab::Republicans => top_for_party(&self.snapshot, Party::Gop),
            Tab::Conditional => self
                .snapshot
                .rows
                .iter()
                .filter(|r| r.has_conditional())
                .collect(),
        }
    }

    pub fn top_dem(&self) -> f64 {
        self.snapshot.top(|r| r.dem_primary_pct)
    }

    pub fn top_gop(&self) -> f64 {
        self.snapshot.top(|r| r.gop_primary_pct)
    }

    pub fn top_president(&self) -> f64 {
        self.snapshot.top(|r| r.president_pct)
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
        self.scroll_offset = 0;
    }

    pub fn prev_tab(&mut self) {
        self.tab = self.tab.prev();
        self.scroll_offset = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.visible_rows().len().saturating_sub(1) {
            self.scroll_offset += 1;
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    fn clamp_scroll(&mut self) {
        let max = self.visible_rows().len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.min(max);
    }

    /// Apply a key action. Returns true when a refresh was requested.
    pub fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => self.quit(),
            KeyAction::Refresh => {
                if !self.refreshing {
                    self.begin_refresh();
                    return true;
                }
            }
            KeyAction::NextTab => self.next_tab(),
            KeyAction::PrevTab => self.prev_tab(),
            KeyAction::ScrollUp => self.scroll_up(),
            KeyAction::ScrollDown => self.scroll_down(),
            KeyAction::Help => self.toggle_help(),
            KeyAction::None => {}
        }
        false
    }
}

fn top_for_party(snapshot: &OddsSnapshot, party: Party) -> Vec<&OddsRow> {
    snapshot
        .rows_for_party(party)
        .into_iter()
        .take(TOP_PER_PARTY)
        .collect()
}
