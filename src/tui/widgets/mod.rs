//! Dashboard widget components

pub mod conditional;
pub mod footer;
pub mod header;
pub mod help;
pub mod odds_table;
pub mod party_chart;

pub use conditional::render_conditional;
pub use footer::{render_banner, render_footer};
pub use header::{render_metrics, render_tabs, render_title};
pub use help::render_help;
pub use odds_table::render_odds_table;
pub use party_chart::render_party_chart;
