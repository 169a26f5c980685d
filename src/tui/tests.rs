#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::domain::{Party, RaceId};
    use crate::odds::{derive_table, Observation, OddsBook};
    use crate::services::{FetchStatus, OddsSnapshot, RaceFetch};
    use crate::tui::app::{DashboardApp, Tab, TOP_PER_PARTY};
    use crate::tui::event::KeyAction;

    fn sample_snapshot() -> OddsSnapshot {
        let mut observations = Vec::new();
        for i in 0..12 {
            let name = format!("Dem {}", i);
            observations.push(Observation::new(RaceId::Democratic, &name, 0.05 + i as f64 * 0.01));
            observations.push(Observation::new(RaceId::President, &name, 0.01 + i as f64 * 0.001));
        }
        observations.push(Observation::new(RaceId::Republican, "Gop One", 0.5));
        observations.push(Observation::new(RaceId::President, "Gop One", 0.3));
        observations.push(Observation::new(RaceId::President, "Independent", 0.02));

        let book = OddsBook::from_observations(observations);
        OddsSnapshot {
            fetched_at: Utc.with_ymd_and_hms(2028, 1, 15, 12, 0, 0).unwrap(),
            races: vec![RaceFetch {
                race: RaceId::Democratic,
                slug: "democratic-presidential-nominee-2028".to_string(),
                status: FetchStatus::Fetched { markets: 12 },
            }],
            rows: derive_table(book.into_rows()),
        }
    }

    fn loaded_app() -> DashboardApp {
        let mut app = DashboardApp::new();
        app.set_snapshot(sample_snapshot());
        app
    }

    #[test]
    fn test_dashboard_app_new() {
        let app = DashboardApp::new();
        assert!(app.is_running());
        assert!(!app.show_help);
        assert!(!app.refreshing);
        assert_eq!(app.tab, Tab::Overview);
        assert!(app.visible_rows().is_empty());
        assert!(app.last_update().is_none());
    }

    #[test]
    fn test_toggle_help() {
        let mut app = DashboardApp::new();
        app.apply(KeyAction::Help);
        assert!(app.show_help);
        app.apply(KeyAction::Help);
        assert!(!app.show_help);
    }

    #[test]
    fn test_tab_switching_wraps() {
        let mut app = DashboardApp::new();
        app.next_tab();
        assert_eq!(app.tab, Tab::Democrats);
        app.next_tab();
        app.next_tab();
        assert_eq!(app.tab, Tab::Conditional);
        app.next_tab();
        assert_eq!(app.tab, Tab::Overview);

        app.prev_tab();
        assert_eq!(app.tab, Tab::Conditional);
    }

    #[test]
    fn test_tab_switch_resets_scroll() {
        let mut app = loaded_app();
        app.scroll_down();
        app.scroll_down();
        assert_eq!(app.scroll_offset, 2);
        app.next_tab();
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_bounds() {
        let mut app = DashboardApp::new();
        app.scroll_down();
        assert_eq!(app.scroll_offset, 0); // No rows

        let mut app = loaded_app();
        let total = app.visible_rows().len();
        for _ in 0..(total + 5) {
            app.scroll_down();
        }
        assert_eq!(app.scroll_offset, total - 1);

        for _ in 0..(total + 5) {
            app.scroll_up();
        }
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_visible_rows_per_tab() {
        let mut app = loaded_app();
        assert_eq!(app.visible_rows().len(), 14);

        app.next_tab();
        let dems = app.visible_rows();
        assert_eq!(dems.len(), TOP_PER_PARTY);
        assert!(dems.iter().all(|r| r.party == Party::Dem));
        assert_eq!(dems[0].candidate, "Dem 11");

        app.next_tab();
        let gop = app.visible_rows();
        assert_eq!(gop.len(), 1);
        assert_eq!(gop[0].candidate, "Gop One");

        app.next_tab();
        let conditional = app.visible_rows();
        assert_eq!(conditional.len(), 13);
        assert!(conditional.iter().all(|r| r.candidate != "Independent"));
    }

    #[test]
    fn test_metric_cards() {
        let app = loaded_app();
        assert!((app.top_gop() - 50.0).abs() < 1e-9);
        assert!((app.top_president() - 30.0).abs() < 1e-9);
        assert!((app.top_dem() - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_refresh_apply() {
        let mut app = DashboardApp::new();
        assert!(app.apply(KeyAction::Refresh));
        assert!(app.refreshing);
        // Already in flight
        assert!(!app.apply(KeyAction::Refresh));

        app.set_snapshot(sample_snapshot());
        assert!(!app.refreshing);
        assert_eq!(app.refresh_count, 1);
        assert_eq!(
            app.last_update(),
            Some(Utc.with_ymd_and_hms(2028, 1, 15, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_snapshot_clamps_scroll() {
        let mut app = loaded_app();
        for _ in 0..10 {
            app.scroll_down();
        }
        let mut smaller = sample_snapshot();
        smaller.rows.truncate(3);
        app.set_snapshot(smaller);
        assert_eq!(app.scroll_offset, 2);
    }

    #[test]
    fn test_quit_key() {
        let mut app = DashboardApp::new();
        let action = KeyAction::from(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!app.apply(action));
        assert!(!app.is_running());
    }
}
