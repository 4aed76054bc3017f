// ═══════════════════════════════════════════════════════════════════
// Dashboard Tests — BalanceDashboard facade: loading, status, view
// switching, recent entries, JSON export, mock sources
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use chrono::NaiveDate;

use balance_dashboard_core::errors::CoreError;
use balance_dashboard_core::models::view::{LoadStatus, ViewMode};
use balance_dashboard_core::sources::traits::BalanceSource;
use balance_dashboard_core::BalanceDashboard;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

const SAMPLE_CSV: &str = "Date,Balance\n2024-01-01,100\n2024-01-15,150\n2024-02-01,200";

// ═══════════════════════════════════════════════════════════════════
// Mock Sources
// ═══════════════════════════════════════════════════════════════════

struct StaticSource {
    csv: String,
}

#[async_trait]
impl BalanceSource for StaticSource {
    fn name(&self) -> &str {
        "StaticSource"
    }

    async fn fetch_csv(&self) -> Result<String, CoreError> {
        Ok(self.csv.clone())
    }
}

struct FailingSource;

#[async_trait]
impl BalanceSource for FailingSource {
    fn name(&self) -> &str {
        "FailingSource"
    }

    async fn fetch_csv(&self) -> Result<String, CoreError> {
        Err(CoreError::Network("connection refused".into()))
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Loading & status
// ═══════════════════════════════════════════════════════════════════

mod loading {
    use super::*;

    #[test]
    fn starts_not_loaded_and_empty() {
        let dashboard = BalanceDashboard::new();
        assert_eq!(dashboard.status(), LoadStatus::NotLoaded);
        assert!(dashboard.series().is_empty());
        assert_eq!(dashboard.view(), ViewMode::Overall);
    }

    #[test]
    fn load_csv_ingests_and_marks_loaded() {
        let mut dashboard = BalanceDashboard::new();
        let count = dashboard.load_csv(SAMPLE_CSV);
        assert_eq!(count, 3);
        assert_eq!(dashboard.status(), LoadStatus::Loaded);
        assert!(close(dashboard.effective_start(), 100.0));
        assert!(close(dashboard.target_balance(), 10_000.0));
    }

    #[test]
    fn empty_payload_is_loaded_but_empty() {
        let mut dashboard = BalanceDashboard::new();
        let count = dashboard.load_csv("");
        assert_eq!(count, 0);
        assert_eq!(dashboard.status(), LoadStatus::Loaded);
        assert!(dashboard.series().is_empty());
        assert_eq!(dashboard.stats().current_balance, 0.0);
        assert!(dashboard.chart_data().is_empty());
    }

    #[test]
    fn reload_replaces_series_wholesale() {
        let mut dashboard = BalanceDashboard::new();
        dashboard.load_csv(SAMPLE_CSV);
        dashboard.load_csv("Date,Balance\n2025-06-01,500\n2025-06-02,510");
        assert_eq!(dashboard.series().len(), 2);
        assert!(close(dashboard.effective_start(), 500.0));
    }

    #[test]
    fn ingest_quality_is_reported() {
        let mut dashboard = BalanceDashboard::new();
        dashboard.load_csv("Date,Balance\n2024-01-01,100\nbadrow\n03/04/2024,200\n2024-01-02,-5");
        assert_eq!(dashboard.series().len(), 2);
        assert_eq!(dashboard.ingest_dropped(), 2);
        assert_eq!(dashboard.ambiguous_dates(), ["03/04/2024".to_string()]);
    }

    #[tokio::test]
    async fn load_from_source_success() {
        let mut dashboard = BalanceDashboard::new();
        let source = StaticSource {
            csv: SAMPLE_CSV.to_string(),
        };
        let count = dashboard.load_from_source(&source).await.unwrap();
        assert_eq!(count, 3);
        assert_eq!(dashboard.status(), LoadStatus::Loaded);
    }

    #[tokio::test]
    async fn load_from_source_failure_degrades_to_empty_failed() {
        let mut dashboard = BalanceDashboard::new();
        dashboard.load_csv(SAMPLE_CSV);

        let err = dashboard.load_from_source(&FailingSource).await.unwrap_err();
        assert!(matches!(err, CoreError::Network(_)));
        assert_eq!(dashboard.status(), LoadStatus::Failed);
        assert!(dashboard.series().is_empty());
        assert!(dashboard.chart_data().is_empty());
        assert_eq!(dashboard.stats().entries, 0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Views & chart data
// ═══════════════════════════════════════════════════════════════════

mod views {
    use super::*;

    #[test]
    fn overall_view_end_to_end() {
        let mut dashboard = BalanceDashboard::new();
        dashboard.load_csv(SAMPLE_CSV);

        let p = dashboard.chart_data();
        let points = p.as_line().unwrap();
        assert_eq!(points.len(), 3);
        assert!(close(points[2].profit_pct, 100.0));
        assert!(close(points[2].multiplier, 2.0));
    }

    #[test]
    fn switching_views_changes_the_projection_shape() {
        let mut dashboard = BalanceDashboard::new();
        dashboard.load_csv(SAMPLE_CSV);

        dashboard.set_view(ViewMode::Overlay);
        assert!(dashboard.chart_data().as_overlay().is_some());

        dashboard.set_view(ViewMode::month(0).unwrap());
        let p = dashboard.chart_data();
        assert!(p.as_line().is_some());
        assert!(close(dashboard.stats().month_pnl, 50.0));
    }

    #[test]
    fn month_has_data_drives_button_state() {
        let mut dashboard = BalanceDashboard::new();
        dashboard.load_csv(SAMPLE_CSV);
        assert!(dashboard.month_has_data(0));
        assert!(dashboard.month_has_data(1));
        assert!(!dashboard.month_has_data(6));
    }

    #[test]
    fn chart_data_is_recomputed_not_cached() {
        let mut dashboard = BalanceDashboard::new();
        dashboard.load_csv(SAMPLE_CSV);
        let before = dashboard.chart_data();
        dashboard.load_csv("Date,Balance\n2024-03-01,300\n2024-03-02,330");
        let after = dashboard.chart_data();
        assert_ne!(before, after);
        assert_eq!(after.len(), 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Recent entries
// ═══════════════════════════════════════════════════════════════════

mod recent {
    use super::*;

    #[test]
    fn newest_first_with_day_over_day_deltas() {
        let mut dashboard = BalanceDashboard::new();
        dashboard.load_csv(SAMPLE_CSV);

        let entries = dashboard.recent_entries(10);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].date, d(2024, 2, 1));
        assert!(close(entries[0].delta, 50.0));
        assert!(close(entries[1].delta, 50.0));
        assert!(close(entries[1].delta_pct, 50.0));

        // Oldest entry has nothing before it.
        assert_eq!(entries[2].date, d(2024, 1, 1));
        assert!(close(entries[2].delta, 0.0));
        assert!(close(entries[2].delta_pct, 0.0));
    }

    #[test]
    fn limit_truncates_to_newest() {
        let mut dashboard = BalanceDashboard::new();
        dashboard.load_csv(SAMPLE_CSV);
        let entries = dashboard.recent_entries(1);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, d(2024, 2, 1));
    }

    #[test]
    fn empty_series_has_no_entries() {
        let dashboard = BalanceDashboard::new();
        assert!(dashboard.recent_entries(5).is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  JSON export
// ═══════════════════════════════════════════════════════════════════

mod json {
    use super::*;

    #[test]
    fn stats_json_contains_expected_fields() {
        let mut dashboard = BalanceDashboard::new();
        dashboard.load_csv(SAMPLE_CSV);
        let json = dashboard.stats_json().unwrap();
        assert!(json.contains("\"overall_pnl\""));
        assert!(json.contains("\"current_balance\""));
        assert!(json.contains("\"target_balance\""));
    }

    #[test]
    fn overlay_chart_json_carries_month_keys() {
        let mut dashboard = BalanceDashboard::new();
        dashboard.load_csv(SAMPLE_CSV);
        dashboard.set_view(ViewMode::Overlay);
        let json = dashboard.chart_data_json().unwrap();
        assert!(json.contains("\"Jan\""));
        assert!(json.contains("\"Feb\""));
    }
}
