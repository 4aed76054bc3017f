use chrono::Datelike;

use crate::models::series::TimeSeries;
use crate::models::stats::Stats;
use crate::models::view::ViewMode;

use super::projection_service::month_baseline;

/// Computes the dashboard's summary statistics.
///
/// Overall metrics are measured against the effective start; month metrics
/// reuse the exact baseline-selection logic of the month projection so the
/// header and the chart never disagree.
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    pub fn aggregate(&self, series: &TimeSeries, view: ViewMode) -> Stats {
        let effective_start = series.effective_start();
        let current_balance = series.current_balance();

        let overall_pnl = if series.is_empty() {
            0.0
        } else {
            current_balance - effective_start
        };
        let overall_pct = if effective_start > 0.0 {
            overall_pnl / effective_start * 100.0
        } else {
            0.0
        };
        let overall_multi = if effective_start > 0.0 && !series.is_empty() {
            current_balance / effective_start
        } else {
            0.0
        };

        let (month_pnl, month_pct) = match view {
            ViewMode::Month(m) => month_change(series, m),
            _ => (0.0, 0.0),
        };

        Stats {
            overall_pnl,
            overall_pct,
            overall_multi,
            month_pnl,
            month_pct,
            current_balance,
            effective_start,
            target_balance: series.target_balance(),
            entries: series.len(),
        }
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}

/// (pnl, pct) of the last in-month balance against the month baseline.
fn month_change(series: &TimeSeries, month0: u32) -> (f64, f64) {
    let Some((baseline, _)) = month_baseline(series, month0) else {
        return (0.0, 0.0);
    };
    let Some(last) = series.iter().filter(|r| r.date.month0() == month0).last() else {
        return (0.0, 0.0);
    };

    let pnl = last.balance - baseline;
    let pct = if baseline > 0.0 {
        pnl / baseline * 100.0
    } else {
        0.0
    };
    (pnl, pct)
}
