use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary statistics for the dashboard header.
///
/// Derived, never stored — recomputed whenever the series or the selected
/// view changes. All division-by-zero cases are defined as 0, never NaN.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Overall profit/loss: last balance minus effective start (0 when empty)
    pub overall_pnl: f64,

    /// Overall percent change against the effective start
    pub overall_pct: f64,

    /// last balance / effective start (0 when empty or start is 0)
    pub overall_multi: f64,

    /// Profit/loss within the selected month view (0 for non-month views)
    pub month_pnl: f64,

    /// Percent change within the selected month view (0 for non-month views)
    pub month_pct: f64,

    /// The most recent balance (0 when empty)
    pub current_balance: f64,

    /// The baseline balance all overall metrics are measured against
    pub effective_start: f64,

    /// The 100x target: effective_start * 100
    pub target_balance: f64,

    /// Number of records in the series
    pub entries: usize,
}

/// One row of the "recent entries" list, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentEntry {
    pub date: NaiveDate,

    pub balance: f64,

    /// Change against the previous entry in the series (0 for the oldest entry)
    pub delta: f64,

    /// `delta` as a percentage of the previous balance (0 for the oldest entry)
    pub delta_pct: f64,
}
