use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::chart::{ChartPoint, OverlayPoint, Projection};
use crate::models::record::BalanceRecord;
use crate::models::series::TimeSeries;
use crate::models::view::{ViewMode, MONTH_ABBREVS};

/// Reshapes the sorted series into the dataset the selected view renders.
///
/// Pure function of (series, view) — no hidden state, safe to recompute on
/// every input change.
pub struct ProjectionService;

impl ProjectionService {
    pub fn new() -> Self {
        Self
    }

    pub fn project(&self, series: &TimeSeries, view: ViewMode) -> Projection {
        match view {
            ViewMode::Overall | ViewMode::HundredX => Projection::Line(self.project_line(series)),
            ViewMode::Overlay => Projection::Overlay(self.project_overlay(series)),
            ViewMode::Month(m) => Projection::Line(self.project_month(series, m)),
        }
    }

    /// Overall / 100x: one point per record, measured against the effective start.
    fn project_line(&self, series: &TimeSeries) -> Vec<ChartPoint> {
        let start = series.effective_start();
        series
            .iter()
            .map(|r| ChartPoint {
                label: short_date_label(r.date),
                date: r.date,
                balance: r.balance,
                profit_pct: profit_pct(r.balance, start),
                multiplier: multiplier(r.balance, start),
            })
            .collect()
    }

    /// Day-of-month overlay: one point per distinct day-of-month, one sparse
    /// month field per calendar month with data on that day.
    fn project_overlay(&self, series: &TimeSeries) -> Vec<OverlayPoint> {
        let mut by_day: BTreeMap<u32, OverlayPoint> = BTreeMap::new();
        for r in series.iter() {
            let day = r.date.day();
            let point = by_day.entry(day).or_insert_with(|| OverlayPoint {
                label: format!("{day:02}"),
                values: BTreeMap::new(),
            });
            point
                .values
                .insert(MONTH_ABBREVS[r.date.month0() as usize].to_string(), r.balance);
        }
        // BTreeMap iteration is ascending by day, which matches the
        // two-digit label order the chart expects.
        by_day.into_values().collect()
    }

    /// Single calendar month, measured against the previous entry's balance
    /// (or the first in-month balance when the month opens the series).
    fn project_month(&self, series: &TimeSeries, month0: u32) -> Vec<ChartPoint> {
        let Some((baseline, prev)) = month_baseline(series, month0) else {
            return Vec::new();
        };

        let mut points = Vec::new();
        if let Some(prev) = &prev {
            // Synthetic anchor so the line starts at the carried-over balance.
            points.push(ChartPoint {
                label: "Start".to_string(),
                date: prev.date,
                balance: prev.balance,
                profit_pct: 0.0,
                multiplier: 1.0,
            });
        }

        for r in series.iter().filter(|r| r.date.month0() == month0) {
            points.push(ChartPoint {
                label: format!("{:02}", r.date.day()),
                date: r.date,
                balance: r.balance,
                profit_pct: profit_pct(r.balance, baseline),
                multiplier: multiplier(r.balance, baseline),
            });
        }
        points
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}

/// Baseline for a month view: the balance of the record immediately before
/// the first in-month record, or that first record's own balance when the
/// month opens the series. `None` when the month has no records.
pub(crate) fn month_baseline(
    series: &TimeSeries,
    month0: u32,
) -> Option<(f64, Option<BalanceRecord>)> {
    let records = series.records();
    let first_idx = records.iter().position(|r| r.date.month0() == month0)?;
    let prev = (first_idx > 0).then(|| records[first_idx - 1].clone());
    let baseline = prev.as_ref().map_or(records[first_idx].balance, |p| p.balance);
    Some((baseline, prev))
}

/// Percent change against a baseline; 0 when the baseline is non-positive.
pub(crate) fn profit_pct(balance: f64, baseline: f64) -> f64 {
    if baseline > 0.0 {
        (balance - baseline) / baseline * 100.0
    } else {
        0.0
    }
}

/// balance / baseline; 1 when the baseline is non-positive (flat line, never NaN).
pub(crate) fn multiplier(balance: f64, baseline: f64) -> f64 {
    if baseline > 0.0 {
        balance / baseline
    } else {
        1.0
    }
}

/// Short date label for line charts, e.g. "Jan 15".
fn short_date_label(date: NaiveDate) -> String {
    format!("{} {}", MONTH_ABBREVS[date.month0() as usize], date.day())
}
