use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::record::BalanceRecord;

/// The multiplier defining the target balance: 100x the effective start.
pub const TARGET_MULTIPLIER: f64 = 100.0;

/// An ordered balance history, sorted ascending by date.
///
/// Built once per ingestion cycle and replaced wholesale — never patched
/// incrementally. The sort is stable, so duplicate dates from the source
/// are retained in input order; consumers must not assume date uniqueness.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSeries {
    records: Vec<BalanceRecord>,
}

impl TimeSeries {
    /// Build a series from unordered records (stable ascending sort by date).
    #[must_use]
    pub fn from_records(mut records: Vec<BalanceRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    /// The baseline balance: first record's balance, or 0 when empty.
    /// All Overall/HundredX percentages and the 100x target derive from it.
    #[must_use]
    pub fn effective_start(&self) -> f64 {
        self.records.first().map_or(0.0, |r| r.balance)
    }

    /// The 100x target: `effective_start * 100` (0 when the series is empty).
    #[must_use]
    pub fn target_balance(&self) -> f64 {
        self.effective_start() * TARGET_MULTIPLIER
    }

    /// The most recent balance, or 0 when empty.
    #[must_use]
    pub fn current_balance(&self) -> f64 {
        self.records.last().map_or(0.0, |r| r.balance)
    }

    #[must_use]
    pub fn first(&self) -> Option<&BalanceRecord> {
        self.records.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&BalanceRecord> {
        self.records.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[BalanceRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BalanceRecord> {
        self.records.iter()
    }

    /// Whether any record falls in calendar month `month0` (0 = January).
    /// Drives the enabled/disabled state of the per-month view buttons.
    #[must_use]
    pub fn month_has_data(&self, month0: u32) -> bool {
        self.records.iter().any(|r| r.date.month0() == month0)
    }

    /// Calendar months (0-indexed, ascending) that have at least one record.
    #[must_use]
    pub fn months_present(&self) -> Vec<u32> {
        let mut months: Vec<u32> = self.records.iter().map(|r| r.date.month0()).collect();
        months.sort_unstable();
        months.dedup();
        months
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a BalanceRecord;
    type IntoIter = std::slice::Iter<'a, BalanceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
