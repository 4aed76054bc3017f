use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single (date, balance) entry from the source sheet.
///
/// **Invariant**: `balance > 0`. Rows with non-positive or unparseable
/// balances never become records — they are dropped at ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRecord {
    /// Date of the balance snapshot (no time component — daily granularity)
    pub date: NaiveDate,

    /// Account balance on that date (always positive)
    pub balance: f64,
}

impl BalanceRecord {
    pub fn new(date: NaiveDate, balance: f64) -> Self {
        Self { date, balance }
    }

    /// The record's date as a zero-padded `YYYY-MM-DD` string.
    /// Lexicographic order of these strings matches `NaiveDate` order.
    #[must_use]
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
