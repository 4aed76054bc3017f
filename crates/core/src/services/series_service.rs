use crate::models::record::BalanceRecord;
use crate::models::series::TimeSeries;

/// Turns freshly ingested records into a normalized time series.
///
/// Pure business logic — no I/O. Normalization is a stable ascending sort
/// by date, so it is idempotent and duplicate dates keep their input order.
pub struct SeriesService;

impl SeriesService {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, records: Vec<BalanceRecord>) -> TimeSeries {
        TimeSeries::from_records(records)
    }
}

impl Default for SeriesService {
    fn default() -> Self {
        Self::new()
    }
}
