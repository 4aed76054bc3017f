pub mod errors;
pub mod models;
pub mod services;
pub mod sources;

use models::{
    chart::Projection,
    series::TimeSeries,
    stats::{RecentEntry, Stats},
    view::{LoadStatus, ViewMode},
};
use services::{
    ingest_service::IngestService, projection_service::ProjectionService,
    series_service::SeriesService, stats_service::StatsService,
};
use sources::traits::BalanceSource;

use errors::CoreError;

/// Main entry point for the balance-dashboard core library.
///
/// Holds the ingested series, the selected view, and the stateless services
/// that derive everything else. The core computes all the numbers — the
/// frontend only renders. All three presentation artifacts (sorted series,
/// projected chart dataset, stats) are recomputed on demand from the same
/// series, never mutated in place.
#[must_use]
pub struct BalanceDashboard {
    series: TimeSeries,
    view: ViewMode,
    status: LoadStatus,
    dropped: usize,
    ambiguous_dates: Vec<String>,
    ingest_service: IngestService,
    series_service: SeriesService,
    projection_service: ProjectionService,
    stats_service: StatsService,
}

impl std::fmt::Debug for BalanceDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BalanceDashboard")
            .field("entries", &self.series.len())
            .field("view", &self.view)
            .field("status", &self.status)
            .field("dropped", &self.dropped)
            .finish()
    }
}

impl BalanceDashboard {
    /// Create an empty dashboard in the `NotLoaded` state, showing Overall.
    pub fn new() -> Self {
        Self {
            series: TimeSeries::default(),
            view: ViewMode::Overall,
            status: LoadStatus::NotLoaded,
            dropped: 0,
            ambiguous_dates: Vec::new(),
            ingest_service: IngestService::new(),
            series_service: SeriesService::new(),
            projection_service: ProjectionService::new(),
            stats_service: StatsService::new(),
        }
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Ingest a CSV payload, replacing any prior series wholesale.
    ///
    /// Best-effort: malformed rows are dropped, and even an empty payload
    /// moves the dashboard to `Loaded` (with an empty series).
    /// Returns the number of records in the new series.
    pub fn load_csv(&mut self, text: &str) -> usize {
        let ingest = self.ingest_service.parse(text);
        self.dropped = ingest.dropped;
        self.ambiguous_dates = ingest.ambiguous_dates;
        self.series = self.series_service.normalize(ingest.records);
        self.status = LoadStatus::Loaded;
        self.series.len()
    }

    /// Fetch CSV from a source and ingest it.
    ///
    /// On transport failure the dashboard degrades to an empty series in the
    /// `Failed` state and the error is returned for the caller to report.
    pub async fn load_from_source(
        &mut self,
        source: &dyn BalanceSource,
    ) -> Result<usize, CoreError> {
        match source.fetch_csv().await {
            Ok(text) => Ok(self.load_csv(&text)),
            Err(e) => {
                tracing::warn!(source = source.name(), error = %e, "balance fetch failed");
                self.series = TimeSeries::default();
                self.dropped = 0;
                self.ambiguous_dates.clear();
                self.status = LoadStatus::Failed;
                Err(e)
            }
        }
    }

    /// Current load state (`NotLoaded` / `Loaded` / `Failed`).
    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    // ── View Selection ──────────────────────────────────────────────

    /// Switch the selected view. Projections and stats follow on the next read.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    #[must_use]
    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Whether a given calendar month (0 = January) has any data.
    /// Month buttons without data are disabled in the control strip.
    #[must_use]
    pub fn month_has_data(&self, month0: u32) -> bool {
        self.series.month_has_data(month0)
    }

    // ── Presentation Artifacts ──────────────────────────────────────

    /// The normalized series (sorted ascending by date).
    #[must_use]
    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    /// Chart dataset for the currently selected view.
    #[must_use]
    pub fn chart_data(&self) -> Projection {
        self.projection_service.project(&self.series, self.view)
    }

    /// Summary statistics for the currently selected view.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats_service.aggregate(&self.series, self.view)
    }

    /// The most recent entries (newest first) with day-over-day deltas.
    /// The oldest entry of the series has a delta of 0.
    #[must_use]
    pub fn recent_entries(&self, limit: usize) -> Vec<RecentEntry> {
        let records = self.series.records();
        let mut entries: Vec<RecentEntry> = records
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let prev = if i > 0 { Some(&records[i - 1]) } else { None };
                let delta = prev.map_or(0.0, |p| r.balance - p.balance);
                let delta_pct = match prev {
                    Some(p) if p.balance > 0.0 => delta / p.balance * 100.0,
                    _ => 0.0,
                };
                RecentEntry {
                    date: r.date,
                    balance: r.balance,
                    delta,
                    delta_pct,
                }
            })
            .collect();
        entries.reverse();
        entries.truncate(limit);
        entries
    }

    // ── Baselines & Targets ─────────────────────────────────────────

    /// The baseline balance (first record, or 0 when empty).
    #[must_use]
    pub fn effective_start(&self) -> f64 {
        self.series.effective_start()
    }

    /// The 100x target: effective start × 100.
    #[must_use]
    pub fn target_balance(&self) -> f64 {
        self.series.target_balance()
    }

    // ── Ingestion Quality ───────────────────────────────────────────

    /// Number of source rows dropped during the last ingestion.
    #[must_use]
    pub fn ingest_dropped(&self) -> usize {
        self.dropped
    }

    /// Date fields from the last ingestion where more than one calendar
    /// interpretation was plausible (parsed month-first, but flagged).
    #[must_use]
    pub fn ambiguous_dates(&self) -> &[String] {
        &self.ambiguous_dates
    }

    // ── JSON Export ─────────────────────────────────────────────────

    /// Chart dataset for the selected view as a JSON string, for frontends
    /// that take data across an FFI/WASM boundary.
    pub fn chart_data_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(&self.chart_data())?)
    }

    /// Summary statistics as a JSON string.
    pub fn stats_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(&self.stats())?)
    }
}

impl Default for BalanceDashboard {
    fn default() -> Self {
        Self::new()
    }
}
