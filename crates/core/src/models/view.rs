use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Month abbreviations indexed by 0-based month (0 = January).
pub const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Which chart the dashboard is showing.
///
/// Transient UI selection state — never persisted. Drives which projection
/// runs and whether per-month stats are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// Full history against the effective start
    Overall,
    /// Same data as Overall, rendered against the 100x target line
    HundredX,
    /// Day-of-month overlay: one line per calendar month
    Overlay,
    /// A single calendar month (0 = January .. 11 = December)
    Month(u32),
}

impl ViewMode {
    /// Build a `Month` view, validating the 0-based index.
    pub fn month(index: u32) -> Result<Self, CoreError> {
        if index > 11 {
            return Err(CoreError::ValidationError(format!(
                "Invalid month index {index}: must be 0..=11 (0 = January)"
            )));
        }
        Ok(ViewMode::Month(index))
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Overall => write!(f, "Overall"),
            ViewMode::HundredX => write!(f, "100x"),
            ViewMode::Overlay => write!(f, "Overlay"),
            ViewMode::Month(m) => {
                write!(f, "{}", MONTH_ABBREVS.get(*m as usize).copied().unwrap_or("?"))
            }
        }
    }
}

/// Explicit load state of the dashboard.
///
/// Distinguishes "no data yet" from "fetch failed" from "genuinely empty
/// dataset" — all three render as an empty chart, but the frontend can
/// pick the right placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoadStatus {
    /// Nothing has been loaded yet (initial state)
    #[default]
    NotLoaded,
    /// A CSV payload was ingested (the series may still be empty)
    Loaded,
    /// The last source fetch failed; the series is empty
    Failed,
}
