use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single point on a line chart (Overall, 100x, and Month views).
///
/// The core generates these — the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Short human-readable label (e.g. "Jan 15", or "Start" / "07" in month views)
    pub label: String,

    /// The date this point represents
    pub date: NaiveDate,

    /// Raw balance at this point
    pub balance: f64,

    /// Percent change against the view's baseline: (balance - baseline) / baseline * 100
    pub profit_pct: f64,

    /// balance / baseline (1.0 at the baseline itself)
    pub multiplier: f64,
}

/// A single point on the day-of-month overlay chart.
///
/// One point per distinct day-of-month present in the data. `values` is
/// sparse: only months with a record on that day carry a key. A missing
/// month is a gap in that month's line, never zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverlayPoint {
    /// Two-digit day-of-month ("01".."31"), the x-axis key
    pub label: String,

    /// Month abbreviation ("Jan".."Dec") → balance on that day of that month
    pub values: BTreeMap<String, f64>,
}

/// Output of the view projector: the dataset a chart renders.
///
/// Tagged by shape rather than by dynamically-named fields, so both chart
/// kinds stay statically checkable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Projection {
    /// Overall / 100x / Month views: a single line over time
    Line(Vec<ChartPoint>),
    /// Overlay view: one line per calendar month, keyed by day-of-month
    Overlay(Vec<OverlayPoint>),
}

impl Projection {
    /// Number of points in the projected dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Projection::Line(points) => points.len(),
            Projection::Overlay(points) => points.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The line points, if this is a line projection.
    #[must_use]
    pub fn as_line(&self) -> Option<&[ChartPoint]> {
        match self {
            Projection::Line(points) => Some(points),
            Projection::Overlay(_) => None,
        }
    }

    /// The overlay points, if this is an overlay projection.
    #[must_use]
    pub fn as_overlay(&self) -> Option<&[OverlayPoint]> {
        match self {
            Projection::Overlay(points) => Some(points),
            Projection::Line(_) => None,
        }
    }
}
