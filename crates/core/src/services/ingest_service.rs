use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::models::record::BalanceRecord;

/// Output of a single ingestion pass.
///
/// Ingestion is best-effort: malformed rows are dropped, not surfaced as
/// errors. `dropped` and `ambiguous_dates` let callers report parse quality
/// without failing the pipeline.
#[derive(Debug, Clone, Default)]
pub struct Ingest {
    /// Successfully parsed records, in source order (unsorted)
    pub records: Vec<BalanceRecord>,

    /// Number of data rows dropped (short row, bad date, bad balance)
    pub dropped: usize,

    /// Date fields where more than one calendar interpretation was plausible
    /// (e.g. "03/04/2024"). Parsed month-first per the heuristic, but flagged.
    pub ambiguous_dates: Vec<String>,
}

/// Converts raw delimited text into balance records.
///
/// Tolerates quoted fields, several date formats, currency symbols and
/// thousands separators. Pure text-to-records transform — no I/O.
pub struct IngestService;

impl IngestService {
    pub fn new() -> Self {
        Self
    }

    /// Parse a CSV payload into records.
    ///
    /// - Fewer than 2 non-empty lines yields an empty result, not an error.
    /// - The first line is skipped as a header when it contains "date",
    ///   "week" or "day" (case-insensitive).
    /// - Column 0 is the date, column 1 the balance; everything else is ignored.
    pub fn parse(&self, text: &str) -> Ingest {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let mut out = Ingest::default();
        if lines.len() < 2 {
            return out;
        }

        let first_lower = lines[0].to_lowercase();
        let has_header = ["date", "week", "day"]
            .iter()
            .any(|kw| first_lower.contains(kw));
        let data_lines = if has_header { &lines[1..] } else { &lines[..] };

        for line in data_lines {
            let columns = split_row(line);
            if columns.len() < 2 {
                debug!(row = %line, "dropping row: fewer than 2 columns");
                out.dropped += 1;
                continue;
            }

            let date_field = columns[0].trim();
            let Some((date, ambiguous)) = parse_date(date_field) else {
                debug!(row = %line, "dropping row: unparseable date");
                out.dropped += 1;
                continue;
            };
            if ambiguous {
                warn!(date = %date_field, "ambiguous date: parsed month-first, other readings plausible");
                out.ambiguous_dates.push(date_field.to_string());
            }

            let Some(balance) = parse_balance(columns[1].trim()) else {
                debug!(row = %line, "dropping row: unparseable or non-positive balance");
                out.dropped += 1;
                continue;
            };

            out.records.push(BalanceRecord::new(date, balance));
        }

        out
    }
}

impl Default for IngestService {
    fn default() -> Self {
        Self::new()
    }
}

/// Split one CSV row on commas, honoring double-quoted fields.
///
/// Quote characters toggle quoting and are stripped from the output; there
/// is no escaped-quote handling (consecutive quotes just toggle twice).
fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// Parse a date field. Returns the date and whether the string was ambiguous.
///
/// Policy, first success wins:
/// 1. Direct `YYYY-MM-DD` parse.
/// 2. Split on `/`, `-` or `.` into three numeric parts `(a, b, c)`:
///    `a > 31` → year-month-day; `a > 12` → day-month-year; else month-day-year.
///    Two-digit years are promoted to the 2000s.
///
/// A three-part date is flagged ambiguous when both the month-first and
/// day-first readings are plausible and disagree (e.g. "03/04/2024").
fn parse_date(field: &str) -> Option<(NaiveDate, bool)> {
    if let Ok(date) = NaiveDate::parse_from_str(field, "%Y-%m-%d") {
        return Some((date, false));
    }

    let parts: Vec<u32> = field
        .split(['/', '-', '.'])
        .map(|p| p.trim().parse::<u32>())
        .collect::<Result<_, _>>()
        .ok()?;
    let [a, b, c] = parts.as_slice() else {
        return None;
    };
    let (a, b, c) = (*a, *b, *c);

    let (year, month, day) = if a > 31 {
        (a, b, c)
    } else if a > 12 {
        (c, b, a)
    } else {
        (c, a, b)
    };
    let year = if year < 100 { year + 2000 } else { year };

    // Month-first was a guess when day-first would also have been valid.
    let ambiguous = a <= 12 && b <= 12 && a != b;

    let date = NaiveDate::from_ymd_opt(year as i32, month, day)?;
    Some((date, ambiguous))
}

/// Parse a balance field: strip currency symbols, thousands separators and
/// whitespace, then parse as a decimal. Non-positive values are rejected.
fn parse_balance(field: &str) -> Option<f64> {
    let cleaned: String = field
        .chars()
        .filter(|c| !matches!(c, '$' | '£' | '€' | ',') && !c.is_whitespace())
        .collect();
    let value = cleaned.parse::<f64>().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}
