//! Splits a logical date range into per-year sub-requests so each archive
//! call stays within safe payload limits.

use crate::config::DateRange;
use chrono::Datelike;

/// One calendar year of the requested range.
///
/// The API bounds always cover the full year; the accumulator truncates the
/// merged table back to the exact range afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearChunk {
    pub year: i32,
}

impl YearChunk {
    /// `start_date` query value, `YYYY-01-01`.
    pub fn start_date(&self) -> String {
        format!("{}-01-01", self.year)
    }

    /// `end_date` query value, `YYYY-12-31`.
    pub fn end_date(&self) -> String {
        format!("{}-12-31", self.year)
    }
}

/// Produces one chunk per calendar year touched by `range`, ascending.
pub fn yearly_chunks(range: &DateRange) -> Vec<YearChunk> {
    (range.start.year()..=range.end.year())
        .map(|year| YearChunk { year })
        .collect()
}
