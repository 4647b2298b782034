//! Merges the successful yearly tables and truncates the result to the
//! exact requested date range.

use crate::config::DateRange;
use polars::prelude::*;

/// Concatenates yearly frames in their given (chronological) order, then
/// drops rows outside `range`.
///
/// Yearly chunks always cover whole calendar years, so the boundary years
/// can contribute out-of-range rows; the filter keeps timestamps from
/// `start` midnight through the end of `end` inclusive. Callers pass at
/// least one frame; the zero-success case is handled before merging.
pub fn merge_years(frames: Vec<DataFrame>, range: &DateRange) -> PolarsResult<DataFrame> {
    let lazy: Vec<LazyFrame> = frames.into_iter().map(|df| df.lazy()).collect();
    let merged = concat(lazy, UnionArgs::default())?;

    let start = range
        .start
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time");
    let end = range
        .end
        .and_hms_opt(23, 59, 59)
        .expect("end of day is a valid time");

    merged
        .filter(
            col("datetime")
                .gt_eq(lit(start))
                .and(col("datetime").lt_eq(lit(end))),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::synthetic_year;
    use crate::weather_data::record::{records_from_dataframe, records_to_dataframe};
    use chrono::NaiveDate;

    fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
        DateRange {
            start: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        }
    }

    #[test]
    fn merge_keeps_order_and_truncates_the_final_year() -> PolarsResult<()> {
        let y2023 = records_to_dataframe(&synthetic_year(2023))?;
        let y2024 = records_to_dataframe(&synthetic_year(2024))?;
        let range = range((2023, 1, 1), (2024, 11, 30));

        let merged = merge_years(vec![y2023, y2024], &range)?;

        // 2023 in full (8760 h) plus Jan 1 .. Nov 30 of leap-year 2024
        // (335 days).
        assert_eq!(merged.height(), 8760 + 335 * 24);

        let records = records_from_dataframe(&merged)?;
        let first = records.first().unwrap().datetime;
        let last = records.last().unwrap().datetime;
        assert_eq!(first.to_string(), "2023-01-01 00:00:00");
        assert_eq!(last.to_string(), "2024-11-30 23:00:00");

        let start = range.start.and_hms_opt(0, 0, 0).unwrap();
        let end = range.end.and_hms_opt(23, 59, 59).unwrap();
        assert!(records
            .windows(2)
            .all(|pair| pair[0].datetime < pair[1].datetime));
        assert!(records
            .iter()
            .all(|r| r.datetime >= start && r.datetime <= end));
        Ok(())
    }

    #[test]
    fn merge_truncates_the_leading_year_too() -> PolarsResult<()> {
        let y2010 = records_to_dataframe(&synthetic_year(2010))?;
        let merged = merge_years(vec![y2010], &range((2010, 2, 1), (2010, 12, 31)))?;

        // January (31 days) dropped from a non-leap year.
        assert_eq!(merged.height(), 8760 - 31 * 24);
        let records = records_from_dataframe(&merged)?;
        assert_eq!(
            records.first().unwrap().datetime.to_string(),
            "2010-02-01 00:00:00"
        );
        Ok(())
    }

    #[test]
    fn single_in_range_year_passes_through_unchanged() -> PolarsResult<()> {
        let records = synthetic_year(2012);
        let df = records_to_dataframe(&records)?;
        let merged = merge_years(vec![df], &range((2012, 1, 1), (2012, 12, 31)))?;

        assert_eq!(merged.height(), 8784); // leap year
        assert_eq!(records_from_dataframe(&merged)?, records);
        Ok(())
    }
}
