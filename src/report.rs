//! Descriptive statistics over the final table, printed after the download
//! completes. Read-only; the table is not mutated.

use chrono::{DateTime, NaiveDateTime};
use polars::prelude::*;
use std::fmt;

/// Missing-value tally for one observed column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMissing {
    pub name: String,
    pub missing: usize,
    pub pct: f64,
}

/// Summary of the merged dataset: extremes, per-column gaps, snow coverage.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityReport {
    pub rows: usize,
    pub first_timestamp: Option<NaiveDateTime>,
    pub last_timestamp: Option<NaiveDateTime>,
    pub temperature_min: Option<f64>,
    pub temperature_max: Option<f64>,
    pub precipitation_max: Option<f64>,
    pub snow_depth_max: Option<f64>,
    pub wind_speed_max: Option<f64>,
    pub missing: Vec<ColumnMissing>,
    pub snow_hours: usize,
    pub snow_hours_pct: f64,
}

fn pct_of(count: usize, rows: usize) -> f64 {
    if rows == 0 {
        0.0
    } else {
        count as f64 / rows as f64 * 100.0
    }
}

fn millis_to_naive(millis: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}

impl QualityReport {
    pub fn from_table(df: &DataFrame) -> PolarsResult<Self> {
        let rows = df.height();

        let datetime = df.column("datetime")?.datetime()?;
        let temperature = df.column("temperature_2m")?.f64()?;
        let precipitation = df.column("precipitation")?.f64()?;
        let snow_depth = df.column("snow_depth")?.f64()?;
        let wind_speed = df.column("wind_speed")?.f64()?;

        let missing = df
            .get_columns()
            .iter()
            .filter(|column| column.name().as_str() != "datetime")
            .map(|column| {
                let count = column.null_count();
                ColumnMissing {
                    name: column.name().to_string(),
                    missing: count,
                    pct: pct_of(count, rows),
                }
            })
            .collect();

        let snow_hours = snow_depth
            .into_iter()
            .filter(|depth| matches!(depth, Some(d) if *d > 0.0))
            .count();

        Ok(Self {
            rows,
            first_timestamp: datetime.min().and_then(millis_to_naive),
            last_timestamp: datetime.max().and_then(millis_to_naive),
            temperature_min: temperature.min(),
            temperature_max: temperature.max(),
            precipitation_max: precipitation.max(),
            snow_depth_max: snow_depth.max(),
            wind_speed_max: wind_speed.max(),
            missing,
            snow_hours,
            snow_hours_pct: pct_of(snow_hours, rows),
        })
    }
}

fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{v:.precision$}"),
        None => "n/a".to_string(),
    }
}

fn fmt_timestamp(value: Option<NaiveDateTime>) -> String {
    match value {
        Some(ts) => ts.to_string(),
        None => "n/a".to_string(),
    }
}

impl fmt::Display for QualityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DATA QUALITY SUMMARY")?;
        writeln!(
            f,
            "  date range:        {} to {}",
            fmt_timestamp(self.first_timestamp),
            fmt_timestamp(self.last_timestamp)
        )?;
        writeln!(
            f,
            "  temperature range: {} F to {} F",
            fmt_opt(self.temperature_min, 1),
            fmt_opt(self.temperature_max, 1)
        )?;
        writeln!(
            f,
            "  max precipitation: {} inches/hour",
            fmt_opt(self.precipitation_max, 2)
        )?;
        writeln!(
            f,
            "  max snow depth:    {} inches",
            fmt_opt(self.snow_depth_max, 1)
        )?;
        writeln!(
            f,
            "  max wind speed:    {} mph",
            fmt_opt(self.wind_speed_max, 1)
        )?;
        writeln!(f)?;
        writeln!(f, "MISSING DATA CHECK")?;
        for column in &self.missing {
            writeln!(
                f,
                "  {}: {} missing ({:.2}%)",
                column.name, column.missing, column.pct
            )?;
        }
        writeln!(f)?;
        write!(
            f,
            "Hours with snow on ground: {} ({:.1}%)",
            self.snow_hours, self.snow_hours_pct
        )
    }
}
