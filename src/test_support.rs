//! Deterministic fixtures shared by the unit tests: synthetic hourly years
//! and their archive-payload JSON rendition.

use crate::weather_data::record::HourlyRecord;
use chrono::{Datelike, Duration, NaiveDate};
use serde_json::{json, Value};

/// A full calendar year of hourly records (8784 rows in leap years, 8760
/// otherwise) with deterministic values: temperatures cycle inside
/// 30.0..=54.5 F, every third day carries snow, and a sprinkle of nulls
/// lands in `snow_depth` and `humidity`.
pub fn synthetic_year(year: i32) -> Vec<HourlyRecord> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let mut records = Vec::new();
    let mut ts = start;
    let mut i: usize = 0;
    while ts.year() == year {
        let snowy_day = (i / 24) % 3 == 0;
        records.push(HourlyRecord {
            datetime: ts,
            temperature: Some(30.0 + (i % 50) as f64 * 0.5),
            precipitation: Some(if i % 97 == 0 { 0.25 } else { 0.0 }),
            snow_depth: if i % 1009 == 0 {
                None
            } else {
                Some(if snowy_day { 6.0 } else { 0.0 })
            },
            weather_code: Some(if snowy_day { 71 } else { 1 }),
            humidity: if i % 997 == 0 {
                None
            } else {
                Some(60 + (i % 30) as i32)
            },
            wind_speed: Some(5.0 + (i % 40) as f64),
        });
        ts += Duration::hours(1);
        i += 1;
    }
    records
}

/// Renders records as the archive's JSON payload: parallel arrays under an
/// `hourly` object, nulls for missing observations.
pub fn archive_body(records: &[HourlyRecord]) -> Value {
    json!({
        "latitude": 39.7,
        "longitude": -105.9,
        "hourly": {
            "time": records
                .iter()
                .map(|r| r.datetime.format("%Y-%m-%dT%H:%M").to_string())
                .collect::<Vec<_>>(),
            "temperature_2m": records.iter().map(|r| r.temperature).collect::<Vec<_>>(),
            "precipitation": records.iter().map(|r| r.precipitation).collect::<Vec<_>>(),
            "snow_depth": records.iter().map(|r| r.snow_depth).collect::<Vec<_>>(),
            "weather_code": records.iter().map(|r| r.weather_code).collect::<Vec<_>>(),
            "relative_humidity_2m": records.iter().map(|r| r.humidity).collect::<Vec<_>>(),
            "wind_speed_10m": records.iter().map(|r| r.wind_speed).collect::<Vec<_>>(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_and_common_years_have_the_right_hour_counts() {
        assert_eq!(synthetic_year(2020).len(), 8784);
        assert_eq!(synthetic_year(2023).len(), 8760);
    }

    #[test]
    fn body_round_trips_through_the_response_parser() {
        let records = synthetic_year(2023);
        let body = archive_body(&records).to_string();
        let parsed = crate::weather_data::response::parse_archive_body(&body, 2023).unwrap();
        assert_eq!(parsed, records);
    }
}
