//! Serde models for the archive payload and the zip into typed records.
//!
//! All six requested series are required fields: a payload missing one of
//! them fails to decode, which surfaces as a skipped year rather than a
//! partially-populated table.

use crate::weather_data::error::FetchError;
use crate::weather_data::record::HourlyRecord;
use chrono::NaiveDateTime;
use serde::Deserialize;

/// Timestamps arrive as local-time ISO 8601 with minute precision.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Deserialize)]
pub struct ArchiveResponse {
    pub hourly: HourlyBlock,
}

/// The `hourly` object: parallel arrays keyed by `time` plus the six
/// requested series. Individual observations may be JSON null.
#[derive(Debug, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub precipitation: Vec<Option<f64>>,
    pub snow_depth: Vec<Option<f64>>,
    pub weather_code: Vec<Option<i32>>,
    pub relative_humidity_2m: Vec<Option<i32>>,
    pub wind_speed_10m: Vec<Option<f64>>,
}

/// Decodes a raw archive body into the year's records.
pub fn parse_archive_body(body: &str, year: i32) -> Result<Vec<HourlyRecord>, FetchError> {
    let response: ArchiveResponse =
        serde_json::from_str(body).map_err(|source| FetchError::JsonDecode { year, source })?;
    response.hourly.into_records(year)
}

impl HourlyBlock {
    /// Zips the parallel arrays into records, positionally.
    ///
    /// Every series must match the `time` array's length; a mismatch fails
    /// the whole year.
    pub fn into_records(self, year: i32) -> Result<Vec<HourlyRecord>, FetchError> {
        let expected = self.time.len();
        let check = |field: &'static str, found: usize| {
            if found == expected {
                Ok(())
            } else {
                Err(FetchError::LengthMismatch {
                    year,
                    field,
                    expected,
                    found,
                })
            }
        };
        check("temperature_2m", self.temperature_2m.len())?;
        check("precipitation", self.precipitation.len())?;
        check("snow_depth", self.snow_depth.len())?;
        check("weather_code", self.weather_code.len())?;
        check("relative_humidity_2m", self.relative_humidity_2m.len())?;
        check("wind_speed_10m", self.wind_speed_10m.len())?;

        let mut records = Vec::with_capacity(expected);
        for (idx, raw) in self.time.iter().enumerate() {
            let datetime = NaiveDateTime::parse_from_str(raw, TIME_FORMAT).map_err(|source| {
                FetchError::TimestampParse {
                    year,
                    value: raw.clone(),
                    source,
                }
            })?;
            records.push(HourlyRecord {
                datetime,
                temperature: self.temperature_2m[idx],
                precipitation: self.precipitation[idx],
                snow_depth: self.snow_depth[idx],
                weather_code: self.weather_code[idx],
                humidity: self.relative_humidity_2m[idx],
                wind_speed: self.wind_speed_10m[idx],
            });
        }
        Ok(records)
    }
}
