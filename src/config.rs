//! Run configuration: the one value constructed at the entry point and
//! threaded through the chunker, fetcher and accumulator.

use chrono::NaiveDate;
use std::path::PathBuf;
use std::time::Duration;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// Inclusive calendar-date bound for a download run.
///
/// Used both to generate the yearly sub-requests and to truncate the merged
/// table back to the exact requested range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The six hourly series requested from the archive, in request order.
pub const HOURLY_FIELDS: [&str; 6] = [
    "temperature_2m",
    "precipitation",
    "snow_depth",
    "weather_code",
    "relative_humidity_2m",
    "wind_speed_10m",
];

const ARCHIVE_ENDPOINT: &str = "https://archive-api.open-meteo.com/v1/archive";
const OUTPUT_FILENAME: &str = "loveland_hourly_weather_2004_2024.csv";

/// Everything a download run needs, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    pub location: LatLon,
    pub range: DateRange,
    /// Archive endpoint; overridable so tests can point at a local server.
    pub endpoint: String,
    pub temperature_unit: &'static str,
    pub precipitation_unit: &'static str,
    pub wind_speed_unit: &'static str,
    pub timezone: &'static str,
    pub request_timeout: Duration,
    /// Courtesy throttle applied after every request, success or not.
    pub request_delay: Duration,
    pub output_path: PathBuf,
}

impl DownloadConfig {
    /// The fixed Loveland Ski Area run: 2004 through November 2024, imperial
    /// units, timestamps in the mountain timezone.
    pub fn loveland() -> Self {
        Self {
            location: LatLon(39.6806, -105.8989),
            range: DateRange {
                start: NaiveDate::from_ymd_opt(2004, 1, 1)
                    .expect("static start date is valid"),
                end: NaiveDate::from_ymd_opt(2024, 11, 30)
                    .expect("static end date is valid"),
            },
            endpoint: ARCHIVE_ENDPOINT.to_string(),
            temperature_unit: "fahrenheit",
            precipitation_unit: "inch",
            wind_speed_unit: "mph",
            timezone: "America/Denver",
            request_timeout: Duration::from_secs(30),
            request_delay: Duration::from_millis(500),
            output_path: PathBuf::from(OUTPUT_FILENAME),
        }
    }
}
