use chrono::{DateTime, NaiveDateTime};
use polars::prelude::*;

/// Output column order; `datetime` first, then the six observed series.
pub const COLUMN_NAMES: [&str; 7] = [
    "datetime",
    "temperature_2m",
    "precipitation",
    "snow_depth",
    "weather_code",
    "humidity",
    "wind_speed",
];

/// One hour's observation. Missing upstream values are `None`, not absent
/// rows; timestamps are local to the requested timezone.
#[derive(Debug, PartialEq, Clone)]
pub struct HourlyRecord {
    pub datetime: NaiveDateTime,
    pub temperature: Option<f64>,
    pub precipitation: Option<f64>,
    pub snow_depth: Option<f64>,
    pub weather_code: Option<i32>,
    pub humidity: Option<i32>,
    pub wind_speed: Option<f64>,
}

/// Assembles a year's records into the columnar table shape shared by the
/// accumulator, reporter and writer.
pub fn records_to_dataframe(records: &[HourlyRecord]) -> PolarsResult<DataFrame> {
    let n = records.len();
    let mut datetimes: Vec<NaiveDateTime> = Vec::with_capacity(n);
    let mut temperatures: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut precipitations: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut snow_depths: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut weather_codes: Vec<Option<i32>> = Vec::with_capacity(n);
    let mut humidities: Vec<Option<i32>> = Vec::with_capacity(n);
    let mut wind_speeds: Vec<Option<f64>> = Vec::with_capacity(n);

    for record in records {
        datetimes.push(record.datetime);
        temperatures.push(record.temperature);
        precipitations.push(record.precipitation);
        snow_depths.push(record.snow_depth);
        weather_codes.push(record.weather_code);
        humidities.push(record.humidity);
        wind_speeds.push(record.wind_speed);
    }

    DataFrame::new(vec![
        Column::new("datetime".into(), datetimes),
        Column::new("temperature_2m".into(), temperatures),
        Column::new("precipitation".into(), precipitations),
        Column::new("snow_depth".into(), snow_depths),
        Column::new("weather_code".into(), weather_codes),
        Column::new("humidity".into(), humidities),
        Column::new("wind_speed".into(), wind_speeds),
    ])
}

fn get_opt_float(column: &Column, idx: usize) -> Option<f64> {
    column.f64().ok().and_then(|ca| ca.get(idx))
}

fn get_opt_int(column: &Column, idx: usize) -> Option<i32> {
    column.i32().ok().and_then(|ca| ca.get(idx))
}

/// Reads typed rows back out of a table; the inverse of
/// [`records_to_dataframe`].
pub fn records_from_dataframe(df: &DataFrame) -> PolarsResult<Vec<HourlyRecord>> {
    let datetime = df.column("datetime")?.datetime()?;
    let temperature = df.column("temperature_2m")?;
    let precipitation = df.column("precipitation")?;
    let snow_depth = df.column("snow_depth")?;
    let weather_code = df.column("weather_code")?;
    let humidity = df.column("humidity")?;
    let wind_speed = df.column("wind_speed")?;

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let millis = datetime.get(idx).ok_or_else(|| {
            PolarsError::ComputeError(format!("null timestamp at row {idx}").into())
        })?;
        let datetime = DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| {
                PolarsError::ComputeError(
                    format!("timestamp {millis}ms at row {idx} out of range").into(),
                )
            })?
            .naive_utc();
        records.push(HourlyRecord {
            datetime,
            temperature: get_opt_float(temperature, idx),
            precipitation: get_opt_float(precipitation, idx),
            snow_depth: get_opt_float(snow_depth, idx),
            weather_code: get_opt_int(weather_code, idx),
            humidity: get_opt_int(humidity, idx),
            wind_speed: get_opt_float(wind_speed, idx),
        });
    }
    Ok(records)
}
