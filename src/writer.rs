//! Serializes the final table to the output CSV.

use crate::error::WeatherPullError;
use log::info;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Datetimes are written second-precision, matching the hourly cadence.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes `df` as UTF-8 CSV with a header row and no index column.
///
/// Filesystem and encoding errors propagate to the caller; there is no
/// recovery path for a failed write.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<(), WeatherPullError> {
    let file = File::create(path)
        .map_err(|e| WeatherPullError::CsvWriteIo(path.to_path_buf(), e))?;
    CsvWriter::new(file)
        .include_header(true)
        .with_datetime_format(Some(DATETIME_FORMAT.to_string()))
        .finish(df)
        .map_err(|e| WeatherPullError::CsvWritePolars(path.to_path_buf(), e))?;
    info!("Wrote {} rows to {}", df.height(), path.display());
    Ok(())
}
