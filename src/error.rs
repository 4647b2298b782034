use crate::weather_data::error::FetchError;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherPullError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed processing weather table: {0}")]
    DataFrame(#[from] PolarsError),

    #[error("No weather data could be downloaded for any year")]
    NoDataDownloaded,

    #[error("I/O error writing output file '{0}'")]
    CsvWriteIo(PathBuf, #[source] std::io::Error),

    #[error("Encoding error writing output file '{0}'")]
    CsvWritePolars(PathBuf, #[source] PolarsError),
}
