mod accumulate;
mod chunker;
mod config;
mod download;
mod error;
mod report;
mod weather_data;
mod writer;

#[cfg(test)]
pub(crate) mod test_support;

pub use accumulate::merge_years;
pub use chunker::{yearly_chunks, YearChunk};
pub use config::{DateRange, DownloadConfig, LatLon, HOURLY_FIELDS};
pub use download::download_range;
pub use error::WeatherPullError;
pub use report::{ColumnMissing, QualityReport};
pub use weather_data::error::FetchError;
pub use weather_data::fetcher::ArchiveFetcher;
pub use weather_data::record::{
    records_from_dataframe, records_to_dataframe, HourlyRecord, COLUMN_NAMES,
};
pub use weather_data::response::{parse_archive_body, ArchiveResponse, HourlyBlock};
pub use writer::write_csv;
