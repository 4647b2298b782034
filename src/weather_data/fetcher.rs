use crate::chunker::YearChunk;
use crate::config::{DownloadConfig, HOURLY_FIELDS};
use crate::weather_data::error::FetchError;
use crate::weather_data::record::records_to_dataframe;
use crate::weather_data::response::parse_archive_body;
use log::{info, warn};
use polars::frame::DataFrame;
use reqwest::Client;

/// Issues one archive request per yearly chunk and decodes the payload into
/// the year's table.
pub struct ArchiveFetcher {
    client: Client,
    config: DownloadConfig,
}

impl ArchiveFetcher {
    pub fn new(config: DownloadConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &DownloadConfig {
        &self.config
    }

    /// Fetches one calendar year of hourly observations.
    ///
    /// Every failure here is scoped to the chunk: timeouts and connection
    /// errors, non-success statuses, and malformed payloads all come back as
    /// a typed [`FetchError`] for the caller to inspect.
    pub async fn fetch_year(&self, chunk: &YearChunk) -> Result<DataFrame, FetchError> {
        let url = self.config.endpoint.clone();
        info!("Requesting {} from {}", chunk.year, url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", self.config.location.0.to_string()),
                ("longitude", self.config.location.1.to_string()),
                ("start_date", chunk.start_date()),
                ("end_date", chunk.end_date()),
                ("hourly", HOURLY_FIELDS.join(",")),
                ("temperature_unit", self.config.temperature_unit.to_string()),
                (
                    "precipitation_unit",
                    self.config.precipitation_unit.to_string(),
                ),
                ("wind_speed_unit", self.config.wind_speed_unit.to_string()),
                ("timezone", self.config.timezone.to_string()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {} ({}): {:?}", chunk.year, url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::BodyRead(url, e))?;
        let records = parse_archive_body(&body, chunk.year)?;
        records_to_dataframe(&records).map_err(|source| FetchError::FrameBuild {
            year: chunk.year,
            source,
        })
    }
}
