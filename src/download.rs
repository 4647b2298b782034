//! The sequential download loop: one yearly request at a time, throttled,
//! failed years skipped without retry.

use crate::accumulate::merge_years;
use crate::chunker::yearly_chunks;
use crate::error::WeatherPullError;
use crate::weather_data::fetcher::ArchiveFetcher;
use log::{info, warn};
use polars::frame::DataFrame;

/// Fetches every yearly chunk of the configured range in order, merges the
/// successes and truncates to the exact bound.
///
/// A failed year is logged and skipped — single attempt, no retry. Only the
/// zero-success case fails the run, as [`WeatherPullError::NoDataDownloaded`].
pub async fn download_range(fetcher: &ArchiveFetcher) -> Result<DataFrame, WeatherPullError> {
    let config = fetcher.config();
    let chunks = yearly_chunks(&config.range);
    info!(
        "Downloading {} yearly chunks for {} to {}",
        chunks.len(),
        config.range.start,
        config.range.end
    );

    let mut yearly: Vec<DataFrame> = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        match fetcher.fetch_year(chunk).await {
            Ok(df) => {
                info!("{}: {} records", chunk.year, df.height());
                yearly.push(df);
            }
            Err(e) => warn!("Skipping {}: {}", chunk.year, e),
        }
        // Courtesy throttle, applied whether or not the year succeeded.
        tokio::time::sleep(config.request_delay).await;
    }

    if yearly.is_empty() {
        return Err(WeatherPullError::NoDataDownloaded);
    }

    info!("Combining {} successful years", yearly.len());
    Ok(merge_years(yearly, &config.range)?)
}
