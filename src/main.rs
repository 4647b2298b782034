use env_logger::Env;
use log::error;
use loveland_weather::{
    download_range, write_csv, ArchiveFetcher, DownloadConfig, QualityReport, WeatherPullError,
};
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<(), WeatherPullError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = DownloadConfig::loveland();
    println!(
        "Downloading hourly weather for Loveland Ski Area ({}, {})",
        config.location.0, config.location.1
    );
    println!(
        "Date range: {} to {} (one request per year)",
        config.range.start, config.range.end
    );

    let started = Instant::now();
    let fetcher = ArchiveFetcher::new(config.clone())?;
    let mut table = match download_range(&fetcher).await {
        Ok(table) => table,
        Err(WeatherPullError::NoDataDownloaded) => {
            // Total failure ends the run without an output file, but it is
            // a reported condition, not a crash.
            error!("Failed to download any weather data; no output file written");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    println!("Final dataset: {} hourly records", table.height());
    println!();
    println!("{}", QualityReport::from_table(&table)?);
    println!();

    write_csv(&mut table, &config.output_path)?;
    println!("Saved {}", config.output_path.display());
    println!(
        "Download completed in {:.1} seconds",
        started.elapsed().as_secs_f64()
    );

    println!();
    println!("Sample rows:\n{}", table.head(Some(10)));
    Ok(())
}
