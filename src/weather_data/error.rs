use thiserror::Error;

/// Failures scoped to a single yearly fetch. None of these abort the run;
/// the download loop logs them and skips the year.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body for {0}")]
    BodyRead(String, #[source] reqwest::Error),

    #[error("Failed to decode archive response for {year}")]
    JsonDecode {
        year: i32,
        #[source]
        source: serde_json::Error,
    },

    #[error("Hourly series '{field}' for {year} has {found} values, expected {expected}")]
    LengthMismatch {
        year: i32,
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Unparseable timestamp '{value}' in {year} payload")]
    TimestampParse {
        year: i32,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Failed building DataFrame for {year}")]
    FrameBuild {
        year: i32,
        #[source]
        source: polars::error::PolarsError,
    },
}
