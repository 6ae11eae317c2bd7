use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read dataset file '{0}'")]
    FileRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse dataset document")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid date key '{key}' in series '{variable}'")]
    InvalidDateKey { variable: String, key: String },

    #[error("Duplicate location ({lat}, {lon}) in dataset")]
    DuplicateLocation { lat: f64, lon: f64 },
}
