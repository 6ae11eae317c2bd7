use crate::dataset::{Dataset, DatasetError, RawDataset};
use log::{info, warn};
use reqwest::Client;
use std::path::Path;

/// Fetches and validates the dataset document.
///
/// One load per session: the document is fetched once at startup and the resulting
/// [`Dataset`] stays immutable until the page is reloaded. A failed load is
/// terminal; the caller logs it and leaves the system inert rather than retrying.
pub struct DatasetLoader {
    client: Client,
}

impl DatasetLoader {
    pub fn new() -> DatasetLoader {
        DatasetLoader {
            client: Client::new(),
        }
    }

    /// Downloads the dataset document from `url`.
    pub async fn load_url(&self, url: &str) -> Result<Dataset, DatasetError> {
        info!("Downloading dataset from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DatasetError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    DatasetError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    DatasetError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DatasetError::NetworkRequest(url.to_string(), e))?;
        Self::parse(&bytes)
    }

    /// Reads the dataset document from a local file.
    pub async fn load_path(&self, path: &Path) -> Result<Dataset, DatasetError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| DatasetError::FileRead(path.to_path_buf(), e))?;
        Self::parse(&bytes)
    }

    /// Parses and validates raw document bytes.
    pub fn parse(bytes: &[u8]) -> Result<Dataset, DatasetError> {
        let raw: RawDataset = serde_json::from_slice(bytes)?;
        let dataset = Dataset::try_from(raw)?;
        if dataset.is_empty() {
            warn!("Dataset document contains no locations");
        } else {
            info!("Loaded {} locations", dataset.len());
        }
        Ok(dataset)
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}
