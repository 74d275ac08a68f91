//! Inventory API client.

use async_trait::async_trait;
use pickup_core::Sku;

use crate::records::InventoryRecord;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),
}

/// Source of per-store availability for a SKU.
///
/// The widget only depends on this trait; tests swap in scripted
/// implementations instead of a live endpoint.
#[async_trait]
pub trait InventoryApi {
    /// Fetch availability records for one SKU. Single attempt, no retry.
    async fn fetch_availability(&self, sku: &Sku) -> Result<Vec<InventoryRecord>, FetchError>;
}

/// HTTP implementation of [`InventoryApi`].
///
/// Issues `GET {endpoint}?sku={sku}` and decodes a JSON array of records.
/// Non-2xx responses and malformed bodies are both failures.
pub struct HttpInventoryClient {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpInventoryClient {
    /// Create a client for an inventory endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InventoryApi for HttpInventoryClient {
    async fn fetch_availability(&self, sku: &Sku) -> Result<Vec<InventoryRecord>, FetchError> {
        let url = reqwest::Url::parse_with_params(&self.endpoint, &[("sku", sku.as_str())])
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| FetchError::Deserialization(e.to_string()))
    }
}
