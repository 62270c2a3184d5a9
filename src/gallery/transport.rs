use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::error::{AppError, FetchFailure};

/// Raw answer from the asset host, before status checks or decoding
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// HTTP GET seam used by the gallery client.
///
/// Implementations only move bytes. Status checks and JSON decoding happen
/// in the client, so every transport reports the same failures the same way.
/// Timeouts are the transport's business.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn get(&self, url: &str) -> Result<TransportResponse, FetchFailure>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, FetchFailure> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchFailure::new(url, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchFailure::new(url, e))?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}
