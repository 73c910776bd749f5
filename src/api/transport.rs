//! Request/response boundary underneath the API client.
//!
//! The client only ever needs "send this request, give me the status and the
//! decoded JSON body". Keeping that behind a trait lets tests script the
//! service's answers without a network.

use crate::errors::TransportError;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;

/// A completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// JSON body, or `None` if the body was empty or not valid JSON
    pub body: Option<Value>,
}

/// Sends requests to the service.
///
/// Implementations resolve whenever the server answered, whatever the status
/// code, and fail only when no answer was obtained.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a single request. No retries.
    async fn request(&self, method: Method, url: &str) -> Result<TransportResponse, TransportError>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with a default `reqwest` client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that sends through the given client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, method: Method, url: &str) -> Result<TransportResponse, TransportError> {
        debug!("{} {}", method, url);

        let to_error = |source: reqwest::Error| {
            if source.is_connect() {
                TransportError::ConnectionFailed {
                    url: url.to_string(),
                    reason: source.to_string(),
                }
            } else {
                TransportError::Http {
                    url: url.to_string(),
                    source,
                }
            }
        };

        let response = self
            .client
            .request(method, url)
            .send()
            .await
            .map_err(to_error)?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(to_error)?;
        let body = serde_json::from_slice(&bytes).ok();

        debug!("{} answered {} ({} bytes)", url, status, bytes.len());
        Ok(TransportResponse { status, body })
    }
}
