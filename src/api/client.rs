//! HTTP client for the MindfulBytes REST service.
//!
//! Every operation issues exactly one request, never retries and keeps no
//! state beyond the immutable base URL and API version.

use super::transport::{HttpTransport, Transport};
use super::types::{DateEntries, DateKey, ImageOptions, ImageRecord};
use crate::constants::DEFAULT_API_VERSION;
use crate::errors::TransportError;
use reqwest::Method;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Client for the versioned MindfulBytes API.
pub struct ApiClient<T: Transport = HttpTransport> {
    base_url: String,
    version: String,
    transport: T,
}

impl ApiClient<HttpTransport> {
    /// Creates a client that talks HTTP to the service.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the service (e.g., "http://127.0.0.1:8085")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, HttpTransport::new())
    }
}

impl<T: Transport> ApiClient<T> {
    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            version: DEFAULT_API_VERSION.to_string(),
            transport,
        }
    }

    /// Targets a different API version than `v1`.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// The base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn topic_url(&self, topic: &str) -> String {
        format!("{}/{}/topics/{}", self.base_url, self.version, topic)
    }

    /// Lists the topics the service knows, each with the plugins feeding it.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is not reachable.
    pub async fn list_topics(&self) -> Result<BTreeMap<String, Vec<String>>, TransportError> {
        let url = format!("{}/{}/topics", self.base_url, self.version);
        let response = self.transport.request(Method::GET, &url).await?;

        if !is_success(response.status) {
            debug!("Listing topics answered {}", response.status);
            return Ok(BTreeMap::new());
        }

        let topics = response
            .body
            .and_then(|body| serde_json::from_value(body).ok())
            .unwrap_or_default();
        Ok(topics)
    }

    /// Lists every full date that has at least one image for `topic`.
    ///
    /// An unknown topic, or a topic without images, yields an empty list.
    /// Dates the service reports in an unexpected shape are skipped, and so
    /// are day-of-year keys, which never belong in the full-date index.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is not reachable.
    pub async fn list_dates(&self, topic: &str) -> Result<Vec<DateKey>, TransportError> {
        let url = format!("{}/fulldates/", self.topic_url(topic));
        let response = self.transport.request(Method::GET, &url).await?;

        if !is_success(response.status) {
            debug!("Date index for {} answered {}", topic, response.status);
            return Ok(Vec::new());
        }

        let raw: Vec<Value> = match response.body {
            Some(Value::Array(items)) => items,
            _ => return Ok(Vec::new()),
        };

        let dates = raw
            .iter()
            .filter_map(|item| {
                let parsed = item
                    .as_str()
                    .and_then(|s| s.parse::<DateKey>().ok())
                    .filter(DateKey::is_full);
                if parsed.is_none() {
                    warn!("Skipping malformed date {} in index of {}", item, topic);
                }
                parsed
            })
            .collect::<Vec<_>>();

        debug!("Date index for {} has {} entries", topic, dates.len());
        Ok(dates)
    }

    /// Fetches the images stored for `topic` on `date`.
    ///
    /// Resolves for every completed request, including "not found" answers;
    /// the entries are empty unless the service answered successfully with a
    /// list of records.
    ///
    /// # Errors
    ///
    /// Returns an error only if the service is not reachable.
    pub async fn get_entries_for_date(
        &self,
        topic: &str,
        date: &DateKey,
    ) -> Result<DateEntries, TransportError> {
        if !date.is_full() {
            warn!("Looking up deprecated day-of-year key {}", date);
        }

        let url = format!("{}/{}/{}", self.topic_url(topic), date.collection(), date);
        let response = self.transport.request(Method::GET, &url).await?;

        let entries = match response.body {
            Some(Value::Array(items)) if is_success(response.status) => items
                .into_iter()
                .filter_map(|item| match serde_json::from_value::<ImageRecord>(item) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        warn!("Skipping malformed entry for {} on {}: {}", topic, date, e);
                        None
                    }
                })
                .collect(),
            _ => Vec::new(),
        };

        debug!(
            "{} on {}: status {}, {} entries",
            topic,
            date,
            response.status,
            entries.len()
        );
        Ok(DateEntries {
            status_code: response.status,
            entries,
        })
    }

    /// Builds the URL of an image with the default rendering options.
    ///
    /// # Examples
    ///
    /// ```
    /// use mindfulbytes::api::ApiClient;
    ///
    /// let client = ApiClient::new("http://127.0.0.1:8085");
    /// assert_eq!(
    ///     client.get_image_url("imgreader", "abc"),
    ///     "http://127.0.0.1:8085/v1/plugins/imgreader/images/abc?format=jpg&size=800x600"
    /// );
    /// ```
    pub fn get_image_url(&self, topic: &str, image_id: &str) -> String {
        self.image_url(topic, image_id, &ImageOptions::default())
    }

    /// Builds the URL of an image with explicit rendering options.
    ///
    /// Plugin and image id come from the service and are percent-encoded
    /// as single path segments.
    pub fn image_url(&self, plugin: &str, image_id: &str, options: &ImageOptions) -> String {
        format!(
            "{}/{}/plugins/{}/images/{}?{}",
            self.base_url,
            self.version,
            urlencoding::encode(plugin),
            urlencoding::encode(image_id),
            options.query()
        )
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
