//! Client for the MindfulBytes REST service.
//!
//! # Module Structure
//!
//! - `client`: the versioned API client (`ApiClient`)
//! - `transport`: the request/response boundary and its `reqwest` implementation
//! - `types`: date keys, image records and image rendering options
//!
//! # Example
//!
//! ```no_run
//! use mindfulbytes::api::{ApiClient, DateKey};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new("http://127.0.0.1:8085");
//! let date: DateKey = "2024-05-01".parse()?;
//! let found = client.get_entries_for_date("imgreader", &date).await?;
//! for record in &found.entries {
//!     println!("{}", client.get_image_url("imgreader", &record.uuid));
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use client::ApiClient;
pub use transport::{HttpTransport, Transport, TransportResponse};
pub use types::{DateEntries, DateKey, ImageOptions, ImageRecord, ImageSize};
