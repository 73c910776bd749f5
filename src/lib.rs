/*!
# MindfulBytes

A client for the MindfulBytes service that shows one "mindful image of the day".
If nothing was stored for today, a random day from the topic's history is shown
instead.

## Architecture

- `api`: HTTP client for the versioned MindfulBytes REST API
- `resolver`: chooses the image (today first, then a random past date)
- `presentation`: where the chosen image ends up
- `config`: configuration loading and validation
- `cli`: command-line interface handling using clap
- `errors`: error handling infrastructure

## Usage Example

```rust,no_run
use chrono::Local;
use mindfulbytes::api::ApiClient;
use mindfulbytes::presentation::TerminalSink;
use mindfulbytes::resolver::ImageResolver;
use mindfulbytes::Config;

#[tokio::main]
async fn main() -> mindfulbytes::AppResult<()> {
    let config = Config::load()?;
    let today = Local::now().date_naive();

    let client = ApiClient::new(config.base_url.as_str());
    let mut resolver = ImageResolver::new(client, config.topic.as_str(), today);
    let mut sink = TerminalSink::new(std::io::stdout(), today);

    resolver.resolve(&mut sink).await?;
    Ok(())
}
```
*/

/// Client for the MindfulBytes REST API
pub mod api;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Tracing subscriber setup
pub mod logging;
/// Presentation boundary for resolved images
pub mod presentation;
/// Image-of-the-day resolution
pub mod resolver;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use resolver::{ImageResolver, Resolution};
