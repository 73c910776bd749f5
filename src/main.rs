/*!
# mindfulbytes - A mindful image of the day

Fetches the image of the day for a topic from a MindfulBytes service and prints
its URL together with how long ago the picture was taken. When nothing is stored
for today, a random day from the topic's history is shown instead.

## Usage

```
mindfulbytes [OPTIONS]

Options:
  -u, --base-url <BASE_URL>      Base URL of the MindfulBytes service
  -t, --topic <TOPIC>            Topic to draw images from
  -d, --date <DATE>              Treat this day as today (format: YYYY-MM-DD)
  -s, --size <SIZE>              Requested image size [default: 800x600]
  -f, --format <FORMAT>          Requested image format [default: jpg]
      --grayscale                Request a grayscale rendition of the image
      --list-topics              List the topics the service offers
      --log-format <LOG_FORMAT>  Log output format [default: text]
  -v, --verbose                  Print verbose output
```

## Configuration

- `MINDFULBYTES_URL`: Base URL of the service (defaults to "http://127.0.0.1:8085")
- `MINDFULBYTES_TOPIC`: Topic to show (defaults to "imgreader")
- `RUST_LOG`: Log filter, overrides `--verbose`
*/

use chrono::Local;
use clap::Parser;
use mindfulbytes::api::{ApiClient, ImageOptions};
use mindfulbytes::cli::CliArgs;
use mindfulbytes::config::Config;
use mindfulbytes::errors::{AppError, AppResult};
use mindfulbytes::logging;
use mindfulbytes::presentation::TerminalSink;
use mindfulbytes::resolver::ImageResolver;
use std::io::{self, Write};
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    logging::init(&args.log_format, args.verbose);
    debug!("CLI arguments: {:?}", args);

    if let Err(e) = run(args).await {
        // Resolution failures were already logged where they happened.
        if !matches!(e, AppError::Resolve(_)) {
            error!("{}", e);
        }
        std::process::exit(1);
    }
}

async fn run(args: CliArgs) -> AppResult<()> {
    let config = Config::load()?.with_overrides(args.base_url, args.topic)?;
    info!("Using {:?}", config);

    let client = ApiClient::new(config.base_url.as_str());

    if args.list_topics {
        let topics = client.list_topics().await?;
        let mut out = io::stdout().lock();
        for (topic, plugins) in &topics {
            writeln!(out, "{}\t{}", topic, plugins.join(","))?;
        }
        return Ok(());
    }

    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let options = ImageOptions {
        format: args.format,
        size: Some(args.size),
        grayscale: args.grayscale,
    };

    let mut resolver =
        ImageResolver::new(client, config.topic.as_str(), today).with_image_options(options);
    let mut sink = TerminalSink::new(io::stdout(), today);

    let resolution = resolver.resolve(&mut sink).await?;
    debug!("Resolved {:?}", resolution);
    Ok(())
}
