use crate::api::ImageSize;
use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use chrono::NaiveDate;
use clap::Parser;

/// Shows a mindful image of the day from a MindfulBytes service
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Base URL of the MindfulBytes service (overrides MINDFULBYTES_URL)
    #[arg(short = 'u', long)]
    pub base_url: Option<String>,

    /// Topic to draw images from (overrides MINDFULBYTES_TOPIC)
    #[arg(short = 't', long)]
    pub topic: Option<String>,

    /// Treat this day as today (format: YYYY-MM-DD)
    #[arg(short = 'd', long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Requested image size (format: WIDTHxHEIGHT)
    #[arg(short = 's', long, default_value = "800x600")]
    pub size: ImageSize,

    /// Requested image format (e.g. jpg, png)
    #[arg(short = 'f', long, default_value = "jpg", value_parser = parse_format)]
    pub format: String,

    /// Request a grayscale rendition of the image
    #[arg(long)]
    pub grayscale: bool,

    /// List the topics the service offers instead of showing an image
    #[arg(long, conflicts_with_all = ["date", "size", "format", "grayscale"])]
    pub list_topics: bool,

    /// Log output format
    #[arg(long, default_value = LOG_FORMAT_TEXT, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    /// Print verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn parse_format(value: &str) -> Result<String, String> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!(
            "image format must be letters and digits only, got '{}'",
            value
        ));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(vec!["mindfulbytes"]);
        assert!(args.base_url.is_none());
        assert!(args.topic.is_none());
        assert!(args.date.is_none());
        assert_eq!(
            args.size,
            ImageSize {
                width: 800,
                height: 600
            }
        );
        assert_eq!(args.format, "jpg");
        assert!(!args.grayscale);
        assert!(!args.list_topics);
        assert_eq!(args.log_format, "text");
        assert!(!args.verbose);
    }

    #[test]
    fn test_service_options() {
        let args = CliArgs::parse_from(vec![
            "mindfulbytes",
            "--base-url",
            "https://bytes.example.org",
            "-t",
            "nature",
        ]);
        assert_eq!(args.base_url.as_deref(), Some("https://bytes.example.org"));
        assert_eq!(args.topic.as_deref(), Some("nature"));
    }

    #[test]
    fn test_date_option() {
        let args = CliArgs::parse_from(vec!["mindfulbytes", "--date", "2024-05-01"]);
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 5, 1));

        let result = CliArgs::try_parse_from(vec!["mindfulbytes", "-d", "05-01"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_image_options() {
        let args = CliArgs::parse_from(vec![
            "mindfulbytes",
            "-s",
            "320x240",
            "-f",
            "png",
            "--grayscale",
        ]);
        assert_eq!(
            args.size,
            ImageSize {
                width: 320,
                height: 240
            }
        );
        assert_eq!(args.format, "png");
        assert!(args.grayscale);

        let result = CliArgs::try_parse_from(vec!["mindfulbytes", "--size", "big"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_rejects_query_characters() {
        for format in ["jpg&size=1x1", "png?mode=x", "", "we bp"] {
            let result = CliArgs::try_parse_from(vec!["mindfulbytes", "--format", format]);
            assert!(result.is_err(), "format '{}' was accepted", format);
        }

        let args = CliArgs::parse_from(vec!["mindfulbytes", "-f", "webp"]);
        assert_eq!(args.format, "webp");
    }

    #[test]
    fn test_list_topics_conflicts_with_image_options() {
        let args = CliArgs::parse_from(vec!["mindfulbytes", "--list-topics"]);
        assert!(args.list_topics);

        let result =
            CliArgs::try_parse_from(vec!["mindfulbytes", "--list-topics", "--date", "2024-05-01"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_format_values() {
        let args = CliArgs::parse_from(vec!["mindfulbytes", "--log-format", "json", "-v"]);
        assert_eq!(args.log_format, "json");
        assert!(args.verbose);

        let result = CliArgs::try_parse_from(vec!["mindfulbytes", "--log-format", "xml"]);
        assert!(result.is_err());
    }
}
