//! Presentation boundary for resolved images.
//!
//! The resolver hands exactly one `(image_url, display_date)` pair to a
//! [`PresentationSink`] per successful resolution and none on failure. What
//! "showing" means is up to the sink.

use chrono::NaiveDate;
use std::io::Write;
use tracing::error;

/// Receives the image chosen by the resolver.
pub trait PresentationSink {
    /// Shows the image at `image_url`, taken on `display_date`.
    fn present(&mut self, image_url: &str, display_date: &str);
}

/// Prints the chosen image to a terminal (or any writer).
///
/// Output is two lines: the image URL, then how long ago the picture was taken.
///
/// ```text
/// http://127.0.0.1:8085/v1/plugins/imgreader/images/abc?format=jpg&size=800x600
/// 2 years ago this picture was taken (2024-05-01)
/// ```
pub struct TerminalSink<W: Write> {
    out: W,
    today: NaiveDate,
}

impl<W: Write> TerminalSink<W> {
    /// Creates a sink writing to `out`, describing ages relative to `today`.
    pub fn new(out: W, today: NaiveDate) -> Self {
        Self { out, today }
    }

    /// Gives back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PresentationSink for TerminalSink<W> {
    fn present(&mut self, image_url: &str, display_date: &str) {
        let caption = match NaiveDate::parse_from_str(display_date, "%Y-%m-%d") {
            Ok(taken) => format!(
                "{} this picture was taken ({})",
                describe_age(taken, self.today),
                display_date
            ),
            Err(_) => format!("This picture was taken on {}", display_date),
        };

        let written = writeln!(self.out, "{}", image_url)
            .and_then(|_| writeln!(self.out, "{}", caption))
            .and_then(|_| self.out.flush());
        if let Err(e) = written {
            error!("Failed to print image: {}", e);
        }
    }
}

/// Describes the distance between `taken` and `today` in words.
///
/// Thresholds follow the usual "time ago" conventions: days up to 25,
/// months up to roughly 10.5 months, years beyond.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mindfulbytes::presentation::describe_age;
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// assert_eq!(describe_age(today, today), "today");
/// assert_eq!(describe_age(NaiveDate::from_ymd_opt(2024, 4, 28).unwrap(), today), "3 days ago");
/// assert_eq!(describe_age(NaiveDate::from_ymd_opt(2021, 5, 1).unwrap(), today), "3 years ago");
/// ```
pub fn describe_age(taken: NaiveDate, today: NaiveDate) -> String {
    let days = (today - taken).num_days();
    if days == 0 {
        return "today".to_string();
    }

    let span = days.unsigned_abs();
    let amount = if span < 26 {
        plural(span, "day")
    } else if span < 320 {
        plural(((span as f64) / 30.44).round().max(1.0) as u64, "month")
    } else {
        plural(((span as f64) / 365.25).round().max(1.0) as u64, "year")
    };

    if days > 0 {
        format!("{} ago", amount)
    } else {
        format!("in {}", amount)
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("a {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
