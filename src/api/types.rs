//! Data types exchanged with the MindfulBytes service.

use crate::constants::{DEFAULT_IMAGE_FORMAT, DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH};
use crate::errors::ParseError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies the day a set of images belongs to.
///
/// The service started out keying images by day of year (`MM-DD`) and later
/// moved to exact days (`YYYY-MM-DD`). Full keys are canonical; short keys are
/// only kept so that old links still parse and route.
///
/// # Examples
///
/// ```
/// use mindfulbytes::api::DateKey;
///
/// let key: DateKey = "2024-05-01".parse().unwrap();
/// assert!(key.is_full());
/// assert_eq!(key.to_string(), "2024-05-01");
///
/// let short: DateKey = "02-29".parse().unwrap();
/// assert!(!short.is_full());
///
/// assert!("2023-02-29".parse::<DateKey>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateKey {
    /// Recurring day of year (`MM-DD`). Deprecated.
    Short {
        /// Month, 1-12
        month: u32,
        /// Day of month, 1-31
        day: u32,
    },
    /// Exact calendar day (`YYYY-MM-DD`).
    Full(NaiveDate),
}

impl DateKey {
    /// Returns true for the canonical `YYYY-MM-DD` form.
    pub fn is_full(&self) -> bool {
        matches!(self, DateKey::Full(_))
    }

    /// The collection segment this key is served under.
    pub(crate) fn collection(&self) -> &'static str {
        match self {
            DateKey::Short { .. } => "dates",
            DateKey::Full(_) => "fulldates",
        }
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey::Full(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateKey::Short { month, day } => write!(f, "{:02}-{:02}", month, day),
            DateKey::Full(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// Checks that `s` is made of ASCII digit groups of the given widths separated by `-`.
fn has_shape(s: &str, widths: &[usize]) -> bool {
    let parts: Vec<&str> = s.split('-').collect();
    parts.len() == widths.len()
        && parts
            .iter()
            .zip(widths)
            .all(|(part, &width)| part.len() == width && part.bytes().all(|b| b.is_ascii_digit()))
}

impl FromStr for DateKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::DateKey(s.to_string());

        if has_shape(s, &[4, 2, 2]) {
            return NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(DateKey::Full)
                .map_err(|_| invalid());
        }

        if has_shape(s, &[2, 2]) {
            let month: u32 = s[0..2].parse().map_err(|_| invalid())?;
            let day: u32 = s[3..5].parse().map_err(|_| invalid())?;
            // 2000 is a leap year, so 02-29 is accepted.
            NaiveDate::from_ymd_opt(2000, month, day).ok_or_else(invalid)?;
            return Ok(DateKey::Short { month, day });
        }

        Err(invalid())
    }
}

/// Metadata of a single image as returned by the service.
///
/// The service names the identifier `uuid`; `id` is accepted as well.
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Opaque identifier, unique per image
    #[serde(alias = "id")]
    pub uuid: String,
    /// Plugin that produced the image; empty when the service omitted it
    #[serde(default, alias = "topic")]
    pub plugin: String,
    /// Source location of the image on the service side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Exact day the image was taken, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulldate: Option<String>,
}

/// Result of looking up the images for one date.
///
/// A completed request always produces a `DateEntries`, whatever its status.
/// Callers decide what "no data" means via [`DateEntries::is_not_found`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateEntries {
    /// HTTP status code of the response
    pub status_code: u16,
    /// Images for the date, possibly empty
    pub entries: Vec<ImageRecord>,
}

impl DateEntries {
    /// True when the lookup yielded no images, regardless of status code.
    pub fn is_not_found(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Requested image dimensions, rendered as `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for ImageSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::ImageSize(s.to_string());
        let (width, height) = s.split_once('x').ok_or_else(invalid)?;
        Ok(ImageSize {
            width: width.parse().map_err(|_| invalid())?,
            height: height.parse().map_err(|_| invalid())?,
        })
    }
}

/// Rendering options passed to the image endpoint as query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOptions {
    /// Output format, e.g. `jpg` or `png`
    pub format: String,
    /// Target size; the service returns the original size when absent
    pub size: Option<ImageSize>,
    /// Request a grayscale rendition
    pub grayscale: bool,
}

impl Default for ImageOptions {
    fn default() -> Self {
        ImageOptions {
            format: DEFAULT_IMAGE_FORMAT.to_string(),
            size: Some(ImageSize {
                width: DEFAULT_IMAGE_WIDTH,
                height: DEFAULT_IMAGE_HEIGHT,
            }),
            grayscale: false,
        }
    }
}

impl ImageOptions {
    /// Renders the options as a query string without the leading `?`.
    pub fn query(&self) -> String {
        let mut query = format!("format={}", urlencoding::encode(&self.format));
        if let Some(size) = self.size {
            query.push_str(&format!("&size={}", size));
        }
        if self.grayscale {
            query.push_str("&mode=grayscale");
        }
        query
    }
}
