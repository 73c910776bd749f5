//! Resolution of the image of the day.
//!
//! The resolver first looks for images stored under today's date. When there
//! are none, it falls back to a random date from the topic's date index and
//! shows a random image from that day instead.
//!
//! # Flow
//!
//! 1. Fetch today's entries; if there are any, pick one at random
//! 2. Otherwise fetch the date index and pick a random date
//! 3. Fetch that date's entries and pick one at random
//! 4. Hand the image URL and its date to the presentation sink
//!
//! Requests run strictly one after another. A transport failure at any step
//! ends the resolution; nothing is retried.

use crate::api::{ApiClient, DateKey, ImageOptions, ImageRecord, Transport};
use crate::errors::{ExhaustedFallback, ResolveError};
use crate::presentation::PresentationSink;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info, warn};

/// Where the resolver currently is in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing requested yet
    Idle,
    /// Looking up today's entries
    TodayLookup,
    /// Looking up a random past date
    Fallback,
    /// An image was handed to the presentation sink
    Presented,
    /// No image could be found
    Exhausted,
    /// A request failed at the transport level
    Failed,
}

/// Which path produced the presented image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// Today's entries
    Today,
    /// A random date from the index
    Fallback,
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The chosen image
    pub record: ImageRecord,
    /// URL handed to the presentation sink
    pub image_url: String,
    /// Date handed to the presentation sink
    pub display_date: String,
    /// Whether today or the fallback supplied the image
    pub source: ImageSource,
}

/// Picks one element uniformly at random.
///
/// Returns `None` for an empty slice. Every position in `[0, len - 1]` is
/// equally likely.
///
/// # Examples
///
/// ```
/// use mindfulbytes::resolver::pick_uniform;
///
/// let mut rng = rand::thread_rng();
/// let dates = ["2024-01-01", "2024-02-02"];
/// assert!(dates.contains(pick_uniform(&dates, &mut rng).unwrap()));
/// assert!(pick_uniform::<u8, _>(&[], &mut rng).is_none());
/// ```
pub fn pick_uniform<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

/// Chooses and presents the image of the day for one topic.
///
/// A resolver is built once per run. It owns everything the resolution
/// depends on, including the notion of "today" and the random source.
pub struct ImageResolver<T: Transport, R: Rng = StdRng> {
    client: ApiClient<T>,
    topic: String,
    today: NaiveDate,
    rng: R,
    image_options: ImageOptions,
    phase: Phase,
}

impl<T: Transport> ImageResolver<T, StdRng> {
    /// Creates a resolver with an entropy-seeded random source.
    pub fn new(client: ApiClient<T>, topic: impl Into<String>, today: NaiveDate) -> Self {
        Self::with_rng(client, topic, today, StdRng::from_entropy())
    }
}

impl<T: Transport, R: Rng> ImageResolver<T, R> {
    /// Creates a resolver drawing its random choices from `rng`.
    pub fn with_rng(
        client: ApiClient<T>,
        topic: impl Into<String>,
        today: NaiveDate,
        rng: R,
    ) -> Self {
        Self {
            client,
            topic: topic.into(),
            today,
            rng,
            image_options: ImageOptions::default(),
            phase: Phase::Idle,
        }
    }

    /// Uses `options` when building the presented image URL.
    pub fn with_image_options(mut self, options: ImageOptions) -> Self {
        self.image_options = options;
        self
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The topic images are drawn from.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Resolves an image and hands it to `sink`.
    ///
    /// The sink is called exactly once on success and never on failure.
    /// Failures are logged here and returned; the caller need not log them again.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any request fails at the transport level
    /// - Today has no entries and the date index is empty
    /// - The date picked from the index turns out to have no entries
    pub async fn resolve<S: PresentationSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<Resolution, ResolveError> {
        match self.find_image().await {
            Ok((record, display_date, source)) => {
                let plugin = if record.plugin.is_empty() {
                    self.topic.as_str()
                } else {
                    record.plugin.as_str()
                };
                let image_url = self
                    .client
                    .image_url(plugin, &record.uuid, &self.image_options);

                info!("Presenting image {} from {}", record.uuid, display_date);
                sink.present(&image_url, &display_date);
                self.phase = Phase::Presented;

                Ok(Resolution {
                    record,
                    image_url,
                    display_date,
                    source,
                })
            }
            Err(e) => {
                match &e {
                    ResolveError::Transport(inner) => {
                        self.phase = Phase::Failed;
                        error!("Could not resolve an image for {}: {}", self.topic, inner);
                    }
                    ResolveError::Exhausted(inner) => {
                        self.phase = Phase::Exhausted;
                        warn!("No image to show: {}", inner);
                    }
                }
                Err(e)
            }
        }
    }

    async fn find_image(&mut self) -> Result<(ImageRecord, String, ImageSource), ResolveError> {
        self.phase = Phase::TodayLookup;
        let today = DateKey::Full(self.today);
        debug!("Looking up {} for {}", self.topic, today);

        let found = self.client.get_entries_for_date(&self.topic, &today).await?;
        if let Some(record) = pick_uniform(&found.entries, &mut self.rng) {
            return Ok((record.clone(), today.to_string(), ImageSource::Today));
        }

        info!(
            "Nothing stored for {} on {} (status {}), picking a random date",
            self.topic, today, found.status_code
        );
        self.phase = Phase::Fallback;

        let dates = self.client.list_dates(&self.topic).await?;
        let date = *pick_uniform(&dates, &mut self.rng).ok_or_else(|| {
            ExhaustedFallback::EmptyIndex {
                topic: self.topic.clone(),
            }
        })?;
        debug!("Picked {} out of {} dates", date, dates.len());

        let found = self.client.get_entries_for_date(&self.topic, &date).await?;
        let record = pick_uniform(&found.entries, &mut self.rng).ok_or_else(|| {
            ExhaustedFallback::InconsistentIndex {
                topic: self.topic.clone(),
                date: date.to_string(),
            }
        })?;

        Ok((record.clone(), date.to_string(), ImageSource::Fallback))
    }
}
