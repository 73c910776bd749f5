//! Error handling utilities for the mindfulbytes client.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! A completed request that carries no entries is *not* an error: it is reported
//! through [`crate::api::DateEntries::is_not_found`] and drives the resolver's
//! fallback path.

use thiserror::Error;

/// Represents failures of the network transport underneath the API client.
///
/// These are never retried. Any transport error aborts the current resolution.
///
/// # Examples
///
/// ```
/// use mindfulbytes::errors::TransportError;
///
/// let error = TransportError::ConnectionFailed {
///     url: "http://127.0.0.1:8085/v1/topics".to_string(),
///     reason: "connection refused".to_string(),
/// };
///
/// assert!(format!("{}", error).contains("127.0.0.1:8085"));
/// assert!(format!("{}", error).contains("connection refused"));
/// ```
#[derive(Debug, Error)]
pub enum TransportError {
    /// The service could not be reached at all.
    #[error("Could not connect to {url}: {reason}. Is the MindfulBytes service running?")]
    ConnectionFailed {
        /// The URL that was requested
        url: String,
        /// Description of the connection failure
        reason: String,
    },

    /// The request failed for any other transport-level reason.
    #[error("Request to {url} failed: {source}")]
    Http {
        /// The URL that was requested
        url: String,
        /// The underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },
}

/// Errors produced when parsing user- or service-supplied values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A date key was neither `YYYY-MM-DD` nor `MM-DD`, or named no real day.
    #[error("Invalid date key '{0}': expected YYYY-MM-DD (or the deprecated MM-DD)")]
    DateKey(String),

    /// An image size was not of the form `WIDTHxHEIGHT`.
    #[error("Invalid image size '{0}': expected WIDTHxHEIGHT, e.g. 800x600")]
    ImageSize(String),
}

/// Represents the ways the fallback path can run dry.
///
/// # Examples
///
/// ```
/// use mindfulbytes::errors::ExhaustedFallback;
///
/// let error = ExhaustedFallback::EmptyIndex { topic: "imgreader".to_string() };
/// assert!(format!("{}", error).contains("imgreader"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExhaustedFallback {
    /// The service knows no dates at all for the topic.
    #[error("No dates are known for topic '{topic}'")]
    EmptyIndex {
        /// The topic that was looked up
        topic: String,
    },

    /// The date index listed a date that turned out to have no entries.
    #[error("Date {date} is listed for topic '{topic}' but has no entries")]
    InconsistentIndex {
        /// The topic that was looked up
        topic: String,
        /// The date picked from the index
        date: String,
    },
}

/// Represents the terminal failure states of an image resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A request failed at the transport level.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Neither today nor the fallback produced an image.
    #[error("No image available: {0}")]
    Exhausted(#[from] ExhaustedFallback),
}

/// Represents all possible errors that can occur in the mindfulbytes application.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use mindfulbytes::errors::AppError;
///
/// let error = AppError::Config("Missing topic".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing topic");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors, e.g. writing to the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors from the HTTP transport outside of a resolution.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Errors that ended an image resolution.
    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
