//! Configuration management for the mindfulbytes client.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. The resolver needs exactly two settings: where
//! the service lives and which topic to show.
//!
//! # Environment Variables
//!
//! - `MINDFULBYTES_URL`: Base URL of the service (defaults to http://127.0.0.1:8085)
//! - `MINDFULBYTES_TOPIC`: Topic to draw images from (defaults to "imgreader")

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_TOPIC, ENV_VAR_BASE_URL, ENV_VAR_TOPIC, TOPIC_FORBIDDEN_CHARS,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;

/// Configuration for the mindfulbytes client.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use mindfulbytes::Config;
///
/// let config = Config {
///     base_url: "https://bytes.example.org".to_string(),
///     topic: "nature".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the MindfulBytes service, without the API version.
    pub base_url: String,

    /// Topic images are drawn from.
    pub topic: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("topic", &self.topic)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            topic: DEFAULT_TOPIC.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a loaded value fails validation.
    pub fn load() -> AppResult<Self> {
        let defaults = Config::default();
        let config = Config {
            base_url: env::var(ENV_VAR_BASE_URL).unwrap_or(defaults.base_url),
            topic: env::var(ENV_VAR_TOPIC).unwrap_or(defaults.topic),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces settings with the values given on the command line, if any.
    ///
    /// The result is validated again.
    pub fn with_overrides(mut self, base_url: Option<String>, topic: Option<String>) -> AppResult<Self> {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(topic) = topic {
            self.topic = topic;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The base URL is not an http(s) URL
    /// - The topic is empty, or contains whitespace or URL delimiters
    pub fn validate(&self) -> AppResult<()> {
        let url = self.base_url.trim();
        let host = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .ok_or_else(|| {
                AppError::Config(format!(
                    "Base URL must start with http:// or https://, got '{}'",
                    self.base_url
                ))
            })?;
        if host.trim_end_matches('/').is_empty() {
            return Err(AppError::Config(format!(
                "Base URL '{}' has no host",
                self.base_url
            )));
        }

        if self.topic.is_empty() {
            return Err(AppError::Config("Topic cannot be empty".to_string()));
        }

        if self.topic.chars().any(char::is_whitespace) {
            return Err(AppError::Config(format!(
                "Topic cannot contain whitespace: '{}'",
                self.topic
            )));
        }

        for &ch in TOPIC_FORBIDDEN_CHARS.iter() {
            if self.topic.contains(ch) {
                return Err(AppError::Config(format!(
                    "Topic cannot contain '{}': '{}'",
                    ch, self.topic
                )));
            }
        }

        Ok(())
    }
}
