//! Constants used throughout the application.
//!
//! This module contains all constants used in the MindfulBytes client, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "mindfulbytes";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Shows a mindful image of the day from a MindfulBytes service";

// Logging
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for the base URL of the MindfulBytes service.
pub const ENV_VAR_BASE_URL: &str = "MINDFULBYTES_URL";
/// Environment variable for the topic to show images from.
pub const ENV_VAR_TOPIC: &str = "MINDFULBYTES_TOPIC";
/// Default base URL, matching the service's default listen address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8085";
/// Default topic.
pub const DEFAULT_TOPIC: &str = "imgreader";

// API
/// Version segment prefixed to every API path.
pub const DEFAULT_API_VERSION: &str = "v1";
/// Image format requested when none is given.
pub const DEFAULT_IMAGE_FORMAT: &str = "jpg";
/// Image width requested when no size is given.
pub const DEFAULT_IMAGE_WIDTH: u32 = 800;
/// Image height requested when no size is given.
pub const DEFAULT_IMAGE_HEIGHT: u32 = 600;

// Validation
/// Characters that may not appear in a topic, since it is placed verbatim in URL paths.
pub const TOPIC_FORBIDDEN_CHARS: &[char] = &['/', '?', '#', '%', '&'];
