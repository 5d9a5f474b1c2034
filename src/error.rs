//! Error types for the instagram-scraper application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Profile scrape errors — these are the reportable outcomes of a scrape
    // and never propagate past the scraper boundary.
    #[error("Failed to retrieve profile data (HTTP status {0})")]
    ProfileStatus(u16),

    #[error("Error decoding JSON response from the server")]
    ProfileDecode(#[source] serde_json::Error),

    #[error("User '{0}' not found or unable to retrieve data")]
    ProfileNotFound(String),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),

    #[error("{0} profile(s) failed")]
    ProfilesFailed(u64),

    // Asset fetch errors (profile picture, thumbnails, video files)
    #[error("Asset fetch failed: {0}")]
    Asset(String),

    // Export errors
    #[error("Export failed: {0}")]
    Export(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const EXPORT_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
    pub const SOME_PROFILES_FAILED: i32 = 6;
}
