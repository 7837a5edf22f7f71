//! Error types for the pixiv-sync application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    ConfigParse(String),

    #[error("Failed to write configuration: {0}")]
    ConfigWrite(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("No session token configured. Run `pixiv-sync set-token` first.")]
    MissingCredential,

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Session rejected by Pixiv ({0}). Refresh your token with `pixiv-sync set-token`.")]
    AuthExpired(String),

    // Per-item errors (logged and skipped, never fatal for the run)
    #[error("Failed to fetch illust {illust_id}: {message}")]
    ItemFetch { illust_id: String, message: String },

    // File system errors
    #[error("Invalid filename (path traversal attempt): {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a failure while fetching a single illust.
    pub fn item_fetch(illust_id: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ItemFetch {
            illust_id: illust_id.into(),
            message: message.into(),
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const SYNC_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
