//! Error types for the psd-exporter application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Source document errors
    #[error("Failed to open document '{name}': {message}")]
    Document { name: String, message: String },

    // Layer export errors
    #[error("Failed to composite layer '{layer}': {message}")]
    Composite { layer: String, message: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // PNG encoding errors
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

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
    pub const CONFIG_ERROR: i32 = 2;
    pub const DOCUMENT_ERROR: i32 = 3;
    pub const EXPORT_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
