//! Error types for signsh.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignshError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Frame capture errors
    #[error("Frame capture failed: {message}")]
    Capture { message: String },

    // Detection errors
    #[error("Detector '{model}' is not ready")]
    DetectorNotReady { model: String },

    #[error("Detection failed: {message}")]
    Detection { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, SignshError>;
