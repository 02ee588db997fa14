// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Recoverable: the caller should prompt again
    #[error("Input line is empty")]
    EmptyInput,

    #[error("Unable to parse key {suffix:?}: expected a non-negative integer")]
    InvalidKeyFormat { suffix: String },

    #[error("Input closed before any text was entered")]
    UnexpectedEof,
}

pub type Result<T> = std::result::Result<T, CoreError>;
