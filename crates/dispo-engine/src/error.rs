//! Error types for dispo-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispoError {
    /// Upstream validation rejected the dataset (e.g., dates out of order).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DispoError>;
