//! Error types for catalog access

use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure of a façade call
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// Why a review was refused before it reached the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please select a rating")]
    MissingRating,

    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),

    #[error("please write a comment")]
    EmptyComment,
}
