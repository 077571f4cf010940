//! Error types for the todo API client.
//!
//! # Design
//! Every failure is translated into one of a small set of variants and handed
//! back to the caller; nothing is retried. `Validation` and `NotFound` only
//! come from the operations that special-case 400 and 404, every other
//! non-2xx status lands in `HttpError` with the raw status and body.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods and `TodoApi` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response arrived within the configured bound.
    #[error("request timed out")]
    Timeout,

    /// Transport failure other than a timeout (DNS, refused, reset).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server returned a non-2xx status the operation does not special-case.
    #[error("HTTP error! status: {status}")]
    HttpError { status: u16, body: String },

    /// The server rejected the create payload with 400.
    #[error("content must not be empty")]
    Validation,

    /// The server returned 404 for the addressed todo.
    #[error("todo item does not exist")]
    NotFound,

    /// The response body is not valid JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl ApiError {
    /// Status code carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            ApiError::Validation => Some(400),
            ApiError::NotFound => Some(404),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
