//! Fetch failures surfaced to the article list.
//!
//! Variants carry rendered messages rather than source errors so a single
//! failure can be shared by every reader of a cache entry.

use thiserror::Error;

use crate::api::types::ErrorBody;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Could not reach the server.
    #[error("Connection failed to '{url}': {message}")]
    Connection { url: String, message: String },

    /// Request exceeded the configured total timeout.
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Server answered with a non-success status.
    #[error("Server returned {status}")]
    Status { status: u16, body: ErrorBody },

    /// Response body was not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The fetch URL could not be built or parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Error list shown by the list view, as `(field, message)` pairs.
    ///
    /// Server-provided `errors` maps are flattened in key order; every other
    /// failure becomes a single `error` entry.
    pub fn error_list(&self) -> Vec<(String, String)> {
        match self {
            FetchError::Status { status, body } if !body.errors.is_empty() => body
                .errors
                .iter()
                .flat_map(|(key, messages)| {
                    messages.iter().map(move |msg| (key.clone(), msg.clone()))
                })
                .chain(std::iter::once((
                    "status".to_string(),
                    status.to_string(),
                )))
                .collect(),
            other => vec![("error".to_string(), other.to_string())],
        }
    }
}
