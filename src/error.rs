use thiserror::Error;

/// Errors produced at the webhook deserialization boundary.
#[derive(Error, Debug)]
pub enum PayloadError {
    /// The request body was not valid JSON.
    #[error("request body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The body was valid JSON but its `type` tag matched no known payload
    /// shape, or a required field was missing.
    #[error("unrecognized payload shape: {0}")]
    UnrecognizedPayload(String),
}
