use thiserror::Error;

/// Errors raised while turning an API response body into events.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("Missing API response.")]
    MissingResponse,
    #[error("Malformed API response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("API response is null.")]
    NullPayload,
    #[error("{0}")]
    Server(String),
    #[error("Invalid events list: {0}")]
    InvalidEvents(String),
}
