use thiserror::Error;

/// Errors reported by a transport when no response could be obtained.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Failed to read response body: {0}")]
    Body(String),
}
