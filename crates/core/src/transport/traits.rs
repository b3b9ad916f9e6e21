use async_trait::async_trait;

use super::{HttpRequest, TransportError, TransportResponse};

/// Host capability that performs one HTTP request.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and reports how it completed.
    ///
    /// Any HTTP status is a completion; `Err` means no response was received.
    async fn send(&self, request: &HttpRequest) -> Result<TransportResponse, TransportError>;
}
