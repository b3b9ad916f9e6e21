//! Canned transport for tests and offline rendering.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use events_widget_core::transport::{HttpRequest, Transport, TransportError, TransportResponse};

/// Transport that answers every request with the same outcome and records
/// what it was asked to send.
#[derive(Debug, Clone)]
pub struct MockTransport {
    outcome: std::result::Result<TransportResponse, TransportError>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    /// Answers with the given response.
    pub fn respond(response: TransportResponse) -> Self {
        Self {
            outcome: Ok(response),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answers with a fully loaded `200` carrying `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::respond(TransportResponse::done(200, body))
    }

    /// Fails every request with `error`.
    pub fn fail(error: TransportError) -> Self {
        Self {
            outcome: Err(error),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &HttpRequest) -> Result<TransportResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        self.outcome.clone()
    }
}
