//! HTTP transport primitive.
//!
//! [`http_request`] sends one request through an injected [`Transport`] and
//! dispatches the outcome to the success, warning, or error callback.

mod http;
mod mock;

pub use http::ReqwestTransport;
pub use mock::MockTransport;

use events_widget_core::transport::{HttpRequest, Method, Transport};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WidgetError};

/// Message of the error raised when a request has no URL.
pub const URL_MISSING: &str = "[httpRequest] URL missing.";

/// Callback receiving the raw response body of a successful request.
pub type SuccessCallback<'a> = Box<dyn FnOnce(String) -> Result<()> + Send + 'a>;

/// Callback taking no arguments.
pub type Callback<'a> = Box<dyn FnOnce() + Send + 'a>;

/// When the error callback runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorDispatch {
    /// Run the error callback as soon as the request is issued, whatever the
    /// outcome. Transport failures are then only logged.
    #[default]
    Eager,
    /// Run the error callback only when the transport fails.
    OnFailure,
}

/// Options for a single request.
pub struct RequestOptions<'a> {
    url: Option<String>,
    method: Method,
    data: Option<String>,
    success: SuccessCallback<'a>,
    warning: Callback<'a>,
    error: Callback<'a>,
    dispatch: ErrorDispatch,
}

impl Default for RequestOptions<'_> {
    fn default() -> Self {
        Self {
            url: None,
            method: Method::Get,
            data: None,
            success: Box::new(|_| Ok(())),
            warning: Box::new(|| {}),
            error: Box::new(|| {}),
            dispatch: ErrorDispatch::default(),
        }
    }
}

impl<'a> RequestOptions<'a> {
    /// GET request to `url` with no-op callbacks.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn error_dispatch(mut self, dispatch: ErrorDispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn on_success(mut self, callback: impl FnOnce(String) -> Result<()> + Send + 'a) -> Self {
        self.success = Box::new(callback);
        self
    }

    pub fn on_warning(mut self, callback: impl FnOnce() + Send + 'a) -> Self {
        self.warning = Box::new(callback);
        self
    }

    pub fn on_error(mut self, callback: impl FnOnce() + Send + 'a) -> Self {
        self.error = Box::new(callback);
        self
    }
}

/// Sends one request and dispatches its outcome.
///
/// - No URL: fails with [`WidgetError::Config`] before anything else runs.
/// - Fully loaded with status `200`: calls `success` with the body and
///   returns whatever it returns.
/// - Any other completion: calls `warning` with no arguments. Status and body
///   only reach the log.
/// - Transport failure: see [`ErrorDispatch`].
pub async fn http_request<T>(transport: &T, options: RequestOptions<'_>) -> Result<()>
where
    T: Transport + ?Sized,
{
    let RequestOptions {
        url,
        method,
        data,
        success,
        warning,
        error,
        dispatch,
    } = options;

    let url = url.ok_or_else(|| WidgetError::Config(URL_MISSING.to_string()))?;

    let mut error = Some(error);
    if dispatch == ErrorDispatch::Eager {
        if let Some(callback) = error.take() {
            callback();
        }
    }

    let request = HttpRequest { method, url, data };
    tracing::debug!(method = %request.method, url = %request.url, "Sending request");

    match transport.send(&request).await {
        Ok(response) if response.is_success() => success(response.body),
        Ok(response) => {
            tracing::warn!(
                url = %request.url,
                status = response.status,
                ready_state = response.ready_state,
                body_len = response.body.len(),
                "Request did not complete with 200"
            );
            warning();
            Ok(())
        }
        Err(err) => {
            match error.take() {
                Some(callback) => {
                    tracing::error!(url = %request.url, error = %err, "Request failed");
                    callback();
                }
                None => {
                    tracing::warn!(url = %request.url, error = %err, "Request failed, error callback already ran");
                }
            }
            Ok(())
        }
    }
}
