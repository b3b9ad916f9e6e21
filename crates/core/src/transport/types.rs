use std::fmt;

use serde::{Deserialize, Serialize};

/// Ready state reported by a transport once the response is fully loaded.
pub const READY_STATE_DONE: u8 = 4;

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra headers sent with a request.
///
/// POST and PUT are flagged as AJAX form submissions.
pub fn request_headers(method: Method) -> &'static [(&'static str, &'static str)] {
    match method {
        Method::Post | Method::Put => &[
            ("X-Requested-With", "XMLHttpRequest"),
            ("Content-type", "application/x-www-form-urlencoded"),
        ],
        _ => &[],
    }
}

/// A request handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub data: Option<String>,
}

impl HttpRequest {
    pub fn headers(&self) -> &'static [(&'static str, &'static str)] {
        request_headers(self.method)
    }
}

/// How a request completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub ready_state: u8,
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    /// A fully loaded response.
    pub fn done(status: u16, body: impl Into<String>) -> Self {
        Self {
            ready_state: READY_STATE_DONE,
            status,
            body: body.into(),
        }
    }

    /// Only a fully loaded `200` counts; every other status, including other
    /// 2xx codes, does not.
    pub fn is_success(&self) -> bool {
        self.ready_state == READY_STATE_DONE && self.status == 200
    }
}
