//! Environment configuration.

use std::env;

use events_widget_core::url::{PathEncoding, DEFAULT_API_URL};

use crate::transport::ErrorDispatch;

/// Widget configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Events API base URL (default: `DEFAULT_API_URL`)
    pub api_url: String,
    /// How filter values are embedded in the path (default: raw)
    pub path_encoding: PathEncoding,
    /// When the error callback runs (default: eager)
    pub error_dispatch: ErrorDispatch,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVENTS_API_URL` - API base URL (default: "https://iasievents.ro/api/events/")
    /// - `EVENTS_ENCODE_PATH` - percent-encode filter values in the path (default: false)
    /// - `EVENTS_REPORT_ERRORS` - run the error callback only on transport failure (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("EVENTS_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let path_encoding = if flag(lookup("EVENTS_ENCODE_PATH")) {
            PathEncoding::Encoded
        } else {
            PathEncoding::Raw
        };

        let error_dispatch = if flag(lookup("EVENTS_REPORT_ERRORS")) {
            ErrorDispatch::OnFailure
        } else {
            ErrorDispatch::Eager
        };

        Self {
            api_url,
            path_encoding,
            error_dispatch,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            path_encoding: PathEncoding::default(),
            error_dispatch: ErrorDispatch::default(),
        }
    }
}

fn flag(value: Option<String>) -> bool {
    matches!(
        value.as_deref().map(str::trim).map(str::to_ascii_lowercase).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}
