//! events_widget - fetch events from the events API and render them into a
//! mount element.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod transport;
pub mod widget;

pub use config::Config;
pub use document::{InMemoryDocument, InMemoryElement};
pub use error::{Result, WidgetError};
pub use transport::{http_request, ErrorDispatch, MockTransport, RequestOptions, ReqwestTransport};
pub use widget::{EventsWidget, FetchOutcome};
