mod error;
mod traits;
mod types;

pub use error::TransportError;
pub use traits::Transport;
pub use types::{request_headers, HttpRequest, Method, TransportResponse, READY_STATE_DONE};
