//! Output formatting functions.

pub mod html;
pub mod json;

pub use html::format_page;
pub use json::format_events_json;
