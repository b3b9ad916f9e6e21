mod functions;
mod types;

pub use functions::{display_value, is_truthy};
pub use types::{Filters, WidgetOptions, FILTER_KEYS};
