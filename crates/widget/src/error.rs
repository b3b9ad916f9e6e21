//! Widget error types.

use events_widget_core::render::RenderError;
use events_widget_core::response::ResponseError;
use thiserror::Error;

/// Result type alias for widget operations.
pub type Result<T> = std::result::Result<T, WidgetError>;

/// Errors that can occur while configuring the widget or handling a response.
#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
