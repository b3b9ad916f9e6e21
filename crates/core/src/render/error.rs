use thiserror::Error;

/// Errors raised while producing event markup.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to render template: {0}")]
    Template(#[from] askama::Error),
    #[error("Cannot read fields of null event at index {0}")]
    NullEvent(usize),
}
