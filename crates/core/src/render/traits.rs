use crate::response::EventRecord;

use super::RenderError;

/// Turns a list of events into markup for the mount element.
///
/// Any `Fn(&[EventRecord]) -> String` is a renderer.
pub trait Renderer: Send + Sync {
    fn render(&self, events: &[EventRecord]) -> Result<String, RenderError>;
}

impl<F> Renderer for F
where
    F: Fn(&[EventRecord]) -> String + Send + Sync,
{
    fn render(&self, events: &[EventRecord]) -> Result<String, RenderError> {
        Ok(self(events))
    }
}
