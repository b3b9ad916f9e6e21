use askama::Template;

use super::{RenderError, Renderer};
use crate::response::EventRecord;

/// One `<div>` per event, concatenated without separators.
///
/// Values are interpolated without HTML escaping.
#[derive(Template)]
#[template(
    source = r#"{% for event in events %}<div><img src="{{ event.cover() }}"/><h3><a href="{{ event.url() }}">{{ event.name() }}</a></h3></div>{% endfor %}"#,
    ext = "html",
    escape = "none"
)]
struct EventsTemplate<'a> {
    events: &'a [EventRecord],
}

/// Renders events with the built-in template.
pub fn render_events(events: &[EventRecord]) -> Result<String, RenderError> {
    if let Some(index) = events.iter().position(EventRecord::is_null) {
        return Err(RenderError::NullEvent(index));
    }
    Ok(EventsTemplate { events }.render()?)
}

/// The renderer used when the caller does not supply one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRenderer;

impl Renderer for DefaultRenderer {
    fn render(&self, events: &[EventRecord]) -> Result<String, RenderError> {
        render_events(events)
    }
}
