//! JSON output formatting.

use events_widget_core::response::EventRecord;

/// Format events as pretty JSON. Usable directly as a renderer.
pub fn format_events_json(events: &[EventRecord]) -> String {
    serde_json::to_string_pretty(events).unwrap_or_default()
}
