use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::filters::display_value;

/// JSON body returned by the events API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiPayload {
    #[serde(default)]
    pub error: Value,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub events: Value,
}

/// A single event as returned by the API.
///
/// Usually a JSON object, but any item of the `events` array is kept as is.
/// Only `cover`, `url` and `name` are read by the default renderer; the rest
/// of the value is kept for custom renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventRecord(Value);

impl EventRecord {
    /// Image URL.
    pub fn cover(&self) -> String {
        self.text("cover")
    }

    /// Detail page URL.
    pub fn url(&self) -> String {
        self.text("url")
    }

    /// Display title.
    pub fn name(&self) -> String {
        self.text("name")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// A `null` item has no fields at all; reading one is an error.
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    // An absent key reads as `undefined`, a present `null` as `null`.
    fn text(&self, key: &str) -> String {
        match self.0.get(key) {
            None => "undefined".to_string(),
            Some(value) => display_value(value),
        }
    }
}

impl Default for EventRecord {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl From<Value> for EventRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Map<String, Value>> for EventRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(Value::Object(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_record_fields() {
        let record: EventRecord = serde_json::from_value(json!({
            "cover": "c.png",
            "url": "/e/1",
            "name": "Gala",
            "starts_at": "2024-06-01",
        }))
        .unwrap();

        assert_eq!(record.cover(), "c.png");
        assert_eq!(record.url(), "/e/1");
        assert_eq!(record.name(), "Gala");
        assert_eq!(record.get("starts_at"), Some(&json!("2024-06-01")));
    }

    #[test]
    fn test_missing_and_null_fields() {
        let record: EventRecord = serde_json::from_value(json!({"name": null})).unwrap();
        assert_eq!(record.cover(), "undefined");
        assert_eq!(record.name(), "null");
    }

    #[test]
    fn test_non_object_record_has_no_fields() {
        for value in [json!(1), json!("gala"), json!([1, 2])] {
            let record = EventRecord::from(value.clone());
            assert_eq!(record.name(), "undefined");
            assert_eq!(record.as_value(), &value);
            assert!(!record.is_null());
        }
        assert!(EventRecord::from(Value::Null).is_null());
    }

    #[test]
    fn test_payload_defaults() {
        let payload: ApiPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.error, Value::Null);
        assert_eq!(payload.message, None);
        assert_eq!(payload.events, Value::Null);
    }
}
