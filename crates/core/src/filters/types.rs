use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::is_truthy;

/// Filter keys initialised to `null` before the caller's options are merged.
pub const FILTER_KEYS: [&str; 3] = ["venue", "search", "publisher"];

/// Options passed to the widget at construction time.
///
/// Any JSON value is accepted; only objects contribute keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetOptions(Value);

impl WidgetOptions {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The `container` selector, when it is a non-empty string.
    pub fn container(&self) -> Option<&str> {
        self.0
            .get("container")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for WidgetOptions {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Filter configuration: the three known filters merged with every option key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filters(Map<String, Value>);

impl Default for Filters {
    fn default() -> Self {
        let map = FILTER_KEYS
            .iter()
            .map(|key| (key.to_string(), Value::Null))
            .collect();
        Self(map)
    }
}

impl Filters {
    /// Merges the option keys over the default filters. Later keys win, unknown
    /// keys are kept, and no value is validated.
    pub fn merge(options: &WidgetOptions) -> Self {
        let mut filters = Self::default();
        if let Some(object) = options.as_value().as_object() {
            for (key, value) in object {
                filters.0.insert(key.clone(), value.clone());
            }
        }
        filters
    }

    /// Active venue filter.
    pub fn venue(&self) -> Option<&Value> {
        self.active("venue")
    }

    /// Active publisher filter.
    pub fn publisher(&self) -> Option<&Value> {
        self.active("publisher")
    }

    /// Active search filter.
    pub fn search(&self) -> Option<&Value> {
        self.active("search")
    }

    /// Raw merged value for any key, set or not.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    fn active(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| is_truthy(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_are_unset() {
        let filters = Filters::default();
        for key in FILTER_KEYS {
            assert_eq!(filters.get(key), Some(&Value::Null));
        }
        assert!(filters.venue().is_none());
        assert!(filters.publisher().is_none());
        assert!(filters.search().is_none());
    }

    #[test]
    fn test_merge_overrides_defaults_and_keeps_extra_keys() {
        let options = WidgetOptions::new(json!({
            "venue": "filarmonica",
            "theme": "dark",
        }));
        let filters = Filters::merge(&options);

        assert_eq!(filters.venue(), Some(&json!("filarmonica")));
        assert_eq!(filters.get("theme"), Some(&json!("dark")));
        assert_eq!(filters.get("search"), Some(&Value::Null));
    }

    #[test]
    fn test_merge_keeps_container_key() {
        let options = WidgetOptions::new(json!({"container": "#list"}));
        let filters = Filters::merge(&options);
        assert_eq!(filters.get("container"), Some(&json!("#list")));
    }

    #[test]
    fn test_falsy_filter_is_inactive() {
        let options = WidgetOptions::new(json!({"venue": "", "publisher": 0, "search": false}));
        let filters = Filters::merge(&options);
        assert!(filters.venue().is_none());
        assert!(filters.publisher().is_none());
        assert!(filters.search().is_none());
    }

    #[test]
    fn test_any_truthy_value_is_accepted() {
        let options = WidgetOptions::new(json!({"venue": 17}));
        assert_eq!(Filters::merge(&options).venue(), Some(&json!(17)));
    }

    #[test]
    fn test_non_object_options_merge_nothing() {
        let filters = Filters::merge(&WidgetOptions::new(json!("venue")));
        assert_eq!(filters, Filters::default());
    }

    #[test]
    fn test_container_selector() {
        assert_eq!(
            WidgetOptions::new(json!({"container": "#events-list"})).container(),
            Some("#events-list")
        );
        assert_eq!(WidgetOptions::new(json!({"container": ""})).container(), None);
        assert_eq!(WidgetOptions::new(json!({"container": 3})).container(), None);
        assert_eq!(WidgetOptions::new(json!({})).container(), None);
    }
}
