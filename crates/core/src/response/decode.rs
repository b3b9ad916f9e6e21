use serde_json::Value;

use super::{ApiPayload, EventRecord, ResponseError};
use crate::filters::{display_value, is_truthy};

/// Decodes a successful response body.
///
/// Returns `Ok(None)` when the payload carries neither an error nor events
/// (or is a JSON scalar or array), which callers treat as nothing to render.
/// A `null` payload has no fields to read and is an error.
///
/// # Examples
///
/// ```
/// use events_widget_core::response::decode_response;
///
/// let events = decode_response(r#"{"events":[{"name":"Gala"}]}"#).unwrap().unwrap();
/// assert_eq!(events[0].name(), "Gala");
///
/// assert!(decode_response(r#"{"error":true,"message":"bad request"}"#).is_err());
/// assert!(decode_response("{}").unwrap().is_none());
/// ```
pub fn decode_response(body: &str) -> Result<Option<Vec<EventRecord>>, ResponseError> {
    if body.is_empty() {
        return Err(ResponseError::MissingResponse);
    }

    let payload: ApiPayload = match serde_json::from_str::<Value>(body)? {
        Value::Object(map) => serde_json::from_value(Value::Object(map))?,
        Value::Null => return Err(ResponseError::NullPayload),
        _ => return Ok(None),
    };

    if is_truthy(&payload.error) {
        let message = payload
            .message
            .map(|message| display_value(&message))
            .unwrap_or_default();
        return Err(ResponseError::Server(message));
    }

    if !is_truthy(&payload.events) {
        return Ok(None);
    }

    match payload.events {
        Value::Array(items) => Ok(Some(items.into_iter().map(EventRecord::from).collect())),
        other => Err(ResponseError::InvalidEvents(format!(
            "expected an array, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_an_error() {
        assert!(matches!(
            decode_response(""),
            Err(ResponseError::MissingResponse)
        ));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            decode_response("{not json"),
            Err(ResponseError::Json(_))
        ));
    }

    #[test]
    fn test_server_error_carries_message() {
        let err = decode_response(r#"{"error":true,"message":"bad request"}"#).unwrap_err();
        assert!(matches!(&err, ResponseError::Server(m) if m == "bad request"));
        assert_eq!(err.to_string(), "bad request");
    }

    #[test]
    fn test_server_error_without_message() {
        let err = decode_response(r#"{"error":1}"#).unwrap_err();
        assert!(matches!(err, ResponseError::Server(m) if m.is_empty()));
    }

    #[test]
    fn test_error_takes_precedence_over_events() {
        let result = decode_response(r#"{"error":true,"message":"nope","events":[]}"#);
        assert!(matches!(result, Err(ResponseError::Server(_))));
    }

    #[test]
    fn test_falsy_error_is_ignored() {
        let events = decode_response(r#"{"error":false,"events":[{"name":"A"}]}"#)
            .unwrap()
            .unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_events_are_decoded_in_order() {
        let body = r#"{"events":[{"cover":"c.png","url":"/e/1","name":"Gala"},{"name":"Expo"}]}"#;
        let events = decode_response(body).unwrap().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].url(), "/e/1");
        assert_eq!(events[1].name(), "Expo");
    }

    #[test]
    fn test_empty_events_array_is_still_rendered() {
        let events = decode_response(r#"{"events":[]}"#).unwrap();
        assert_eq!(events, Some(Vec::new()));
    }

    #[test]
    fn test_neither_error_nor_events_is_a_no_op() {
        assert_eq!(decode_response(r#"{"status":"ok"}"#).unwrap(), None);
        assert_eq!(decode_response(r#"{"events":null}"#).unwrap(), None);
    }

    #[test]
    fn test_non_array_events_is_an_error() {
        assert!(matches!(
            decode_response(r#"{"events":"soon"}"#),
            Err(ResponseError::InvalidEvents(_))
        ));
    }

    #[test]
    fn test_non_object_items_are_kept() {
        let events = decode_response(r#"{"events":[1,null,"x"]}"#)
            .unwrap()
            .unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].as_value(), &serde_json::json!(1));
        assert!(events[1].is_null());
        assert_eq!(events[2].name(), "undefined");
    }

    #[test]
    fn test_null_payload_is_an_error() {
        assert!(matches!(
            decode_response("null"),
            Err(ResponseError::NullPayload)
        ));
    }

    #[test]
    fn test_non_object_payload_is_a_no_op() {
        assert_eq!(decode_response("[1,2]").unwrap(), None);
        assert_eq!(decode_response("\"events\"").unwrap(), None);
    }
}
