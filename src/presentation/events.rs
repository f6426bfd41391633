//! NDJSON event records for `--json` output
//!
//! Every line is one JSON object carrying `event` and `command` fields
//! plus the payload, so CI consumers can stream and filter without
//! buffering whole documents.

use serde_json::Value;

/// Wrap a payload object as a `data` event for `command`.
pub fn data_event(command: &str, payload: Value) -> Value {
    envelope(command, "data", payload)
}

/// Build an `error` event for `command`.
pub fn error_event(command: &str, message: &str) -> Value {
    envelope(
        command,
        "error",
        serde_json::json!({ "message": message }),
    )
}

fn envelope(command: &str, event: &str, payload: Value) -> Value {
    let mut object = match payload {
        Value::Object(map) => map,
        other => {
            let mut map = serde_json::Map::new();
            map.insert("data".to_string(), other);
            map
        }
    };
    object.insert("event".to_string(), Value::String(event.to_string()));
    object.insert("command".to_string(), Value::String(command.to_string()));
    Value::Object(object)
}

/// Serialize an event to one NDJSON line.
pub fn to_line(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}
