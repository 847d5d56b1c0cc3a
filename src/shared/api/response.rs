// src/shared/api/response.rs
use serde::Deserialize;
use serde_json::Value;

/// `{"success": false, "error": {"code": "...", "message": "..."}}`
#[derive(Deserialize)]
struct EnvelopeError {
    message: Option<String>,
}

/// Services answer either `{"message": "..."}`, `{"message": ["...", ...]}`
/// (validation pipes) or the `ApiResponse` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum MessageField {
    One(String),
    Many(Vec<String>),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<MessageField>,
    error: Option<EnvelopeError>,
}

/// Extracts the human readable message from an error response body.
pub fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;

    let message = match parsed.message {
        Some(MessageField::One(msg)) => Some(msg),
        Some(MessageField::Many(msgs)) => msgs.into_iter().next(),
        None => parsed.error.and_then(|e| e.message),
    };

    message.filter(|m| !m.trim().is_empty())
}

/// Unwraps `{"success": true, "data": ...}`; any other payload is returned as is.
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map)
            if map.get("success").is_some_and(Value::is_boolean) && map.contains_key("data") =>
        {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}
