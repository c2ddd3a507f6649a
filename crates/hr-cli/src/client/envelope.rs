use crate::client::error::{ClientError, Result as ClientErrorResult};

use reqwest::StatusCode;
use serde_json::Value;

const UNKNOWN_CODE: &str = "UNKNOWN";
pub(crate) const OPERATION_FAILED: &str = "Operation failed";

/// A successful reply: the unwrapped payload plus the server's message.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub data: Value,
    pub message: Option<String>,
}

/// Parse a response body leniently: empty is `null`, anything that is not
/// JSON is kept as a string.
pub(crate) fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }

    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Unwrap a 2xx body.
///
/// Objects carrying a `success` key are treated as envelopes; anything else
/// passes through untouched. A `success: false` envelope without a message
/// fails with `fallback`.
#[track_caller]
pub(crate) fn unwrap(
    status: StatusCode,
    body: Value,
    fallback: &str,
) -> ClientErrorResult<Reply> {
    let Some(success) = body.as_object().and_then(|object| object.get("success")) else {
        return Ok(Reply {
            data: body,
            message: None,
        });
    };

    let message = string_field(&body, "message");

    if success.as_bool() == Some(true) {
        let data = body.get("data").cloned().unwrap_or(Value::Null);
        return Ok(Reply { data, message });
    }

    Err(ClientError::api_error(
        status,
        error_code(&body),
        message.unwrap_or_else(|| fallback.to_string()),
    ))
}

/// Code and message of a failed response.
///
/// Looks at the envelope first, then a nested `error` object, then the raw
/// text body; `fallback` covers everything else.
pub(crate) fn failure_details(body: &Value, fallback: &str) -> (String, String) {
    if let Some(error) = body.get("error").filter(|error| error.is_object()) {
        let message = string_field(error, "message").unwrap_or_else(|| fallback.to_string());
        return (error_code(error), message);
    }

    let message = match body {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Value::Object(_) => string_field(body, "message"),
        _ => None,
    };

    (
        error_code(body),
        message.unwrap_or_else(|| fallback.to_string()),
    )
}

fn error_code(value: &Value) -> String {
    string_field(value, "errorCode")
        .or_else(|| string_field(value, "code"))
        .unwrap_or_else(|| UNKNOWN_CODE.to_string())
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(String::from)
}
