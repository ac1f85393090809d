//! JSON parsing for session list payloads

use crate::errors::CoreError;
use crate::translator::translate;
use crate::types::{SessionRecord, SessionView};
use serde_json::Value;
use std::path::Path;

/// A parsed session list; `None` entries are nulls in the payload
pub type SessionList = Vec<Option<SessionRecord>>;

/// Parse a session list payload.
///
/// Accepts a bare JSON array or the API envelope `{"data": [...], ...}`.
/// Blank input, JSON `null` and `{"data": null}` mean the list was not
/// provided and yield `Ok(None)`. An object without `data` is rejected.
/// Array entries that are not objects are kept as `None`.
pub fn parse_session_list(raw: &str) -> Result<Option<SessionList>, CoreError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(raw)?;
    let items = match value {
        Value::Null => return Ok(None),
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("data") {
            Some(Value::Array(items)) => items,
            Some(Value::Null) => return Ok(None),
            None => {
                return Err(CoreError::InvalidPayload {
                    expected: "array or object with \"data\"".to_string(),
                    actual: "object without \"data\"".to_string(),
                })
            }
            Some(other) => {
                return Err(CoreError::InvalidPayload {
                    expected: "array in \"data\"".to_string(),
                    actual: json_kind(&other).to_string(),
                })
            }
        },
        other => {
            return Err(CoreError::InvalidPayload {
                expected: "array or object with \"data\"".to_string(),
                actual: json_kind(&other).to_string(),
            })
        }
    };

    Ok(Some(items.into_iter().map(parse_entry).collect()))
}

/// Parse a session list file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Option<SessionList>, CoreError> {
    let raw = std::fs::read_to_string(path)?;
    parse_session_list(&raw)
}

/// Parse and translate a payload in one step
pub fn translate_json(raw: &str) -> Result<Vec<SessionView>, CoreError> {
    let sessions = parse_session_list(raw)?;
    Ok(translate(sessions.as_deref()))
}

fn parse_entry(value: Value) -> Option<SessionRecord> {
    match value {
        // Record fields are all lenient, so an object always converts
        Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
