//! Core type definitions for session lists

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A session as returned by the sessions API.
///
/// Every field is optional: the API may omit any of them or send `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default, deserialize_with = "loose_string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "loose_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ISO string or epoch value, kept verbatim
    #[serde(default, deserialize_with = "loose_string", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "loose_string", skip_serializing_if = "Option::is_none")]
    pub latest_job_id: Option<String>,
    #[serde(default, deserialize_with = "loose_string", skip_serializing_if = "Option::is_none")]
    pub knowledgebase_id: Option<String>,
}

impl SessionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn with_latest_job_id(mut self, job_id: impl Into<String>) -> Self {
        self.latest_job_id = Some(job_id.into());
        self
    }
}

/// A session as shown in a display list
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionView {
    pub key: String,
    pub label: String,
    pub timestamp: String,
}

/// Accept strings as-is and numbers as their decimal text; anything else
/// counts as absent.
fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(coerce_field))
}

pub(crate) fn coerce_field(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        // Zero is falsy upstream and falls back like a missing field
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let raw = r#"{"id":"s1","name":"Chat A","timestamp":"2024-01-01","latest_job_id":"j9"}"#;
        let record: SessionRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.id.as_deref(), Some("s1"));
        assert_eq!(record.name.as_deref(), Some("Chat A"));
        assert_eq!(record.timestamp.as_deref(), Some("2024-01-01"));
        assert_eq!(record.latest_job_id.as_deref(), Some("j9"));
        assert_eq!(record.knowledgebase_id, None);
    }

    #[test]
    fn test_deserialize_missing_and_null_fields() {
        let record: SessionRecord = serde_json::from_str(r#"{"id":null}"#).unwrap();
        assert_eq!(record, SessionRecord::default());
    }

    #[test]
    fn test_numeric_fields_become_text() {
        let record: SessionRecord =
            serde_json::from_value(json!({"id": 42, "timestamp": 1704067200.5})).unwrap();
        assert_eq!(record.id.as_deref(), Some("42"));
        assert_eq!(record.timestamp.as_deref(), Some("1704067200.5"));
    }

    #[test]
    fn test_falsy_and_structured_fields_are_absent() {
        let record: SessionRecord = serde_json::from_value(
            json!({"id": 0, "name": true, "timestamp": {"at": 1}, "latest_job_id": [1]}),
        )
        .unwrap();
        assert_eq!(record, SessionRecord::default());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let record = SessionRecord::new().with_id("s1");
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"id":"s1"}"#);
    }

    #[test]
    fn test_view_serializes_all_fields() {
        let view = SessionView::default();
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({"key": "", "label": "", "timestamp": ""})
        );
    }
}
