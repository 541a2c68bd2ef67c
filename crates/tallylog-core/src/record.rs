//! Tracking record (one line of the track log).
//!
//! A record is whatever key/value mapping the client sent. There is no schema;
//! the only field the service looks at is `count`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, TallyError};

/// Field that triggers counter accumulation.
pub const COUNT_FIELD: &str = "count";

/// Arbitrary client payload, serialized as a single JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackRecord(Map<String, Value>);

impl TrackRecord {
    /// Parse a JSON body. Only objects are accepted.
    pub fn from_json_slice(body: &[u8]) -> Result<Self> {
        let v: Value = serde_json::from_slice(body)
            .map_err(|e| TallyError::BadRequest(format!("invalid json body: {e}")))?;
        match v {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(TallyError::BadRequest(format!(
                "json body must be an object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Build from decoded form pairs. Values stay strings; a repeated key keeps
    /// its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields = Map::new();
        for (k, v) in pairs {
            fields.insert(k.into(), Value::String(v.into()));
        }
        Self(fields)
    }

    /// The `count` field, unless absent or `null`.
    pub fn count(&self) -> Option<&Value> {
        self.0.get(COUNT_FIELD).filter(|v| !v.is_null())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Serialize as one newline-terminated JSON line.
    pub fn to_line(&self) -> Result<String> {
        let mut line = serde_json::to_string(&self.0)
            .map_err(|e| TallyError::Internal(format!("record serialize failed: {e}")))?;
        line.push('\n');
        Ok(line)
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
