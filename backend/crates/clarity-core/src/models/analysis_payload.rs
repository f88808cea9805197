//! Opaque structured values produced by the external mood-analysis step.
//!
//! The shape is owned by the analysis process; this crate only guarantees
//! that a payload stored as text decodes back to an equal value.

use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Deepest nesting accepted for a single payload
pub const MAX_PAYLOAD_DEPTH: usize = 32;

/// Largest canonical encoding accepted for a single payload
pub const MAX_PAYLOAD_BYTES: usize = 256 * 1024;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisPayload(Value);

impl AnalysisPayload {
    /// Wrap a value after checking depth and encoded size
    #[track_caller]
    pub fn parse(field: &str, value: Value) -> CoreErrorResult<Self> {
        let depth = nesting_depth(&value);
        if depth > MAX_PAYLOAD_DEPTH {
            return Err(CoreError::validation(
                field,
                format!("{field} is nested {depth} levels deep (max {MAX_PAYLOAD_DEPTH})"),
            ));
        }

        let encoded_len = value.to_string().len();
        if encoded_len > MAX_PAYLOAD_BYTES {
            return Err(CoreError::validation(
                field,
                format!("{field} is {encoded_len} bytes (max {MAX_PAYLOAD_BYTES})"),
            ));
        }

        Ok(Self(value))
    }

    /// Form fields arrive as text: JSON documents are decoded, anything else
    /// is kept verbatim as a JSON string.
    #[track_caller]
    pub fn from_form_text(field: &str, text: &str) -> CoreErrorResult<Self> {
        let value = serde_json::from_str::<Value>(text)
            .unwrap_or_else(|_| Value::String(text.to_string()));
        Self::parse(field, value)
    }

    /// Canonical text stored in the database
    pub fn to_stored_text(&self) -> String {
        self.0.to_string()
    }

    pub fn from_stored_text(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

fn nesting_depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(nesting_depth).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(nesting_depth).max().unwrap_or(0),
        _ => 0,
    }
}
