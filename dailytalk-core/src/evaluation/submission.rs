//! Submission payload wrapper with checked field coercion

use serde_json::{Map, Value};

use crate::error::{ActivityError, ActivityResult};

/// A learner submission, viewed as a record of named JSON values
///
/// A missing or `null` payload is treated as the empty record. Numeric
/// fields are read with [`Submission::int_or`]: absent fields take the
/// caller's default, JSON numbers are accepted (floats truncated toward
/// zero), and any other value type is a
/// [`Validation`](ActivityError::Validation) error naming the field.
#[derive(Debug, Clone, Default)]
pub struct Submission(Map<String, Value>);

impl Submission {
    /// The empty record
    pub fn empty() -> Self {
        Self(Map::new())
    }

    /// Build a submission from an optional JSON payload
    ///
    /// # Errors
    /// Returns [`ActivityError::InvalidSubmission`] when the payload is
    /// present but not a JSON object.
    pub fn from_value(value: Option<&Value>) -> ActivityResult<Self> {
        match value {
            None | Some(Value::Null) => Ok(Self::empty()),
            Some(Value::Object(fields)) => Ok(Self(fields.clone())),
            Some(other) => Err(ActivityError::InvalidSubmission(format!(
                "must be an object, got {}",
                json_type_name(other)
            ))),
        }
    }

    /// Read an integer field, substituting `default` when the field is absent
    ///
    /// # Errors
    /// Returns [`ActivityError::Validation`] when the field is present but
    /// not a JSON number.
    pub fn int_or(&self, field: &str, default: i64) -> ActivityResult<i64> {
        match self.0.get(field) {
            None => Ok(default),
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .ok_or_else(|| ActivityError::validation(field, "number out of range")),
            Some(other) => Err(ActivityError::validation(
                field,
                format!("expected a number, got {}", json_type_name(other)),
            )),
        }
    }

    /// Number of fields in the record
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Submission {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
