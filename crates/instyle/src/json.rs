//! serde bridge: building style objects from JSON and serializing snapshots.
//!
//! Inline styles frequently arrive as JSON-shaped data (theme files, props
//! from a template context), so [`StyleObject::set_json`] accepts any
//! `serde_json::Value` object and maps its members onto style values:
//!
//! | JSON | style value |
//! |------|-------------|
//! | string | scalar string |
//! | number | scalar number |
//! | `null` | null (dropped at resolution) |
//! | array | list, with JSON nulls as holes |
//! | boolean | its text (`"true"` / `"false"`) |
//! | object | its JSON text |
//!
//! The other direction: [`ResolvedStyles`] serializes as an ordered map, so
//! resolved snapshots can travel through any serde format.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::object::{ResolvedStyles, StyleObject};
use crate::value::{Literal, Scalar, StyleValue};

/// Error for JSON-shaped input that cannot be enumerated as key/value pairs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonStyleError {
    /// `set_json` was given something other than a JSON object.
    #[error("expected a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn json_scalar(value: &Value) -> Option<Scalar> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(Scalar::Str(b.to_string())),
        Value::Number(n) => n.as_f64().map(Scalar::Num),
        Value::String(s) => Some(Scalar::Str(s.clone())),
        // Nested composites keep their JSON text; CSS will reject them,
        // which is the caller's problem, same as any other bad value.
        other => Some(Scalar::Str(other.to_string())),
    }
}

impl From<&Value> for Literal {
    fn from(value: &Value) -> Self {
        match value {
            Value::Array(items) => Literal::List(items.iter().map(json_scalar).collect()),
            other => match json_scalar(other) {
                Some(scalar) => Literal::Scalar(scalar),
                None => Literal::Null,
            },
        }
    }
}

impl From<&Value> for StyleValue {
    fn from(value: &Value) -> Self {
        StyleValue::Literal(value.into())
    }
}

impl StyleObject {
    /// Bulk-assigns entries from a JSON object, like [`set`](Self::set).
    ///
    /// Member order is preserved (this crate turns on `serde_json`'s
    /// `preserve_order` feature). Non-object input is rejected, mirroring
    /// what an enumeration collaborator does with a non-enumerable argument.
    pub fn set_json(&mut self, value: &Value) -> Result<(), JsonStyleError> {
        let map = value.as_object().ok_or(JsonStyleError::NotAnObject {
            kind: json_kind(value),
        })?;
        for (key, member) in map {
            self.insert(key.clone(), StyleValue::from(member));
        }
        Ok(())
    }

    /// JSON form of [`set_variables`](Self::set_variables): every member key
    /// is rewritten to `--<key>` before assignment.
    pub fn set_variables_json(&mut self, value: &Value) -> Result<(), JsonStyleError> {
        let map = value.as_object().ok_or(JsonStyleError::NotAnObject {
            kind: json_kind(value),
        })?;
        for (key, member) in map {
            self.insert(format!("--{}", key), StyleValue::from(member));
        }
        Ok(())
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Str(s) => serializer.serialize_str(s),
            Scalar::Num(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
        }
    }
}

impl Serialize for ResolvedStyles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
