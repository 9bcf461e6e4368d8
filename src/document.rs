//! Helpers over the generic document tree.
//!
//! Documents are plain `serde_json::Value` trees: maps with string keys,
//! sequences, numbers and strings. Nothing here knows about geometry types.

use serde_json::{Map, Number, Value};

use crate::errors::GeometryError;

/// The fields of a map node
pub type Fields = Map<String, Value>;

/// Short description of a value's type, for error messages
pub fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a map",
    }
}

/// Borrow a node as a map
pub fn as_fields(node: &Value) -> Result<&Fields, GeometryError> {
    node.as_object().ok_or(GeometryError::NotAMap {
        got: describe(node),
    })
}

/// Fetch a required field
pub fn require<'a>(fields: &'a Fields, field: &'static str) -> Result<&'a Value, GeometryError> {
    fields.get(field).ok_or(GeometryError::MissingField { field })
}

/// Read a number as `f32`
pub fn number(value: &Value, field: &'static str) -> Result<f32, GeometryError> {
    let n = value.as_f64().ok_or(GeometryError::InvalidField {
        field,
        expected: "a number",
    })?;
    narrow(n, field)
}

/// Narrow a document number to `f32`.
///
/// Values outside the `f32` range would become infinite and could not be
/// written back, so they are rejected.
pub fn narrow(n: f64, field: &'static str) -> Result<f32, GeometryError> {
    let narrowed = n as f32;
    if narrowed.is_finite() {
        Ok(narrowed)
    } else {
        Err(GeometryError::InvalidField {
            field,
            expected: "a finite 32-bit number",
        })
    }
}

/// Copy every field whose key is not in `reserved`
pub fn extras(fields: &Fields, reserved: &[&str]) -> Fields {
    fields
        .iter()
        .filter(|(key, _)| !reserved.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Render an `f32` as a document number.
///
/// Non-finite values have no document form and become `null`.
pub fn float(value: f32) -> Value {
    Number::from_f64(f64::from(value))
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Render a slice of `f32` as a sequence of numbers
pub fn floats(values: &[f32]) -> Value {
    Value::Array(values.iter().copied().map(float).collect())
}
