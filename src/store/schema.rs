//! Duck-typed record validation
//!
//! A schema is a flat mapping of field name to accepted type. Records are
//! schema-less JSON objects; the typed check happens at insert time, and a
//! mismatch is a rejection rather than a hard failure.

use super::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    /// Any JSON value, including nested objects and arrays.
    Json,
}

impl FieldType {
    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
            FieldType::Float => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Json => true,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Json => "json",
        };
        write!(f, "{name}")
    }
}

/// The set of fields a collection accepts.
///
/// Serialized form is a plain JSON object, e.g.
/// `{"name": "string", "sweetness": "integer"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    pub fields: BTreeMap<String, FieldType>,
}

impl Schema {
    /// Check a record against the schema.
    ///
    /// Unknown fields and type mismatches reject. Declared fields may be
    /// absent or `null` (nullable-with-default semantics).
    pub fn check(&self, record: &Record) -> Result<(), String> {
        for field in record.keys() {
            if !self.fields.contains_key(field) {
                return Err(format!("unexpected field '{field}'"));
            }
        }
        for (field, field_type) in &self.fields {
            match record.get(field) {
                None | Some(Value::Null) => {}
                Some(value) if field_type.accepts(value) => {}
                Some(value) => {
                    return Err(format!(
                        "field '{field}' expects {field_type}, got {}",
                        json_type_name(value)
                    ));
                }
            }
        }
        Ok(())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
