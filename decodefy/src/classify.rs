//! Classify JSON values into Dart field types.

use serde_json::{Map, Value};

use crate::model::{DartType, FieldDef, FieldKind};
use crate::naming::capitalize;

/// Runtime kind of a JSON value, with integers and floats told apart.
#[derive(Debug, Clone, Copy)]
pub enum JsonKind<'a> {
    Null,
    Bool,
    Int,
    Float,
    String,
    Object(&'a Map<String, Value>),
    Array(&'a [Value]),
}

impl<'a> JsonKind<'a> {
    #[must_use]
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(number) if number.is_i64() || number.is_u64() => Self::Int,
            Value::Number(_) => Self::Float,
            Value::String(_) => Self::String,
            Value::Object(map) => Self::Object(map),
            Value::Array(items) => Self::Array(items),
        }
    }
}

/// Dart type for `value` found under `key`.
///
/// Arrays are typed by their first element only; an empty array is
/// `List<dynamic>`. Strings, nulls, and anything unrecognized fall back to
/// `String`.
#[must_use]
pub fn classify_type(key: &str, value: &Value) -> DartType {
    match JsonKind::of(value) {
        JsonKind::Int => DartType::Int,
        JsonKind::Float => DartType::Double,
        JsonKind::Bool => DartType::Bool,
        JsonKind::Object(_) => DartType::Class(capitalize(key)),
        JsonKind::Array(items) => match items.first() {
            None => DartType::DynamicList,
            Some(first) => DartType::List(Box::new(classify_type(key, first))),
        },
        JsonKind::String | JsonKind::Null => DartType::String,
    }
}

/// Read/write strategy for `value` found under `key`.
#[must_use]
pub fn classify_kind(key: &str, value: &Value) -> FieldKind {
    match JsonKind::of(value) {
        JsonKind::String => FieldKind::Scalar { default: "\"\"" },
        JsonKind::Int => FieldKind::Scalar { default: "0" },
        JsonKind::Float => FieldKind::Scalar { default: "0.0" },
        JsonKind::Bool => FieldKind::Scalar { default: "false" },
        JsonKind::Object(_) => FieldKind::Object {
            class_name: capitalize(key),
        },
        JsonKind::Array(items) => match items.first().map(JsonKind::of) {
            Some(JsonKind::Object(_)) => FieldKind::ObjectList {
                class_name: capitalize(key),
            },
            Some(_) | None => FieldKind::Raw,
        },
        JsonKind::Null => FieldKind::Raw,
    }
}

/// Field definition for one key/value pair of a JSON object.
#[must_use]
pub fn classify_field(key: &str, value: &Value) -> FieldDef {
    FieldDef {
        name: key.to_string(),
        ty: classify_type(key, value),
        kind: classify_kind(key, value),
    }
}

/// The object a nested class is generated from: the value itself, or the
/// first element of an array.
#[must_use]
pub fn nested_object(value: &Value) -> Option<&Map<String, Value>> {
    match JsonKind::of(value) {
        JsonKind::Object(map) => Some(map),
        JsonKind::Array(items) => items.first().and_then(Value::as_object),
        JsonKind::Null
        | JsonKind::Bool
        | JsonKind::Int
        | JsonKind::Float
        | JsonKind::String => None,
    }
}
