use crate::{stmt::Value, Error, Result};

use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

/// Application-level type of a field.
///
/// The set is closed. How each type is physically stored is decided by the
/// driver (see [`Driver::init_field`](crate::Driver::init_field)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
    Json,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Timestamp => "timestamp",
            FieldType::Json => "json",
        }
    }

    pub fn is_boolean(self) -> bool {
        matches!(self, FieldType::Boolean)
    }

    pub fn is_timestamp(self) -> bool {
        matches!(self, FieldType::Timestamp)
    }

    /// Coerces a value used in a condition on a field of this type.
    ///
    /// Boolean fields compare against their storage representation, so any
    /// value becomes `1` or `0` by truthiness. Other types pass through.
    pub fn coerce_condition(self, value: Value) -> Value {
        match self {
            FieldType::Boolean => Value::I64(value.is_truthy() as i64),
            _ => value,
        }
    }

    /// Encodes a value written to a column of this type.
    ///
    /// Non-null values written to a boolean column are stored as `1` or `0`
    /// by truthiness. Nulls are kept.
    pub fn to_storage(self, value: Value) -> Value {
        match (self, value) {
            (_, Value::Null) => Value::Null,
            (FieldType::Boolean, value) => Value::I64(value.is_truthy() as i64),
            (_, Value::Bool(v)) => Value::I64(v as i64),
            (_, value) => value,
        }
    }

    /// Normalizes a default value for this type. Returns `None` when the value
    /// cannot be represented.
    pub fn normalize(self, value: &Value) -> Option<Value> {
        use Value::*;

        match (self, value) {
            (_, Null) => Some(Null),
            (FieldType::String, String(_))
            | (FieldType::Integer, I64(_))
            | (FieldType::Float, F64(_))
            | (FieldType::Boolean, Bool(_))
            | (FieldType::Timestamp, Timestamp(_))
            | (FieldType::Json, Json(_)) => Some(value.clone()),
            (FieldType::Float, I64(v)) => Some(F64(*v as f64)),
            (FieldType::Timestamp, String(v)) => parse_timestamp(v).ok().map(Timestamp),
            (FieldType::Timestamp, I64(v)) => Value::timestamp_millis(*v).ok(),
            (FieldType::Json, Bool(v)) => Some(Json((*v).into())),
            (FieldType::Json, I64(v)) => Some(Json((*v).into())),
            (FieldType::Json, F64(v)) => Some(Json((*v).into())),
            (FieldType::Json, String(v)) => Some(Json(v.clone().into())),
            (FieldType::Json, Timestamp(v)) => Some(Json(v.to_rfc3339().into())),
            _ => None,
        }
    }

    /// Decodes a value read back from storage into this type.
    ///
    /// Backends without native booleans, timestamps or JSON hand back their
    /// storage encoding (`1`/`0`, epoch milliseconds or RFC 3339 text, JSON
    /// text). Values already in the application representation pass
    /// through.
    pub fn load(self, value: Value) -> Result<Value> {
        use Value::*;

        Ok(match (self, value) {
            (_, Null) => Null,
            (FieldType::Boolean, I64(v)) => Bool(v != 0),
            (FieldType::Boolean, Bool(v)) => Bool(v),
            (FieldType::Integer, I64(v)) => I64(v),
            (FieldType::Float, F64(v)) => F64(v),
            (FieldType::Float, I64(v)) => F64(v as f64),
            (FieldType::String, String(v)) => String(v),
            (FieldType::Timestamp, Timestamp(v)) => Timestamp(v),
            (FieldType::Timestamp, I64(v)) => Value::timestamp_millis(v)?,
            (FieldType::Timestamp, String(v)) => match parse_timestamp(&v) {
                Ok(ts) => Timestamp(ts),
                Err(_) => return Err(Error::type_conversion(String(v), "Timestamp")),
            },
            (FieldType::Json, Json(v)) => Json(v),
            (FieldType::Json, String(v)) => Json(serde_json::from_str(&v)?),
            (ty, value) => return Err(Error::type_conversion(value, ty.as_str())),
        })
    }
}

fn parse_timestamp(src: &str) -> core::result::Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(src).map(|ts| ts.with_timezone(&Utc))
}

impl FromStr for FieldType {
    type Err = ();

    /// Parses a declared type name, ignoring ASCII case.
    fn from_str(s: &str) -> core::result::Result<Self, ()> {
        match s.to_ascii_lowercase().as_str() {
            "string" | "str" | "text" => Ok(FieldType::String),
            "integer" | "int" | "bigint" => Ok(FieldType::Integer),
            "float" | "double" | "real" => Ok(FieldType::Float),
            "boolean" | "bool" => Ok(FieldType::Boolean),
            "timestamp" | "datetime" => Ok(FieldType::Timestamp),
            "json" => Ok(FieldType::Json),
            _ => Err(()),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
