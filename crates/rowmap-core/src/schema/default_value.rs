use crate::stmt::Value;

use serde::{Deserialize, Deserializer};
use std::{fmt, sync::Arc};

/// The value a field takes when a record is created without one.
#[derive(Clone)]
pub enum DefaultValue {
    /// A concrete value.
    Value(Value),

    /// The current time, resolved on every write. Only valid on timestamp
    /// fields.
    Now,

    /// A zero-argument producer called each time the default is resolved.
    Producer(Arc<dyn Fn() -> Value + Send + Sync>),
}

impl DefaultValue {
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn producer(f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self::Producer(Arc::new(f))
    }

    pub fn is_now(&self) -> bool {
        matches!(self, Self::Now)
    }

    /// Produces a concrete value.
    pub fn resolve(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Now => Value::now(),
            Self::Producer(f) => f(),
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Now => f.write_str("Now"),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

impl PartialEq for DefaultValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Now, Self::Now) => true,
            (Self::Producer(a), Self::Producer(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Declarations loaded from JSON spell the current-time sentinel as the
/// string `"now"`, so JSON cannot default a string field to the literal text
/// `now`; declare that default in code with [`FieldDecl::default_value`]
/// instead. Arrays and objects become [`Value::Json`].
///
/// [`FieldDecl::default_value`]: super::FieldDecl::default_value
impl<'de> Deserialize<'de> for DefaultValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde_json::Value as Json;

        Ok(match Json::deserialize(deserializer)? {
            Json::String(s) if s == "now" => Self::Now,
            Json::Null => Self::Value(Value::Null),
            Json::Bool(v) => Self::Value(Value::Bool(v)),
            Json::Number(n) => match n.as_i64() {
                Some(v) => Self::Value(Value::I64(v)),
                None => Self::Value(Value::F64(n.as_f64().unwrap_or(f64::NAN))),
            },
            Json::String(s) => Self::Value(Value::String(s)),
            json => Self::Value(Value::Json(json)),
        })
    }
}
