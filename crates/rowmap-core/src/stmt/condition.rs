use super::Value;

use indexmap::IndexMap;

/// Describes which rows an operation targets.
///
/// ```
/// use rowmap_core::stmt::{Condition, FieldMap};
///
/// // `id` = 7
/// let by_key = Condition::from(7);
///
/// // `id` IN (1, 2, 3)
/// let by_keys = Condition::from(vec![1, 2, 3]);
///
/// // `active` = 1 AND `role` IN ('admin', 'owner')
/// let by_fields = Condition::from(FieldMap::new().eq("active", true).is_in("role", ["admin", "owner"]));
/// # let _ = (by_key, by_keys, by_fields);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// The primary key equals this value.
    Scalar(Value),

    /// The primary key is one of these values.
    InSet(Vec<Value>),

    /// Field name to expected value(s). Names the model does not declare are
    /// ignored when the condition is compiled.
    FieldMap(FieldMap),
}

/// Expected value(s) for a single field within a [`FieldMap`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionValue {
    Eq(Value),
    In(Vec<Value>),
}

/// Insertion-ordered field conditions.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldMap {
    entries: IndexMap<String, ConditionValue>,
}

impl Condition {
    /// A condition matching every row.
    pub fn all() -> Self {
        Self::FieldMap(FieldMap::default())
    }

    pub fn key(value: impl Into<Value>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn keys<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::InSet(values.into_iter().map(Into::into).collect())
    }

    /// Returns `true` for an empty field map.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::FieldMap(map) if map.is_empty())
    }
}

impl Default for Condition {
    fn default() -> Self {
        Self::all()
    }
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an equality condition. A later entry for the same field replaces
    /// the earlier one but keeps its position.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, ConditionValue::Eq(value.into()));
        self
    }

    /// Adds a membership condition.
    pub fn is_in<I>(mut self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.insert(field, ConditionValue::In(values));
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: ConditionValue) {
        self.entries.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<&ConditionValue> {
        self.entries.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConditionValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, ConditionValue::Eq(v.into()));
        }
        map
    }
}

impl From<FieldMap> for Condition {
    fn from(value: FieldMap) -> Self {
        Self::FieldMap(value)
    }
}

impl From<Value> for Condition {
    fn from(value: Value) -> Self {
        Self::Scalar(value)
    }
}

macro_rules! impl_scalar_condition {
    ( $($t:ty),+ ) => {
        $(
            impl From<$t> for Condition {
                fn from(value: $t) -> Self {
                    Self::Scalar(value.into())
                }
            }
        )+
    };
}

impl_scalar_condition!(bool, i32, i64, u32, f64, &str, String);

impl<T: Into<Value>> From<Vec<T>> for Condition {
    fn from(values: Vec<T>) -> Self {
        Self::keys(values)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Condition {
    fn from(values: [T; N]) -> Self {
        Self::keys(values)
    }
}
