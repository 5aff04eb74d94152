use super::{DefaultValue, FieldType};
use crate::stmt::Value;

/// A validated field of a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Position of the field within the model.
    pub index: usize,

    /// Field name, as declared.
    pub name: String,

    /// Application-level type.
    pub ty: FieldType,

    /// Storage type override from the declaration, if any.
    pub db_type: Option<String>,

    /// Storage type resolved by the driver when the field is initialized.
    pub storage_ty: String,

    /// Set on the model's primary key only. A later field declared as a
    /// primary key is an ordinary column.
    pub primary_key: bool,

    pub auto_increment: bool,

    /// Set to the current time whenever a matching row is updated.
    pub auto_update: bool,

    pub default_value: Option<DefaultValue>,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves the field's default. Returns `None` when the field declares
    /// no default.
    pub fn resolve_default(&self) -> Option<Value> {
        self.default_value.as_ref().map(DefaultValue::resolve)
    }
}
