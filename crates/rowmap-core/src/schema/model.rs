use super::{Field, FieldType, Name};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Authoritative, validated metadata for one model.
///
/// Built once by [`Builder`](super::Builder) and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelMetadata {
    /// The model's type name.
    pub name: Name,

    /// Table the model's records are stored in.
    pub table: String,

    /// Fields in declaration order.
    pub fields: Vec<Field>,

    /// Field name to type, in declaration order.
    pub field_types: IndexMap<String, FieldType>,

    /// Index of the primary key field. `None` for a keyless model.
    pub primary_key: Option<usize>,

    /// Index of the auto-updating timestamp field.
    pub auto_update: Option<usize>,
}

impl ModelMetadata {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn field(&self, index: usize) -> &Field {
        &self.fields[index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        let index = self.field_types.get_index_of(name)?;
        Some(&self.fields[index])
    }

    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.field_types.get(name).copied()
    }

    pub fn primary_key(&self) -> Option<&Field> {
        self.primary_key.map(|index| &self.fields[index])
    }

    /// Name of the primary key field, or the empty string for a keyless
    /// model.
    pub fn primary_key_name(&self) -> &str {
        self.primary_key().map(Field::name).unwrap_or("")
    }

    /// Returns the primary key field or fails with
    /// [`Error::no_primary_key_defined`].
    pub fn expect_primary_key(&self) -> Result<&Field> {
        self.primary_key()
            .ok_or_else(|| Error::no_primary_key_defined(self.name()))
    }

    pub fn auto_update_field(&self) -> Option<&Field> {
        self.auto_update.map(|index| &self.fields[index])
    }
}
