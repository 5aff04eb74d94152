use super::DefaultValue;
use crate::{stmt::Value, Result};

use serde::Deserialize;

/// A model declaration as written by the application: a type name, an
/// optional table name and the raw field list.
///
/// Declarations can be built in code or loaded from JSON:
///
/// ```
/// use rowmap_core::schema::ModelDecl;
///
/// let decl = ModelDecl::from_json(r#"{
///     "name": "User",
///     "fields": [
///         { "name": "id", "type": "integer", "primaryKey": true, "autoIncrement": true },
///         { "name": "name", "type": "string" },
///         { "name": "active", "type": "boolean", "default": true }
///     ]
/// }"#).unwrap();
///
/// assert_eq!(decl.fields.len(), 3);
/// ```
///
/// In JSON, a `"default"` of `"now"` always means the current time and is only
/// accepted on timestamp fields. A string field defaulting to the text `now`
/// must use [`FieldDecl::default_value`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDecl {
    pub name: String,

    /// Table name. Defaults to the snake_case form of `name`.
    #[serde(default)]
    pub table: Option<String>,

    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

/// A raw, unvalidated field declaration.
///
/// `name` and `ty` are optional here so that a declaration missing either can
/// be reported as such instead of failing to parse.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldDecl {
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub ty: Option<String>,

    /// Overrides the storage type the driver would pick for `ty`.
    pub db_type: Option<String>,

    #[serde(alias = "isPrimaryKey")]
    pub primary_key: bool,

    pub auto_increment: bool,

    pub auto_update: bool,

    #[serde(alias = "default")]
    pub default_value: Option<DefaultValue>,
}

impl ModelDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            fields: vec![],
        }
    }

    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: Some(ty.into()),
            ..Self::default()
        }
    }

    pub fn db_type(mut self, db_type: impl Into<String>) -> Self {
        self.db_type = Some(db_type.into());
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn auto_update(mut self) -> Self {
        self.auto_update = true;
        self
    }

    /// Defaults the field to `value`. Strings are taken literally, so
    /// `default_value("now")` is the text `now`, not the current time.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(DefaultValue::Value(value.into()));
        self
    }

    /// Defaults the field to the current time.
    pub fn default_now(mut self) -> Self {
        self.default_value = Some(DefaultValue::Now);
        self
    }

    pub fn default_with(mut self, f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        self.default_value = Some(DefaultValue::producer(f));
        self
    }
}
