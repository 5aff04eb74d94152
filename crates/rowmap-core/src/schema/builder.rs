use super::{
    DefaultValue, Field, FieldDecl, FieldType, ModelDecl, ModelMetadata, Name,
    RESERVED_FIELD_NAMES,
};
use crate::{Driver, Error, Result};

use indexmap::IndexMap;

#[derive(Debug, Default, Clone)]
pub struct Builder {
    /// If set, prefix all table names with this string
    table_name_prefix: Option<String>,
}

/// Tracks state while a single model is built
struct BuildModel<'a> {
    /// Declared model name, used in error messages
    model: &'a str,

    driver: &'a dyn Driver,

    fields: Vec<Field>,

    field_types: IndexMap<String, FieldType>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    /// Validates a declaration and normalizes it into model metadata.
    ///
    /// Fields are checked in declaration order and the first problem found is
    /// returned.
    pub fn build(&self, decl: &ModelDecl, driver: &dyn Driver) -> Result<ModelMetadata> {
        let name = Name::new(&decl.name);

        if name.parts.is_empty() {
            return Err(Error::invalid_model_declaration(
                &decl.name,
                "model name is empty",
            ));
        }

        if decl.table.as_deref().is_some_and(|table| table.trim().is_empty()) {
            return Err(Error::invalid_model_declaration(
                &decl.name,
                "table name is empty",
            ));
        }

        let mut builder = BuildModel {
            model: &decl.name,
            driver,
            fields: Vec::with_capacity(decl.fields.len()),
            field_types: IndexMap::with_capacity(decl.fields.len()),
        };

        for (index, field) in decl.fields.iter().enumerate() {
            builder.build_field(index, field)?;
        }

        let primary_key = builder.fields.iter().position(|field| field.primary_key);
        let auto_update = builder.fields.iter().position(|field| field.auto_update);

        let table = match &decl.table {
            Some(table) => table.clone(),
            None => name.snake_case(),
        };

        let table = match &self.table_name_prefix {
            Some(prefix) => format!("{prefix}{table}"),
            None => table,
        };

        Ok(ModelMetadata {
            name,
            table,
            fields: builder.fields,
            field_types: builder.field_types,
            primary_key,
            auto_update,
        })
    }
}

impl BuildModel<'_> {
    fn build_field(&mut self, index: usize, decl: &FieldDecl) -> Result<()> {
        let position = index + 1;

        let name = match decl.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(Error::invalid_field_declaration(
                    self.model,
                    format!("field #{position} is missing `name`"),
                ))
            }
        };

        let Some(ty) = decl.ty.as_deref() else {
            return Err(Error::invalid_field_declaration(
                self.model,
                format!("field #{position} is missing `type`"),
            ));
        };

        if self.field_types.contains_key(name) {
            return Err(Error::invalid_field_declaration(
                self.model,
                format!("field `{name}` is declared more than once"),
            ));
        }

        if RESERVED_FIELD_NAMES.contains(&name) {
            return Err(Error::reserved_field_name(self.model, name));
        }

        let ty: FieldType = ty
            .parse()
            .map_err(|_| Error::unknown_field_type(self.model, name, ty))?;

        let default_value = match &decl.default_value {
            Some(default_value) => Some(self.verify_default(name, ty, default_value)?),
            None => None,
        };

        let is_now = default_value.as_ref().is_some_and(DefaultValue::is_now);

        if decl.auto_update && !(ty.is_timestamp() && is_now) {
            return Err(Error::invalid_auto_update_field(self.model, name));
        }

        let mut field = Field {
            index,
            name: name.to_string(),
            ty,
            db_type: decl.db_type.clone(),
            storage_ty: String::new(),
            primary_key: decl.primary_key && !self.fields.iter().any(|field| field.primary_key),
            auto_increment: decl.auto_increment,
            auto_update: decl.auto_update,
            default_value,
        };

        self.driver
            .init_field(&mut field)
            .map_err(|err| err.into_error(self.model, name))?;

        tracing::trace!(
            model = self.model,
            field = name,
            storage_ty = %field.storage_ty,
            "initialized field"
        );

        if field.auto_increment && !(field.primary_key && ty == FieldType::Integer) {
            return Err(Error::invalid_field_declaration(
                self.model,
                format!("field `{name}` is auto_increment but not an integer primary key"),
            ));
        }

        self.field_types.insert(field.name.clone(), ty);
        self.fields.push(field);

        Ok(())
    }

    /// Checks that a default is representable for the field's type and
    /// returns it normalized.
    fn verify_default(
        &self,
        name: &str,
        ty: FieldType,
        default_value: &DefaultValue,
    ) -> Result<DefaultValue> {
        let unsupported = || Error::unsupported_default_value(self.model, name);

        match default_value {
            DefaultValue::Now if ty.is_timestamp() => Ok(DefaultValue::Now),
            DefaultValue::Now => Err(unsupported()),
            DefaultValue::Value(value) => ty
                .normalize(value)
                .map(DefaultValue::Value)
                .ok_or_else(unsupported),
            // Producers are sampled once so a mistyped producer fails here
            // instead of on the first insert.
            DefaultValue::Producer(f) => match ty.normalize(&f()) {
                Some(_) => Ok(default_value.clone()),
                None => Err(unsupported()),
            },
        }
    }
}
