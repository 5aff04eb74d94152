use crate::{Model, ModelRegistry, Updated};

use rowmap_core::{
    schema::{Field, FieldType},
    stmt::{Value, Values},
    Error, Result,
};

use std::fmt;

/// An instance of a model.
///
/// Each field is either undefined or holds a value (possibly
/// [`Value::Null`]). A record whose primary key holds a non-null value is
/// considered persisted; otherwise it is transient.
#[derive(Clone)]
pub struct Record {
    model: Model,

    /// One slot per field, in field order. `None` is undefined.
    values: Vec<Option<Value>>,

    /// Fields assigned by the caller since the record was last written.
    explicit: Vec<bool>,
}

impl Record {
    /// Builds a record from `values`.
    ///
    /// Entries naming fields the model does not declare are ignored. When
    /// `assign_default` is set, fields missing from `values` take their
    /// resolved default; otherwise they stay undefined.
    pub fn new(model: &Model, mut values: Values, assign_default: bool) -> Self {
        let fields = &model.metadata().fields;
        let mut slots = Vec::with_capacity(fields.len());
        let mut explicit = Vec::with_capacity(fields.len());

        for field in fields {
            match values.remove(&field.name) {
                Some(value) => {
                    slots.push(Some(value));
                    explicit.push(assign_default);
                }
                None => {
                    slots.push(if assign_default {
                        field.resolve_default()
                    } else {
                        None
                    });
                    explicit.push(false);
                }
            }
        }

        Self {
            model: model.clone(),
            values: slots,
            explicit,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Returns the field's value, or `None` when the field is undefined or
    /// not declared by the model.
    pub fn get(&self, field: &str) -> Option<&Value> {
        let index = self.index_of(field)?;
        self.values[index].as_ref()
    }

    /// Returns the field's value converted to `T`, or `None` when the field
    /// is undefined or null.
    pub fn get_as<T>(&self, field: &str) -> Result<Option<T>>
    where
        T: TryFrom<Value, Error = Error>,
    {
        match self.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::try_from(value.clone()).map(Some),
        }
    }

    pub fn is_defined(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Assigns a field. Returns `false` if the model does not declare it.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> bool {
        let Some(index) = self.index_of(field) else {
            return false;
        };

        self.values[index] = Some(value.into());
        self.explicit[index] = true;
        true
    }

    /// Makes a field undefined, so writes leave its column alone.
    pub fn unset(&mut self, field: &str) -> Option<Value> {
        let index = self.index_of(field)?;
        self.explicit[index] = false;
        self.values[index].take()
    }

    /// The primary key value, if the model has a primary key and the record
    /// holds a non-null value for it.
    pub fn primary_key(&self) -> Option<&Value> {
        let index = self.model.metadata().primary_key?;
        self.values[index].as_ref().filter(|value| !value.is_null())
    }

    /// Returns `true` once the record knows its primary key.
    pub fn is_persisted(&self) -> bool {
        self.primary_key().is_some()
    }

    /// Defined fields and their values, in field order.
    pub fn values(&self) -> Values {
        self.defined().map(|(field, value)| (&field.name, value.clone())).collect()
    }

    /// Inserts the record.
    ///
    /// Returns `Ok(false)` when `validate` is set and the model's validator
    /// rejects the record, or when the database reports no inserted row. On
    /// success a database-assigned integer primary key and an auto-filled
    /// update timestamp are written back into the record.
    pub async fn persist(&mut self, db: &ModelRegistry, validate: bool) -> Result<bool> {
        if validate && !self.run_validator(false) {
            return Ok(false);
        }

        let metadata = self.model.metadata();
        let mut values = Values::new();
        let mut key_sent = false;

        for (field, value) in self.defined() {
            if Some(field.index) == metadata.primary_key {
                if field.auto_increment || value.is_null() {
                    continue;
                }
                key_sent = true;
            }
            values.insert(&field.name, value.clone());
        }

        let mut injected = None;

        if let Some(field) = metadata.auto_update_field() {
            if self.values[field.index].is_none() {
                let value = field.resolve_default().unwrap_or_else(Value::now);
                values.insert(&field.name, value.clone());
                injected = Some((field.index, value));
            }
        }

        let stmt = self.model.query().insert(&values);
        let res = db.exec(&stmt).await?;

        if res.affected_rows == 0 {
            return Ok(false);
        }

        // An integer key left to the database is filled from the insert id.
        if let (Some(pk), Some(id)) = (metadata.primary_key(), res.insert_id) {
            if !key_sent && pk.ty == FieldType::Integer {
                self.values[pk.index] = Some(Value::I64(id));
            }
        }

        if let Some((index, value)) = injected {
            self.values[index] = Some(value);
        }

        self.clear_explicit();
        Ok(true)
    }

    /// Writes the record's defined fields back to its row.
    ///
    /// Fails with a missing primary key error, before any statement is
    /// issued, when the record has no primary key value. The auto-update
    /// field is refreshed unless it was assigned since the record was last
    /// written; the new time is stored in the record and returned.
    pub async fn update(&mut self, db: &ModelRegistry, validate: bool) -> Result<Updated> {
        let (pk, key) = self.expect_key("update")?;

        if validate && !self.run_validator(true) {
            return Ok(Updated::none());
        }

        let metadata = self.model.metadata();
        let auto_update = metadata.auto_update;
        let mut values = Values::new();

        for (field, value) in self.defined() {
            if Some(field.index) == auto_update && !self.explicit[field.index] {
                continue;
            }
            values.insert(&field.name, value.clone());
        }

        let condition = self.model.key_condition(&pk.name, &key);
        let Some(update) = self.model.query().update(&condition, &values)? else {
            return Ok(Updated::none());
        };

        let res = db.exec(&update.stmt).await?;

        if res.affected_rows == 0 {
            return Ok(Updated::none());
        }

        let mut modify_time = None;

        if let (Some(index), Some(value)) = (auto_update, update.modify_time) {
            modify_time = value.as_timestamp().copied();
            self.values[index] = Some(value);
        }

        self.clear_explicit();

        Ok(Updated {
            updated: true,
            modify_time,
        })
    }

    /// Deletes the record's row. Returns `true` if a row was deleted.
    pub async fn remove(&self, db: &ModelRegistry) -> Result<bool> {
        let (pk, key) = self.expect_key("remove")?;
        let condition = self.model.key_condition(&pk.name, &key);

        Ok(self.model.remove(db, condition).await? != 0)
    }

    fn index_of(&self, field: &str) -> Option<usize> {
        self.model.metadata().field_types.get_index_of(field)
    }

    fn defined(&self) -> impl Iterator<Item = (&Field, &Value)> + '_ {
        self.model
            .metadata()
            .fields
            .iter()
            .zip(&self.values)
            .filter_map(|(field, value)| Some((field, value.as_ref()?)))
    }

    fn run_validator(&self, is_update: bool) -> bool {
        let Some(validator) = self.model.validator() else {
            return true;
        };

        let valid = validator.validate(self, is_update);
        if !valid {
            tracing::debug!(model = self.model.name(), is_update, "validation rejected record");
        }
        valid
    }

    /// The primary key field and value, or the error an instance operation
    /// reports without one.
    fn expect_key(&self, operation: &'static str) -> Result<(&Field, Value)> {
        let pk = self.model.metadata().expect_primary_key()?;

        match self.primary_key() {
            Some(key) => Ok((pk, key.clone())),
            None => {
                tracing::warn!(model = self.model.name(), operation, "record has no primary key value");
                Err(Error::missing_primary_key(self.model.name(), operation))
            }
        }
    }

    fn clear_explicit(&mut self) {
        self.explicit.iter_mut().for_each(|explicit| *explicit = false);
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.model.name());
        for (field, value) in self.model.metadata().fields.iter().zip(&self.values) {
            match value {
                Some(value) => s.field(&field.name, value),
                None => s.field(&field.name, &format_args!("undefined")),
            };
        }
        s.finish()
    }
}
