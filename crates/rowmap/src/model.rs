use crate::{ModelRegistry, Record, Updated, Validator};

use rowmap_core::{
    driver::Row,
    schema::ModelMetadata,
    stmt::{Condition, FieldMap, Projection, QueryOptions, Value, Values},
    Result,
};
use rowmap_sql::Query;

use std::{fmt, sync::Arc};

/// Handle to a registered model.
///
/// Carries the model's metadata and validator. Operations that reach the
/// database take the [`ModelRegistry`] the model was registered with.
#[derive(Clone)]
pub struct Model {
    inner: Arc<ModelInner>,
}

struct ModelInner {
    metadata: ModelMetadata,
    validator: Option<Arc<dyn Validator>>,
}

impl Model {
    pub(crate) fn new(metadata: ModelMetadata, validator: Option<Arc<dyn Validator>>) -> Self {
        Self {
            inner: Arc::new(ModelInner {
                metadata,
                validator,
            }),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.metadata.name()
    }

    pub fn table(&self) -> &str {
        &self.inner.metadata.table
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.inner.metadata
    }

    pub(crate) fn validator(&self) -> Option<&dyn Validator> {
        self.inner.validator.as_deref()
    }

    pub(crate) fn query(&self) -> Query<'_> {
        Query::new(&self.inner.metadata)
    }

    /// Creates a transient record. Fields missing from `values` take their
    /// default.
    pub fn create(&self, values: Values) -> Record {
        Record::new(self, values, true)
    }

    /// Creates a record without applying defaults. Fields missing from
    /// `values` stay undefined.
    pub fn hydrate(&self, values: Values) -> Record {
        Record::new(self, values, false)
    }

    /// Returns every record matching `condition`.
    pub async fn all(
        &self,
        db: &ModelRegistry,
        condition: impl Into<Condition>,
        options: QueryOptions,
    ) -> Result<Vec<Record>> {
        let stmt = self.query().select(&condition.into(), &options)?;
        let rows = db.query(&stmt).await?;

        rows.into_iter().map(|row| self.load(row)).collect()
    }

    /// Returns the first record matching `condition`.
    ///
    /// The query is limited to one row unless `options` sets a limit.
    pub async fn one(
        &self,
        db: &ModelRegistry,
        condition: impl Into<Condition>,
        mut options: QueryOptions,
    ) -> Result<Option<Record>> {
        options.limit.get_or_insert(1);

        let mut records = self.all(db, condition, options).await?;

        Ok(if records.is_empty() {
            None
        } else {
            Some(records.swap_remove(0))
        })
    }

    /// Checks whether a record matching `condition` exists, fetching only
    /// its primary key.
    pub async fn touch(
        &self,
        db: &ModelRegistry,
        condition: impl Into<Condition>,
    ) -> Result<Option<Record>> {
        let pk = self.inner.metadata.expect_primary_key()?;
        let options = QueryOptions {
            fields: Projection::Fields(vec![pk.name.clone()]),
            ..QueryOptions::default()
        };

        self.one(db, condition, options).await
    }

    /// Counts the records matching `condition`.
    pub async fn count(
        &self,
        db: &ModelRegistry,
        condition: impl Into<Condition>,
        options: QueryOptions,
    ) -> Result<u64> {
        let stmt = self.query().count(&condition.into(), &options)?;
        let rows = db.query(&stmt).await?;

        let Some(mut row) = rows.into_iter().next() else {
            return Ok(0);
        };

        match row.take("N") {
            Some(Value::Null) | None => Ok(0),
            Some(value) => u64::try_from(value),
        }
    }

    /// Deletes the records matching `condition` and returns how many were
    /// deleted.
    pub async fn remove(&self, db: &ModelRegistry, condition: impl Into<Condition>) -> Result<u64> {
        let stmt = self.query().delete(&condition.into())?;
        Ok(db.exec(&stmt).await?.affected_rows)
    }

    /// Assigns `values` to the records matching `condition`.
    ///
    /// Unless `values` sets it, the auto-update field is assigned its
    /// default.
    pub async fn update(
        &self,
        db: &ModelRegistry,
        condition: impl Into<Condition>,
        values: Values,
    ) -> Result<Updated> {
        let Some(update) = self.query().update(&condition.into(), &values)? else {
            return Ok(Updated::none());
        };

        let res = db.exec(&update.stmt).await?;
        let updated = res.affected_rows > 0;

        Ok(Updated {
            updated,
            modify_time: update
                .modify_time
                .filter(|_| updated)
                .and_then(|value| value.as_timestamp().copied()),
        })
    }

    pub async fn create_table(&self, db: &ModelRegistry) -> Result<()> {
        let columns = db.driver().generate_create_table(&self.inner.metadata)?;
        db.exec(&self.query().create_table(columns)).await?;
        Ok(())
    }

    pub async fn drop_table(&self, db: &ModelRegistry) -> Result<()> {
        db.exec(&self.query().drop_table()).await?;
        Ok(())
    }

    /// Condition matching a record by its primary key value.
    pub(crate) fn key_condition(&self, name: &str, value: &Value) -> Condition {
        Condition::FieldMap(FieldMap::new().eq(name, value.clone()))
    }

    /// Hydrates a result row. Columns are decoded with their field's type;
    /// columns the model does not declare are dropped.
    fn load(&self, row: Row) -> Result<Record> {
        let mut values = Values::new();

        for (column, value) in row {
            if let Some(field) = self.inner.metadata.field_by_name(&column) {
                values.insert(column, field.ty.load(value)?);
            }
        }

        Ok(self.hydrate(values))
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("metadata", &self.inner.metadata)
            .field("validated", &self.inner.validator.is_some())
            .finish()
    }
}
