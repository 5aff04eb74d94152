use crate::{
    predicate,
    stmt::{Assignment, Delete, Insert, Limit, Returning, Select, Statement, Update},
    Predicate,
};

use rowmap_core::{
    schema::ModelMetadata,
    stmt::{Condition, Projection, QueryOptions, Value, Values},
    Error, Result,
};

/// Builds the statements for one model.
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    model: &'a ModelMetadata,
}

/// An UPDATE together with the auto-update value it injected, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    pub stmt: Statement,

    /// Value bound to the model's auto-update field when the assignments
    /// did not set it.
    pub modify_time: Option<Value>,
}

impl<'a> Query<'a> {
    pub fn new(model: &'a ModelMetadata) -> Self {
        Self { model }
    }

    /// `SELECT <projection> FROM <table> [WHERE ...] [ORDER BY ...] [LIMIT ...]`
    pub fn select(&self, condition: &Condition, options: &QueryOptions) -> Result<Statement> {
        let returning = match &options.fields {
            Projection::All => Returning::Star,
            Projection::Raw(raw) => Returning::Raw(raw.clone()),
            Projection::Fields(fields) => Returning::Columns(fields.clone()),
        };

        self.select_returning(returning, condition, options)
    }

    /// `SELECT COUNT(<expr>) AS N FROM <table> ...`
    pub fn count(&self, condition: &Condition, options: &QueryOptions) -> Result<Statement> {
        let returning = Returning::Count(options.count.clone());
        self.select_returning(returning, condition, options)
    }

    fn select_returning(
        &self,
        returning: Returning,
        condition: &Condition,
        options: &QueryOptions,
    ) -> Result<Statement> {
        let limit = options.limit.map(|limit| Limit {
            limit,
            offset: options.offset.unwrap_or(0),
        });

        Ok(Select {
            table: self.model.table.clone(),
            returning,
            filter: predicate::compile(condition, self.model)?,
            order_by: options.order_by.clone(),
            limit,
        }
        .into())
    }

    /// Inserts one row. Columns follow the model's field order; entries for
    /// undeclared fields are skipped.
    pub fn insert(&self, values: &Values) -> Statement {
        let mut insert = Insert::new(&self.model.table);

        for field in &self.model.fields {
            if let Some(value) = values.get(&field.name) {
                insert.push(&field.name, field.ty.to_storage(value.clone()));
            }
        }

        insert.into()
    }

    /// Updates the rows matching `condition`.
    ///
    /// The primary key and undeclared fields are never assigned. When the
    /// model has an auto-update field that `assignments` does not set, it is
    /// assigned its resolved default and the value is returned alongside the
    /// statement. Returns `None` when there is nothing to assign.
    pub fn update(
        &self,
        condition: &Condition,
        assignments: &Values,
    ) -> Result<Option<UpdateStatement>> {
        let filter = self.mutation_filter(condition, "UPDATE")?;

        let mut set = vec![];

        for field in &self.model.fields {
            if Some(field.index) == self.model.primary_key {
                continue;
            }

            if let Some(value) = assignments.get(&field.name) {
                set.push(Assignment {
                    column: field.name.clone(),
                    value: field.ty.to_storage(value.clone()),
                });
            }
        }

        let mut modify_time = None;

        if let Some(field) = self.model.auto_update_field() {
            if !assignments.contains(&field.name) {
                let value = field.resolve_default().unwrap_or_else(Value::now);

                set.push(Assignment {
                    column: field.name.clone(),
                    value: value.clone(),
                });
                modify_time = Some(value);
            }
        }

        if set.is_empty() {
            return Ok(None);
        }

        Ok(Some(UpdateStatement {
            stmt: Update {
                table: self.model.table.clone(),
                assignments: set,
                filter,
            }
            .into(),
            modify_time,
        }))
    }

    /// Deletes the rows matching `condition`.
    pub fn delete(&self, condition: &Condition) -> Result<Statement> {
        Ok(Delete {
            table: self.model.table.clone(),
            filter: self.mutation_filter(condition, "DELETE")?,
        }
        .into())
    }

    pub fn drop_table(&self) -> Statement {
        Statement::drop_table_if_exists(&self.model.table)
    }

    /// Wraps the driver-generated column list in a CREATE TABLE statement.
    pub fn create_table(&self, columns: impl Into<String>) -> Statement {
        Statement::create_table(&self.model.table, columns)
    }

    /// Compiles the filter of an UPDATE or DELETE, refusing to touch every
    /// row of the table.
    fn mutation_filter(&self, condition: &Condition, statement: &'static str) -> Result<Predicate> {
        let filter = predicate::compile(condition, self.model)?;

        if filter.is_empty() {
            return Err(Error::unfiltered_mutation(&self.model.table, statement));
        }

        Ok(filter)
    }
}
