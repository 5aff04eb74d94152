mod exec_result;
pub use exec_result::ExecResult;

mod field_init;
pub use field_init::FieldInitError;

mod row;
pub use row::Row;

use crate::{
    async_trait,
    schema::{Field, ModelMetadata},
    stmt::Value,
};

use std::fmt::Debug;

#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Resolves the field's storage type and rejects declarations the backend
    /// cannot store. Called once per field while a model is being built.
    fn init_field(&self, field: &mut Field) -> Result<(), FieldInitError>;

    /// Returns the column list of the model's CREATE TABLE statement.
    fn generate_create_table(&self, model: &ModelMetadata) -> crate::Result<String>;

    /// Execute a statement that does not return rows.
    async fn execute(&self, sql: &str, params: &[Value]) -> crate::Result<ExecResult>;

    /// Execute a statement and collect the returned rows.
    async fn query(&self, sql: &str, params: &[Value]) -> crate::Result<Vec<Row>>;
}
