use crate::ExecLog;

use rowmap::{
    driver::{Driver, ExecResult, FieldInitError, Row},
    ModelMetadata, Result, Value,
};
use rowmap_core::{async_trait, schema::Field};

/// A driver wrapper that records every statement it is handed
#[derive(Debug)]
pub struct LoggingDriver<D> {
    /// The underlying driver that actually executes statements
    inner: D,

    log: ExecLog,
}

impl<D: Driver> LoggingDriver<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            log: ExecLog::default(),
        }
    }

    /// Get a handle to the statement log
    pub fn exec_log(&self) -> ExecLog {
        self.log.clone()
    }
}

#[async_trait]
impl<D: Driver> Driver for LoggingDriver<D> {
    fn init_field(&self, field: &mut Field) -> std::result::Result<(), FieldInitError> {
        self.inner.init_field(field)
    }

    fn generate_create_table(&self, model: &ModelMetadata) -> Result<String> {
        self.inner.generate_create_table(model)
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> Result<ExecResult> {
        self.log.push(sql, params);
        self.inner.execute(sql, params).await
    }

    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        self.log.push(sql, params);
        self.inner.query(sql, params).await
    }
}
