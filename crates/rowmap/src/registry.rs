mod builder;
pub use builder::Builder;

use crate::Model;

use indexmap::IndexMap;
use rowmap_core::{
    driver::{Driver, ExecResult, Row},
    Error, Result,
};
use rowmap_sql::{Serializer, Statement};

use std::sync::Arc;

/// The set of registered models and the driver they are stored through.
///
/// Built once at startup with [`ModelRegistry::builder`] and passed by
/// reference to every operation. Cloning is cheap and shares the same
/// models and driver.
#[derive(Clone)]
pub struct ModelRegistry {
    shared: Arc<Shared>,
}

struct Shared {
    driver: Arc<dyn Driver>,

    /// Models by declared name, in registration order
    models: IndexMap<String, Model>,
}

impl ModelRegistry {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the model registered under `name`.
    pub fn model(&self, name: &str) -> Result<Model> {
        self.shared
            .models
            .get(name)
            .cloned()
            .ok_or_else(|| Error::model_not_found(name))
    }

    /// Registered models, in registration order.
    pub fn models(&self) -> impl Iterator<Item = &Model> + '_ {
        self.shared.models.values()
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.shared.driver
    }

    /// Creates the table of every registered model that does not exist yet.
    pub async fn create_tables(&self) -> Result<()> {
        for model in self.models() {
            model.create_table(self).await?;
        }

        Ok(())
    }

    /// Executes a statement that does not return rows.
    pub(crate) async fn exec(&self, stmt: &Statement) -> Result<ExecResult> {
        let mut params = vec![];
        let sql = Serializer::new().serialize(stmt, &mut params);

        tracing::debug!(sql = %sql, params = params.len(), "execute");
        self.shared.driver.execute(&sql, &params).await
    }

    /// Executes a statement and collects the returned rows.
    pub(crate) async fn query(&self, stmt: &Statement) -> Result<Vec<Row>> {
        let mut params = vec![];
        let sql = Serializer::new().serialize(stmt, &mut params);

        tracing::debug!(sql = %sql, params = params.len(), "query");
        self.shared.driver.query(&sql, &params).await
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("driver", &self.shared.driver)
            .field("models", &self.shared.models.keys().collect::<Vec<_>>())
            .finish()
    }
}
