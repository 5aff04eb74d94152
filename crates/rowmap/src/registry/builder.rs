use super::{ModelRegistry, Shared};
use crate::{Model, Validator};

use indexmap::IndexMap;
use rowmap_core::{
    schema::{self, ModelDecl},
    Driver, Error, Result,
};

use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    /// Declarations by model name, in registration order
    models: IndexMap<String, Registration>,

    /// First model registered twice with different declarations
    conflict: Option<String>,

    /// Schema builder
    core: schema::Builder,
}

struct Registration {
    decl: ModelDecl,
    validator: Option<Arc<dyn Validator>>,
}

impl Builder {
    /// Registers a model.
    ///
    /// Registering the same declaration again is a no-op. Registering a
    /// different declaration under an existing name makes [`build`] fail
    /// with a model conflict error.
    ///
    /// [`build`]: Builder::build
    pub fn register(&mut self, decl: ModelDecl) -> &mut Self {
        self.add(decl, None)
    }

    /// Registers a model whose records are checked by `validator` before
    /// they are written.
    pub fn register_validated(&mut self, decl: ModelDecl, validator: impl Validator) -> &mut Self {
        self.add(decl, Some(Arc::new(validator)))
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.core.table_name_prefix(prefix);
        self
    }

    fn add(&mut self, decl: ModelDecl, validator: Option<Arc<dyn Validator>>) -> &mut Self {
        match self.models.get_mut(&decl.name) {
            Some(existing) if existing.decl == decl => {
                if validator.is_some() {
                    existing.validator = validator;
                }
            }
            Some(_) => {
                tracing::warn!(model = %decl.name, "model registered twice with different declarations");
                self.conflict.get_or_insert(decl.name);
            }
            None => {
                self.models
                    .insert(decl.name.clone(), Registration { decl, validator });
            }
        }

        self
    }

    /// Validates every registered declaration against `driver` and builds
    /// the registry.
    pub fn build(&mut self, driver: impl Driver) -> Result<ModelRegistry> {
        if let Some(name) = &self.conflict {
            return Err(Error::model_conflict(name));
        }

        let mut models = IndexMap::with_capacity(self.models.len());

        for (name, registration) in &self.models {
            let metadata = self.core.build(&registration.decl, &driver)?;

            tracing::debug!(
                model = %name,
                table = %metadata.table,
                fields = metadata.fields.len(),
                primary_key = metadata.primary_key_name(),
                "registered model"
            );

            models.insert(
                name.clone(),
                Model::new(metadata, registration.validator.clone()),
            );
        }

        Ok(ModelRegistry {
            shared: Arc::new(Shared {
                driver: Arc::new(driver),
                models,
            }),
        })
    }
}
