mod model;
pub use model::Model;

mod record;
pub use record::Record;

pub mod registry;
pub use registry::ModelRegistry;

mod updated;
pub use updated::Updated;

mod validator;
pub use validator::Validator;

pub use rowmap_core::{
    driver::{self, Driver},
    schema::{DefaultValue, FieldDecl, FieldType, ModelDecl, ModelMetadata},
    stmt::{Condition, FieldMap, Projection, QueryOptions, Value, Values},
    Error, Result,
};
