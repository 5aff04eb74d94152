mod builder;
pub use builder::Builder;

mod decl;
pub use decl::{FieldDecl, ModelDecl};

mod default_value;
pub use default_value::DefaultValue;

mod field;
pub use field::Field;

mod field_type;
pub use field_type::FieldType;

mod model;
pub use model::ModelMetadata;

mod name;
pub use name::Name;

/// Field names that collide with the record construction hook.
pub const RESERVED_FIELD_NAMES: &[&str] = &["constructor"];
