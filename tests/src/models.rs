//! Model declarations shared by the integration tests.

use rowmap::{FieldDecl, ModelDecl};

/// `User { id, name, active = true }`
pub fn user() -> ModelDecl {
    ModelDecl::new("User")
        .field(FieldDecl::new("id", "integer").primary_key().auto_increment())
        .field(FieldDecl::new("name", "string"))
        .field(FieldDecl::new("active", "boolean").default_value(true))
}

/// A post with an auto-update timestamp and a JSON column.
pub fn post() -> ModelDecl {
    ModelDecl::new("Post")
        .field(FieldDecl::new("id", "integer").primary_key().auto_increment())
        .field(FieldDecl::new("title", "string"))
        .field(FieldDecl::new("tags", "json"))
        .field(
            FieldDecl::new("updated_at", "timestamp")
                .default_now()
                .auto_update(),
        )
}

/// Keyed by a caller-supplied string.
pub fn tag() -> ModelDecl {
    ModelDecl::new("Tag")
        .field(FieldDecl::new("slug", "string").primary_key())
        .field(FieldDecl::new("label", "string"))
}

/// A model without a primary key.
pub fn event() -> ModelDecl {
    ModelDecl::new("Event")
        .field(FieldDecl::new("kind", "string"))
        .field(FieldDecl::new("payload", "json"))
}

/// An integer key without `auto_increment`, assigned by the database when
/// omitted.
pub fn item() -> ModelDecl {
    ModelDecl::new("Item")
        .field(FieldDecl::new("id", "integer").primary_key())
        .field(FieldDecl::new("name", "string"))
}

/// Declares two key fields; only the first is the primary key.
pub fn pair() -> ModelDecl {
    ModelDecl::new("Pair")
        .field(FieldDecl::new("a", "integer").primary_key().auto_increment())
        .field(FieldDecl::new("b", "string").primary_key())
        .field(FieldDecl::new("c", "string"))
}
