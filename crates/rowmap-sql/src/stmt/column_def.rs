/// One column of a CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,

    /// Storage type, emitted verbatim.
    pub ty: String,

    pub primary_key: bool,

    pub auto_increment: bool,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            primary_key: false,
            auto_increment: false,
        }
    }
}
