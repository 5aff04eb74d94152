use super::Statement;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions, as produced by the driver's DDL generator
    pub columns: String,

    /// Whether or not to add an `IF NOT EXISTS` clause.
    pub if_not_exists: bool,
}

impl Statement {
    /// Creates a table if it does not already exist.
    pub fn create_table(name: impl Into<String>, columns: impl Into<String>) -> Self {
        CreateTable {
            name: name.into(),
            columns: columns.into(),
            if_not_exists: true,
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
