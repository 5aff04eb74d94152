mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod drop_table;
pub use drop_table::DropTable;

mod insert;
pub use insert::Insert;

mod select;
pub use select::{Limit, Returning, Select};

mod update;
pub use update::{Assignment, Update};

pub use rowmap_core::stmt::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateTable(CreateTable),
    Delete(Delete),
    DropTable(DropTable),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// Returns `true` if the statement returns rows.
    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Select(_))
    }

    /// Name of the table the statement operates on.
    pub fn table(&self) -> &str {
        match self {
            Statement::CreateTable(stmt) => &stmt.name,
            Statement::Delete(stmt) => &stmt.table,
            Statement::DropTable(stmt) => &stmt.name,
            Statement::Insert(stmt) => &stmt.table,
            Statement::Select(stmt) => &stmt.table,
            Statement::Update(stmt) => &stmt.table,
        }
    }
}
