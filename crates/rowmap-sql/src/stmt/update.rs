use super::{Statement, Value};
use crate::Predicate;

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,

    pub assignments: Vec<Assignment>,

    pub filter: Predicate,
}

/// `<column>=?` within a SET clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,

    pub value: Value,
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
