use super::Statement;
use crate::Predicate;

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,

    pub filter: Predicate,
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
