use super::Statement;
use crate::Predicate;

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,

    pub returning: Returning,

    pub filter: Predicate,

    /// ORDER BY terms, emitted verbatim
    pub order_by: Vec<String>,

    pub limit: Option<Limit>,
}

/// What a SELECT returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Returning {
    /// `*`
    Star,

    /// A caller-supplied projection, emitted verbatim.
    Raw(String),

    /// Named columns, each quoted.
    Columns(Vec<String>),

    /// `COUNT(<expr>)` aliased as `N`. `None` counts `*`.
    Count(Option<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub limit: u64,

    /// Rows skipped before the first returned one. Zero is not emitted.
    pub offset: u64,
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
