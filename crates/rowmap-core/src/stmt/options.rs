/// Columns returned by a SELECT.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Projection {
    /// `*`
    #[default]
    All,

    /// Emitted verbatim, e.g. `"id, name"`.
    Raw(String),

    /// A list of column names, each quoted as an identifier.
    Fields(Vec<String>),
}

/// Optional clauses for SELECT and COUNT queries.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QueryOptions {
    pub fields: Projection,

    /// `LIMIT`. When `None`, no limit clause is emitted and `offset` is
    /// ignored.
    pub limit: Option<u64>,

    pub offset: Option<u64>,

    /// `ORDER BY` keys, emitted verbatim in order (`"created_at DESC"`).
    pub order_by: Vec<String>,

    /// Aggregate expression for COUNT queries, `*` when unset.
    pub count: Option<String>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.fields = Projection::Fields(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn raw_fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Projection::Raw(fields.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Appends an ordering key.
    pub fn order_by(mut self, key: impl Into<String>) -> Self {
        self.order_by.push(key.into());
        self
    }

    pub fn count(mut self, expr: impl Into<String>) -> Self {
        self.count = Some(expr.into());
        self
    }
}

impl From<&str> for Projection {
    fn from(value: &str) -> Self {
        if value == "*" {
            Self::All
        } else {
            Self::Raw(value.to_string())
        }
    }
}

impl From<Vec<String>> for Projection {
    fn from(value: Vec<String>) -> Self {
        Self::Fields(value)
    }
}
