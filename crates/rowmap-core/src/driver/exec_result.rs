/// Outcome of a statement that does not return rows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExecResult {
    /// Number of rows inserted, updated or deleted.
    pub affected_rows: u64,

    /// Key generated by the last INSERT, when the backend reports one.
    pub insert_id: Option<i64>,
}

impl ExecResult {
    pub fn affected(affected_rows: u64) -> Self {
        Self {
            affected_rows,
            insert_id: None,
        }
    }

    pub fn inserted(insert_id: i64) -> Self {
        Self {
            affected_rows: 1,
            insert_id: Some(insert_id),
        }
    }
}
