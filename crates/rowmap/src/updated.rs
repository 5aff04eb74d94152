use chrono::{DateTime, Utc};

/// Outcome of an update.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Updated {
    /// `true` if at least one row was updated.
    pub updated: bool,

    /// The time written to the model's auto-update field. Only set when that
    /// field was filled in automatically and a row was updated.
    pub modify_time: Option<DateTime<Utc>>,
}

impl Updated {
    /// Nothing was updated: validation rejected the record, there was nothing
    /// to assign, or no row matched.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_updated(&self) -> bool {
        self.updated
    }
}
