use super::Error;

/// Error when an UPDATE or DELETE would run without a WHERE clause.
///
/// Unknown condition keys are dropped while compiling, so a condition that
/// only names unknown fields compiles to nothing. Such statements are refused
/// instead of touching every row of the table.
#[derive(Debug)]
pub(super) struct UnfilteredMutation {
    table: Box<str>,
    statement: &'static str,
}

impl std::error::Error for UnfilteredMutation {}

impl core::fmt::Display for UnfilteredMutation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "refusing to {} on table `{}` without a filter",
            self.statement, self.table
        )
    }
}

impl Error {
    pub fn unfiltered_mutation(table: &str, statement: &'static str) -> Error {
        Error::from(super::ErrorKind::UnfilteredMutation(UnfilteredMutation {
            table: table.into(),
            statement,
        }))
    }

    pub fn is_unfiltered_mutation(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnfilteredMutation(_)))
    }
}
