use super::Error;

/// Error when an instance operation needs the record's primary key value but
/// the record does not carry one (it is still transient).
#[derive(Debug)]
pub(super) struct MissingPrimaryKey {
    model: Box<str>,
    operation: &'static str,
}

impl std::error::Error for MissingPrimaryKey {}

impl core::fmt::Display for MissingPrimaryKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot {} `{}` record: primary key value is not set",
            self.operation, self.model
        )
    }
}

impl Error {
    /// Creates a missing primary key error for `operation` (`"update"`,
    /// `"remove"`).
    pub fn missing_primary_key(model: &str, operation: &'static str) -> Error {
        Error::from(super::ErrorKind::MissingPrimaryKey(MissingPrimaryKey {
            model: model.into(),
            operation,
        }))
    }

    /// Returns `true` if this error is a missing primary key error.
    pub fn is_missing_primary_key(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MissingPrimaryKey(_)))
    }
}
