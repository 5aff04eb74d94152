use super::Error;

/// Error when `auto_update` is declared on a field that is not a timestamp
/// defaulting to the current time.
#[derive(Debug)]
pub(super) struct InvalidAutoUpdateField {
    model: Box<str>,
    field: Box<str>,
}

impl std::error::Error for InvalidAutoUpdateField {}

impl core::fmt::Display for InvalidAutoUpdateField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "auto_update on field `{}::{}` requires a timestamp field with default `now`",
            self.model, self.field
        )
    }
}

impl Error {
    pub fn invalid_auto_update_field(model: &str, field: &str) -> Error {
        Error::from(super::ErrorKind::InvalidAutoUpdateField(
            InvalidAutoUpdateField {
                model: model.into(),
                field: field.into(),
            },
        ))
    }

    pub fn is_invalid_auto_update_field(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidAutoUpdateField(_)))
    }
}
