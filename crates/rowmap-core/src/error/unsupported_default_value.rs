use super::Error;

/// Error when a default value cannot be represented by the field's type, for
/// example the `now` sentinel on a string field.
#[derive(Debug)]
pub(super) struct UnsupportedDefaultValue {
    model: Box<str>,
    field: Box<str>,
}

impl std::error::Error for UnsupportedDefaultValue {}

impl core::fmt::Display for UnsupportedDefaultValue {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported default value for field `{}::{}`",
            self.model, self.field
        )
    }
}

impl Error {
    pub fn unsupported_default_value(model: &str, field: &str) -> Error {
        Error::from(super::ErrorKind::UnsupportedDefaultValue(
            UnsupportedDefaultValue {
                model: model.into(),
                field: field.into(),
            },
        ))
    }

    pub fn is_unsupported_default_value(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnsupportedDefaultValue(_)))
    }
}
