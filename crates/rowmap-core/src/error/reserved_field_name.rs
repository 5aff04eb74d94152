use super::Error;

/// Error when a field uses an identifier reserved for the record lifecycle.
#[derive(Debug)]
pub(super) struct ReservedFieldName {
    model: Box<str>,
    field: Box<str>,
}

impl std::error::Error for ReservedFieldName {}

impl core::fmt::Display for ReservedFieldName {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field name `{}` in model `{}` is reserved",
            self.field, self.model
        )
    }
}

impl Error {
    pub fn reserved_field_name(model: &str, field: &str) -> Error {
        Error::from(super::ErrorKind::ReservedFieldName(ReservedFieldName {
            model: model.into(),
            field: field.into(),
        }))
    }

    pub fn is_reserved_field_name(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::ReservedFieldName(_)))
    }
}
