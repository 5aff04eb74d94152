use super::Error;

/// Error when a declared type (or storage type override) has no known
/// physical storage mapping.
#[derive(Debug)]
pub(super) struct UnknownFieldType {
    model: Box<str>,
    field: Box<str>,
    ty: Box<str>,
}

impl std::error::Error for UnknownFieldType {}

impl core::fmt::Display for UnknownFieldType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown field type `{}` for field `{}::{}`",
            self.ty, self.model, self.field
        )
    }
}

impl Error {
    /// Creates an unknown field type error. `ty` is the type as written in
    /// the declaration.
    pub fn unknown_field_type(model: &str, field: &str, ty: &str) -> Error {
        Error::from(super::ErrorKind::UnknownFieldType(UnknownFieldType {
            model: model.into(),
            field: field.into(),
            ty: ty.into(),
        }))
    }

    /// Returns `true` if this error is an unknown field type error.
    pub fn is_unknown_field_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnknownFieldType(_)))
    }
}
