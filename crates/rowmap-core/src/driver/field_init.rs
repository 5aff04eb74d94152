use crate::Error;

/// Why a driver refused to initialize a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInitError {
    /// The declared storage type is not one the backend knows.
    UnknownFieldType(String),

    /// The backend cannot store the field's default.
    UnsupportedDefaultValue,

    /// The backend cannot maintain the field as an auto-update timestamp.
    InvalidAutoUpdateField,
}

impl FieldInitError {
    /// Maps the rejection onto the matching declaration error.
    pub fn into_error(self, model: &str, field: &str) -> Error {
        match self {
            FieldInitError::UnknownFieldType(ty) => Error::unknown_field_type(model, field, &ty),
            FieldInitError::UnsupportedDefaultValue => {
                Error::unsupported_default_value(model, field)
            }
            FieldInitError::InvalidAutoUpdateField => {
                Error::invalid_auto_update_field(model, field)
            }
        }
    }
}
