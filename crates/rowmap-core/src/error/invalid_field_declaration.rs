use super::Error;

/// Error when a raw field declaration is malformed.
///
/// This occurs when:
/// - A declaration is missing its `name` or `type`
/// - Two declarations share a name
/// - `auto_increment` is set on a field that is not an integer primary key
#[derive(Debug)]
pub(super) struct InvalidFieldDeclaration {
    model: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidFieldDeclaration {}

impl core::fmt::Display for InvalidFieldDeclaration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid field declaration in model `{}`: {}",
            self.model, self.message
        )
    }
}

impl Error {
    /// Creates an invalid field declaration error.
    pub fn invalid_field_declaration(model: &str, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidFieldDeclaration(
            InvalidFieldDeclaration {
                model: model.into(),
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid field declaration error.
    pub fn is_invalid_field_declaration(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidFieldDeclaration(_)))
    }
}
