use super::Error;

/// Error when a model declaration cannot name its table, e.g. an empty model
/// name or an empty explicit table name.
#[derive(Debug)]
pub(super) struct InvalidModelDeclaration {
    model: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidModelDeclaration {}

impl core::fmt::Display for InvalidModelDeclaration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid declaration of model `{}`: {}",
            self.model, self.message
        )
    }
}

impl Error {
    pub fn invalid_model_declaration(model: &str, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidModelDeclaration(
            InvalidModelDeclaration {
                model: model.into(),
                message: message.into().into(),
            },
        ))
    }

    pub fn is_invalid_model_declaration(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidModelDeclaration(_)))
    }
}
