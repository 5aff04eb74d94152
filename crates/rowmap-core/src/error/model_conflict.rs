use super::Error;

/// Error when a model name is registered twice with different declarations.
#[derive(Debug)]
pub(super) struct ModelConflict {
    model: Box<str>,
}

impl std::error::Error for ModelConflict {}

impl core::fmt::Display for ModelConflict {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "model `{}` is already registered with a different declaration",
            self.model
        )
    }
}

impl Error {
    pub fn model_conflict(model: &str) -> Error {
        Error::from(super::ErrorKind::ModelConflict(ModelConflict {
            model: model.into(),
        }))
    }

    pub fn is_model_conflict(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::ModelConflict(_)))
    }
}
