use super::Error;

#[derive(Debug)]
pub(super) struct ModelNotFound {
    model: Box<str>,
}

impl std::error::Error for ModelNotFound {}

impl core::fmt::Display for ModelNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "model `{}` is not registered", self.model)
    }
}

impl Error {
    pub fn model_not_found(model: &str) -> Error {
        Error::from(super::ErrorKind::ModelNotFound(ModelNotFound {
            model: model.into(),
        }))
    }

    pub fn is_model_not_found(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::ModelNotFound(_)))
    }
}
