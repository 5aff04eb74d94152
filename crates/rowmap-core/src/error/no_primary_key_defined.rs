use super::Error;

/// Error when a primary-key based operation is attempted on a model that
/// does not declare a primary key.
#[derive(Debug)]
pub(super) struct NoPrimaryKeyDefined {
    model: Box<str>,
}

impl std::error::Error for NoPrimaryKeyDefined {}

impl core::fmt::Display for NoPrimaryKeyDefined {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "model `{}` does not declare a primary key", self.model)
    }
}

impl Error {
    pub fn no_primary_key_defined(model: &str) -> Error {
        Error::from(super::ErrorKind::NoPrimaryKeyDefined(NoPrimaryKeyDefined {
            model: model.into(),
        }))
    }

    pub fn is_no_primary_key_defined(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::NoPrimaryKeyDefined(_)))
    }
}
