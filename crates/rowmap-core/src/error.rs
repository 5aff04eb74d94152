mod adhoc;
mod driver;
mod invalid_auto_update_field;
mod invalid_connection_url;
mod invalid_field_declaration;
mod invalid_model_declaration;
mod missing_primary_key;
mod model_conflict;
mod model_not_found;
mod no_primary_key_defined;
mod reserved_field_name;
mod type_conversion;
mod unfiltered_mutation;
mod unknown_field_type;
mod unsupported_default_value;

use adhoc::AdhocError;
use driver::DriverError;
use invalid_auto_update_field::InvalidAutoUpdateField;
use invalid_connection_url::InvalidConnectionUrl;
use invalid_field_declaration::InvalidFieldDeclaration;
use invalid_model_declaration::InvalidModelDeclaration;
use missing_primary_key::MissingPrimaryKey;
use model_conflict::ModelConflict;
use model_not_found::ModelNotFound;
use no_primary_key_defined::NoPrimaryKeyDefined;
use reserved_field_name::ReservedFieldName;
use std::sync::Arc;
use type_conversion::TypeConversionError;
use unfiltered_mutation::UnfilteredMutation;
use unknown_field_type::UnknownFieldType;
use unsupported_default_value::UnsupportedDefaultValue;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in rowmap.
///
/// The error is a single pointer wide. Errors raised while declaring a model
/// (`is_invalid_field_declaration`, `is_reserved_field_name`, ...) are fatal
/// to that registration attempt. Errors raised by an operation
/// (`is_missing_primary_key`, `is_no_primary_key_defined`, ...) are returned
/// before any statement reaches the driver. Driver errors are passed through
/// unchanged and can be inspected with [`std::error::Error::source`].
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let inner = err.inner.as_mut().unwrap();
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        Arc::get_mut(inner).unwrap().cause = Some(self);
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    /// Returns `true` if this error, or any error it was given as context
    /// for, matches `f`.
    fn any_kind(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| f(err.kind()))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Driver(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Driver(DriverError),
    InvalidFieldDeclaration(InvalidFieldDeclaration),
    InvalidModelDeclaration(InvalidModelDeclaration),
    ReservedFieldName(ReservedFieldName),
    UnknownFieldType(UnknownFieldType),
    UnsupportedDefaultValue(UnsupportedDefaultValue),
    InvalidAutoUpdateField(InvalidAutoUpdateField),
    InvalidConnectionUrl(InvalidConnectionUrl),
    ModelConflict(ModelConflict),
    ModelNotFound(ModelNotFound),
    MissingPrimaryKey(MissingPrimaryKey),
    NoPrimaryKeyDefined(NoPrimaryKeyDefined),
    UnfilteredMutation(UnfilteredMutation),
    TypeConversion(TypeConversionError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
            InvalidFieldDeclaration(err) => core::fmt::Display::fmt(err, f),
            InvalidModelDeclaration(err) => core::fmt::Display::fmt(err, f),
            ReservedFieldName(err) => core::fmt::Display::fmt(err, f),
            UnknownFieldType(err) => core::fmt::Display::fmt(err, f),
            UnsupportedDefaultValue(err) => core::fmt::Display::fmt(err, f),
            InvalidAutoUpdateField(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
            ModelConflict(err) => core::fmt::Display::fmt(err, f),
            ModelNotFound(err) => core::fmt::Display::fmt(err, f),
            MissingPrimaryKey(err) => core::fmt::Display::fmt(err, f),
            NoPrimaryKeyDefined(err) => core::fmt::Display::fmt(err, f),
            UnfilteredMutation(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown rowmap error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
