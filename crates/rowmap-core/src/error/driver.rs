use super::{Error, ErrorKind};

use std::error::Error as StdError;

/// A failure reported by the database backend, kept as-is.
#[derive(Debug)]
pub(super) struct DriverError {
    source: Box<dyn StdError + Send + Sync>,
}

impl StdError for DriverError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.source)
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.source)?;

        // Backend errors often hide the useful detail in their causes.
        let causes = std::iter::successors(self.source.source(), |&err| err.source());
        for cause in causes {
            write!(f, ": {cause}")?;
        }

        Ok(())
    }
}

impl Error {
    /// Wraps an execution failure from the backend (connectivity, constraint
    /// violations, syntax errors). The error is never retried or rewritten.
    pub fn driver(err: impl StdError + Send + Sync + 'static) -> Error {
        Error::from(ErrorKind::Driver(DriverError {
            source: Box::new(err),
        }))
    }

    pub fn is_driver(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::Driver(_)))
    }
}
