//! Crate-level error type.
//!
//! Wraps the two engine error kinds (input validation and internal domain
//! invariants) plus configuration problems raised at the crate's edges.
//! Nothing here is retryable: the engine is deterministic, so a failed run
//! fails identically when repeated.

use std::fmt;

use crate::scheduler::DomainError;
use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the scheduling engine and its configuration layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed input reached the engine. No partial run was attempted.
    Validation(Vec<ValidationError>),
    /// A scheduler broke one of its own invariants.
    Domain(DomainError),
    /// Configuration could not be read or parsed.
    Config(String),
}

impl Error {
    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Error::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(errors) => {
                write!(f, "invalid input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            Error::Domain(e) => write!(f, "internal scheduler error: {e}"),
            Error::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::Validation(errors)
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Error::Validation(vec![error])
    }
}

impl From<DomainError> for Error {
    fn from(error: DomainError) -> Self {
        Error::Domain(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_validation() {
        let err = Error::from(vec![
            ValidationError::new(ValidationErrorKind::EmptyProcessSet, "no processes"),
            ValidationError::new(ValidationErrorKind::NonPositiveQuantum, "quantum is 0"),
        ]);
        assert_eq!(err.to_string(), "invalid input: no processes; quantum is 0");
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_display_domain() {
        let err = Error::from(DomainError::MissingIntervals("P1".into()));
        assert!(err.to_string().contains("P1"));
        assert!(err.validation_errors().is_empty());
    }
}
