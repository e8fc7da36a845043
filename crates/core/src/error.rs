//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every constructor and command in the model validates its input eagerly and
/// reports failures through this type. Nothing is written to an aggregate
/// before validation has passed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument was absent, blank, out of range or malformed.
    #[error("invalid argument `{argument}`: {message}")]
    InvalidArgument {
        argument: &'static str,
        message: String,
    },

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Name of the offending argument, if this is an argument error.
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            DomainError::InvalidArgument { argument, .. } => Some(argument),
            DomainError::InvariantViolation(_) => None,
        }
    }
}

/// Reject `value` when it is empty or consists only of whitespace.
pub fn ensure_not_blank(argument: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_argument(
            argument,
            "cannot be empty or whitespace",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_names_the_argument_in_its_message() {
        let err = DomainError::invalid_argument("currency", "must be 3 characters");
        assert_eq!(err.argument(), Some("currency"));
        assert_eq!(
            err.to_string(),
            "invalid argument `currency`: must be 3 characters"
        );
    }

    #[test]
    fn invariant_has_no_argument() {
        let err = DomainError::invariant("total overflow");
        assert_eq!(err.argument(), None);
        assert_eq!(err.to_string(), "invariant violated: total overflow");
    }

    #[test]
    fn ensure_not_blank_rejects_whitespace() {
        assert!(ensure_not_blank("name", "Acme").is_ok());
        assert!(ensure_not_blank("name", " \t ").is_err());
        let err = ensure_not_blank("name", "").unwrap_err();
        assert_eq!(err.argument(), Some("name"));
    }
}
