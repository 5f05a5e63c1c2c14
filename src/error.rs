//! Error types for building and asserting validators.

use std::fmt;

/// Error returned when a validator rejects a value in `assert_value`.
///
/// Carries the optional message supplied by the caller.
///
/// # Examples
///
/// ```rust
/// use validator_chain::NumberValidator;
///
/// let positive = NumberValidator::new().positive().unwrap();
///
/// let err = positive.assert_value_with(-3, "amount must be positive").unwrap_err();
/// assert_eq!(err.message(), Some("amount must be positive"));
/// assert!(positive.assert_value(3).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssertionFailure {
    message: Option<String>,
}

impl AssertionFailure {
    /// Create an assertion failure without a message.
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Create an assertion failure carrying `message`.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// The message supplied by the caller, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Consume the failure and return its message.
    pub fn into_message(self) -> Option<String> {
        self.message
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "assertion failed: {}", message),
            None => f.write_str("assertion failed"),
        }
    }
}

impl std::error::Error for AssertionFailure {}

/// Errors raised while resolving, currying or asserting validators.
///
/// # Examples
///
/// ```rust
/// use validator_chain::{NumberValidator, ValidatorError};
///
/// let err = NumberValidator::new().chain("no_such_predicate").unwrap_err();
/// assert!(matches!(err, ValidatorError::UnknownPredicate { .. }));
/// assert_eq!(err.to_string(), "number has no predicate named `no_such_predicate`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatorError {
    /// No predicate with this name exists in the domain or any ancestor.
    UnknownPredicate {
        /// Name of the domain the lookup started from.
        domain: String,
        /// The requested predicate name.
        name: String,
    },
    /// A parameterised predicate received the wrong number of parameters.
    ArityMismatch {
        /// The predicate name.
        name: String,
        /// Number of parameters the factory declares.
        expected: usize,
        /// Number of parameters supplied.
        found: usize,
    },
    /// A parameter had the wrong kind or could not be used.
    InvalidParameter {
        /// The predicate name.
        name: String,
        /// Zero-based position of the offending parameter.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },
    /// A validator rejected a value during an assertion.
    Assertion(AssertionFailure),
}

impl ValidatorError {
    /// Create an `UnknownPredicate` error.
    pub fn unknown_predicate(domain: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownPredicate {
            domain: domain.into(),
            name: name.into(),
        }
    }

    /// Create an `ArityMismatch` error.
    pub fn arity_mismatch(name: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ArityMismatch {
            name: name.into(),
            expected,
            found,
        }
    }

    /// Create an `InvalidParameter` error.
    pub fn invalid_parameter(
        name: impl Into<String>,
        index: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            index,
            reason: reason.into(),
        }
    }

    /// Returns true if this is an `UnknownPredicate` error.
    pub fn is_unknown_predicate(&self) -> bool {
        matches!(self, Self::UnknownPredicate { .. })
    }

    /// Returns true if this is an `ArityMismatch` error.
    pub fn is_arity_mismatch(&self) -> bool {
        matches!(self, Self::ArityMismatch { .. })
    }

    /// Returns true if this wraps an assertion failure.
    pub fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion(_))
    }
}

impl fmt::Display for ValidatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPredicate { domain, name } => {
                write!(f, "{} has no predicate named `{}`", domain, name)
            }
            Self::ArityMismatch {
                name,
                expected,
                found,
            } => write!(
                f,
                "`{}` takes {} parameter(s) but {} were supplied",
                name, expected, found
            ),
            Self::InvalidParameter {
                name,
                index,
                reason,
            } => write!(f, "invalid parameter {} for `{}`: {}", index, name, reason),
            Self::Assertion(failure) => write!(f, "{}", failure),
        }
    }
}

impl std::error::Error for ValidatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Assertion(failure) => Some(failure),
            _ => None,
        }
    }
}

impl From<AssertionFailure> for ValidatorError {
    fn from(failure: AssertionFailure) -> Self {
        Self::Assertion(failure)
    }
}
