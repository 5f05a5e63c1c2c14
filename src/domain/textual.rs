//! Text predicates
//!
//! Predicates over `Text` values. Any other kind of value fails every text
//! predicate, and the character class predicates reject the empty string.

use std::sync::Arc;

use regex::Regex;

use super::NO_PARAMS;
use crate::error::ValidatorError;
use crate::predicate::Predicate;
use crate::registry::Domain;
use crate::value::{Param, Value};

domain_validator! {
    /// Validator of the `text` domain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use regex::Regex;
    /// use validator_chain::{TextValidator, ValidatorError};
    ///
    /// # fn main() -> Result<(), ValidatorError> {
    /// let s = TextValidator::new();
    ///
    /// let identifier = s.matches(Regex::new(r"[a-z_][a-z0-9_]*$").unwrap())?;
    /// assert!(identifier.evaluate("snake_case"));
    /// assert!(!identifier.evaluate("9lives"));
    ///
    /// let heading = s.title_case()?.ends_with(":")?;
    /// assert!(heading.evaluate("Getting Started:"));
    /// assert!(!heading.evaluate("getting started:"));
    ///
    /// // a pattern given as text is compiled when the chain is built
    /// assert!(s.matches("(").is_err());
    /// # Ok(())
    /// # }
    /// ```
    TextValidator => crate::domain::text
}

impl TextValidator {
    /// Only letters and digits.
    pub fn alphanumeric(&self) -> Result<Self, ValidatorError> {
        self.bind("alphanumeric", NO_PARAMS)
    }

    /// Only letters.
    pub fn alphabetic(&self) -> Result<Self, ValidatorError> {
        self.bind("alphabetic", NO_PARAMS)
    }

    /// Has cased characters, all upper case.
    pub fn uppercase(&self) -> Result<Self, ValidatorError> {
        self.bind("uppercase", NO_PARAMS)
    }

    /// Has cased characters, all lower case.
    pub fn lowercase(&self) -> Result<Self, ValidatorError> {
        self.bind("lowercase", NO_PARAMS)
    }

    /// Every word starts upper case and continues lower case.
    pub fn title_case(&self) -> Result<Self, ValidatorError> {
        self.bind("title_case", NO_PARAMS)
    }

    /// Only numeric characters.
    pub fn digit(&self) -> Result<Self, ValidatorError> {
        self.bind("digit", NO_PARAMS)
    }

    /// Starts with `prefix`.
    pub fn starts_with(&self, prefix: impl Into<String>) -> Result<Self, ValidatorError> {
        let prefix: String = prefix.into();
        self.bind("starts_with", [prefix])
    }

    /// Ends with `suffix`.
    pub fn ends_with(&self, suffix: impl Into<String>) -> Result<Self, ValidatorError> {
        let suffix: String = suffix.into();
        self.bind("ends_with", [suffix])
    }

    /// Contains `substring`.
    pub fn contains(&self, substring: impl Into<String>) -> Result<Self, ValidatorError> {
        let substring: String = substring.into();
        self.bind("contains", [substring])
    }

    /// `pattern` matches at the start of the candidate.
    ///
    /// Add a trailing `$` to the pattern to require a full match.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `pattern` is text that does not compile.
    pub fn matches(&self, pattern: impl Into<Param>) -> Result<Self, ValidatorError> {
        let pattern: Param = pattern.into();
        self.bind("matches", [pattern])
    }
}

fn non_empty_and_all(value: &Value, class: fn(char) -> bool) -> bool {
    value
        .as_str()
        .is_some_and(|s| !s.is_empty() && s.chars().all(class))
}

/// Only letters and digits.
pub fn alphanumeric(value: &Value) -> bool {
    non_empty_and_all(value, char::is_alphanumeric)
}

/// Only letters.
pub fn alphabetic(value: &Value) -> bool {
    non_empty_and_all(value, char::is_alphabetic)
}

/// Only numeric characters.
pub fn digit(value: &Value) -> bool {
    non_empty_and_all(value, char::is_numeric)
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

/// At least one cased character, and no lower case ones.
pub fn uppercase(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.chars().any(is_cased) && !s.chars().any(char::is_lowercase))
}

/// At least one cased character, and no upper case ones.
pub fn lowercase(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.chars().any(is_cased) && !s.chars().any(char::is_uppercase))
}

/// Upper case characters only follow uncased ones, lower case characters
/// only follow cased ones, and there is at least one cased character.
pub fn title_case(value: &Value) -> bool {
    let Some(s) = value.as_str() else {
        return false;
    };

    let mut previous_cased = false;
    let mut seen_cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else {
            previous_cased = false;
        }
    }
    seen_cased
}

/// Predicate that checks a text starts with a prefix.
#[derive(Clone, Debug)]
pub struct StartsWith(pub String);

impl Predicate<Value> for StartsWith {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| s.starts_with(&self.0))
    }
}

/// Create a predicate that checks for `prefix`.
pub fn starts_with(prefix: impl Into<String>) -> StartsWith {
    StartsWith(prefix.into())
}

/// Predicate that checks a text ends with a suffix.
#[derive(Clone, Debug)]
pub struct EndsWith(pub String);

impl Predicate<Value> for EndsWith {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| s.ends_with(&self.0))
    }
}

/// Create a predicate that checks for `suffix`.
pub fn ends_with(suffix: impl Into<String>) -> EndsWith {
    EndsWith(suffix.into())
}

/// Predicate that checks a text contains a substring.
#[derive(Clone, Debug)]
pub struct Contains(pub String);

impl Predicate<Value> for Contains {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| s.contains(&self.0))
    }
}

/// Create a predicate that checks for `substring`.
pub fn contains(substring: impl Into<String>) -> Contains {
    Contains(substring.into())
}

/// Predicate that checks a pattern matches at offset zero.
#[derive(Clone, Debug)]
pub struct Matches(pub Regex);

impl Predicate<Value> for Matches {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value
            .as_str()
            .and_then(|s| self.0.find(s))
            .is_some_and(|m| m.start() == 0)
    }
}

/// Create a predicate that checks `pattern` matches at the start.
pub fn matches(pattern: Regex) -> Matches {
    Matches(pattern)
}

pub(super) fn define(parent: &Arc<Domain>) -> Arc<Domain> {
    Domain::builder("text")
        .parent(parent)
        .predicate("alphanumeric", alphanumeric)
        .predicate("alphabetic", alphabetic)
        .predicate("uppercase", uppercase)
        .predicate("lowercase", lowercase)
        .predicate("title_case", title_case)
        .predicate("digit", digit)
        .parameterized("starts_with", 1, |p: &[Param]| {
            Ok(starts_with(p[0].text("starts_with", 0)?))
        })
        .parameterized("ends_with", 1, |p: &[Param]| {
            Ok(ends_with(p[0].text("ends_with", 0)?))
        })
        .parameterized("contains", 1, |p: &[Param]| {
            Ok(contains(p[0].text("contains", 0)?))
        })
        .parameterized("matches", 1, |p: &[Param]| {
            Ok(matches(p[0].pattern("matches", 0)?))
        })
        .build()
}
