//! Parameters for curried predicates.

use std::fmt;

use regex::Regex;

use super::{Value, ValueKind};
use crate::error::ValidatorError;

/// An extra argument supplied to a parameterised predicate factory.
///
/// The accessors take the predicate name and the parameter position so the
/// error they produce points at the offending call.
///
/// # Example
///
/// ```rust
/// use validator_chain::{Param, Value};
///
/// let p = Param::from(7);
/// assert_eq!(p.number("max", 0).unwrap(), Value::Int(7));
/// assert!(p.text("starts_with", 0).is_err());
/// ```
#[derive(Debug, Clone)]
pub enum Param {
    /// A plain value.
    Value(Value),
    /// A precompiled regular expression.
    Pattern(Regex),
    /// A value kind, for `instance_of`.
    Kind(ValueKind),
}

impl Param {
    /// The parameter as a value.
    pub fn value(&self, name: &str, index: usize) -> Result<Value, ValidatorError> {
        match self {
            Param::Value(value) => Ok(value.clone()),
            other => Err(mismatch(name, index, "a value", other)),
        }
    }

    /// The parameter as a number (`Int` or `Float`).
    pub fn number(&self, name: &str, index: usize) -> Result<Value, ValidatorError> {
        match self {
            Param::Value(value) if value.is_number() => Ok(value.clone()),
            other => Err(mismatch(name, index, "a number", other)),
        }
    }

    /// The parameter as text.
    pub fn text(&self, name: &str, index: usize) -> Result<String, ValidatorError> {
        match self {
            Param::Value(Value::Text(s)) => Ok(s.clone()),
            other => Err(mismatch(name, index, "text", other)),
        }
    }

    /// The parameter as a regular expression.
    ///
    /// Text parameters are compiled here; invalid syntax is reported as
    /// `InvalidParameter`.
    pub fn pattern(&self, name: &str, index: usize) -> Result<Regex, ValidatorError> {
        match self {
            Param::Pattern(regex) => Ok(regex.clone()),
            Param::Value(Value::Text(source)) => Regex::new(source)
                .map_err(|err| ValidatorError::invalid_parameter(name, index, err.to_string())),
            other => Err(mismatch(name, index, "a pattern", other)),
        }
    }

    /// The parameter as a value kind.
    pub fn kind(&self, name: &str, index: usize) -> Result<ValueKind, ValidatorError> {
        match self {
            Param::Kind(kind) => Ok(*kind),
            other => Err(mismatch(name, index, "a value kind", other)),
        }
    }

    fn describe(&self) -> String {
        match self {
            Param::Value(value) => value.kind().to_string(),
            Param::Pattern(_) => "pattern".to_string(),
            Param::Kind(_) => "value kind".to_string(),
        }
    }
}

fn mismatch(name: &str, index: usize, expected: &str, found: &Param) -> ValidatorError {
    ValidatorError::invalid_parameter(
        name,
        index,
        format!("expected {}, found {}", expected, found.describe()),
    )
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Value(value) => write!(f, "{}", value),
            Param::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
            Param::Kind(kind) => write!(f, "{}", kind),
        }
    }
}

macro_rules! impl_param_from_value {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Param {
                fn from(value: $ty) -> Self {
                    Param::Value(Value::from(value))
                }
            }
        )+
    };
}

impl_param_from_value!(
    i8, i16, i32, i64, u8, u16, u32, f32, f64, bool, char, &str, String, &String, &Value
);

impl From<Value> for Param {
    fn from(value: Value) -> Self {
        Param::Value(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Param {
    fn from(items: Vec<T>) -> Self {
        Param::Value(Value::from(items))
    }
}

impl From<Regex> for Param {
    fn from(regex: Regex) -> Self {
        Param::Pattern(regex)
    }
}

impl From<&Regex> for Param {
    fn from(regex: &Regex) -> Self {
        Param::Pattern(regex.clone())
    }
}

impl From<ValueKind> for Param {
    fn from(kind: ValueKind) -> Self {
        Param::Kind(kind)
    }
}
