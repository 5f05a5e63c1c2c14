//! Predicates shared by every domain.

use std::sync::Arc;

use crate::error::ValidatorError;
use crate::predicate::Predicate;
use crate::registry::Domain;
use crate::value::{Param, Value, ValueKind};

domain_validator! {
    /// Validator of the root domain, for values of any kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validator_chain::{AnyValidator, ValidatorError, ValueKind};
    ///
    /// # fn main() -> Result<(), ValidatorError> {
    /// let flag = AnyValidator::new().instance_of(ValueKind::Bool)?;
    /// assert!(flag.evaluate(true));
    /// assert!(!flag.evaluate("true"));
    ///
    /// let color = AnyValidator::new().value_in(vec!["red", "green", "blue"])?;
    /// assert!(color.evaluate("green"));
    /// assert!(!color.evaluate("purple"));
    ///
    /// // a scalar is not a collection of possibilities
    /// assert!(AnyValidator::new().value_in(5).is_err());
    /// # Ok(())
    /// # }
    /// ```
    AnyValidator => crate::domain::base
}

/// Predicate that checks the candidate equals a value.
///
/// Integers and floats compare numerically.
#[derive(Clone, Debug)]
pub struct Equals(pub Value);

impl Predicate<Value> for Equals {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        *value == self.0
    }
}

/// Create a predicate that checks equality with `expected`.
pub fn equals(expected: Value) -> Equals {
    Equals(expected)
}

/// Predicate that checks the candidate is an element of a list, or a
/// substring of a text.
///
/// Any other kind of possibilities accepts nothing. The registry refuses to
/// build one.
#[derive(Clone, Debug)]
pub struct ValueIn(pub Value);

impl Predicate<Value> for ValueIn {
    fn check(&self, value: &Value) -> bool {
        match &self.0 {
            Value::List(items) => items.contains(value),
            Value::Text(haystack) => value.as_str().is_some_and(|needle| haystack.contains(needle)),
            _ => false,
        }
    }
}

/// Create a predicate that checks membership in `possibilities`.
pub fn value_in(possibilities: Value) -> ValueIn {
    ValueIn(possibilities)
}

/// Predicate that checks the kind of the candidate.
#[derive(Clone, Copy, Debug)]
pub struct InstanceOf(pub ValueKind);

impl Predicate<Value> for InstanceOf {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.kind() == self.0
    }
}

/// Create a predicate that checks the candidate is of `kind`.
pub fn instance_of(kind: ValueKind) -> InstanceOf {
    InstanceOf(kind)
}

pub(super) fn define() -> Arc<Domain> {
    Domain::builder("validator")
        .parameterized("equals", 1, |p: &[Param]| Ok(equals(p[0].value("equals", 0)?)))
        .parameterized("value_in", 1, |p: &[Param]| {
            let possibilities = p[0].value("value_in", 0)?;
            match possibilities {
                Value::List(_) | Value::Text(_) => Ok(value_in(possibilities)),
                other => Err(ValidatorError::invalid_parameter(
                    "value_in",
                    0,
                    format!("expected a list or text, found {}", other.kind()),
                )),
            }
        })
        .parameterized("instance_of", 1, |p: &[Param]| {
            Ok(instance_of(p[0].kind("instance_of", 0)?))
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain;

    #[test]
    fn test_equals() {
        let p = equals(Value::from(3));
        assert!(p.check(&Value::from(3)));
        assert!(p.check(&Value::from(3.0)));
        assert!(!p.check(&Value::from("3")));
    }

    #[test]
    fn test_value_in_list() {
        let p = value_in(Value::from(vec![1, 2, 3]));
        assert!(p.check(&Value::from(2)));
        assert!(!p.check(&Value::from(4)));
    }

    #[test]
    fn test_value_in_text_is_substring() {
        let p = value_in(Value::from("hello world"));
        assert!(p.check(&Value::from("lo w")));
        assert!(!p.check(&Value::from("xyz")));
        assert!(!p.check(&Value::from(1)));
    }

    #[test]
    fn test_instance_of() {
        assert!(instance_of(ValueKind::Float).check(&Value::from(1.5)));
        assert!(!instance_of(ValueKind::Float).check(&Value::from(1)));
    }

    #[test]
    fn test_registry_entries() {
        let v = domain::base()
            .validator()
            .chain_with("value_in", [vec![1, 2]])
            .unwrap();
        assert!(v.evaluate(1));
        assert_eq!(v.to_string(), "value_in([1, 2])");

        let err = domain::base()
            .validator()
            .chain_with("value_in", [5])
            .unwrap_err();
        assert!(matches!(err, ValidatorError::InvalidParameter { .. }));

        let v = domain::base()
            .validator()
            .chain_with("instance_of", [ValueKind::Text])
            .unwrap();
        assert!(v.evaluate("a"));
    }

    #[test]
    fn test_any_validator_chains() -> Result<(), ValidatorError> {
        let v = AnyValidator::new().instance_of(ValueKind::Int)?.equals(4)?;
        assert!(v.evaluate(4));
        assert!(!v.evaluate(4.0));
        assert_eq!(v.to_string(), "instance_of(int) AND equals(4)");
        Ok(())
    }

    #[test]
    fn test_typed_value_in_rejects_scalars() {
        let err = AnyValidator::new().value_in(5).unwrap_err();
        assert_eq!(
            err,
            ValidatorError::invalid_parameter("value_in", 0, "expected a list or text, found int")
        );
        assert!(AnyValidator::new().value_in("abc").unwrap().evaluate("b"));
    }

    #[test]
    fn test_predicate_debug() {
        assert_eq!(format!("{:?}", instance_of(ValueKind::Text)), "InstanceOf(Text)");
        assert_eq!(format!("{:?}", equals(Value::from(2))), "Equals(Int(2))");
    }
}
