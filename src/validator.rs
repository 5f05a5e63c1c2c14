//! The validator algebra
//!
//! A [`Validator`] is an immutable, ordered collection of predicates and
//! nested validators, tagged with one [`Connective`]. Combining never mutates
//! an operand: each combination returns a new validator.
//!
//! # Flattening and nesting
//!
//! - A validator with zero or one element evaluates the same under every
//!   connective, so combining it simply adopts the requested connective.
//! - Combining under the validator's own connective appends to the flat
//!   element list.
//! - Combining under a different connective groups the existing validator and
//!   the new element as two children of a fresh validator.
//!
//! ```rust
//! use validator_chain::{Connective, NumberValidator};
//!
//! let n = NumberValidator::new();
//!
//! // flat: even AND prime AND positive
//! let flat = n.even()?.prime()?.positive()?;
//! assert_eq!(flat.len(), 3);
//! assert_eq!(flat.connective(), Connective::And);
//!
//! // nested: (even AND prime) OR negative
//! let nested = n.even()?.prime()? | n.negative()?;
//! assert_eq!(nested.len(), 2);
//! assert_eq!(nested.connective(), Connective::Or);
//! assert_eq!(nested.to_string(), "(even AND prime) OR negative");
//!
//! assert!(nested.evaluate(2));
//! assert!(nested.evaluate(-9));
//! assert!(!nested.evaluate(4));
//! # Ok::<(), validator_chain::ValidatorError>(())
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor};
use std::sync::Arc;

use crate::connective::Connective;
use crate::error::{AssertionFailure, ValidatorError};
use crate::predicate::{NamedPredicate, Predicate};
use crate::registry::Domain;
use crate::value::Value;

/// One entry of a validator: a predicate or a nested validator.
#[derive(Clone, Debug)]
pub enum Element {
    /// A leaf predicate.
    Predicate(NamedPredicate),
    /// A nested group with its own connective.
    Validator(Validator),
}

impl Element {
    /// Returns true if this element is a nested validator.
    pub fn is_validator(&self) -> bool {
        matches!(self, Element::Validator(_))
    }

    /// The nested validator, if this element is one.
    pub fn as_validator(&self) -> Option<&Validator> {
        match self {
            Element::Validator(v) => Some(v),
            Element::Predicate(_) => None,
        }
    }
}

impl Predicate<Value> for Element {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        match self {
            Element::Predicate(p) => p.check(value),
            Element::Validator(v) => v.check(value),
        }
    }
}

impl From<NamedPredicate> for Element {
    fn from(predicate: NamedPredicate) -> Self {
        Element::Predicate(predicate)
    }
}

impl From<Validator> for Element {
    fn from(validator: Validator) -> Self {
        Element::Validator(validator)
    }
}

impl From<&Validator> for Element {
    fn from(validator: &Validator) -> Self {
        Element::Validator(validator.copy())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Predicate(p) => write!(f, "{}", p),
            Element::Validator(v) if v.len() > 1 => write!(f, "({})", v),
            Element::Validator(v) => write!(f, "{}", v),
        }
    }
}

/// An immutable combination of predicates under one connective.
///
/// Every validator belongs to a [`Domain`], whose registry supplies the
/// predicates that can be chained onto it by name (see
/// [`Validator::resolve`]).
///
/// # Example
///
/// ```rust
/// use validator_chain::{NumberValidator, Validator};
///
/// let small_prime: Validator = NumberValidator::new().prime()?.max(10)?.into();
///
/// let found: Vec<i32> = (1..30).filter(|n| small_prime.evaluate(*n)).collect();
/// assert_eq!(found, vec![2, 3, 5, 7]);
/// # Ok::<(), validator_chain::ValidatorError>(())
/// ```
#[derive(Clone)]
pub struct Validator {
    domain: Arc<Domain>,
    connective: Connective,
    elements: Vec<Element>,
}

impl Validator {
    /// Create an empty validator for `domain`.
    ///
    /// An empty validator accepts everything under AND and rejects
    /// everything under OR or XOR.
    pub fn new(domain: Arc<Domain>) -> Self {
        Self {
            domain,
            connective: Connective::And,
            elements: Vec::new(),
        }
    }

    /// Create an empty validator with an explicit connective.
    pub fn with_connective(domain: Arc<Domain>, connective: Connective) -> Self {
        Self {
            domain,
            connective,
            elements: Vec::new(),
        }
    }

    /// The domain whose registry this validator chains from.
    pub fn domain(&self) -> &Arc<Domain> {
        &self.domain
    }

    /// The connective joining the elements.
    pub fn connective(&self) -> Connective {
        self.connective
    }

    /// The elements in evaluation order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of top-level elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the validator has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Combine with `other` under `connective`, returning a new validator.
    ///
    /// `self` is left untouched and the result keeps `self`'s domain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validator_chain::{Connective, NumberValidator};
    ///
    /// let n = NumberValidator::new();
    /// let either = n.even()?.combine(n.negative()?, Connective::Xor);
    ///
    /// assert!(either.evaluate(4));
    /// assert!(either.evaluate(-3));
    /// assert!(!either.evaluate(-4)); // both hold
    /// assert!(!either.evaluate(3)); // neither holds
    /// # Ok::<(), validator_chain::ValidatorError>(())
    /// ```
    pub fn combine(&self, other: impl Into<Element>, connective: Connective) -> Validator {
        let mut combined = self.copy();
        let element = other.into();

        if combined.elements.len() < 2 {
            combined.connective = connective;
        }

        if combined.connective == connective {
            combined.elements.push(element);
            return combined;
        }

        Validator {
            domain: Arc::clone(&self.domain),
            connective,
            elements: vec![Element::Validator(combined), element],
        }
    }

    /// Combine with AND logic.
    pub fn and(&self, other: impl Into<Element>) -> Validator {
        self.combine(other, Connective::And)
    }

    /// Combine with OR logic.
    pub fn or(&self, other: impl Into<Element>) -> Validator {
        self.combine(other, Connective::Or)
    }

    /// Combine with exactly-one-of logic.
    pub fn xor(&self, other: impl Into<Element>) -> Validator {
        self.combine(other, Connective::Xor)
    }

    /// AND-combine the domain's `equals` predicate with `value` bound.
    ///
    /// Shorthand for `chain_with("equals", [value])`, so an overridden
    /// `equals` entry is honoured.
    ///
    /// ```rust
    /// use validator_chain::{NumberValidator, ValidatorError};
    ///
    /// # fn main() -> Result<(), ValidatorError> {
    /// let four = NumberValidator::new().even()?.equals(4)?;
    /// assert!(four.evaluate(4));
    /// assert!(four.evaluate(4.0));
    /// assert!(!four.evaluate(6));
    /// # Ok(())
    /// # }
    /// ```
    pub fn equals(&self, value: impl Into<Value>) -> Result<Validator, ValidatorError> {
        let expected: Value = value.into();
        self.chain_with("equals", [expected])
    }

    /// Evaluate the validator against `value`.
    pub fn evaluate(&self, value: impl Into<Value>) -> bool {
        self.check(&value.into())
    }

    /// Return `Err(AssertionFailure)` without a message if `value` is rejected.
    pub fn assert_value(&self, value: impl Into<Value>) -> Result<(), AssertionFailure> {
        self.assert_checked(&value.into(), None)
    }

    /// Return `Err(AssertionFailure)` carrying `message` if `value` is rejected.
    pub fn assert_value_with(
        &self,
        value: impl Into<Value>,
        message: impl Into<String>,
    ) -> Result<(), AssertionFailure> {
        self.assert_checked(&value.into(), Some(message.into()))
    }

    fn assert_checked(&self, value: &Value, message: Option<String>) -> Result<(), AssertionFailure> {
        if self.check(value) {
            return Ok(());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(validator = %self, value = %value, "value rejected by validator");

        Err(match message {
            Some(message) => AssertionFailure::with_message(message),
            None => AssertionFailure::new(),
        })
    }

    /// A new validator with the same connective and a shallow copy of the
    /// elements. Predicates are shared, not cloned.
    pub fn copy(&self) -> Validator {
        Validator {
            domain: Arc::clone(&self.domain),
            connective: self.connective,
            elements: self.elements.clone(),
        }
    }
}

impl Predicate<Value> for Validator {
    fn check(&self, value: &Value) -> bool {
        self.connective
            .evaluate(self.elements.iter().map(|element| element.check(value)))
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("domain", &self.domain.name())
            .field("connective", &self.connective)
            .field("elements", &self.elements)
            .finish()
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.elements.is_empty() {
            return f.write_str("<empty>");
        }
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", self.connective)?;
            }
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}

macro_rules! impl_connective_ops {
    ($($op:ident, $method:ident, $combine:ident);+ $(;)?) => {
        $(
            impl<R: Into<Element>> $op<R> for Validator {
                type Output = Validator;

                fn $method(self, rhs: R) -> Validator {
                    self.$combine(rhs)
                }
            }

            impl<R: Into<Element>> $op<R> for &Validator {
                type Output = Validator;

                fn $method(self, rhs: R) -> Validator {
                    self.$combine(rhs)
                }
            }
        )+
    };
}

impl_connective_ops!(
    BitAnd, bitand, and;
    BitOr, bitor, or;
    BitXor, bitxor, xor;
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain;

    fn always(result: bool) -> NamedPredicate {
        let name = if result { "yes" } else { "no" };
        NamedPredicate::new(name, move |_: &Value| result)
    }

    fn empty() -> Validator {
        Validator::new(domain::base())
    }

    #[test]
    fn test_empty_and_accepts_everything() {
        let v = Validator::with_connective(domain::base(), Connective::And);
        assert!(v.evaluate(1));
        assert!(v.evaluate("anything"));
    }

    #[test]
    fn test_empty_or_rejects_everything() {
        let v = Validator::with_connective(domain::base(), Connective::Or);
        assert!(!v.evaluate(1));
        assert!(!v.evaluate(Value::Null));
    }

    #[test]
    fn test_single_element_adopts_connective() {
        let v = empty().and(always(true));
        assert_eq!(v.connective(), Connective::And);

        let v = v.or(always(false));
        assert_eq!(v.connective(), Connective::Or);
        assert_eq!(v.len(), 2);
        assert!(v.elements().iter().all(|e| !e.is_validator()));
    }

    #[test]
    fn test_same_connective_flattens() {
        let v = empty().or(always(false)).or(always(false)).or(always(true));
        assert_eq!(v.len(), 3);
        assert_eq!(v.connective(), Connective::Or);
        assert!(v.evaluate(0));
    }

    #[test]
    fn test_different_connective_nests() {
        let v = empty().and(always(true)).and(always(false)).or(always(true));
        assert_eq!(v.connective(), Connective::Or);
        assert_eq!(v.len(), 2);

        let inner = v.elements()[0].as_validator().unwrap();
        assert_eq!(inner.connective(), Connective::And);
        assert_eq!(inner.len(), 2);
        assert!(!v.elements()[1].is_validator());
        assert_eq!(v.to_string(), "(yes AND no) OR yes");
    }

    #[test]
    fn test_combine_leaves_operands_untouched() {
        let base = empty().and(always(true)).and(always(true));
        let combined = base.or(always(false));

        assert_eq!(base.len(), 2);
        assert_eq!(base.connective(), Connective::And);
        assert_eq!(combined.len(), 2);
        assert_eq!(combined.connective(), Connective::Or);
    }

    #[test]
    fn test_combining_a_validator_copies_it() {
        let group = empty().and(always(true));
        let combined = empty().and(always(true)).and(&group);
        let extended = group.and(always(false));

        // the element captured in `combined` does not see `extended`
        assert!(combined.evaluate(0));
        assert!(!extended.evaluate(0));
        assert_eq!(combined.elements()[1].as_validator().unwrap().len(), 1);
    }

    #[test]
    fn test_copy_preserves_behaviour() {
        let v = empty().and(always(true)).xor(always(false));
        let copy = v.copy();
        assert_eq!(copy.connective(), v.connective());
        assert_eq!(copy.len(), v.len());
        assert_eq!(copy.evaluate(1), v.evaluate(1));
    }

    #[test]
    fn test_operators() {
        let yes = empty().and(always(true));
        let no = empty().and(always(false));

        assert!((&yes | &no).evaluate(0));
        assert!(!(&yes & &no).evaluate(0));
        assert!((&yes ^ &no).evaluate(0));
        assert!(!(yes.clone() ^ yes).evaluate(0));
    }

    #[test]
    fn test_equals() {
        let v = empty().equals("abc").unwrap();
        assert!(v.evaluate("abc"));
        assert!(!v.evaluate("abd"));
        assert_eq!(v.to_string(), r#"equals("abc")"#);
    }

    #[test]
    fn test_equals_needs_a_registered_entry() {
        let bare = Validator::new(Domain::root("validator_equals_test"));
        assert!(bare.equals(1).unwrap_err().is_unknown_predicate());
    }

    #[test]
    fn test_assert_value() {
        let v = empty().and(always(false));
        assert_eq!(v.assert_value(1), Err(AssertionFailure::new()));
        assert_eq!(
            v.assert_value_with(1, "rejected"),
            Err(AssertionFailure::with_message("rejected"))
        );
        assert!(empty().assert_value(1).is_ok());
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_panicking_predicate_aborts_evaluation() {
        let v = empty()
            .or(NamedPredicate::new("boom", |_: &Value| -> bool { panic!("boom") }))
            .or(always(true));
        v.evaluate(0);
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(empty().to_string(), "<empty>");
    }
}
