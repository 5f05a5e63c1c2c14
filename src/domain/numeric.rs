//! Number predicates
//!
//! Predicates over `Int` and `Float` values. Any other kind of value fails
//! every numeric predicate. Integers and floats compare with each other
//! numerically, so `between(2, 7)` accepts `2.5`.

use std::sync::Arc;

use super::NO_PARAMS;
use crate::error::ValidatorError;
use crate::predicate::Predicate;
use crate::registry::Domain;
use crate::value::{Param, Value};

domain_validator! {
    /// Validator of the `number` domain.
    ///
    /// Every fluent method resolves its predicate through the `number`
    /// registry, so it fails only when the name or its parameters are
    /// rejected there.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validator_chain::{NumberValidator, ValidatorError};
    ///
    /// # fn main() -> Result<(), ValidatorError> {
    /// let n = NumberValidator::new();
    ///
    /// let prime = n.prime()?;
    /// let primes: Vec<i32> = (1..20).filter(|x| prime.evaluate(*x)).collect();
    /// assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19]);
    ///
    /// let squares_or_primes = n.prime()? | n.perfect_square()?;
    /// let found: Vec<i32> = (1..12).filter(|x| squares_or_primes.evaluate(*x)).collect();
    /// assert_eq!(found, vec![1, 2, 3, 4, 5, 7, 9, 11]);
    /// # Ok(())
    /// # }
    /// ```
    NumberValidator => crate::domain::number
}

impl NumberValidator {
    /// Greater than zero.
    pub fn positive(&self) -> Result<Self, ValidatorError> {
        self.bind("positive", NO_PARAMS)
    }

    /// Zero or less.
    pub fn non_positive(&self) -> Result<Self, ValidatorError> {
        self.bind("non_positive", NO_PARAMS)
    }

    /// Less than zero.
    pub fn negative(&self) -> Result<Self, ValidatorError> {
        self.bind("negative", NO_PARAMS)
    }

    /// Zero or more.
    pub fn non_negative(&self) -> Result<Self, ValidatorError> {
        self.bind("non_negative", NO_PARAMS)
    }

    /// Divisible by two.
    pub fn even(&self) -> Result<Self, ValidatorError> {
        self.bind("even", NO_PARAMS)
    }

    /// Not divisible by two.
    pub fn odd(&self) -> Result<Self, ValidatorError> {
        self.bind("odd", NO_PARAMS)
    }

    /// The square of an integer.
    pub fn perfect_square(&self) -> Result<Self, ValidatorError> {
        self.bind("perfect_square", NO_PARAMS)
    }

    /// Has no fractional part.
    pub fn integer(&self) -> Result<Self, ValidatorError> {
        self.bind("integer", NO_PARAMS)
    }

    /// A prime number.
    pub fn prime(&self) -> Result<Self, ValidatorError> {
        self.bind("prime", NO_PARAMS)
    }

    /// Divisible by `factor`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `factor` is not a number.
    pub fn multiple_of(&self, factor: impl Into<Value>) -> Result<Self, ValidatorError> {
        let factor: Value = factor.into();
        self.bind("multiple_of", [factor])
    }

    /// Strictly between `lower` and `upper`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if either bound is not a number.
    pub fn between(
        &self,
        lower: impl Into<Value>,
        upper: impl Into<Value>,
    ) -> Result<Self, ValidatorError> {
        let bounds: [Value; 2] = [lower.into(), upper.into()];
        self.bind("between", bounds)
    }

    /// Same as [`between`](Self::between).
    pub fn open_interval(
        &self,
        lower: impl Into<Value>,
        upper: impl Into<Value>,
    ) -> Result<Self, ValidatorError> {
        let bounds: [Value; 2] = [lower.into(), upper.into()];
        self.bind("open_interval", bounds)
    }

    /// Between `lower` and `upper`, both included.
    pub fn closed_interval(
        &self,
        lower: impl Into<Value>,
        upper: impl Into<Value>,
    ) -> Result<Self, ValidatorError> {
        let bounds: [Value; 2] = [lower.into(), upper.into()];
        self.bind("closed_interval", bounds)
    }

    /// Strictly less than `upper`.
    pub fn max(&self, upper: impl Into<Value>) -> Result<Self, ValidatorError> {
        let upper: Value = upper.into();
        self.bind("max", [upper])
    }

    /// Strictly greater than `lower`.
    pub fn min(&self, lower: impl Into<Value>) -> Result<Self, ValidatorError> {
        let lower: Value = lower.into();
        self.bind("min", [lower])
    }
}

/// Greater than zero.
pub fn positive(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| n > 0.0)
}

/// Zero or less.
pub fn non_positive(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| n <= 0.0)
}

/// Less than zero.
pub fn negative(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| n < 0.0)
}

/// Zero or more.
pub fn non_negative(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| n >= 0.0)
}

/// Divisible by two.
pub fn even(value: &Value) -> bool {
    match *value {
        Value::Int(n) => n % 2 == 0,
        Value::Float(f) => f % 2.0 == 0.0,
        _ => false,
    }
}

/// Leaves a remainder of one when divided by two. Negative odd numbers count.
pub fn odd(value: &Value) -> bool {
    match *value {
        Value::Int(n) => n.rem_euclid(2) == 1,
        Value::Float(f) => f.rem_euclid(2.0) == 1.0,
        _ => false,
    }
}

/// The square of an integer.
pub fn perfect_square(value: &Value) -> bool {
    match *value {
        Value::Int(n) => n >= 0 && {
            let root = n.isqrt();
            root * root == n
        },
        // beware of precision for very large floats
        Value::Float(f) => f >= 0.0 && f.sqrt().fract() == 0.0,
        _ => false,
    }
}

/// Has no fractional part.
pub fn integer(value: &Value) -> bool {
    match *value {
        Value::Int(_) => true,
        Value::Float(f) => f.is_finite() && f.fract() == 0.0,
        _ => false,
    }
}

/// A prime number.
///
/// Integral floats are treated as the integer they hold.
pub fn prime(value: &Value) -> bool {
    value.as_i64().is_some_and(is_prime)
}

fn is_prime(n: i64) -> bool {
    match n {
        ..=1 => false,
        2 | 3 | 5 | 7 => true,
        _ if n % 2 == 0 => false,
        _ => (3..=ceil_sqrt(n)).step_by(2).all(|divisor| n % divisor != 0),
    }
}

fn ceil_sqrt(n: i64) -> i64 {
    let root = n.isqrt();
    if root * root < n {
        root + 1
    } else {
        root
    }
}

/// Predicate that checks a number is divisible by a factor.
///
/// Nothing is a multiple of zero.
#[derive(Clone, Debug)]
pub struct MultipleOf {
    factor: Value,
}

impl Predicate<Value> for MultipleOf {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        match (value, &self.factor) {
            (Value::Int(n), Value::Int(f)) => *f != 0 && n.wrapping_rem(*f) == 0,
            _ => match (value.as_f64(), self.factor.as_f64()) {
                (Some(n), Some(f)) => f != 0.0 && n % f == 0.0,
                _ => false,
            },
        }
    }
}

/// Create a predicate that checks divisibility by `factor`.
pub fn multiple_of(factor: Value) -> MultipleOf {
    MultipleOf { factor }
}

/// Predicate that checks a number lies strictly between two bounds.
#[derive(Clone, Debug)]
pub struct Between {
    lower: Value,
    upper: Value,
}

impl Predicate<Value> for Between {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.is_number() && self.lower < *value && *value < self.upper
    }
}

/// Create a predicate for the open interval `(lower, upper)`.
pub fn between(lower: Value, upper: Value) -> Between {
    Between { lower, upper }
}

/// Predicate that checks a number lies between two bounds, both included.
#[derive(Clone, Debug)]
pub struct ClosedInterval {
    lower: Value,
    upper: Value,
}

impl Predicate<Value> for ClosedInterval {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.is_number() && self.lower <= *value && *value <= self.upper
    }
}

/// Create a predicate for the closed interval `[lower, upper]`.
pub fn closed_interval(lower: Value, upper: Value) -> ClosedInterval {
    ClosedInterval { lower, upper }
}

/// Predicate that checks a number is strictly less than a bound.
#[derive(Clone, Debug)]
pub struct Max(pub Value);

impl Predicate<Value> for Max {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.is_number() && *value < self.0
    }
}

/// Create a predicate that checks `value < upper`.
pub fn max(upper: Value) -> Max {
    Max(upper)
}

/// Predicate that checks a number is strictly greater than a bound.
#[derive(Clone, Debug)]
pub struct Min(pub Value);

impl Predicate<Value> for Min {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.is_number() && self.0 < *value
    }
}

/// Create a predicate that checks `value > lower`.
pub fn min(lower: Value) -> Min {
    Min(lower)
}

pub(super) fn define(parent: &Arc<Domain>) -> Arc<Domain> {
    Domain::builder("number")
        .parent(parent)
        .predicate("positive", positive)
        .predicate("non_positive", non_positive)
        .predicate("negative", negative)
        .predicate("non_negative", non_negative)
        .predicate("even", even)
        .predicate("odd", odd)
        .predicate("perfect_square", perfect_square)
        .predicate("integer", integer)
        .predicate("prime", prime)
        .parameterized("multiple_of", 1, |p: &[Param]| {
            Ok(multiple_of(p[0].number("multiple_of", 0)?))
        })
        .parameterized("between", 2, |p: &[Param]| {
            Ok(between(p[0].number("between", 0)?, p[1].number("between", 1)?))
        })
        .parameterized("open_interval", 2, |p: &[Param]| {
            Ok(between(
                p[0].number("open_interval", 0)?,
                p[1].number("open_interval", 1)?,
            ))
        })
        .parameterized("closed_interval", 2, |p: &[Param]| {
            Ok(closed_interval(
                p[0].number("closed_interval", 0)?,
                p[1].number("closed_interval", 1)?,
            ))
        })
        .parameterized("max", 1, |p: &[Param]| Ok(max(p[0].number("max", 0)?)))
        .parameterized("min", 1, |p: &[Param]| Ok(min(p[0].number("min", 0)?)))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain;

    fn v(n: impl Into<Value>) -> Value {
        n.into()
    }

    #[test]
    fn test_sign() {
        assert!(positive(&v(1)) && !positive(&v(0)) && !positive(&v(-1)));
        assert!(non_positive(&v(0)) && non_positive(&v(-2.5)) && !non_positive(&v(1)));
        assert!(negative(&v(-0.5)) && !negative(&v(0)));
        assert!(non_negative(&v(0)) && !non_negative(&v(-1)));
        assert!(!positive(&v("1")));
        assert!(!positive(&Value::Float(f64::NAN)));
    }

    #[test]
    fn test_parity() {
        assert!(even(&v(4)) && even(&v(-4)) && even(&v(0)) && even(&v(4.0)));
        assert!(!even(&v(3)) && !even(&v(4.5)));
        assert!(odd(&v(3)) && odd(&v(-3)) && odd(&v(3.0)));
        assert!(!odd(&v(2)) && !odd(&v(3.5)));
    }

    #[test]
    fn test_perfect_square() {
        let found: Vec<i64> = (1..100).filter(|n| perfect_square(&v(*n))).collect();
        assert_eq!(found, vec![1, 4, 9, 16, 25, 36, 49, 64, 81]);
        assert!(perfect_square(&v(0)));
        assert!(perfect_square(&v(36.0)));
        assert!(!perfect_square(&v(-4)));
        assert!(!perfect_square(&v(2.0)));
    }

    #[test]
    fn test_integer() {
        assert!(integer(&v(3)) && integer(&v(3.0)));
        assert!(!integer(&v(3.1)) && !integer(&Value::Float(f64::INFINITY)));
    }

    #[test]
    fn test_prime_up_to_one_hundred() {
        let primes: Vec<i64> = (1..=100).filter(|n| prime(&v(*n))).collect();
        assert_eq!(
            primes,
            vec![
                2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73,
                79, 83, 89, 97
            ]
        );
    }

    #[test]
    fn test_prime_edge_cases() {
        assert!(!prime(&v(0)));
        assert!(!prime(&v(1)));
        assert!(!prime(&v(-7)));
        assert!(!prime(&v(9)));
        assert!(!prime(&v(25)));
        assert!(!prime(&v(49)));
        assert!(prime(&v(7.0)));
        assert!(!prime(&v(7.5)));
        assert!(prime(&v(7919)));
        assert!(!prime(&v(7917)));
    }

    #[test]
    fn test_multiple_of() {
        assert!(multiple_of(v(3)).check(&v(9)));
        assert!(!multiple_of(v(3)).check(&v(10)));
        assert!(multiple_of(v(0.5)).check(&v(2)));
        assert!(!multiple_of(v(0)).check(&v(0)));
        assert!(multiple_of(v(-1)).check(&v(i64::MIN)));
    }

    #[test]
    fn test_intervals() {
        let open = between(v(2), v(7));
        assert!(open.check(&v(5)) && open.check(&v(2.5)));
        assert!(!open.check(&v(2)) && !open.check(&v(7)) && !open.check(&v(8)));

        let closed = closed_interval(v(2), v(7));
        assert!(closed.check(&v(2)) && closed.check(&v(7)));
        assert!(!closed.check(&v(1)));

        assert!(max(v(3)).check(&v(2)) && !max(v(3)).check(&v(3)));
        assert!(min(v(3)).check(&v(4)) && !min(v(3)).check(&v(3)));
        assert!(!between(v("a"), v("z")).check(&v("m")));
    }

    #[test]
    fn test_predicate_debug() {
        assert_eq!(
            format!("{:?}", between(v(2), v(7))),
            "Between { lower: Int(2), upper: Int(7) }"
        );
        assert_eq!(format!("{:?}", max(v(1.5))), "Max(Float(1.5))");
    }

    #[test]
    fn test_typed_methods_match_registry() {
        let n = NumberValidator::new();
        let typed = n.between(2, 7).unwrap();
        let dynamic = domain::number()
            .validator()
            .chain_with("between", [2, 7])
            .unwrap();

        for x in 0..10 {
            assert_eq!(typed.evaluate(x), dynamic.evaluate(x), "x = {}", x);
        }
        assert_eq!(typed.to_string(), dynamic.to_string());
    }

    #[test]
    fn test_typed_methods_see_overrides() {
        let custom = Domain::derive("number_override_test", &domain::number());
        custom.register(
            "even",
            crate::registry::Factory::direct(|value: &Value| value.as_i64() == Some(3)),
        );
        custom.register(
            "between",
            crate::registry::Factory::parameterized(2, |_: &[Param]| Ok(|_: &Value| false)),
        );

        let n = NumberValidator::in_domain(custom);
        let typed = n.even().unwrap();
        let dynamic = n.chain("even").unwrap();
        for x in 0..6 {
            assert_eq!(typed.evaluate(x), dynamic.evaluate(x), "x = {}", x);
        }
        assert!(typed.evaluate(3));
        assert!(!typed.evaluate(2));
        assert!(!n.between(0, 10).unwrap().evaluate(5));

        // the builtin domain is untouched
        assert!(NumberValidator::new().even().unwrap().evaluate(2));
    }

    #[test]
    fn test_typed_methods_reject_bad_parameters() {
        let err = NumberValidator::new().max("ten").unwrap_err();
        assert!(matches!(
            err,
            ValidatorError::InvalidParameter { ref name, index: 0, .. } if *name == "max"
        ));
        let text_backed = NumberValidator::in_domain(domain::text());
        assert!(text_backed.even().unwrap_err().is_unknown_predicate());
    }

    #[test]
    fn test_open_interval_aliases_between() {
        let n = NumberValidator::new();
        for x in 0..10 {
            assert_eq!(
                n.open_interval(2, 7).unwrap().evaluate(x),
                n.between(2, 7).unwrap().evaluate(x)
            );
        }
    }

    #[test]
    fn test_registry_rejects_text_bounds() {
        let err = domain::number()
            .validator()
            .chain_with("max", ["ten"])
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid parameter 0 for `max`: expected a number, found text");
    }

    #[test]
    fn test_chained_labels() -> Result<(), ValidatorError> {
        let v = NumberValidator::new().multiple_of(3)?.closed_interval(0, 30)?.odd()?;
        assert_eq!(v.to_string(), "multiple_of(3) AND closed_interval(0, 30) AND odd");
        assert!(v.evaluate(9));
        assert!(!v.evaluate(12));
        assert!(!v.evaluate(33));
        Ok(())
    }
}
