//! Testing utilities for validators
//!
//! Assertion macros that report the validator and the candidate on failure,
//! and property-based testing support behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use validator_chain::{assert_invalid, assert_rejects_with, assert_valid};
//! use validator_chain::{NumberValidator, ValidatorError};
//!
//! let small_prime = NumberValidator::new().prime()?.max(10)?;
//! assert_valid!(small_prime, 7);
//! assert_invalid!(small_prime, 11);
//!
//! assert_rejects_with!(
//!     small_prime.chain("nope"),
//!     ValidatorError::UnknownPredicate { .. }
//! );
//! assert_rejects_with!(
//!     NumberValidator::new().max("ten"),
//!     ValidatorError::InvalidParameter { index: 0, .. }
//! );
//! # Ok::<(), ValidatorError>(())
//! ```

/// Assert that a validator accepts a value.
///
/// The value goes through `Into<Value>`, like [`Validator::evaluate`](crate::Validator::evaluate).
///
/// # Example
///
/// ```rust
/// use validator_chain::{assert_valid, TextValidator};
///
/// assert_valid!(TextValidator::new().lowercase().unwrap(), "quiet");
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validator:expr, $value:expr) => {{
        let value: $crate::Value = ::std::convert::Into::into($value);
        let validator = &$validator;
        if !$crate::Predicate::check(validator, &value) {
            panic!("Expected {} to satisfy `{}`", value, validator);
        }
    }};
}

/// Assert that a validator rejects a value.
///
/// # Example
///
/// ```rust
/// use validator_chain::{assert_invalid, TextValidator};
///
/// assert_invalid!(TextValidator::new().lowercase().unwrap(), "LOUD");
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validator:expr, $value:expr) => {{
        let value: $crate::Value = ::std::convert::Into::into($value);
        let validator = &$validator;
        if $crate::Predicate::check(validator, &value) {
            panic!("Expected {} to violate `{}`", value, validator);
        }
    }};
}

/// Assert that a result is an error matching a pattern.
///
/// # Example
///
/// ```rust
/// use validator_chain::{assert_rejects_with, NumberValidator, ValidatorError};
///
/// let result = NumberValidator::new().chain_with("between", [1]);
/// assert_rejects_with!(result, ValidatorError::ArityMismatch { expected: 2, found: 1, .. });
/// ```
#[macro_export]
macro_rules! assert_rejects_with {
    ($result:expr, $pattern:pat) => {
        match $result {
            Err(error) => {
                if !matches!(error, $pattern) {
                    panic!(
                        "Expected error matching `{}`, got: {:?}",
                        stringify!($pattern),
                        error
                    );
                }
            }
            Ok(value) => {
                panic!(
                    "Expected error matching `{}`, got Ok: {:?}",
                    stringify!($pattern),
                    value
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{Connective, Value};

#[cfg(feature = "proptest")]
impl Arbitrary for Connective {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Connective::And),
            Just(Connective::Or),
            Just(Connective::Xor),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    /// Finite floats only, so every generated value equals itself.
    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            (-1.0e9..1.0e9f64).prop_map(Value::Float),
            "[a-zA-Z0-9 ]{0,12}".prop_map(Value::Text),
        ];
        leaf.prop_recursive(3, 16, 4, |inner| {
            prop::collection::vec(inner, 0..4).prop_map(Value::List)
        })
        .boxed()
    }
}
