//! Tests and examples for the testing utilities
//!
//! This test suite demonstrates how to test code that builds validators.

use validator_chain::prelude::*;
use validator_chain::{assert_invalid, assert_rejects_with, assert_valid};

// Example domain: a sign-up form
fn username() -> TextValidator {
    TextValidator::new()
        .alphanumeric()
        .and_then(|s| s.lowercase())
        .expect("builtin text predicates")
}

fn age() -> NumberValidator {
    NumberValidator::new()
        .integer()
        .and_then(|n| n.closed_interval(13, 120))
        .expect("builtin number predicates")
}

fn country_code() -> AnyValidator {
    AnyValidator::new()
        .value_in(vec!["DE", "FR", "NL"])
        .expect("a list of possibilities")
}

// Tests demonstrating assertion macros

#[test]
fn test_assert_valid_with_good_username() {
    assert_valid!(username(), "alice42");
}

#[test]
fn test_assert_invalid_with_bad_usernames() {
    assert_invalid!(username(), "Alice");
    assert_invalid!(username(), "al ice");
    assert_invalid!(username(), "");
    assert_invalid!(username(), 42);
}

#[test]
fn test_age_bounds_are_inclusive() {
    assert_valid!(age(), 13);
    assert_valid!(age(), 120);
    assert_valid!(age(), 30.0);
    assert_invalid!(age(), 12);
    assert_invalid!(age(), 30.5);
}

#[test]
fn test_country_membership() {
    assert_valid!(country_code(), "NL");
    assert_invalid!(country_code(), "US");
}

#[test]
fn test_assert_rejects_with_unknown_name() {
    assert_rejects_with!(
        username().chain("palindrome"),
        ValidatorError::UnknownPredicate { .. }
    );
}

#[test]
fn test_assert_rejects_with_wrong_arity() {
    assert_rejects_with!(
        age().chain("between"),
        ValidatorError::ArityMismatch { expected: 2, found: 0, .. }
    );
}

#[test]
fn test_assert_rejects_with_bad_typed_parameter() {
    assert_rejects_with!(
        AnyValidator::new().value_in(true),
        ValidatorError::InvalidParameter { index: 0, .. }
    );
}

#[test]
fn test_assertion_messages() {
    let result = age().assert_value_with(9, "too young to sign up");
    assert_rejects_with!(result.clone(), AssertionFailure { .. });
    assert_eq!(
        result.unwrap_err().to_string(),
        "assertion failed: too young to sign up"
    );
}

#[test]
fn test_assertion_failure_converts_to_validator_error() {
    fn sign_up(name: &str, years: i64) -> Result<(), ValidatorError> {
        username().assert_value_with(name, "bad username")?;
        age().assert_value_with(years, "bad age")?;
        Ok(())
    }

    assert!(sign_up("bob", 40).is_ok());
    let err = sign_up("bob", 4).unwrap_err();
    assert!(err.is_assertion());
    assert_eq!(err.to_string(), "assertion failed: bad age");
}
