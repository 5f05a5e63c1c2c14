//! Demonstrates tracing integration with validators
//!
//! Run with: cargo run --example tracing_demo --features tracing

use validator_chain::{domain, Factory, NumberValidator, ValidatorError, Value};

fn main() -> Result<(), ValidatorError> {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting tracing demo");

    // Registration is logged at debug level
    let number = domain::number().validator();
    number.register(
        "teen",
        Factory::direct(|v: &Value| v.as_i64().is_some_and(|n| (13..=19).contains(&n))),
    );

    // So are failed lookups and arity mismatches
    if let Err(e) = number.chain("adult") {
        tracing::warn!("Lookup failed: {}", e);
    }
    if let Err(e) = number.chain_with("between", [1]) {
        tracing::warn!("Currying failed: {}", e);
    }

    // And rejected assertions
    let teen_and_prime = NumberValidator::new().prime()?.and(
        number
            .chain("teen")
            .unwrap_or_else(|_| NumberValidator::new().into_validator()),
    );
    for age in [13, 15, 21] {
        match teen_and_prime.assert_value_with(age, "expected a prime teen") {
            Ok(()) => tracing::info!("{} accepted", age),
            Err(e) => tracing::info!("{} rejected: {}", age, e),
        }
    }

    Ok(())
}
