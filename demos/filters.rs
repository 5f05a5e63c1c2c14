//! Filtering ranges with number validators
//!
//! Run with: cargo run --example filters

use validator_chain::{NumberValidator, TextValidator, ValidatorError};

fn main() -> Result<(), ValidatorError> {
    let n = NumberValidator::new();

    let prime = n.prime()?;
    let primes: Vec<i32> = (1..=50).filter(|x| prime.evaluate(*x)).collect();
    println!("primes: {:?}", primes);

    let square = n.perfect_square()?;
    let squares: Vec<i32> = (1..=50).filter(|x| square.evaluate(*x)).collect();
    println!("perfect squares: {:?}", squares);

    // Exactly one of the two
    let odd_one_out = prime ^ n.odd()?;
    let found: Vec<i32> = (1..=20).filter(|x| odd_one_out.evaluate(*x)).collect();
    println!("{}: {:?}", odd_one_out, found);

    let s = TextValidator::new();
    let words = ["Hello", "WORLD", "rust", "Title Case", "42"];
    let shouting = s.uppercase()?;
    for word in words {
        println!("{:>12} uppercase={}", word, shouting.evaluate(word));
    }

    // Parameters are checked by the registry
    if let Err(e) = s.matches("[unclosed") {
        println!("rejected pattern: {}", e);
    }

    Ok(())
}
