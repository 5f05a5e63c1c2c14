//! # Validator Chain
//!
//! Composable value validators built from named predicates.
//!
//! A [`Validator`] is an immutable tree of predicates joined by a
//! [`Connective`] (AND, OR, exactly-one-of XOR). Every combination returns a
//! new validator and leaves its operands untouched. Predicates live in
//! per-[`Domain`] registries that inherit from a parent, so a `number`
//! validator can chain both its own predicates and the base ones, and new
//! predicates can be registered at runtime.
//!
//! ## Quick Example
//!
//! ```rust
//! use validator_chain::{NumberValidator, TextValidator};
//!
//! let n = NumberValidator::new();
//!
//! // Chaining is AND
//! let small_even = n.between(0, 10)?.even()?;
//! assert!(small_even.evaluate(4));
//! assert!(!small_even.evaluate(5));
//!
//! // Operators build OR and XOR groups
//! let either = n.prime()? ^ n.even()?;
//! assert!(either.evaluate(3));
//! assert!(!either.evaluate(2));
//!
//! // Typed methods are shorthands for registry lookups
//! let s = TextValidator::new().chain_with("starts_with", ["ab"])?.chain("lowercase")?;
//! assert_eq!(s.to_string(), TextValidator::new().starts_with("ab")?.lowercase()?.to_string());
//! assert!(s.evaluate("abc"));
//! assert!(s.assert_value("ABC").is_err());
//! # Ok::<(), validator_chain::ValidatorError>(())
//! ```
//!
//! ## Runtime registration
//!
//! ```rust
//! use validator_chain::{domain, Factory, Value};
//!
//! let number = domain::number().validator();
//! number.register("answer", Factory::direct(|v: &Value| *v == Value::from(42)));
//!
//! assert!(number.chain("answer")?.evaluate(42));
//! assert!(domain::text().validator().chain("answer").is_err());
//! # Ok::<(), validator_chain::ValidatorError>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod connective;
pub mod domain;
pub mod error;
pub mod predicate;
pub mod registry;
pub mod testing;
pub mod validator;
pub mod value;

// Re-exports
pub use connective::Connective;
pub use domain::{AnyValidator, NumberValidator, TextValidator};
pub use error::{AssertionFailure, ValidatorError};
pub use predicate::{NamedPredicate, Predicate, SharedPredicate};
pub use registry::{BuildFn, Chain, Curried, Domain, DomainBuilder, Factory, Lineage};
pub use validator::{Element, Validator};
pub use value::{Param, Value, ValueKind};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::connective::Connective;
    pub use crate::domain::{AnyValidator, NumberValidator, TextValidator};
    pub use crate::error::{AssertionFailure, ValidatorError};
    pub use crate::predicate::{NamedPredicate, Predicate};
    pub use crate::registry::{Chain, Domain, Factory};
    pub use crate::validator::Validator;
    pub use crate::value::{Param, Value, ValueKind};
}
