//! Builtin domains and their typed front doors
//!
//! Three domains are defined once, on first use:
//!
//! - [`base()`] (`validator`): `equals`, `value_in`, `instance_of`
//! - [`number()`] (`number`, derived from base): sign, parity, intervals,
//!   primality, ...
//! - [`text()`] (`text`, derived from base): character classes, affixes,
//!   regex matching
//!
//! Each has a typed wrapper ([`AnyValidator`], [`NumberValidator`],
//! [`TextValidator`]) exposing the builtin predicates as fluent methods. A
//! fluent method resolves its name through the registry exactly like
//! [`Validator::chain_with`], so it also sees anything registered later with
//! [`Domain::register`].
//!
//! # Example
//!
//! ```rust
//! use validator_chain::{NumberValidator, TextValidator, ValidatorError};
//!
//! # fn main() -> Result<(), ValidatorError> {
//! let n = NumberValidator::new();
//! assert!(n.between(2, 7)?.positive()?.evaluate(5));
//! assert!((n.even()? | n.prime()?).evaluate(5));
//! assert!(!n.even()?.prime()?.evaluate(5));
//!
//! let s = TextValidator::new();
//! assert!(s.digit()?.evaluate("5"));
//! assert!(s.starts_with("ab")?.lowercase()?.evaluate("abc"));
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, LazyLock};

use crate::registry::Domain;
use crate::value::Param;

/// Defines a typed wrapper around [`Validator`](crate::Validator) for one
/// domain, together with the base predicates every domain inherits.
///
/// The typed methods are shorthands for `chain_with` on the wrapped
/// validator: they resolve their name through the domain registry.
macro_rules! domain_validator {
    (@ops $name:ident, $op:ident, $method:ident, $combine:ident) => {
        impl<R: Into<$crate::validator::Element>> std::ops::$op<R> for $name {
            type Output = $name;

            fn $method(self, rhs: R) -> $name {
                self.$combine(rhs)
            }
        }

        impl<R: Into<$crate::validator::Element>> std::ops::$op<R> for &$name {
            type Output = $name;

            fn $method(self, rhs: R) -> $name {
                self.$combine(rhs)
            }
        }
    };

    ($(#[$meta:meta])* $name:ident => $domain:path) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name($crate::validator::Validator);

        impl $name {
            /// An empty validator of this domain.
            pub fn new() -> Self {
                Self($crate::validator::Validator::new($domain()))
            }

            /// An empty validator whose typed methods resolve through `domain`.
            ///
            /// Use this with a domain derived from the builtin one to override
            /// or extend its predicates. Names `domain` cannot resolve fail
            /// with `UnknownPredicate`.
            pub fn in_domain(domain: std::sync::Arc<$crate::registry::Domain>) -> Self {
                Self($crate::validator::Validator::new(domain))
            }

            /// Unwrap into a plain validator.
            pub fn into_validator(self) -> $crate::validator::Validator {
                self.0
            }

            /// AND-combine an arbitrary predicate.
            pub fn with_predicate(&self, predicate: $crate::predicate::NamedPredicate) -> Self {
                Self(self.0.and(predicate))
            }

            /// Combine with AND logic.
            pub fn and(&self, other: impl Into<$crate::validator::Element>) -> Self {
                Self(self.0.and(other))
            }

            /// Combine with OR logic.
            pub fn or(&self, other: impl Into<$crate::validator::Element>) -> Self {
                Self(self.0.or(other))
            }

            /// Combine with exactly-one-of logic.
            pub fn xor(&self, other: impl Into<$crate::validator::Element>) -> Self {
                Self(self.0.xor(other))
            }

            /// The candidate equals `value`.
            pub fn equals(
                &self,
                value: impl Into<$crate::value::Value>,
            ) -> Result<Self, $crate::error::ValidatorError> {
                let value: $crate::value::Value = value.into();
                self.bind("equals", [value])
            }

            /// The candidate is an element of a list, or a substring of a text.
            ///
            /// # Errors
            ///
            /// `InvalidParameter` unless `possibilities` is a list or a text.
            pub fn value_in(
                &self,
                possibilities: impl Into<$crate::value::Value>,
            ) -> Result<Self, $crate::error::ValidatorError> {
                let possibilities: $crate::value::Value = possibilities.into();
                self.bind("value_in", [possibilities])
            }

            /// The candidate is of `kind`.
            pub fn instance_of(
                &self,
                kind: $crate::value::ValueKind,
            ) -> Result<Self, $crate::error::ValidatorError> {
                self.bind("instance_of", [kind])
            }

            // resolved by name, like `chain_with`
            fn bind<I>(&self, name: &str, params: I) -> Result<Self, $crate::error::ValidatorError>
            where
                I: IntoIterator,
                I::Item: Into<$crate::value::Param>,
            {
                self.0.chain_with(name, params).map(Self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::ops::Deref for $name {
            type Target = $crate::validator::Validator;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<$name> for $crate::validator::Validator {
            fn from(validator: $name) -> Self {
                validator.0
            }
        }

        impl From<$name> for $crate::validator::Element {
            fn from(validator: $name) -> Self {
                $crate::validator::Element::Validator(validator.0)
            }
        }

        impl From<&$name> for $crate::validator::Element {
            fn from(validator: &$name) -> Self {
                $crate::validator::Element::Validator(validator.0.copy())
            }
        }

        impl $crate::predicate::Predicate<$crate::value::Value> for $name {
            #[inline]
            fn check(&self, value: &$crate::value::Value) -> bool {
                self.0.check(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        domain_validator!(@ops $name, BitAnd, bitand, and);
        domain_validator!(@ops $name, BitOr, bitor, or);
        domain_validator!(@ops $name, BitXor, bitxor, xor);
    };
}

pub mod common;
pub mod numeric;
pub mod textual;

pub use common::AnyValidator;
pub use numeric::NumberValidator;
pub use textual::TextValidator;

const NO_PARAMS: [Param; 0] = [];

static BASE: LazyLock<Arc<Domain>> = LazyLock::new(common::define);
static NUMBER: LazyLock<Arc<Domain>> = LazyLock::new(|| numeric::define(&BASE));
static TEXT: LazyLock<Arc<Domain>> = LazyLock::new(|| textual::define(&BASE));

/// The root domain every builtin domain derives from.
pub fn base() -> Arc<Domain> {
    Arc::clone(&BASE)
}

/// The numeric domain.
pub fn number() -> Arc<Domain> {
    Arc::clone(&NUMBER)
}

/// The textual domain.
pub fn text() -> Arc<Domain> {
    Arc::clone(&TEXT)
}
