//! Predicates: the leaves of every validator
//!
//! A predicate is a pure function from a candidate value to `bool`. Closures
//! are predicates, and so is every [`Validator`](crate::Validator), which is
//! what lets validators nest inside one another.
//!
//! # Example
//!
//! ```rust
//! use validator_chain::{NamedPredicate, Predicate, Value};
//!
//! let short = NamedPredicate::new("short", |v: &Value| v.as_str().is_some_and(|s| s.len() < 5));
//! assert!(short.check(&Value::from("abc")));
//! assert!(!short.check(&Value::from("abcdef")));
//! assert_eq!(short.name(), Some("short"));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// A pure predicate over values of type T.
///
/// Implemented for every `Fn(&T) -> bool` closure. Predicates must be
/// `Send + Sync` so validators can be shared across threads.
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// A shared, type-erased predicate over [`Value`].
pub type SharedPredicate = Arc<dyn Predicate<Value>>;

/// A shared predicate with an optional name for diagnostics.
///
/// Cloning is cheap: the predicate itself is behind an `Arc` and is never
/// copied.
#[derive(Clone)]
pub struct NamedPredicate {
    name: Option<Arc<str>>,
    predicate: SharedPredicate,
}

impl NamedPredicate {
    /// Wrap `predicate` under `name`.
    pub fn new<P>(name: impl Into<Arc<str>>, predicate: P) -> Self
    where
        P: Predicate<Value> + 'static,
    {
        Self {
            name: Some(name.into()),
            predicate: Arc::new(predicate),
        }
    }

    /// Wrap `predicate` without a name.
    pub fn anonymous<P>(predicate: P) -> Self
    where
        P: Predicate<Value> + 'static,
    {
        Self {
            name: None,
            predicate: Arc::new(predicate),
        }
    }

    /// Wrap an already shared predicate.
    pub fn from_shared(name: Option<Arc<str>>, predicate: SharedPredicate) -> Self {
        Self { name, predicate }
    }

    /// The diagnostic name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The same predicate advertised under a different name.
    pub fn renamed(&self, name: impl Into<Arc<str>>) -> Self {
        Self {
            name: Some(name.into()),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl Predicate<Value> for NamedPredicate {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.predicate.check(value)
    }
}

impl fmt::Debug for NamedPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NamedPredicate")
            .field(&self.name.as_deref().unwrap_or("<anonymous>"))
            .finish()
    }
}

impl fmt::Display for NamedPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or("<predicate>"))
    }
}

/// Diagnostic name of a predicate bound to parameters, e.g. `between(2, 7)`.
pub(crate) fn call_label<D: fmt::Display>(name: &str, params: &[D]) -> String {
    let params: Vec<String> = params.iter().map(ToString::to_string).collect();
    format!("{}({})", name, params.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_label() {
        assert_eq!(call_label("between", &[2, 7]), "between(2, 7)");
        assert_eq!(call_label::<i32>("none", &[]), "none()");
    }

    #[test]
    fn test_closure_as_predicate() {
        let is_even = |x: &i32| x % 2 == 0;
        assert!(is_even.check(&4));
        assert!(!is_even.check(&3));
    }

    #[test]
    fn test_named_predicate_delegates() {
        let positive = NamedPredicate::new("positive", |v: &Value| {
            v.as_f64().is_some_and(|n| n > 0.0)
        });
        assert!(positive.check(&Value::from(3)));
        assert!(!positive.check(&Value::from(-3)));
    }

    #[test]
    fn test_renamed_shares_predicate() {
        let p = NamedPredicate::anonymous(|v: &Value| v.is_number());
        assert_eq!(p.name(), None);

        let named = p.renamed("number");
        assert_eq!(named.name(), Some("number"));
        assert!(named.check(&Value::from(1.5)));
        assert!(Arc::ptr_eq(&p.predicate, &named.predicate));
    }

    #[test]
    fn test_debug_and_display() {
        let p = NamedPredicate::anonymous(|_: &Value| true);
        assert_eq!(format!("{:?}", p), r#"NamedPredicate("<anonymous>")"#);
        assert_eq!(p.renamed("always").to_string(), "always");
    }
}
