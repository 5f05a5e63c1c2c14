//! Resolving registry names on a validator.
//!
//! Resolution turns a predicate name into the next link of a chain:
//!
//! - a predicate that only takes the candidate value is AND-combined
//!   straight away, producing a new validator;
//! - a predicate that needs extra parameters produces a [`Curried`] call,
//!   which AND-combines the bound predicate once it is given them.

use std::fmt;
use std::sync::Arc;

use super::{BuildFn, Factory};
use crate::error::ValidatorError;
use crate::predicate::{call_label, NamedPredicate};
use crate::validator::Validator;
use crate::value::Param;

/// The outcome of resolving a name on a validator.
#[derive(Debug, Clone)]
pub enum Chain {
    /// The predicate took no extra parameters and has been combined.
    Bound(Validator),
    /// The predicate still needs its parameters.
    Curried(Curried),
}

impl Chain {
    /// Returns true if parameters are still required.
    pub fn is_curried(&self) -> bool {
        matches!(self, Chain::Curried(_))
    }

    /// The bound validator, or `ArityMismatch` if parameters are missing.
    pub fn into_validator(self) -> Result<Validator, ValidatorError> {
        match self {
            Chain::Bound(validator) => Ok(validator),
            Chain::Curried(curried) => Err(curried.missing(0)),
        }
    }
}

/// A parameterised predicate waiting for its parameters.
///
/// # Example
///
/// ```rust
/// use validator_chain::{Chain, NumberValidator};
///
/// let Chain::Curried(between) = NumberValidator::new().resolve("between")? else {
///     unreachable!()
/// };
/// assert_eq!(between.arity(), 2);
///
/// let v = between.call([2, 7])?;
/// assert!(v.evaluate(5));
/// assert!(!v.evaluate(7));
/// assert!(between.call([2]).is_err());
/// # Ok::<(), validator_chain::ValidatorError>(())
/// ```
#[derive(Clone)]
pub struct Curried {
    base: Validator,
    name: Arc<str>,
    arity: usize,
    build: Arc<BuildFn>,
}

impl Curried {
    /// The registry name being curried.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of parameters `call` expects.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Bind the parameters and AND-combine the resulting predicate.
    pub fn call<I>(&self, params: I) -> Result<Validator, ValidatorError>
    where
        I: IntoIterator,
        I::Item: Into<Param>,
    {
        let params: Vec<Param> = params.into_iter().map(Into::into).collect();
        if params.len() != self.arity {
            return Err(self.missing(params.len()));
        }

        let predicate = (self.build)(&params)?;
        let label = call_label(&self.name, &params);
        Ok(self
            .base
            .and(NamedPredicate::from_shared(Some(label.into()), predicate)))
    }

    fn missing(&self, found: usize) -> ValidatorError {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            predicate = %self.name,
            expected = self.arity,
            found,
            "wrong number of parameters"
        );

        ValidatorError::arity_mismatch(&*self.name, self.arity, found)
    }
}

impl fmt::Debug for Curried {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curried")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl Validator {
    /// Resolve `name` through this validator's domain and its ancestors.
    ///
    /// # Errors
    ///
    /// `UnknownPredicate` if no domain in the lineage defines `name`.
    pub fn resolve(&self, name: &str) -> Result<Chain, ValidatorError> {
        let Some(factory) = self.domain().lookup(name) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(domain = %self.domain().name(), predicate = %name, "unknown predicate");

            return Err(ValidatorError::unknown_predicate(self.domain().name(), name));
        };

        match factory {
            Factory::Direct(predicate) => Ok(Chain::Bound(
                self.and(NamedPredicate::from_shared(Some(name.into()), predicate)),
            )),
            Factory::Parameterized { arity: 0, build } => {
                let predicate = build(&[])?;
                Ok(Chain::Bound(
                    self.and(NamedPredicate::from_shared(Some(name.into()), predicate)),
                ))
            }
            Factory::Parameterized { arity, build } => Ok(Chain::Curried(Curried {
                base: self.copy(),
                name: name.into(),
                arity,
                build,
            })),
        }
    }

    /// Chain a predicate that takes no extra parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validator_chain::NumberValidator;
    ///
    /// let v = NumberValidator::new().chain("even")?.chain("prime")?;
    /// assert!(v.evaluate(2));
    /// assert!(!v.evaluate(5));
    /// # Ok::<(), validator_chain::ValidatorError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// `UnknownPredicate` for unknown names, `ArityMismatch` if the
    /// predicate needs parameters.
    pub fn chain(&self, name: &str) -> Result<Validator, ValidatorError> {
        self.resolve(name)?.into_validator()
    }

    /// Chain a predicate, supplying its parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validator_chain::{NumberValidator, TextValidator};
    ///
    /// let v = NumberValidator::new().chain_with("between", [2, 7])?.chain("positive")?;
    /// assert!(v.evaluate(5));
    ///
    /// let v = TextValidator::new().chain_with("starts_with", ["ab"])?;
    /// assert!(v.evaluate("abc"));
    /// # Ok::<(), validator_chain::ValidatorError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// `UnknownPredicate`, `ArityMismatch` when the parameter count differs
    /// from the declared arity, or `InvalidParameter` when the factory
    /// rejects a parameter.
    pub fn chain_with<I>(&self, name: &str, params: I) -> Result<Validator, ValidatorError>
    where
        I: IntoIterator,
        I::Item: Into<Param>,
    {
        match self.resolve(name)? {
            Chain::Curried(curried) => curried.call(params),
            Chain::Bound(validator) => {
                let found = params.into_iter().count();
                if found == 0 {
                    Ok(validator)
                } else {
                    Err(ValidatorError::arity_mismatch(name, 0, found))
                }
            }
        }
    }

    /// Register `factory` under `name` in this validator's domain.
    ///
    /// Every validator of the domain (and of domains derived from it) can
    /// chain the new predicate; sibling domains cannot.
    pub fn register(&self, name: impl Into<String>, factory: Factory) {
        self.domain().register(name, factory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Domain;
    use crate::value::Value;

    fn domain() -> Arc<Domain> {
        Domain::builder("test")
            .predicate("yes", |_: &Value| true)
            .parameterized("above", 1, |p: &[Param]| {
                let bound = p[0].number("above", 0)?;
                Ok(move |v: &Value| *v > bound)
            })
            .parameterized("constant", 0, |_: &[Param]| Ok(|_: &Value| false))
            .build()
    }

    #[test]
    fn test_direct_binds_immediately() {
        let chain = domain().validator().resolve("yes").unwrap();
        assert!(!chain.is_curried());
        let v = chain.into_validator().unwrap();
        assert_eq!(v.len(), 1);
        assert_eq!(v.to_string(), "yes");
    }

    #[test]
    fn test_zero_arity_parameterized_binds_immediately() {
        let v = domain().validator().chain("constant").unwrap();
        assert!(!v.evaluate(1));
    }

    #[test]
    fn test_parameterized_curries() {
        let chain = domain().validator().resolve("above").unwrap();
        assert!(chain.is_curried());

        let Chain::Curried(curried) = chain else {
            unreachable!()
        };
        assert_eq!(curried.name(), "above");
        let v = curried.call([3]).unwrap();
        assert!(v.evaluate(4));
        assert!(!v.evaluate(3));
        assert_eq!(v.to_string(), "above(3)");
    }

    #[test]
    fn test_curried_call_does_not_mutate_base() {
        let base = domain().validator().chain("yes").unwrap();
        let Chain::Curried(curried) = base.resolve("above").unwrap() else {
            unreachable!()
        };
        let first = curried.call([1]).unwrap();
        let second = curried.call([10]).unwrap();

        assert_eq!(base.len(), 1);
        assert!(first.evaluate(5));
        assert!(!second.evaluate(5));
    }

    #[test]
    fn test_unknown_name() {
        let err = domain().validator().resolve("nope").unwrap_err();
        assert_eq!(err, ValidatorError::unknown_predicate("test", "nope"));
    }

    #[test]
    fn test_chain_rejects_parameterized() {
        let err = domain().validator().chain("above").unwrap_err();
        assert_eq!(err, ValidatorError::arity_mismatch("above", 1, 0));
    }

    #[test]
    fn test_chain_with_wrong_count() {
        let err = domain()
            .validator()
            .chain_with("above", [1, 2])
            .unwrap_err();
        assert_eq!(err, ValidatorError::arity_mismatch("above", 1, 2));

        let err = domain().validator().chain_with("yes", [1]).unwrap_err();
        assert_eq!(err, ValidatorError::arity_mismatch("yes", 0, 1));
    }

    #[test]
    fn test_chain_with_no_params_on_direct() {
        let v = domain()
            .validator()
            .chain_with("yes", Vec::<Param>::new())
            .unwrap();
        assert!(v.evaluate(0));
    }

    #[test]
    fn test_invalid_parameter_surfaces() {
        let err = domain()
            .validator()
            .chain_with("above", ["three"])
            .unwrap_err();
        assert!(matches!(
            err,
            ValidatorError::InvalidParameter { index: 0, .. }
        ));
    }

    #[test]
    fn test_register_through_validator() {
        let d = domain();
        let v = d.validator();
        v.register("no", Factory::direct(|_: &Value| false));
        assert!(!d.validator().chain("no").unwrap().evaluate(0));
    }
}
