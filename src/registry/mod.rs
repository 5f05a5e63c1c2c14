//! Domains and their predicate registries
//!
//! A [`Domain`] is a named validator type: a table of named predicate
//! factories plus an optional parent domain. Lookups walk the domain's own
//! table first and then each ancestor in turn, so a derived domain inherits
//! everything its parents know and can shadow or extend it.
//!
//! # Example
//!
//! ```rust
//! use validator_chain::{domain, Domain, Factory, Value};
//!
//! let port = Domain::builder("port")
//!     .parent(&domain::number())
//!     .predicate("privileged", |v: &Value| v.as_i64().is_some_and(|n| (0..1024).contains(&n)))
//!     .build();
//!
//! let v = port.validator().chain("integer")?.chain("privileged")?;
//! assert!(v.evaluate(80));
//! assert!(!v.evaluate(8080));
//! # Ok::<(), validator_chain::ValidatorError>(())
//! ```

mod resolve;

pub use resolve::{Chain, Curried};

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::ValidatorError;
use crate::predicate::{Predicate, SharedPredicate};
use crate::validator::Validator;
use crate::value::{Param, Value};

/// Builds a predicate from the extra parameters of a curried call.
///
/// The slice always holds exactly the declared arity.
pub type BuildFn = dyn Fn(&[Param]) -> Result<SharedPredicate, ValidatorError> + Send + Sync;

/// A registry entry: a ready predicate, or a builder that needs parameters.
#[derive(Clone)]
pub enum Factory {
    /// The factory is the predicate; it only needs the candidate value.
    Direct(SharedPredicate),
    /// The factory needs `arity` extra parameters before it becomes a
    /// predicate.
    Parameterized {
        /// Number of extra parameters.
        arity: usize,
        /// Builds the bound predicate.
        build: Arc<BuildFn>,
    },
}

impl Factory {
    /// A factory that is already a predicate.
    pub fn direct<P>(predicate: P) -> Self
    where
        P: Predicate<Value> + 'static,
    {
        Factory::Direct(Arc::new(predicate))
    }

    /// A factory taking `arity` extra parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validator_chain::{Factory, Value};
    ///
    /// let longer_than = Factory::parameterized(1, |params| {
    ///     let min = params[0].number("longer_than", 0)?;
    ///     Ok(move |v: &Value| {
    ///         v.as_str().is_some_and(|s| Value::from(s.chars().count() as i64) > min)
    ///     })
    /// });
    /// assert_eq!(longer_than.arity(), 1);
    /// ```
    pub fn parameterized<F, P>(arity: usize, build: F) -> Self
    where
        F: Fn(&[Param]) -> Result<P, ValidatorError> + Send + Sync + 'static,
        P: Predicate<Value> + 'static,
    {
        Factory::Parameterized {
            arity,
            build: Arc::new(move |params: &[Param]| {
                build(params).map(|predicate| Arc::new(predicate) as SharedPredicate)
            }),
        }
    }

    /// Number of extra parameters, excluding the candidate value.
    pub fn arity(&self) -> usize {
        match self {
            Factory::Direct(_) => 0,
            Factory::Parameterized { arity, .. } => *arity,
        }
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Factory::Direct(_) => f.write_str("Factory::Direct"),
            Factory::Parameterized { arity, .. } => f
                .debug_struct("Factory::Parameterized")
                .field("arity", arity)
                .finish_non_exhaustive(),
        }
    }
}

/// A named validator type with its own predicate registry.
pub struct Domain {
    name: Cow<'static, str>,
    parent: Option<Arc<Domain>>,
    registry: RwLock<HashMap<String, Factory>>,
}

impl Domain {
    /// Create a domain with no parent and an empty registry.
    pub fn root(name: impl Into<Cow<'static, str>>) -> Arc<Self> {
        Arc::new(Self::with_entries(name.into(), None, HashMap::new()))
    }

    /// Create an empty domain that falls back to `parent` for lookups.
    pub fn derive(name: impl Into<Cow<'static, str>>, parent: &Arc<Domain>) -> Arc<Self> {
        Arc::new(Self::with_entries(
            name.into(),
            Some(Arc::clone(parent)),
            HashMap::new(),
        ))
    }

    /// Start defining a domain and its registry.
    pub fn builder(name: impl Into<Cow<'static, str>>) -> DomainBuilder {
        DomainBuilder {
            name: name.into(),
            parent: None,
            entries: HashMap::new(),
        }
    }

    fn with_entries(
        name: Cow<'static, str>,
        parent: Option<Arc<Domain>>,
        entries: HashMap<String, Factory>,
    ) -> Self {
        Self {
            name,
            parent,
            registry: RwLock::new(entries),
        }
    }

    /// The domain's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The domain this one falls back to.
    pub fn parent(&self) -> Option<&Arc<Domain>> {
        self.parent.as_ref()
    }

    /// This domain followed by each of its ancestors, nearest first.
    pub fn lineage(&self) -> Lineage<'_> {
        Lineage { next: Some(self) }
    }

    /// Each ancestor of this domain, nearest first.
    pub fn ancestors(&self) -> Lineage<'_> {
        Lineage {
            next: self.parent.as_deref(),
        }
    }

    /// Returns true if `other` is this domain or one of its ancestors.
    pub fn is_a(&self, other: &Domain) -> bool {
        self.lineage().any(|domain| std::ptr::eq(domain, other))
    }

    /// An empty validator of this domain.
    pub fn validator(self: &Arc<Self>) -> Validator {
        Validator::new(Arc::clone(self))
    }

    /// Insert or replace `name` in this domain's own registry.
    ///
    /// Ancestors are never modified. Predicates resolved from the entry are
    /// reported under `name`.
    pub fn register(&self, name: impl Into<String>, factory: Factory) {
        let name = name.into();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            domain = %self.name,
            predicate = %name,
            arity = factory.arity(),
            "registered predicate"
        );

        self.registry.write().insert(name, factory);
    }

    /// Find `name` in this domain or the nearest ancestor that has it.
    pub fn lookup(&self, name: &str) -> Option<Factory> {
        self.lineage()
            .find_map(|domain| domain.registry.read().get(name).cloned())
    }

    /// Returns true if `name` resolves in this domain or an ancestor.
    pub fn contains(&self, name: &str) -> bool {
        self.lineage()
            .any(|domain| domain.registry.read().contains_key(name))
    }

    /// Names registered directly on this domain, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registry.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl fmt::Debug for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Domain")
            .field("name", &self.name)
            .field("parent", &self.parent.as_ref().map(|p| p.name()))
            .field("predicates", &self.names())
            .finish()
    }
}

/// Iterator over a domain and its ancestors. See [`Domain::lineage`].
#[derive(Debug, Clone)]
pub struct Lineage<'a> {
    next: Option<&'a Domain>,
}

impl<'a> Iterator for Lineage<'a> {
    type Item = &'a Domain;

    fn next(&mut self) -> Option<&'a Domain> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}

/// Populates a domain's registry at definition time.
#[derive(Debug)]
pub struct DomainBuilder {
    name: Cow<'static, str>,
    parent: Option<Arc<Domain>>,
    entries: HashMap<String, Factory>,
}

impl DomainBuilder {
    /// Fall back to `parent` for names this domain does not define.
    pub fn parent(mut self, parent: &Arc<Domain>) -> Self {
        self.parent = Some(Arc::clone(parent));
        self
    }

    /// Register a predicate that only takes the candidate value.
    pub fn predicate<P>(self, name: &str, predicate: P) -> Self
    where
        P: Predicate<Value> + 'static,
    {
        self.factory(name, Factory::direct(predicate))
    }

    /// Register a predicate that needs `arity` extra parameters.
    pub fn parameterized<F, P>(self, name: &str, arity: usize, build: F) -> Self
    where
        F: Fn(&[Param]) -> Result<P, ValidatorError> + Send + Sync + 'static,
        P: Predicate<Value> + 'static,
    {
        self.factory(name, Factory::parameterized(arity, build))
    }

    /// Register an already constructed factory.
    pub fn factory(mut self, name: &str, factory: Factory) -> Self {
        self.entries.insert(name.to_owned(), factory);
        self
    }

    /// Finish the definition.
    pub fn build(self) -> Arc<Domain> {
        Arc::new(Domain::with_entries(self.name, self.parent, self.entries))
    }
}
