//! Connectives: how a validator folds its element results into one verdict.

use std::fmt;

/// The rule a validator uses to combine the results of its elements.
///
/// # Example
///
/// ```rust
/// use validator_chain::Connective;
///
/// assert!(Connective::And.evaluate([true, true]));
/// assert!(Connective::Or.evaluate([false, true]));
///
/// // XOR means "exactly one", not pairwise exclusive-or.
/// assert!(Connective::Xor.evaluate([false, true, false]));
/// assert!(!Connective::Xor.evaluate([true, true, true]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connective {
    /// Every result must be true. Vacuously true.
    #[default]
    And,
    /// At least one result must be true. Vacuously false.
    Or,
    /// Exactly one result must be true.
    Xor,
}

impl Connective {
    /// Fold a sequence of results under this connective.
    ///
    /// `And` and `Or` stop at the first deciding result. `Xor` observes every
    /// result, since a later `true` overturns an earlier one.
    pub fn evaluate<I>(self, results: I) -> bool
    where
        I: IntoIterator<Item = bool>,
    {
        let mut results = results.into_iter();
        match self {
            Connective::And => results.all(|r| r),
            Connective::Or => results.any(|r| r),
            Connective::Xor => results.filter(|r| *r).count() == 1,
        }
    }

    /// Upper-case symbol used when rendering validators.
    pub fn as_str(self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
            Connective::Xor => "XOR",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and() {
        assert!(Connective::And.evaluate([]));
        assert!(Connective::And.evaluate([true, true, true]));
        assert!(!Connective::And.evaluate([true, false, true]));
    }

    #[test]
    fn test_or() {
        assert!(!Connective::Or.evaluate([]));
        assert!(Connective::Or.evaluate([false, false, true]));
        assert!(!Connective::Or.evaluate([false, false]));
    }

    #[test]
    fn test_xor_is_exactly_one() {
        assert!(!Connective::Xor.evaluate([]));
        assert!(Connective::Xor.evaluate([true]));
        assert!(!Connective::Xor.evaluate([true, true]));
        // pairwise XOR would say true here
        assert!(!Connective::Xor.evaluate([true, true, true]));
        assert!(Connective::Xor.evaluate([false, false, true]));
    }

    #[test]
    fn test_xor_observes_every_result() {
        let mut seen = 0;
        let results = [true, false, false, true].into_iter().inspect(|_| seen += 1);
        assert!(!Connective::Xor.evaluate(results));
        assert_eq!(seen, 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(Connective::And.to_string(), "AND");
        assert_eq!(Connective::Or.to_string(), "OR");
        assert_eq!(Connective::Xor.to_string(), "XOR");
        assert_eq!(Connective::default(), Connective::And);
    }
}
