//! Rule catalog: the ordered, immutable rule registry.
//!
//! The `RuleCatalog` stores every `RuleSpec` in reveal order, provides
//! lookup by `RuleId`, and owns the compiled `PatternCache` for pattern
//! predicates. It is loaded once at startup and never mutated afterwards;
//! a catalog behind an `Arc` is safe to share across game sessions.
//!
//! Configuration errors - duplicate id, invalid regex - are fatal at load
//! time: the game cannot run with a broken catalog.

use rustc_hash::FxHashMap;

use super::predicate::PatternCache;
use super::rule::{RuleId, RuleSpec};

/// Ordered registry of rule specifications.
///
/// ## Example
///
/// ```
/// use password_gauntlet::catalog::{Predicate, RuleCatalog, RuleSpec};
///
/// let mut catalog = RuleCatalog::new();
/// catalog.register(RuleSpec::new(
///     "length",
///     "Your password must be at least 5 characters.",
///     Predicate::MinLength(5),
/// ));
///
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.check(0, "abcde"));
/// assert!(!catalog.check(0, "ab"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuleCatalog {
    rules: Vec<RuleSpec>,
    index: FxHashMap<RuleId, usize>,
    patterns: PatternCache,
}

impl RuleCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule at the end of the catalog.
    ///
    /// Catalog order is reveal order. Panics if the rule id is already
    /// registered or its pattern does not compile; both are startup
    /// configuration errors.
    pub fn register(&mut self, rule: RuleSpec) {
        if self.index.contains_key(&rule.id) {
            panic!("Rule with id '{}' already registered", rule.id);
        }
        if let Some(source) = rule.predicate.pattern_source() {
            if let Err(e) = self.patterns.compile(source) {
                panic!("Rule '{}' has an invalid pattern: {e}", rule.id);
            }
        }
        self.index.insert(rule.id.clone(), self.rules.len());
        self.rules.push(rule);
    }

    /// Get a rule by id.
    #[must_use]
    pub fn get(&self, id: &RuleId) -> Option<&RuleSpec> {
        self.index.get(id).map(|&i| &self.rules[i])
    }

    /// Get a rule by catalog position.
    #[must_use]
    pub fn get_at(&self, position: usize) -> Option<&RuleSpec> {
        self.rules.get(position)
    }

    /// Get a rule's catalog position.
    #[must_use]
    pub fn position(&self, id: &RuleId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Evaluate the rule at `position` against a candidate password.
    ///
    /// Out-of-range positions evaluate to `false`.
    #[must_use]
    pub fn check(&self, position: usize, password: &str) -> bool {
        self.rules
            .get(position)
            .is_some_and(|rule| rule.predicate.matches(password, &self.patterns))
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &RuleSpec> {
        self.rules.iter()
    }

    /// The compiled pattern cache.
    #[must_use]
    pub fn patterns(&self) -> &PatternCache {
        &self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Predicate;

    #[test]
    fn test_register_and_get() {
        let mut catalog = RuleCatalog::new();
        catalog.register(RuleSpec::new("length", "At least 5.", Predicate::MinLength(5)));
        catalog.register(RuleSpec::new("number", "Has a digit.", Predicate::pattern("[0-9]")));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.position(&"number".into()), Some(1));
        assert_eq!(catalog.get(&"length".into()).unwrap().description, "At least 5.");
        assert!(catalog.get(&"missing".into()).is_none());
    }

    #[test]
    fn test_order_is_registration_order() {
        let mut catalog = RuleCatalog::new();
        catalog.register(RuleSpec::new("b", "b", Predicate::EvenLength));
        catalog.register(RuleSpec::new("a", "a", Predicate::MinLength(1)));

        let ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = RuleCatalog::new();
        catalog.register(RuleSpec::new("dup", "a", Predicate::MinLength(1)));
        catalog.register(RuleSpec::new("dup", "b", Predicate::MinLength(2)));
    }

    #[test]
    #[should_panic(expected = "invalid pattern")]
    fn test_invalid_pattern_panics() {
        let mut catalog = RuleCatalog::new();
        catalog.register(RuleSpec::new("bad", "bad", Predicate::pattern("[unclosed")));
    }

    #[test]
    fn test_check_compiles_patterns_at_load() {
        let mut catalog = RuleCatalog::new();
        catalog.register(RuleSpec::new("number", "Has a digit.", Predicate::pattern("[0-9]")));

        assert_eq!(catalog.patterns().len(), 1);
        assert!(catalog.check(0, "x3"));
        assert!(!catalog.check(0, "x"));
        assert!(!catalog.check(99, "x3"));
    }

    #[test]
    fn test_shared_pattern_compiled_once() {
        let mut catalog = RuleCatalog::new();
        catalog.register(RuleSpec::new("a", "a", Predicate::pattern("[0-9]")));
        catalog.register(RuleSpec::new("b", "b", Predicate::min_count("[0-9]", 2)));
        assert_eq!(catalog.patterns().len(), 1);
    }
}
