//! Rule identity and specification.
//!
//! A `RuleSpec` is one entry of the catalog: a stable string id, the
//! description shown to the player, and the predicate the password must
//! satisfy. Specs are immutable once registered; all mutable bookkeeping
//! (revealed/completed status) lives in the engine's `RuleState`.

use serde::{Deserialize, Serialize};

use super::predicate::Predicate;

/// Unique identifier for a rule.
///
/// Ids are stable strings (`"length"`, `"prime"`, ...) so transition
/// reports and snapshots stay readable for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleId(String);

impl RuleId {
    /// Create a new rule id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RuleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RuleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable specification of one validation rule.
///
/// Catalog order is significant: it defines reveal order and display
/// numbering. The spec itself carries no state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Unique id across the catalog.
    pub id: RuleId,

    /// Human-readable requirement text.
    pub description: String,

    /// Pure, total predicate over the candidate password.
    pub predicate: Predicate,
}

impl RuleSpec {
    /// Create a new rule specification.
    pub fn new(
        id: impl Into<RuleId>,
        description: impl Into<String>,
        predicate: Predicate,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            predicate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_id_display() {
        let id = RuleId::new("length");
        assert_eq!(id.as_str(), "length");
        assert_eq!(format!("{}", id), "length");
    }

    #[test]
    fn test_rule_id_from_str() {
        let id: RuleId = "prime".into();
        assert_eq!(id, RuleId::new("prime"));
    }

    #[test]
    fn test_rule_spec_new() {
        let spec = RuleSpec::new(
            "length",
            "Your password must be at least 5 characters.",
            Predicate::MinLength(5),
        );
        assert_eq!(spec.id.as_str(), "length");
        assert_eq!(spec.predicate, Predicate::MinLength(5));
    }

    #[test]
    fn test_rule_spec_serialization() {
        let spec = RuleSpec::new("number", "Must include a number.", Predicate::pattern("[0-9]"));
        let json = serde_json::to_string(&spec).unwrap();
        let deserialized: RuleSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, deserialized);
    }
}
