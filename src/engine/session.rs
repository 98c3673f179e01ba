//! The rule engine: one game session over a shared catalog.
//!
//! `RuleEngine` binds a read-only `RuleCatalog` (shareable across
//! sessions behind an `Arc`) to one `EngineState` and exposes the
//! interface the presentation layer consumes: `evaluate` on every input
//! change, `snapshot` for rendering, `reset` for restart.

use std::sync::Arc;

use crate::catalog::{RuleCatalog, RuleId};

use super::report::TransitionReport;
use super::state::{EngineState, RuleSnapshot, RuleStatus};

/// One game session.
///
/// ## Example
///
/// ```
/// use password_gauntlet::catalog::{Predicate, RuleCatalog, RuleSpec};
/// use password_gauntlet::engine::RuleEngine;
///
/// let mut catalog = RuleCatalog::new();
/// catalog.register(RuleSpec::new("length", "At least 5 characters.", Predicate::MinLength(5)));
/// catalog.register(RuleSpec::new("number", "Include a number.", Predicate::pattern("[0-9]")));
///
/// let mut engine = RuleEngine::with_catalog(catalog);
///
/// let report = engine.evaluate("abcde");
/// assert_eq!(report.newly_completed.len(), 1);
/// assert_eq!(report.newly_revealed.len(), 1);
///
/// let report = engine.evaluate("abcd3");
/// assert!(report.is_game_complete);
/// ```
#[derive(Clone, Debug)]
pub struct RuleEngine {
    catalog: Arc<RuleCatalog>,
    state: EngineState,
}

impl RuleEngine {
    /// Create an engine over a shared catalog.
    ///
    /// Panics if the catalog is empty; a game without rules cannot run.
    #[must_use]
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        assert!(!catalog.is_empty(), "Catalog must contain at least one rule");
        let state = EngineState::new(catalog.len());
        Self { catalog, state }
    }

    /// Create an engine that owns its catalog.
    #[must_use]
    pub fn with_catalog(catalog: RuleCatalog) -> Self {
        Self::new(Arc::new(catalog))
    }

    /// The catalog this session runs over.
    #[must_use]
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// The current session state.
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Feed the full current candidate string and advance the state
    /// machine. Called once per input change; no partial updates.
    pub fn evaluate(&mut self, input: &str) -> TransitionReport {
        self.state.apply(&self.catalog, input)
    }

    /// Restart the session: first rule Active, everything else Pending,
    /// input cleared. The presentation layer re-renders from a fresh
    /// snapshot.
    pub fn reset(&mut self) {
        self.state = EngineState::new(self.catalog.len());
    }

    /// Current status of a rule, if the id exists.
    #[must_use]
    pub fn status_of(&self, id: &RuleId) -> Option<RuleStatus> {
        let position = self.catalog.position(id)?;
        self.state.rule_state(position).map(|s| s.status)
    }

    /// Number of rules currently Completed.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.state.completed_count()
    }

    /// Whether every rule is Completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// The last input fed to `evaluate`.
    #[must_use]
    pub fn input(&self) -> &str {
        self.state.input()
    }

    /// Full ordered view of every rule for rendering.
    ///
    /// Entries are in catalog order; `Pending` entries are the ones a
    /// renderer keeps hidden.
    #[must_use]
    pub fn snapshot(&self) -> Vec<RuleSnapshot> {
        self.catalog
            .iter()
            .enumerate()
            .map(|(position, rule)| {
                let state = self
                    .state
                    .rule_state(position)
                    .copied()
                    .unwrap_or_else(super::state::RuleState::pending);
                RuleSnapshot {
                    id: rule.id.clone(),
                    description: rule.description.clone(),
                    reveal_order: state.reveal_order,
                    status: state.status,
                }
            })
            .collect()
    }
}
