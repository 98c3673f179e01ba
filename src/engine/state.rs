//! Per-session engine state and the evaluation reducer.
//!
//! ## RuleState
//!
//! One mutable record per catalog rule: its status in
//! {Pending, Active, Completed} and the order in which it was revealed.
//!
//! ## EngineState
//!
//! The whole session: rule states in catalog order, the current input,
//! and completion bookkeeping. `apply` is the single reducer that moves
//! the state machine - there is no other writer and no hidden shared
//! state, so re-evaluating on every keystroke is safe by construction.

use serde::{Deserialize, Serialize};

use crate::catalog::{RuleCatalog, RuleId};

use super::report::TransitionReport;

/// Lifecycle status of one rule within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleStatus {
    /// Not yet revealed; never evaluated.
    Pending,
    /// Revealed and currently unsatisfied.
    Active,
    /// Revealed and currently satisfied; still re-validated every call.
    Completed,
}

impl std::fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Mutable state of one rule, owned by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleState {
    /// Current status.
    pub status: RuleStatus,

    /// 1-based order in which the rule became visible.
    ///
    /// Assigned once on Pending -> Active and never changed afterwards;
    /// a Completed -> Active regression keeps the original number.
    pub reveal_order: Option<u32>,
}

impl RuleState {
    /// Initial, unrevealed state.
    #[must_use]
    pub const fn pending() -> Self {
        Self {
            status: RuleStatus::Pending,
            reveal_order: None,
        }
    }

    /// Check if the rule has ever been revealed.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.status != RuleStatus::Pending
    }
}

/// Snapshot of one rule for rendering.
///
/// The presentation layer gets the full ordered list and renders whatever
/// it wants; `Pending` entries are the ones it should keep hidden.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSnapshot {
    /// Rule id.
    pub id: RuleId,
    /// Requirement text.
    pub description: String,
    /// 1-based reveal order, if revealed.
    pub reveal_order: Option<u32>,
    /// Current status.
    pub status: RuleStatus,
}

/// Complete per-session state: one value, one writer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    /// Rule states in catalog order.
    rule_states: Vec<RuleState>,

    /// The current full candidate string.
    input: String,

    /// Number of rules currently Completed.
    completed_count: usize,

    /// Number of rules ever revealed; the next reveal gets this + 1.
    revealed_count: u32,

    /// Set when every rule is Completed at once. Terminal.
    game_complete: bool,
}

impl EngineState {
    /// Create the initial state for a catalog of `rule_count` rules:
    /// first rule Active with reveal order 1, the rest Pending.
    ///
    /// Panics if `rule_count` is zero - an empty catalog is a startup
    /// configuration error.
    #[must_use]
    pub fn new(rule_count: usize) -> Self {
        assert!(rule_count > 0, "Catalog must contain at least one rule");

        let mut rule_states = vec![RuleState::pending(); rule_count];
        rule_states[0] = RuleState {
            status: RuleStatus::Active,
            reveal_order: Some(1),
        };

        Self {
            rule_states,
            input: String::new(),
            completed_count: 0,
            revealed_count: 1,
            game_complete: false,
        }
    }

    /// Number of rules tracked.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rule_states.len()
    }

    /// State of the rule at a catalog position.
    #[must_use]
    pub fn rule_state(&self, position: usize) -> Option<&RuleState> {
        self.rule_states.get(position)
    }

    /// The current input string.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Number of rules currently Completed.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_count
    }

    /// Number of rules ever revealed (non-Pending).
    #[must_use]
    pub fn revealed_count(&self) -> u32 {
        self.revealed_count
    }

    /// Whether every rule is Completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.game_complete
    }

    /// Re-evaluate every revealed rule against `input` and advance the
    /// state machine. Returns the transitions this call caused.
    ///
    /// Order of operations per call:
    /// 1. Completed rules are re-validated; failures regress to Active.
    ///    A regression never reveals and never renumbers.
    /// 2. Active rules are checked in catalog order; each one satisfied
    ///    moves to Completed and reveals exactly the next Pending rule.
    ///    A rule revealed mid-pass sits later in catalog order than its
    ///    revealer, so it is evaluated in the same pass - an input that
    ///    already satisfies upcoming rules cascades through them.
    ///
    /// Pending rules are never evaluated. Completion is only detected
    /// when a rule reaches Completed with no Pending rule left; once
    /// complete, the state is terminal and further calls return empty
    /// reports.
    pub fn apply(&mut self, catalog: &RuleCatalog, input: &str) -> TransitionReport {
        debug_assert_eq!(self.rule_states.len(), catalog.len());

        let mut report = TransitionReport::default();
        if self.game_complete {
            report.is_game_complete = true;
            return report;
        }

        self.input.clear();
        self.input.push_str(input);

        for position in 0..self.rule_states.len() {
            if self.rule_states[position].status != RuleStatus::Completed {
                continue;
            }
            if !catalog.check(position, input) {
                self.rule_states[position].status = RuleStatus::Active;
                self.completed_count -= 1;
                report.newly_regressed.push(self.rule_id(catalog, position));
            }
        }

        for position in 0..self.rule_states.len() {
            if self.rule_states[position].status != RuleStatus::Active {
                continue;
            }
            if !catalog.check(position, input) {
                continue;
            }

            self.rule_states[position].status = RuleStatus::Completed;
            self.completed_count += 1;
            report.newly_completed.push(self.rule_id(catalog, position));

            if let Some(next) = self.first_pending() {
                self.revealed_count += 1;
                self.rule_states[next] = RuleState {
                    status: RuleStatus::Active,
                    reveal_order: Some(self.revealed_count),
                };
                report.newly_revealed.push(self.rule_id(catalog, next));
            } else if self.completed_count == self.rule_states.len() {
                self.game_complete = true;
            }
        }

        report.is_game_complete = self.game_complete;
        report
    }

    fn first_pending(&self) -> Option<usize> {
        self.rule_states
            .iter()
            .position(|state| state.status == RuleStatus::Pending)
    }

    fn rule_id(&self, catalog: &RuleCatalog, position: usize) -> RuleId {
        catalog
            .get_at(position)
            .map(|rule| rule.id.clone())
            .expect("Rule state tracked for a position the catalog does not have")
    }
}
