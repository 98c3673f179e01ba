//! Transition reports.
//!
//! One `TransitionReport` per `evaluate` call tells the presentation
//! layer exactly what changed, so it can animate completions,
//! regressions, and reveals without diffing snapshots.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::RuleId;

/// Rule ids flipped by one evaluation.
///
/// A single keystroke rarely moves more than a couple of rules;
/// `SmallVec` keeps the common case off the heap.
pub type RuleIdList = SmallVec<[RuleId; 2]>;

/// What one `evaluate` call changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionReport {
    /// Rules that moved Active -> Completed, in catalog order.
    pub newly_completed: RuleIdList,

    /// Rules that moved Completed -> Active, in catalog order.
    pub newly_regressed: RuleIdList,

    /// Rules that moved Pending -> Active, in catalog order.
    ///
    /// Each entry was revealed by exactly one newly completed rule.
    pub newly_revealed: RuleIdList,

    /// Whether every catalog rule is now Completed.
    pub is_game_complete: bool,
}

impl TransitionReport {
    /// Check that no rule changed state.
    ///
    /// Re-evaluating unchanged input yields an empty report.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.newly_completed.is_empty()
            && self.newly_regressed.is_empty()
            && self.newly_revealed.is_empty()
    }
}
