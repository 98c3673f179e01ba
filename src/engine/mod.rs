//! Rule engine: per-session state machine over a rule catalog.
//!
//! The engine owns the partition of the catalog into pending / active /
//! completed rules, re-evaluates every revealed rule on each input
//! change, and reports the resulting transitions for a presentation
//! layer to render.

pub mod report;
pub mod session;
pub mod state;

pub use report::{RuleIdList, TransitionReport};
pub use session::RuleEngine;
pub use state::{EngineState, RuleSnapshot, RuleState, RuleStatus};
