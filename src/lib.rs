//! # password-gauntlet
//!
//! Rule engine for an incremental password-validation game: the player
//! types into a password field and must simultaneously satisfy a growing
//! list of increasingly quirky rules. Rules are revealed one at a time;
//! a satisfied rule moves to the completed list but stays under
//! continuous re-validation and regresses if a later edit breaks it. The
//! game ends when every rule holds at once.
//!
//! ## Design Principles
//!
//! 1. **Catalog as data**: Rules are `RuleSpec` values with tagged
//!    `Predicate` variants, not closures. The catalog is ordered,
//!    immutable after load, and shareable across sessions.
//!
//! 2. **Explicit state, single reducer**: All mutable session state
//!    lives in one `EngineState`; `evaluate` is the only writer and runs
//!    to completion per input event. No hidden captures, no locking.
//!
//! 3. **Total predicates**: Any string is a valid input - empty, control
//!    characters, arbitrary Unicode, arbitrarily long. Predicates never
//!    panic; missing content just evaluates false.
//!
//! ## Architecture
//!
//! - `catalog`: `RuleId`, `RuleSpec`, `Predicate`, the `RuleCatalog`
//!   registry, and the standard 63-rule catalog.
//! - `engine`: `RuleEngine` sessions, the `EngineState` reducer,
//!   `TransitionReport`, and render snapshots.
//!
//! The presentation layer is an external collaborator: it forwards the
//! full input string on every edit and renders the returned
//! `TransitionReport` plus `snapshot()`. This crate has no I/O of its
//! own.

pub mod catalog;
pub mod engine;

// Re-export commonly used types
pub use crate::catalog::{
    standard_catalog, PatternCache, Predicate, RuleCatalog, RuleId, RuleSpec,
};

pub use crate::engine::{
    EngineState, RuleEngine, RuleIdList, RuleSnapshot, RuleState, RuleStatus, TransitionReport,
};
