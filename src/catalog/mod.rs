//! Rule catalog: specifications, predicates, and the ordered registry.
//!
//! The catalog is the static half of the game: an ordered list of
//! `RuleSpec`s whose order defines reveal order. It is loaded once at
//! startup and never mutated; the engine layers all per-session state on
//! top of it.

pub mod predicate;
pub mod registry;
pub mod rule;
pub mod standard;

pub use predicate::{PatternCache, Predicate};
pub use registry::RuleCatalog;
pub use rule::{RuleId, RuleSpec};
pub use standard::standard_catalog;
