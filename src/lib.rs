//! `paygrid`: constrained sampling of monotone payoff grids.
//!
//! Models a small decision scenario: an organization chooses a data-usage
//! action (six levels from *No Usage* to *Very High*) under a data-collection
//! intensity (*Low*, *Medium*, *High*). Three fixed-shape 3×6 grids describe
//! the scenario (benefit, cost, breach probability), and two payoff grids
//! are derived from them:
//!
//! - **worst-case payoff** = benefit − cost
//! - **expected payoff** = benefit − breach ⊙ cost
//!
//! A [`Scenario`] is *valid* when it satisfies a fixed set of structural
//! constraints: baseline columns (zero benefit, shared cost, 0.2 breach at
//! *No Usage*, 0.99 breach at the High/Very-High corner), row- and
//! column-monotonicity of all three grids, strictly positive worst-case
//! payoffs on the action columns, worst-case maximizers landing exactly on
//! {Very High, High, Medium} per row, and expected-payoff maximizers sitting
//! exactly two actions away from the worst-case ones. See [`validate_explain`].
//!
//! Valid scenarios are rare under random construction, so the crate pairs a
//! best-effort [`ScenarioGenerator`] (staged sampling plus bounded local
//! repair passes) with a discard-and-retry [`run_search`] driver that keeps
//! drawing candidates until a target count is accepted or an attempt budget
//! runs out. Exhaustion is an outcome, not an error.
//!
//! **Goals:**
//! - **Deterministic by default**: the generator is seedable and defaults to
//!   a fixed seed, so demos and tests reproduce exactly.
//! - **Authoritative validation**: acceptance always re-runs the validator on
//!   the finished candidate; generator bookkeeping is never trusted.
//! - **Explainable rejection**: [`validate_explain`] reports every failed
//!   check with the offending matrix and cell, for audit and debugging.
//!
//! **Non-goals:**
//! - Not a constraint solver; the constraints are specific to this exact
//!   3×6 shape and the fixed maximizer targets.
//! - No persistence, no concurrency, no I/O beyond the demo binary's stdout.

#![forbid(unsafe_code)]

/// Number of collection-intensity rows.
pub const ROWS: usize = 3;

/// Number of usage-action columns (including the *No Usage* baseline).
pub const COLS: usize = 6;

mod scenario;
pub use scenario::*;

mod payoff;
pub use payoff::*;

mod validate;
pub use validate::*;

mod generate;
pub use generate::*;

mod search;
pub use search::*;

pub mod report;
