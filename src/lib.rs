//! Profit-collecting tour optimization via Variable Neighborhood Search.
//!
//! Given a set of weighted locations and a fixed depot, the solver selects a
//! subset to visit and an order to visit them in, starting and ending at the
//! depot, so that the collected score is maximized while the total travel
//! time stays within a budget (the orienteering problem).
//!
//! The crate is organized around a small number of components:
//!
//! - **[`instance`]**: the immutable problem description — node table,
//!   precomputed symmetric distance matrix, travel-time budget.
//! - **[`solution`]**: the self-normalizing tour representation and its
//!   evaluator. Every operator consumes and produces [`solution::Solution`]
//!   value snapshots; malformed tours are repaired, never rejected.
//! - **[`neighborhood`]**: destructive (shaking) operators, a greedy repair
//!   operator, and best-improvement local-search operators.
//! - **[`pool`]**: a bounded archive of elite solutions filtered for quality
//!   and pairwise diversity, used to seed restarts.
//! - **[`seed`]**: constructive heuristics behind a string-keyed strategy
//!   registry, producing the initial solution the search starts from.
//! - **[`vns`]**: the controller loop — shake, variable neighborhood descent,
//!   accept/reject, pool update, and restart on stagnation, bounded by
//!   wall-clock time and a global stagnation limit.
//!
//! The whole run is single-threaded and deterministic: one seeded random
//! stream drives every stochastic decision, so identical seeds, instances,
//! and configurations reproduce identical results.
//!
//! # References
//!
//! Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//! *Computers & Operations Research* 24(11), 1097-1100.

pub mod error;
pub mod instance;
pub mod neighborhood;
pub mod pool;
pub mod seed;
pub mod solution;
pub mod vns;

pub use error::Error;
pub use instance::{Instance, Node, NodeId};
pub use solution::Solution;
