//! Initial-solution construction.
//!
//! The search loop needs exactly one seed solution. Strategies are pure
//! functions from an instance and a random stream to a solution, registered
//! under string identifiers and resolved before the run starts, so an
//! unknown identifier fails at configuration time rather than mid-search.
//! [`SeedRegistry::select_best_seed`] runs several strategies, skips (and
//! logs) individual failures, and keeps the highest-scoring seed; it fails
//! only when every strategy fails.

mod constructive;
mod registry;

pub use constructive::{best_insertion_seed, greedy_seed, random_seed};
pub use registry::{SeedFn, SeedRegistry};
