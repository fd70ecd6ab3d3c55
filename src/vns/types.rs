//! Observer hooks for search progress.

use crate::solution::Solution;

/// Receives search events as they happen.
///
/// Both hooks default to no-ops, so an observer implements only what it
/// cares about. Observers are side channels: the search behaves identically
/// with or without one.
pub trait SearchObserver {
    /// A new best solution was found.
    fn on_new_best(&mut self, _best: &Solution) {}

    /// A restart fired after the given number of stagnant iterations.
    fn on_restart(&mut self, _operator_counter: usize) {}
}

/// The do-nothing observer used by [`VnsRunner::run`](super::VnsRunner::run).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}
