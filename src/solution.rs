//! Tour representation and evaluation.
//!
//! A raw id sequence is never rejected: [`normalize`] repairs any input into
//! a structurally valid closed tour (repair-not-reject), and
//! [`Solution::evaluate`] turns it into an immutable value snapshot carrying
//! its score, total distance, and feasibility flag. Operators never mutate a
//! solution in place; a "changed" solution is always a newly evaluated one.

use std::collections::HashSet;

use crate::instance::{Instance, NodeId};

/// Repairs a raw id sequence into a structurally valid closed tour.
///
/// Duplicates are dropped keeping the first occurrence; the depot is
/// prepended if missing at the front and appended if missing at the back;
/// an empty or depot-only sequence becomes `[depot, depot]`. Total: any
/// input yields a tour that starts and ends at the depot with no interior
/// repeats, and the function is idempotent.
pub fn normalize(raw: &[NodeId], depot: NodeId) -> Vec<NodeId> {
    let mut tour = Vec::with_capacity(raw.len() + 2);
    let mut seen = HashSet::with_capacity(raw.len());
    for &id in raw {
        if seen.insert(id) {
            tour.push(id);
        }
    }

    if tour.first() != Some(&depot) {
        tour.insert(0, depot);
    }
    if tour.len() > 1 && *tour.last().unwrap() != depot {
        tour.push(depot);
    }
    if tour.len() == 1 {
        // Only the depot: expand to the trivial closed tour.
        tour.push(depot);
    }
    tour
}

/// An evaluated tour. Immutable value snapshot: every operator builds a new
/// `Solution` rather than mutating an existing one.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Closed tour: starts and ends at the depot, no interior repeats.
    pub tour: Vec<NodeId>,
    /// Sum of the scores of the visited non-depot nodes.
    pub score: u64,
    /// Sum of consecutive edge distances along the tour.
    pub total_distance: f64,
    /// Whether `total_distance` is within the instance's time budget.
    pub is_valid: bool,
}

impl Solution {
    /// Normalizes `raw_tour` and evaluates it against the instance.
    ///
    /// Ids outside the instance's node table are dropped before
    /// normalization, so evaluation is total and never panics. Infeasibility
    /// is encoded in [`Solution::is_valid`], not as an error.
    pub fn evaluate(instance: &Instance, raw_tour: &[NodeId]) -> Self {
        let n = instance.node_count();
        let known: Vec<NodeId> = raw_tour
            .iter()
            .copied()
            .filter(|&id| id >= 1 && id <= n)
            .collect();
        let tour = normalize(&known, instance.depot());

        let mut total_distance = 0.0;
        for pair in tour.windows(2) {
            total_distance += instance.distance(pair[0], pair[1]);
        }
        let score = tour[1..tour.len() - 1]
            .iter()
            .map(|&id| instance.score(id))
            .sum();

        Self {
            is_valid: total_distance <= instance.time_budget(),
            tour,
            score,
            total_distance,
        }
    }

    /// The acceptance law, used identically everywhere in the search:
    /// `self` beats `other` on strictly higher score, or on equal score
    /// with strictly lower distance.
    pub fn improves_over(&self, other: &Self) -> bool {
        self.score > other.score
            || (self.score == other.score && self.total_distance < other.total_distance)
    }

    /// The non-depot part of the tour.
    pub fn interior(&self) -> &[NodeId] {
        &self.tour[1..self.tour.len() - 1]
    }
}

/// Jaccard similarity of two solutions over their non-depot node sets.
///
/// 1.0 means identical node sets (including both empty), 0.0 means disjoint.
pub fn similarity(a: &Solution, b: &Solution) -> f64 {
    let set_a: HashSet<NodeId> = a.interior().iter().copied().collect();
    let set_b: HashSet<NodeId> = b.interior().iter().copied().collect();
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 1.0;
    }
    set_a.intersection(&set_b).count() as f64 / union as f64
}
