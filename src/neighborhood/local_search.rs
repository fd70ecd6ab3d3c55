//! Best-improvement local-search operators.
//!
//! Each operator exhaustively scans its neighborhood, evaluates every
//! candidate from scratch, and returns the best valid neighbor under the
//! acceptance law — or the input solution unchanged when nothing improves.
//! Monotonic by construction: the result is never worse than the input.

use std::collections::HashSet;

use super::Neighborhoods;
use crate::instance::NodeId;
use crate::solution::Solution;

impl Neighborhoods<'_> {
    fn unused_ids(&self, solution: &Solution) -> Vec<NodeId> {
        let in_tour: HashSet<NodeId> = solution.tour.iter().copied().collect();
        // nodes() is id-ordered, so candidates come out in ascending id order.
        self.instance
            .nodes()
            .iter()
            .filter(|n| !in_tour.contains(&n.id))
            .map(|n| n.id)
            .collect()
    }

    fn consider(&self, tour: &[NodeId], best: &mut Solution) {
        let neighbor = Solution::evaluate(self.instance, tour);
        if neighbor.is_valid && neighbor.improves_over(best) {
            *best = neighbor;
        }
    }

    /// Tries every unused node at every insertion position, candidates in
    /// ascending id order, positions inner.
    pub fn add_best_node(&self, solution: &Solution) -> Solution {
        let mut best = solution.clone();
        for node_id in self.unused_ids(solution) {
            for pos in 1..solution.tour.len() {
                let mut tour = solution.tour.clone();
                tour.insert(pos, node_id);
                self.consider(&tour, &mut best);
            }
        }
        best
    }

    /// Same search space as [`Neighborhoods::add_best_node`] with the loops
    /// transposed (positions outer, candidates inner). The different
    /// enumeration order breaks ties differently during descent, which is
    /// why both stay in the operator list.
    pub fn insert_best_node_at_best_position(&self, solution: &Solution) -> Solution {
        let mut best = solution.clone();
        let candidates = self.unused_ids(solution);
        for pos in 1..solution.tour.len() {
            for &node_id in &candidates {
                let mut tour = solution.tour.clone();
                tour.insert(pos, node_id);
                self.consider(&tour, &mut best);
            }
        }
        best
    }

    /// Substitutes every interior position with every unused node.
    pub fn replace_node(&self, solution: &Solution) -> Solution {
        let mut best = solution.clone();
        let candidates = self.unused_ids(solution);
        for pos in 1..solution.tour.len().saturating_sub(1) {
            for &node_id in &candidates {
                let mut tour = solution.tour.clone();
                tour[pos] = node_id;
                self.consider(&tour, &mut best);
            }
        }
        best
    }

    /// Relocates every contiguous interior segment of length 1 to 3 to every
    /// other position, including past the closing depot (normalization
    /// re-closes the tour, which makes that an insert-at-end move).
    pub fn segment_move(&self, solution: &Solution) -> Solution {
        let mut best = solution.clone();
        let tour = &solution.tour;
        let len = tour.len();

        for i in 1..len.saturating_sub(2) {
            for j in (i + 1)..(i + 4).min(len - 1) {
                let segment = &tour[i..j];
                let mut reduced = Vec::with_capacity(len - segment.len());
                reduced.extend_from_slice(&tour[..i]);
                reduced.extend_from_slice(&tour[j..]);

                for k in 1..=reduced.len() {
                    let mut candidate = Vec::with_capacity(len);
                    candidate.extend_from_slice(&reduced[..k]);
                    candidate.extend_from_slice(segment);
                    candidate.extend_from_slice(&reduced[k..]);
                    self.consider(&candidate, &mut best);
                }
            }
        }
        best
    }
}
