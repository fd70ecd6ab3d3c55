//! Destructive (shaking) operators and greedy repair.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::Neighborhoods;
use crate::instance::NodeId;
use crate::solution::Solution;

/// The five destructive operators composed by `random_modify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShakeOp {
    RemoveKRandom,
    ShuffleSegment,
    RemoveFraction,
    RemoveWorst,
    SwapSegments,
}

impl Neighborhoods<'_> {
    /// Drops `k` randomly chosen interior positions. `k` is capped at the
    /// interior length; tours without interior are returned unchanged.
    pub fn remove_k_random<R: Rng + ?Sized>(
        &self,
        mut tour: Vec<NodeId>,
        k: usize,
        rng: &mut R,
    ) -> Vec<NodeId> {
        if tour.len() <= 2 {
            return tour;
        }
        let mut indices: Vec<usize> = (1..tour.len() - 1).collect();
        indices.shuffle(rng);
        let mut to_remove: Vec<usize> = indices[..k.min(indices.len())].to_vec();
        to_remove.sort_unstable();
        // Back to front so earlier removals do not shift later indices.
        for &i in to_remove.iter().rev() {
            tour.remove(i);
        }
        tour
    }

    /// Drops a randomly drawn percentage (uniform in the configured range)
    /// of interior positions, at least one.
    pub fn remove_fraction<R: Rng + ?Sized>(
        &self,
        mut tour: Vec<NodeId>,
        rng: &mut R,
    ) -> Vec<NodeId> {
        if tour.len() <= 4 {
            return tour;
        }
        let percent = rng.random_range(self.remove_min_pct..=self.remove_max_pct);
        let interior = tour.len() - 2;
        let num_remove = ((interior as u32 * percent / 100) as usize).max(1);
        let mut indices: Vec<usize> = (1..tour.len() - 1).collect();
        indices.shuffle(rng);
        let mut to_remove: Vec<usize> = indices[..num_remove.min(indices.len())].to_vec();
        to_remove.sort_unstable();
        for &i in to_remove.iter().rev() {
            tour.remove(i);
        }
        tour
    }

    /// Drops the `k` interior nodes with the lowest scores, ties broken by
    /// id. Tours too short to lose `k` nodes are returned unchanged.
    pub fn remove_worst(&self, tour: Vec<NodeId>, k: usize) -> Vec<NodeId> {
        if tour.len() <= k + 2 {
            return tour;
        }
        let mut interior: Vec<NodeId> = tour[1..tour.len() - 1].to_vec();
        interior.sort_by_key(|&id| (self.instance.score(id), id));
        let doomed: HashSet<NodeId> = interior[..k].iter().copied().collect();
        tour.into_iter().filter(|id| !doomed.contains(id)).collect()
    }

    /// Permutes a random contiguous interior window of length at most 4.
    pub fn shuffle_segment<R: Rng + ?Sized>(
        &self,
        mut tour: Vec<NodeId>,
        rng: &mut R,
    ) -> Vec<NodeId> {
        if tour.len() <= 4 {
            return tour;
        }
        let start = rng.random_range(1..=tour.len() - 3);
        let end = rng.random_range(start + 1..=(start + 4).min(tour.len() - 1));
        tour[start..end].shuffle(rng);
        tour
    }

    /// Cuts the interior into three contiguous parts at two random points
    /// and reassembles the parts in random order, preserving the node order
    /// inside each part. Short tours are returned unchanged.
    pub fn swap_segments<R: Rng + ?Sized>(&self, tour: Vec<NodeId>, rng: &mut R) -> Vec<NodeId> {
        if tour.len() < 10 {
            return tour;
        }
        let size = tour.len() - 2;
        let i = rng.random_range(1..=size / 2);
        let j = rng.random_range(i + 2..=size - 2);

        let mut parts = [&tour[1..i], &tour[i..j], &tour[j..tour.len() - 1]];
        parts.shuffle(rng);

        let depot = self.instance.depot();
        let mut out = Vec::with_capacity(tour.len());
        out.push(depot);
        for part in parts {
            out.extend_from_slice(part);
        }
        out.push(depot);
        out
    }

    /// Rebuilds a stripped-down tour by repeatedly inserting the
    /// highest-score unused node (ties by id) at the first randomly probed
    /// position that keeps the tour within budget.
    ///
    /// Stops after `max_insertions` successful insertions (when given) or
    /// when no unused node fits anywhere.
    pub fn greedy_repair<R: Rng + ?Sized>(
        &self,
        mut tour: Vec<NodeId>,
        max_insertions: Option<usize>,
        rng: &mut R,
    ) -> Vec<NodeId> {
        let existing: HashSet<NodeId> = tour.iter().copied().collect();
        let mut candidates: Vec<(u64, NodeId)> = self
            .instance
            .nodes()
            .iter()
            .filter(|n| !existing.contains(&n.id))
            .map(|n| (n.score, n.id))
            .collect();
        candidates.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        let mut added = 0usize;
        for (_, node_id) in candidates {
            if max_insertions.is_some_and(|cap| added >= cap) {
                break;
            }
            let mut positions: Vec<usize> = (1..tour.len()).collect();
            positions.shuffle(rng);
            for &pos in &positions {
                let mut candidate_tour = tour.clone();
                candidate_tour.insert(pos, node_id);
                let sol = Solution::evaluate(self.instance, &candidate_tour);
                if sol.is_valid {
                    tour = candidate_tour;
                    added += 1;
                    break;
                }
            }
        }
        tour
    }

    /// Adaptive shaking: applies `min(5, 1 + stagnation_level / divisor)`
    /// distinct destructive operators in random order to a copy of the tour.
    ///
    /// A `remove_fraction` step is immediately followed by a greedy repair
    /// capped at 30% of the node count, so deeply stripped tours stay
    /// competitive. When `repair` is set a final repair capped at 20
    /// insertions runs regardless. The perturbed tour is evaluated; if it
    /// blew the budget the original solution is returned unchanged.
    pub fn random_modify<R: Rng + ?Sized>(
        &self,
        solution: &Solution,
        stagnation_level: usize,
        repair: bool,
        rng: &mut R,
    ) -> Solution {
        let mut tour = solution.tour.clone();
        let num_ops = (1 + stagnation_level / self.shaking_intensity_divisor).min(5);

        let mut ops = [
            ShakeOp::RemoveKRandom,
            ShakeOp::ShuffleSegment,
            ShakeOp::RemoveFraction,
            ShakeOp::RemoveWorst,
            ShakeOp::SwapSegments,
        ];
        ops.shuffle(rng);

        for &op in ops.iter().take(num_ops) {
            tour = match op {
                ShakeOp::RemoveKRandom => {
                    let k = rng.random_range(1..=3);
                    self.remove_k_random(tour, k, rng)
                }
                ShakeOp::ShuffleSegment => self.shuffle_segment(tour, rng),
                ShakeOp::RemoveFraction => {
                    let stripped = self.remove_fraction(tour, rng);
                    let cap = (0.3 * self.instance.node_count() as f64) as usize;
                    self.greedy_repair(stripped, Some(cap), rng)
                }
                ShakeOp::RemoveWorst => {
                    let k = rng.random_range(2..=4);
                    self.remove_worst(tour, k)
                }
                ShakeOp::SwapSegments => self.swap_segments(tour, rng),
            };
        }

        if repair {
            tour = self.greedy_repair(tour, Some(20), rng);
        }

        let neighbor = Solution::evaluate(self.instance, &tour);
        if neighbor.is_valid {
            neighbor
        } else {
            solution.clone()
        }
    }
}
