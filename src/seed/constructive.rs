//! Built-in constructive heuristics.
//!
//! Each builds one feasible tour from scratch. They deliberately trade
//! solution quality for speed and determinism; the search loop does the
//! real optimization.

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::error::Error;
use crate::instance::{Instance, NodeId};
use crate::solution::Solution;

/// Greedy append: repeatedly visits the unused node with the best ratio of
/// score to marginal travel cost (outbound leg plus the return to the
/// depot), skipping nodes that would blow the budget. Candidate order is
/// ascending by id, so the result is deterministic.
pub fn greedy_seed(instance: &Instance, _rng: &mut dyn RngCore) -> Result<Solution, Error> {
    let depot = instance.depot();
    let mut current = depot;
    let mut tour = vec![depot];
    let mut remaining: Vec<NodeId> = (1..=instance.node_count())
        .filter(|&id| id != depot)
        .collect();
    let mut time = 0.0;

    while !remaining.is_empty() {
        let mut best: Option<(f64, NodeId)> = None;
        for &id in &remaining {
            let detour = instance.distance(current, id) + instance.distance(id, depot);
            if time + detour > instance.time_budget() {
                continue;
            }
            let value = if detour > 0.0 {
                instance.score(id) as f64 / detour
            } else {
                f64::INFINITY
            };
            if best.is_none_or(|(bv, _)| value > bv) {
                best = Some((value, id));
            }
        }

        let Some((_, chosen)) = best else { break };
        time += instance.distance(current, chosen);
        current = chosen;
        tour.push(chosen);
        remaining.retain(|&id| id != chosen);
    }

    tour.push(depot);
    Ok(Solution::evaluate(instance, &tour))
}

/// Cheapest insertion: grows the tour from `[depot, depot]` by inserting,
/// at every step, the unused node whose best insertion point increases the
/// total distance the least while staying within budget.
pub fn best_insertion_seed(instance: &Instance, _rng: &mut dyn RngCore) -> Result<Solution, Error> {
    let depot = instance.depot();
    let mut tour = vec![depot, depot];
    let mut remaining: Vec<NodeId> = (1..=instance.node_count())
        .filter(|&id| id != depot)
        .collect();

    loop {
        let mut best: Option<(f64, NodeId, usize)> = None;
        for &id in &remaining {
            for pos in 1..tour.len() {
                let before = tour[pos - 1];
                let after = tour[pos];
                let added = instance.distance(before, id) + instance.distance(id, after)
                    - instance.distance(before, after);

                let mut candidate = tour.clone();
                candidate.insert(pos, id);
                let trial = Solution::evaluate(instance, &candidate);
                if trial.is_valid && best.is_none_or(|(inc, _, _)| added < inc) {
                    best = Some((added, id, pos));
                }
            }
        }

        let Some((_, id, pos)) = best else { break };
        tour.insert(pos, id);
        remaining.retain(|&r| r != id);
    }

    Ok(Solution::evaluate(instance, &tour))
}

/// Randomized append: shuffles the node order and visits each node whose
/// outbound leg plus return to the depot still fits the budget.
pub fn random_seed(instance: &Instance, rng: &mut dyn RngCore) -> Result<Solution, Error> {
    let depot = instance.depot();
    let mut current = depot;
    let mut tour = vec![depot];
    let mut remaining: Vec<NodeId> = (1..=instance.node_count())
        .filter(|&id| id != depot)
        .collect();
    remaining.shuffle(rng);
    let mut time = 0.0;

    for id in remaining {
        let detour = instance.distance(current, id) + instance.distance(id, depot);
        if time + detour > instance.time_budget() {
            continue;
        }
        time += instance.distance(current, id);
        tour.push(id);
        current = id;
    }

    tour.push(depot);
    Ok(Solution::evaluate(instance, &tour))
}
