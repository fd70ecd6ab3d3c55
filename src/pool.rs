//! Bounded diverse solution archive.
//!
//! The pool keeps a small set of elite solutions that are both good (within
//! a quality ratio of the best-ever score) and mutually diverse (pairwise
//! Jaccard similarity below a threshold). Restarts draw from it with a
//! weight that balances quality against dissimilarity to the incumbent
//! best, so a restart lands somewhere promising but different.

use rand::Rng;

use crate::solution::{similarity, Solution};

/// Bounded archive of quality- and diversity-filtered solutions.
#[derive(Debug, Clone)]
pub struct SolutionPool {
    entries: Vec<Solution>,
    capacity: usize,
    similarity_threshold: f64,
    quality_ratio: f64,
}

impl SolutionPool {
    /// Creates an empty pool.
    ///
    /// `capacity` bounds the entry count, `similarity_threshold` is the
    /// maximum pairwise Jaccard similarity tolerated between members, and
    /// `quality_ratio` is the fraction of the best-ever score a candidate
    /// must reach to be admitted.
    pub fn new(capacity: usize, similarity_threshold: f64, quality_ratio: f64) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.saturating_add(1)),
            capacity,
            similarity_threshold,
            quality_ratio,
        }
    }

    /// Number of archived solutions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The archived solutions, best first.
    pub fn entries(&self) -> &[Solution] {
        &self.entries
    }

    /// Offers a candidate to the pool. Returns whether it passed the
    /// quality and diversity filters (it may still be evicted by the
    /// capacity bound if it sorts last).
    ///
    /// Members are kept sorted by `(score desc, distance asc, tour)` so the
    /// archive order is deterministic, and truncated to capacity by
    /// dropping the worst.
    pub fn admit(&mut self, candidate: Solution, best: &Solution) -> bool {
        if best.score > 0 && (candidate.score as f64) < self.quality_ratio * best.score as f64 {
            return false;
        }
        if self
            .entries
            .iter()
            .any(|member| similarity(member, &candidate) > self.similarity_threshold)
        {
            return false;
        }

        self.entries.push(candidate);
        self.entries.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.total_distance.total_cmp(&b.total_distance))
                .then_with(|| a.tour.cmp(&b.tour))
        });
        self.entries.truncate(self.capacity);
        true
    }

    /// Draws a restart base via roulette selection weighted by
    /// `0.5 * (1 - similarity(member, best)) + 0.5 * (score / max_pool_score)`.
    ///
    /// Degenerates to the sole member when the pool holds one entry and to
    /// `best` when it is empty.
    pub fn select<'s, R: Rng + ?Sized>(
        &'s self,
        best: &'s Solution,
        rng: &mut R,
    ) -> &'s Solution {
        if self.entries.is_empty() {
            return best;
        }
        if self.entries.len() == 1 {
            return &self.entries[0];
        }

        let max_score = self
            .entries
            .iter()
            .map(|s| s.score)
            .max()
            .unwrap_or(1)
            .max(1);
        let weights: Vec<f64> = self
            .entries
            .iter()
            .map(|s| {
                0.5 * (1.0 - similarity(s, best)) + 0.5 * (s.score as f64 / max_score as f64)
            })
            .collect();

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return &self.entries[0];
        }
        let mut roll = rng.random_range(0.0..total);
        for (i, w) in weights.iter().enumerate() {
            roll -= w;
            if roll <= 0.0 {
                return &self.entries[i];
            }
        }
        self.entries.last().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{Instance, Node};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fan_instance() -> Instance {
        // Nodes spread around the depot so arbitrary subsets stay feasible.
        let mut nodes = vec![Node::new(1, 0.0, 0.0, 0)];
        for id in 2..=9usize {
            let angle = id as f64;
            nodes.push(Node::new(
                id,
                angle.cos(),
                angle.sin(),
                10 * id as u64,
            ));
        }
        Instance::new(nodes, 1000.0).unwrap()
    }

    fn sol(inst: &Instance, ids: &[usize]) -> Solution {
        Solution::evaluate(inst, ids)
    }

    #[test]
    fn test_admit_rejects_low_quality() {
        let inst = fan_instance();
        let mut pool = SolutionPool::new(4, 0.85, 0.85);
        let best = sol(&inst, &[1, 8, 9, 1]); // score 170

        assert!(!pool.admit(sol(&inst, &[1, 2, 1]), &best)); // score 20
        assert!(pool.admit(sol(&inst, &[1, 8, 9, 1]), &best));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_admit_quality_floor_inactive_while_best_is_zero() {
        let inst = fan_instance();
        let mut pool = SolutionPool::new(4, 0.85, 0.85);
        let best = sol(&inst, &[1, 1]); // score 0

        assert!(pool.admit(sol(&inst, &[1, 2, 1]), &best));
    }

    #[test]
    fn test_admit_rejects_similar_members() {
        let inst = fan_instance();
        let mut pool = SolutionPool::new(4, 0.85, 0.0);
        let best = sol(&inst, &[1, 2, 3, 4, 5, 1]);

        assert!(pool.admit(sol(&inst, &[1, 2, 3, 4, 5, 1]), &best));
        // Identical node set, different order: similarity 1.0.
        assert!(!pool.admit(sol(&inst, &[1, 5, 4, 3, 2, 1]), &best));
        // Disjoint node set: admitted.
        assert!(pool.admit(sol(&inst, &[1, 6, 7, 1]), &best));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_capacity_drops_worst() {
        let inst = fan_instance();
        let mut pool = SolutionPool::new(2, 1.1, 0.0); // similarity filter off
        let best = sol(&inst, &[1, 9, 1]);

        pool.admit(sol(&inst, &[1, 2, 1]), &best); // 20
        pool.admit(sol(&inst, &[1, 9, 1]), &best); // 90
        pool.admit(sol(&inst, &[1, 5, 1]), &best); // 50

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.entries()[0].score, 90);
        assert_eq!(pool.entries()[1].score, 50);
    }

    #[test]
    fn test_sorted_best_first_distance_breaks_ties() {
        let inst = fan_instance();
        let mut pool = SolutionPool::new(4, 1.1, 0.0);
        let best = sol(&inst, &[1, 9, 1]);

        let near = sol(&inst, &[1, 2, 3, 1]);
        let far = sol(&inst, &[1, 3, 2, 1]);
        assert_eq!(near.score, far.score);
        let (short, long) = if near.total_distance < far.total_distance {
            (near, far)
        } else {
            (far, near)
        };

        pool.admit(long.clone(), &best);
        pool.admit(short.clone(), &best);
        assert_eq!(pool.entries()[0], short);
        assert_eq!(pool.entries()[1], long);
    }

    #[test]
    fn test_pairwise_similarity_invariant() {
        let inst = fan_instance();
        let mut pool = SolutionPool::new(6, 0.5, 0.0);
        let best = sol(&inst, &[1, 2, 3, 4, 1]);

        for ids in [
            vec![1, 2, 3, 4, 1],
            vec![1, 2, 3, 5, 1],
            vec![1, 5, 6, 7, 1],
            vec![1, 8, 9, 1],
            vec![1, 2, 5, 8, 1],
        ] {
            pool.admit(sol(&inst, &ids), &best);
        }

        for (i, a) in pool.entries().iter().enumerate() {
            for b in pool.entries().iter().skip(i + 1) {
                assert!(similarity(a, b) <= 0.5);
            }
        }
    }

    #[test]
    fn test_select_empty_returns_best() {
        let inst = fan_instance();
        let pool = SolutionPool::new(4, 0.85, 0.85);
        let best = sol(&inst, &[1, 9, 1]);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(pool.select(&best, &mut rng), &best);
    }

    #[test]
    fn test_select_single_entry() {
        let inst = fan_instance();
        let mut pool = SolutionPool::new(4, 0.85, 0.0);
        let best = sol(&inst, &[1, 9, 1]);
        let only = sol(&inst, &[1, 2, 1]);
        pool.admit(only.clone(), &best);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(pool.select(&best, &mut rng), &only);
    }

    #[test]
    fn test_select_reaches_every_entry() {
        let inst = fan_instance();
        let mut pool = SolutionPool::new(4, 1.1, 0.0);
        let best = sol(&inst, &[1, 9, 1]);
        pool.admit(sol(&inst, &[1, 2, 1]), &best);
        pool.admit(sol(&inst, &[1, 5, 1]), &best);
        pool.admit(sol(&inst, &[1, 9, 1]), &best);

        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pool.select(&best, &mut rng).tour.clone());
        }
        assert_eq!(seen.len(), 3, "every pool member should be selectable");
    }
}
