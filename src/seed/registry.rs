//! String-keyed seed-strategy registry.

use std::collections::BTreeMap;

use rand::{Rng, RngCore};

use super::constructive::{best_insertion_seed, greedy_seed, random_seed};
use crate::error::Error;
use crate::instance::Instance;
use crate::solution::Solution;

/// A seed strategy: builds one solution from an instance and a random
/// stream, or reports why it could not.
pub type SeedFn = fn(&Instance, &mut dyn RngCore) -> Result<Solution, Error>;

/// Maps strategy identifiers to seed functions.
///
/// Identifiers are resolved before the search starts; an unknown name is a
/// configuration error, not a runtime branch on raw text.
#[derive(Debug, Clone)]
pub struct SeedRegistry {
    strategies: BTreeMap<String, SeedFn>,
}

impl Default for SeedRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl SeedRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            strategies: BTreeMap::new(),
        }
    }

    /// A registry preloaded with the built-in strategies `greedy`,
    /// `best_insertion`, and `random`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("greedy", greedy_seed);
        registry.register("best_insertion", best_insertion_seed);
        registry.register("random", random_seed);
        registry
    }

    /// Registers (or replaces) a strategy under the given identifier.
    pub fn register(&mut self, name: &str, strategy: SeedFn) {
        self.strategies.insert(name.to_owned(), strategy);
    }

    /// Looks up a single strategy.
    pub fn get(&self, name: &str) -> Option<SeedFn> {
        self.strategies.get(name).copied()
    }

    /// Resolves a list of identifiers, failing fast on the first unknown
    /// name.
    pub fn resolve(&self, names: &[&str]) -> Result<Vec<(String, SeedFn)>, Error> {
        names
            .iter()
            .map(|&name| {
                self.get(name)
                    .map(|f| (name.to_owned(), f))
                    .ok_or_else(|| Error::UnknownStrategy(name.to_owned()))
            })
            .collect()
    }

    /// Runs every named strategy and returns the highest-scoring seed along
    /// with the name of the strategy that produced it.
    ///
    /// A strategy failure is logged and skipped; the call fails only when
    /// no strategy produces a solution ([`Error::NoSeedSolution`]) or a
    /// name does not resolve.
    pub fn select_best_seed<R: Rng>(
        &self,
        instance: &Instance,
        names: &[&str],
        rng: &mut R,
    ) -> Result<(Solution, String), Error> {
        let resolved = self.resolve(names)?;

        let mut best: Option<(Solution, String)> = None;
        for (name, strategy) in resolved {
            match strategy(instance, rng) {
                Ok(candidate) => {
                    log::debug!(
                        "seed strategy '{}' produced score {} (distance {:.2})",
                        name,
                        candidate.score,
                        candidate.total_distance
                    );
                    if best
                        .as_ref()
                        .is_none_or(|(incumbent, _)| candidate.score > incumbent.score)
                    {
                        best = Some((candidate, name));
                    }
                }
                Err(err) => {
                    log::warn!("seed strategy '{name}' failed: {err}");
                }
            }
        }

        best.ok_or(Error::NoSeedSolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Node;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_instance() -> Instance {
        Instance::new(
            vec![
                Node::new(1, 0.0, 0.0, 0),
                Node::new(2, 1.0, 0.0, 10),
                Node::new(3, 0.0, 1.0, 20),
                Node::new(4, 1.0, 1.0, 5),
            ],
            50.0,
        )
        .unwrap()
    }

    fn failing_seed(_instance: &Instance, _rng: &mut dyn RngCore) -> Result<Solution, Error> {
        Err(Error::SeedStrategyFailed {
            strategy: "failing".into(),
            reason: "nothing to build".into(),
        })
    }

    #[test]
    fn test_defaults_registered() {
        let registry = SeedRegistry::with_defaults();
        assert!(registry.get("greedy").is_some());
        assert!(registry.get("best_insertion").is_some());
        assert!(registry.get("random").is_some());
        assert!(registry.get("simplex").is_none());
    }

    #[test]
    fn test_resolve_fails_fast_on_unknown_name() {
        let registry = SeedRegistry::with_defaults();
        let err = registry.resolve(&["greedy", "warp"]).unwrap_err();
        assert_eq!(err, Error::UnknownStrategy("warp".into()));
    }

    #[test]
    fn test_select_best_seed_picks_highest_score() {
        let registry = SeedRegistry::with_defaults();
        let inst = small_instance();
        let mut rng = StdRng::seed_from_u64(42);

        let (seed, _name) = registry
            .select_best_seed(&inst, &["greedy", "best_insertion"], &mut rng)
            .unwrap();
        // Budget is generous, so the best seed visits everything.
        assert_eq!(seed.score, 35);
        assert!(seed.is_valid);
    }

    #[test]
    fn test_select_best_seed_skips_failures() {
        let mut registry = SeedRegistry::with_defaults();
        registry.register("failing", failing_seed);
        let inst = small_instance();
        let mut rng = StdRng::seed_from_u64(42);

        let (seed, name) = registry
            .select_best_seed(&inst, &["failing", "greedy"], &mut rng)
            .unwrap();
        assert_eq!(name, "greedy");
        assert!(seed.is_valid);
    }

    #[test]
    fn test_select_best_seed_all_failures_is_fatal() {
        let mut registry = SeedRegistry::new();
        registry.register("failing", failing_seed);
        let inst = small_instance();
        let mut rng = StdRng::seed_from_u64(42);

        let err = registry
            .select_best_seed(&inst, &["failing"], &mut rng)
            .unwrap_err();
        assert_eq!(err, Error::NoSeedSolution);
    }

    #[test]
    fn test_unknown_strategy_beats_partial_success() {
        let registry = SeedRegistry::with_defaults();
        let inst = small_instance();
        let mut rng = StdRng::seed_from_u64(42);

        // Unknown identifiers fail the whole call even when others resolve.
        let err = registry
            .select_best_seed(&inst, &["greedy", "unknown"], &mut rng)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownStrategy(_)));
    }
}
