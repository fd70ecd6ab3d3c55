//! VNS execution engine.
//!
//! # Algorithm
//!
//! 1. Re-evaluate the start solution; it becomes `current` and `best`.
//! 2. While the wall clock and the global stagnation limit allow:
//!    a. **Shake**: perturb `current` with intensity driven by the
//!       operator-level stagnation counter.
//!    b. **Descend (VND)**: scan the fixed operator list; any improvement
//!       restarts the scan from the first operator.
//!    c. **Accept or not**: compare the descended solution to `current`.
//!       Acceptance resets both stagnation counters, updates `best` when
//!       beaten, and offers the solution to the pool; rejection increments
//!       both counters.
//!    d. **Restart**: when the operator counter passes its threshold, draw
//!       a pool member, shake it with forced repair, and install it as
//!       `current`, resetting the operator counter only.
//! 3. Return the best solution ever seen.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::VnsConfig;
use super::types::{NullObserver, SearchObserver};
use crate::error::Error;
use crate::instance::Instance;
use crate::neighborhood::Neighborhoods;
use crate::pool::SolutionPool;
use crate::solution::Solution;

/// Result of a VNS run.
#[derive(Debug, Clone)]
pub struct VnsResult {
    /// Best solution found.
    pub best: Solution,
    /// Outer iterations (shake + descent cycles) executed.
    pub iterations: usize,
    /// Restarts fired.
    pub restarts: usize,
    /// Iteration at which the best solution was found (0 when the start
    /// solution was never beaten).
    pub best_iteration: usize,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// Variable Neighborhood Search runner.
pub struct VnsRunner;

impl VnsRunner {
    /// Executes VNS from the given start solution.
    ///
    /// The start solution is re-evaluated first, so a hand-built tour is
    /// normalized before the search sees it.
    ///
    /// # Examples
    ///
    /// ```
    /// use orienteering_vns::vns::{VnsConfig, VnsRunner};
    /// use orienteering_vns::{Instance, Node, Solution};
    /// use std::time::Duration;
    ///
    /// let instance = Instance::new(
    ///     vec![
    ///         Node::new(1, 0.0, 0.0, 0),
    ///         Node::new(2, 1.0, 0.0, 10),
    ///         Node::new(3, 2.0, 0.0, 20),
    ///     ],
    ///     100.0,
    /// )?;
    /// let start = Solution::evaluate(&instance, &[1, 1]);
    /// let config = VnsConfig::default()
    ///     .with_stagnation_limit(10)
    ///     .with_max_time(Duration::from_secs(5))
    ///     .with_seed(42);
    ///
    /// let result = VnsRunner::run(&instance, start, &config)?;
    /// assert_eq!(result.best.score, 30);
    /// # Ok::<(), orienteering_vns::Error>(())
    /// ```
    pub fn run(
        instance: &Instance,
        start: Solution,
        config: &VnsConfig,
    ) -> Result<VnsResult, Error> {
        Self::run_with_observer(instance, start, config, &mut NullObserver)
    }

    /// Like [`VnsRunner::run`] with an observer receiving progress events.
    pub fn run_with_observer<O: SearchObserver>(
        instance: &Instance,
        start: Solution,
        config: &VnsConfig,
        observer: &mut O,
    ) -> Result<VnsResult, Error> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(42));
        Ok(Self::search(instance, start, config, observer, &mut rng))
    }

    fn search<O: SearchObserver, R: Rng>(
        instance: &Instance,
        start: Solution,
        config: &VnsConfig,
        observer: &mut O,
        rng: &mut R,
    ) -> VnsResult {
        let started = Instant::now();
        let neighborhoods = Neighborhoods::new(
            instance,
            config.shaking_intensity_divisor,
            config.remove_min_pct,
            config.remove_max_pct,
        );
        let mut pool = SolutionPool::new(
            config.max_pool_size,
            config.similarity_threshold,
            config.pool_quality_ratio,
        );

        let mut current = Solution::evaluate(instance, &start.tour);
        let mut best = current.clone();
        pool.admit(current.clone(), &best);

        let mut global_stagnation = 0usize;
        let mut operator_counter = 0usize;
        let mut iterations = 0usize;
        let mut restarts = 0usize;
        let mut best_iteration = 0usize;

        while started.elapsed() < config.max_time && global_stagnation < config.stagnation_limit {
            iterations += 1;

            let shaken =
                neighborhoods.random_modify(&current, operator_counter, config.repair_shaking, rng);
            if started.elapsed() >= config.max_time {
                break;
            }

            let descended = Self::descend(&neighborhoods, shaken, &started, config.max_time);

            if descended.improves_over(&current) {
                current = descended;
                global_stagnation = 0;
                operator_counter = 0;
                if current.improves_over(&best) {
                    best = current.clone();
                    best_iteration = iterations;
                    observer.on_new_best(&best);
                    log::info!(
                        "new best at iteration {}: score {} distance {:.2} tour {:?}",
                        iterations,
                        best.score,
                        best.total_distance,
                        best.tour
                    );
                }
                pool.admit(current.clone(), &best);
            } else {
                global_stagnation += 1;
                operator_counter += 1;
            }

            if operator_counter > config.restart_stagnation {
                observer.on_restart(operator_counter);
                log::debug!("restart after {operator_counter} stagnant iterations");
                restarts += 1;
                // Shaking intensity still reflects the stagnation depth.
                let base = pool.select(&best, rng).clone();
                current = neighborhoods.random_modify(&base, operator_counter, true, rng);
                pool.admit(current.clone(), &best);
                operator_counter = 0;
            }
        }

        log::debug!(
            "search done after {} iterations ({} restarts): best score {}",
            iterations,
            restarts,
            best.score
        );

        VnsResult {
            best,
            iterations,
            restarts,
            best_iteration,
            elapsed: started.elapsed(),
        }
    }

    /// Variable Neighborhood Descent: first improvement across the operator
    /// list, best improvement within each operator. The clock is sampled on
    /// every other operator, bounding budget overrun to roughly one pass.
    fn descend(
        neighborhoods: &Neighborhoods,
        shaken: Solution,
        started: &Instant,
        max_time: Duration,
    ) -> Solution {
        // The fixed operator list, in scan order.
        let operators = [
            Neighborhoods::add_best_node,
            Neighborhoods::insert_best_node_at_best_position,
            Neighborhoods::replace_node,
            Neighborhoods::segment_move,
        ];

        let mut working = shaken;
        let mut k = 0;
        while k < operators.len() {
            if k.is_multiple_of(2) && started.elapsed() >= max_time {
                break;
            }
            let candidate = operators[k](neighborhoods, &working);
            if candidate.improves_over(&working) {
                working = candidate;
                k = 0;
            } else {
                k += 1;
            }
        }
        working
    }
}
