//! VNS controller configuration.

use std::time::Duration;

use crate::error::Error;

/// Tunables of the VNS controller.
///
/// Defaults are the empirically tuned values for mid-size orienteering
/// instances; treat them as configuration, not correctness requirements.
///
/// # Examples
///
/// ```
/// use orienteering_vns::vns::VnsConfig;
/// use std::time::Duration;
///
/// let config = VnsConfig::default()
///     .with_max_time(Duration::from_secs(30))
///     .with_stagnation_limit(80)
///     .with_seed(42);
/// assert_eq!(config.stagnation_limit, 80);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct VnsConfig {
    /// Maximum number of solutions kept in the restart pool.
    pub max_pool_size: usize,
    /// Maximum pairwise Jaccard similarity tolerated between pool members.
    pub similarity_threshold: f64,
    /// Fraction of the best score a candidate must reach to enter the pool.
    pub pool_quality_ratio: f64,
    /// Consecutive non-improving iterations before a restart from the pool.
    pub restart_stagnation: usize,
    /// Consecutive non-improving iterations before the run terminates.
    pub stagnation_limit: usize,
    /// Wall-clock budget for the whole run.
    pub max_time: Duration,
    /// Stagnation iterations per extra shaking operator. Smaller values
    /// escalate the perturbation faster.
    pub shaking_intensity_divisor: usize,
    /// Lower bound of the removal percentage drawn by fraction removal.
    pub remove_min_pct: u32,
    /// Upper bound of the removal percentage drawn by fraction removal.
    pub remove_max_pct: u32,
    /// Whether every shake ends with a bounded greedy repair.
    pub repair_shaking: bool,
    /// Random seed (`None` for the default seed).
    pub seed: Option<u64>,
}

impl Default for VnsConfig {
    fn default() -> Self {
        Self {
            max_pool_size: 12,
            similarity_threshold: 0.85,
            pool_quality_ratio: 0.85,
            restart_stagnation: 60,
            stagnation_limit: 120,
            max_time: Duration::from_secs(180),
            shaking_intensity_divisor: 5,
            remove_min_pct: 25,
            remove_max_pct: 35,
            repair_shaking: false,
            seed: None,
        }
    }
}

impl VnsConfig {
    /// Sets the pool capacity.
    pub fn with_max_pool_size(mut self, n: usize) -> Self {
        self.max_pool_size = n;
        self
    }

    /// Sets the pool similarity threshold.
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Sets the pool quality ratio.
    pub fn with_pool_quality_ratio(mut self, ratio: f64) -> Self {
        self.pool_quality_ratio = ratio;
        self
    }

    /// Sets the restart stagnation threshold.
    pub fn with_restart_stagnation(mut self, n: usize) -> Self {
        self.restart_stagnation = n;
        self
    }

    /// Sets the global stagnation limit.
    pub fn with_stagnation_limit(mut self, n: usize) -> Self {
        self.stagnation_limit = n;
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_max_time(mut self, budget: Duration) -> Self {
        self.max_time = budget;
        self
    }

    /// Sets the shaking intensity divisor.
    pub fn with_shaking_intensity_divisor(mut self, divisor: usize) -> Self {
        self.shaking_intensity_divisor = divisor;
        self
    }

    /// Sets the removal percentage range for fraction removal.
    pub fn with_removal_percentage(mut self, min_pct: u32, max_pct: u32) -> Self {
        self.remove_min_pct = min_pct;
        self.remove_max_pct = max_pct;
        self
    }

    /// Enables or disables forced repair after every shake.
    pub fn with_repair_shaking(mut self, repair: bool) -> Self {
        self.repair_shaking = repair;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration, failing fast on out-of-range values.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_pool_size == 0 {
            return Err(Error::InvalidConfig("max_pool_size must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::InvalidConfig(format!(
                "similarity_threshold must be in [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.pool_quality_ratio) {
            return Err(Error::InvalidConfig(format!(
                "pool_quality_ratio must be in [0, 1], got {}",
                self.pool_quality_ratio
            )));
        }
        if self.stagnation_limit == 0 {
            return Err(Error::InvalidConfig(
                "stagnation_limit must be positive".into(),
            ));
        }
        if self.shaking_intensity_divisor == 0 {
            return Err(Error::InvalidConfig(
                "shaking_intensity_divisor must be positive".into(),
            ));
        }
        if self.remove_min_pct > self.remove_max_pct {
            return Err(Error::InvalidConfig(format!(
                "remove_min_pct ({}) must be <= remove_max_pct ({})",
                self.remove_min_pct, self.remove_max_pct
            )));
        }
        if self.remove_max_pct > 100 {
            return Err(Error::InvalidConfig(format!(
                "remove_max_pct must be at most 100, got {}",
                self.remove_max_pct
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VnsConfig::default();
        assert_eq!(config.max_pool_size, 12);
        assert!((config.similarity_threshold - 0.85).abs() < 1e-10);
        assert!((config.pool_quality_ratio - 0.85).abs() < 1e-10);
        assert_eq!(config.restart_stagnation, 60);
        assert_eq!(config.stagnation_limit, 120);
        assert_eq!(config.max_time, Duration::from_secs(180));
        assert_eq!(config.shaking_intensity_divisor, 5);
        assert_eq!((config.remove_min_pct, config.remove_max_pct), (25, 35));
        assert!(!config.repair_shaking);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = VnsConfig::default()
            .with_max_pool_size(6)
            .with_similarity_threshold(0.7)
            .with_pool_quality_ratio(0.9)
            .with_restart_stagnation(40)
            .with_stagnation_limit(90)
            .with_max_time(Duration::from_secs(10))
            .with_shaking_intensity_divisor(3)
            .with_removal_percentage(10, 50)
            .with_repair_shaking(true)
            .with_seed(7);

        assert_eq!(config.max_pool_size, 6);
        assert!((config.similarity_threshold - 0.7).abs() < 1e-10);
        assert_eq!(config.restart_stagnation, 40);
        assert_eq!(config.stagnation_limit, 90);
        assert_eq!(config.max_time, Duration::from_secs(10));
        assert_eq!((config.remove_min_pct, config.remove_max_pct), (10, 50));
        assert!(config.repair_shaking);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(VnsConfig::default()
            .with_max_pool_size(0)
            .validate()
            .is_err());
        assert!(VnsConfig::default()
            .with_similarity_threshold(1.5)
            .validate()
            .is_err());
        assert!(VnsConfig::default()
            .with_pool_quality_ratio(-0.1)
            .validate()
            .is_err());
        assert!(VnsConfig::default()
            .with_stagnation_limit(0)
            .validate()
            .is_err());
        assert!(VnsConfig::default()
            .with_shaking_intensity_divisor(0)
            .validate()
            .is_err());
        assert!(VnsConfig::default()
            .with_removal_percentage(60, 40)
            .validate()
            .is_err());
        assert!(VnsConfig::default()
            .with_removal_percentage(10, 120)
            .validate()
            .is_err());
    }
}
