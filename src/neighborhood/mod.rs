//! Neighborhood operator library.
//!
//! Two families of operators over tours:
//!
//! - **Shaking** (destructive): randomized perturbations that remove or
//!   reorder parts of a tour to escape local optima, composed adaptively by
//!   [`Neighborhoods::random_modify`] together with a bounded greedy repair.
//! - **Local search** (best improvement): exhaustive scans of a defined
//!   neighborhood that return the best valid improving neighbor, or the
//!   input unchanged.
//!
//! All operators are pure with respect to shared state: they take a tour or
//! solution plus a random stream and build a fresh result. The adaptive
//! shaking intensity is driven by a stagnation level passed in per call, so
//! the operator library itself carries no counters.

mod local_search;
mod shaking;

use crate::instance::Instance;

/// The operator library, bound to one instance and its shaking tunables.
pub struct Neighborhoods<'a> {
    instance: &'a Instance,
    shaking_intensity_divisor: usize,
    remove_min_pct: u32,
    remove_max_pct: u32,
}

impl<'a> Neighborhoods<'a> {
    /// Binds the operator library to an instance.
    ///
    /// `shaking_intensity_divisor` controls how fast shaking escalates with
    /// stagnation (clamped to at least 1); `remove_min_pct..=remove_max_pct`
    /// is the percentage range for [`Neighborhoods::remove_fraction`].
    pub fn new(
        instance: &'a Instance,
        shaking_intensity_divisor: usize,
        remove_min_pct: u32,
        remove_max_pct: u32,
    ) -> Self {
        Self {
            instance,
            shaking_intensity_divisor: shaking_intensity_divisor.max(1),
            remove_min_pct: remove_min_pct.min(remove_max_pct),
            remove_max_pct,
        }
    }

    /// The instance this library operates on.
    pub fn instance(&self) -> &Instance {
        self.instance
    }
}
