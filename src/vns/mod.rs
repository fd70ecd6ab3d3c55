//! Variable Neighborhood Search controller.
//!
//! The iteration loop: shake the current solution with adaptive intensity,
//! descend with Variable Neighborhood Descent (VND) over a fixed operator
//! list, accept or reject against the incumbent, feed the pool, and restart
//! from a pool draw when the operator-level counter stagnates. Terminates
//! on the wall-clock budget or the global stagnation limit, and returns the
//! best solution ever seen.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.
//! - Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//!   Principles and applications", *European Journal of Operational Research*
//!   130(3), 449-467.

mod config;
mod runner;
mod types;

pub use config::VnsConfig;
pub use runner::{VnsResult, VnsRunner};
pub use types::{NullObserver, SearchObserver};
