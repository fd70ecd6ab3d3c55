//! Crate-wide error type.
//!
//! The search itself is total: malformed tours are normalized, infeasible
//! candidates are flagged invalid rather than rejected, and the main loop
//! never fails. Errors are confined to setup — instance validation,
//! configuration validation, and seed-solution construction.

use thiserror::Error;

/// Errors raised during instance construction, configuration validation,
/// or initial-solution generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The node table does not describe a usable instance.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A seed-strategy identifier does not match any registered strategy.
    #[error("unknown seed strategy '{0}'")]
    UnknownStrategy(String),

    /// A single seed strategy failed to produce a solution.
    #[error("seed strategy '{strategy}' failed: {reason}")]
    SeedStrategyFailed {
        /// Identifier of the failed strategy.
        strategy: String,
        /// Human-readable cause.
        reason: String,
    },

    /// No configured seed strategy produced a solution. This is the one
    /// fatal initialization error: there is nothing to search from.
    #[error("no seed solution could be produced by any configured strategy")]
    NoSeedSolution,
}
