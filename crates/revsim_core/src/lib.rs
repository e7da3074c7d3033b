//! Claims revenue simulation library
//!
//! This crate provides a Monte Carlo engine that estimates how much revenue a
//! set of billing claims will collect. Each claim pays out with a probability
//! chosen per payment status, and repeated trials build up a distribution of
//! total collected revenue.
//!
//! ```ignore
//! use revsim_core::{Claim, ClaimStatus, ProbabilityMap, simulate};
//!
//! let claims = vec![
//!     Claim::new("P1", 1_675.50, ClaimStatus::Pending),
//!     Claim::new("P2", 2_310.09, ClaimStatus::Approved),
//! ];
//! let summary = simulate(&claims, &ProbabilityMap::default(), 2_000)?;
//! println!("expected: {:.2}", summary.expected_revenue);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod simulation;
pub mod summary;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{Result, SimulationError};
pub use model::{
    Claim, ClaimStats, ClaimStatus, DEFAULT_ITERATIONS, DistributionBucket, Percentiles,
    ProbabilityMap, SimulationRequest, SimulationSummary,
};
pub use simulation::{monte_carlo_simulate, run_trial, simulate, simulate_with_rng};
pub use summary::summarize;
