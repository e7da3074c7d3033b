//! Simulation requests and their statistical summaries

use serde::{Deserialize, Serialize};

use super::claims::Claim;
use super::probabilities::ProbabilityMap;

/// Number of trials run when the caller does not choose one
pub const DEFAULT_ITERATIONS: usize = 2000;

/// Everything needed for one simulation run, passed by value to the worker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub claims: Vec<Claim>,
    #[serde(default)]
    pub probabilities: ProbabilityMap,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Optional seed for reproducible results (None = random each run)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

impl SimulationRequest {
    pub fn new(claims: Vec<Claim>, probabilities: ProbabilityMap) -> Self {
        Self {
            claims,
            probabilities,
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }

    #[must_use]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Nearest-rank percentiles of the trial outcomes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Percentiles {
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
}

/// One histogram bar: outcomes in `[lower_bound, lower_bound + step)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionBucket {
    pub lower_bound: f64,
    pub count: usize,
}

/// Statistical summary of a Monte Carlo run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub iterations: usize,
    pub expected_revenue: f64,
    pub min_revenue: f64,
    pub max_revenue: f64,
    pub percentiles: Percentiles,
    /// Histogram buckets sorted by `lower_bound` ascending
    pub distribution: Vec<DistributionBucket>,
}

impl SimulationSummary {
    /// Histogram as (rounded revenue, frequency) pairs for charting
    pub fn chart_points(&self) -> Vec<(i64, usize)> {
        self.distribution
            .iter()
            .map(|b| (b.lower_bound.round() as i64, b.count))
            .collect()
    }

    /// Total number of outcomes across all buckets
    pub fn distribution_total(&self) -> usize {
        self.distribution.iter().map(|b| b.count).sum()
    }
}
