//! Reduction of raw trial outcomes into a [`SimulationSummary`].

use std::collections::BTreeMap;

use crate::error::{Result, SimulationError};
use crate::model::{DistributionBucket, Percentiles, SimulationSummary};

/// Number of equal-width steps between the smallest and largest outcome.
///
/// Buckets sit on a grid of multiples of the step rather than offsets from the
/// minimum, so flooring usually yields `HISTOGRAM_STEPS + 1` buckets.
pub const HISTOGRAM_STEPS: usize = 10;

/// Summarize the outcomes of a Monte Carlo run.
///
/// Outcomes are sorted ascending; percentiles use nearest rank with the index
/// clamped to the last outcome.
pub fn summarize(mut outcomes: Vec<f64>) -> Result<SimulationSummary> {
    if outcomes.is_empty() {
        return Err(SimulationError::InvalidIterationCount);
    }

    outcomes.sort_by(f64::total_cmp);

    let n = outcomes.len();
    let min_revenue = outcomes[0];
    let max_revenue = outcomes[n - 1];

    // Rounding in the sum can push the mean a hair outside the observed range
    let mean = outcomes.iter().sum::<f64>() / n as f64;
    let expected_revenue = mean.max(min_revenue).min(max_revenue);

    let percentiles = Percentiles {
        p25: nearest_rank(&outcomes, 0.25),
        p50: nearest_rank(&outcomes, 0.50),
        p75: nearest_rank(&outcomes, 0.75),
        p95: nearest_rank(&outcomes, 0.95),
    };

    let distribution = histogram(&outcomes, min_revenue, max_revenue);

    Ok(SimulationSummary {
        iterations: n,
        expected_revenue,
        min_revenue,
        max_revenue,
        percentiles,
        distribution,
    })
}

/// Value at `floor(n * fraction)` in a sorted, non-empty slice
#[inline]
pub fn nearest_rank(sorted: &[f64], fraction: f64) -> f64 {
    let idx = (sorted.len() as f64 * fraction).floor() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn histogram(sorted: &[f64], min: f64, max: f64) -> Vec<DistributionBucket> {
    let step = (max - min) / HISTOGRAM_STEPS as f64;

    // Identical outcomes: one bucket holding everything
    if !step.is_finite() || step <= 0.0 {
        return vec![DistributionBucket {
            lower_bound: min,
            count: sorted.len(),
        }];
    }

    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for value in sorted {
        *counts.entry((value / step).floor() as i64).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(index, count)| DistributionBucket {
            lower_bound: index as f64 * step,
            count,
        })
        .collect()
}
