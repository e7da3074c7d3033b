use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::{Result, SimulationError};
use crate::model::{Claim, ProbabilityMap, SimulationRequest, SimulationSummary};
use crate::summary::summarize;

/// Trials per independently seeded batch in [`monte_carlo_simulate`]
const MAX_BATCH_SIZE: usize = 100;

/// Run one trial: every claim pays its full amount with the probability
/// assigned to its status, independently of all other claims.
pub fn run_trial<R: Rng + ?Sized>(
    claims: &[Claim],
    probabilities: &ProbabilityMap,
    rng: &mut R,
) -> f64 {
    claims.iter().fold(0.0, |total, claim| {
        let draw: f64 = rng.random();
        if draw < probabilities.get(&claim.status) {
            total + claim.amount
        } else {
            total
        }
    })
}

/// Simulate `iterations` trials using thread-local entropy.
pub fn simulate(
    claims: &[Claim],
    probabilities: &ProbabilityMap,
    iterations: usize,
) -> Result<SimulationSummary> {
    simulate_with_rng(claims, probabilities, iterations, &mut rand::rng())
}

/// Simulate `iterations` trials drawing from the given random source.
///
/// With a seeded `rng` the summary is fully reproducible.
pub fn simulate_with_rng<R: Rng + ?Sized>(
    claims: &[Claim],
    probabilities: &ProbabilityMap,
    iterations: usize,
    rng: &mut R,
) -> Result<SimulationSummary> {
    check_iterations(iterations)?;

    let resolved = resolve(claims, probabilities);
    let outcomes = (0..iterations)
        .map(|_| resolved_trial(&resolved, rng))
        .collect();

    summarize(outcomes)
}

/// Run a full simulation request.
///
/// Trials are split into batches of at most 100, each with its own `SmallRng`
/// seeded from the request seed plus the batch index. Batches run on rayon when
/// the `parallel` feature is enabled; the summary for a given seed is the same
/// either way.
pub fn monte_carlo_simulate(request: &SimulationRequest) -> Result<SimulationSummary> {
    let num_iterations = request.iterations;
    check_iterations(num_iterations)?;

    let base_seed = request.seed.unwrap_or_else(|| rand::rng().random());
    let resolved = resolve(&request.claims, &request.probabilities);
    let num_batches = num_iterations.div_ceil(MAX_BATCH_SIZE);

    let run_batch = |i: usize| {
        let mut rng = SmallRng::seed_from_u64(base_seed.wrapping_add(i as u64));

        let batch_size = if i == num_batches - 1 {
            num_iterations - i * MAX_BATCH_SIZE
        } else {
            MAX_BATCH_SIZE
        };

        (0..batch_size)
            .map(|_| resolved_trial(&resolved, &mut rng))
            .collect::<Vec<_>>()
    };

    #[cfg(feature = "parallel")]
    let outcomes: Vec<f64> = (0..num_batches).into_par_iter().flat_map(run_batch).collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<f64> = (0..num_batches).flat_map(run_batch).collect();

    summarize(outcomes)
}

fn check_iterations(iterations: usize) -> Result<()> {
    if iterations == 0 {
        return Err(SimulationError::InvalidIterationCount);
    }
    Ok(())
}

/// Look up each claim's probability once per run instead of once per trial.
fn resolve(claims: &[Claim], probabilities: &ProbabilityMap) -> Vec<(f64, f64)> {
    claims
        .iter()
        .map(|claim| (claim.amount, probabilities.get(&claim.status)))
        .collect()
}

#[inline]
fn resolved_trial<R: Rng + ?Sized>(resolved: &[(f64, f64)], rng: &mut R) -> f64 {
    resolved.iter().fold(0.0, |total, &(amount, probability)| {
        let draw: f64 = rng.random();
        if draw < probability {
            total + amount
        } else {
            total
        }
    })
}
