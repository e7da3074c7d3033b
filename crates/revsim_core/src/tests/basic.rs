//! Basic simulation tests
//!
//! Trial mechanics, error handling and the degenerate cases where every trial
//! produces the same total.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::SimulationError;
use crate::model::{Claim, ClaimStatus, DistributionBucket, ProbabilityMap, SimulationRequest};
use crate::simulation::{monte_carlo_simulate, run_trial, simulate, simulate_with_rng};

use super::mixed_claims;

#[test]
fn test_zero_iterations_rejected() {
    let claims = mixed_claims();
    let probabilities = ProbabilityMap::default();

    assert_eq!(
        simulate(&claims, &probabilities, 0),
        Err(SimulationError::InvalidIterationCount)
    );

    let request = SimulationRequest::new(claims, probabilities).iterations(0);
    assert_eq!(
        monte_carlo_simulate(&request),
        Err(SimulationError::InvalidIterationCount)
    );
}

#[test]
fn test_empty_claims_degenerate_summary() {
    let summary = simulate(&[], &ProbabilityMap::default(), 2000).unwrap();

    assert_eq!(summary.iterations, 2000);
    assert_eq!(summary.expected_revenue, 0.0);
    assert_eq!(summary.min_revenue, 0.0);
    assert_eq!(summary.max_revenue, 0.0);
    assert_eq!(summary.percentiles.p25, 0.0);
    assert_eq!(summary.percentiles.p95, 0.0);
    assert_eq!(
        summary.distribution,
        vec![DistributionBucket {
            lower_bound: 0.0,
            count: 2000
        }]
    );
}

#[test]
fn test_all_certain_pays_full_amount() {
    let claims = vec![
        Claim::new("A", 100.0, ClaimStatus::Approved),
        Claim::new("B", 250.0, ClaimStatus::Pending),
        Claim::new("C", 50.0, ClaimStatus::Denied),
    ];
    let probabilities = ProbabilityMap::empty()
        .with(ClaimStatus::Approved, 1.0)
        .with(ClaimStatus::Pending, 1.0)
        .with(ClaimStatus::Denied, 1.0);

    let summary = simulate(&claims, &probabilities, 300).unwrap();

    assert_eq!(summary.min_revenue, 400.0);
    assert_eq!(summary.max_revenue, 400.0);
    assert_eq!(summary.expected_revenue, 400.0);
    assert_eq!(summary.percentiles.p50, 400.0);
    assert_eq!(
        summary.distribution,
        vec![DistributionBucket {
            lower_bound: 400.0,
            count: 300
        }]
    );
}

#[test]
fn test_all_impossible_pays_nothing() {
    let claims = mixed_claims();
    let probabilities = ProbabilityMap::empty()
        .with(ClaimStatus::Approved, 0.0)
        .with(ClaimStatus::Pending, 0.0)
        .with(ClaimStatus::Denied, 0.0);

    let summary = simulate(&claims, &probabilities, 750).unwrap();

    assert_eq!(summary.expected_revenue, 0.0);
    assert_eq!(summary.max_revenue, 0.0);
    assert_eq!(summary.percentiles.p75, 0.0);
    assert_eq!(
        summary.distribution,
        vec![DistributionBucket {
            lower_bound: 0.0,
            count: 750
        }]
    );
}

#[test]
fn test_approved_only_scenario() {
    let claims = vec![
        Claim::new("P1", 100.0, ClaimStatus::Approved),
        Claim::new("P2", 200.0, ClaimStatus::Denied),
    ];
    let probabilities = ProbabilityMap::empty()
        .with(ClaimStatus::Approved, 1.0)
        .with(ClaimStatus::Denied, 0.0);

    let request = SimulationRequest::new(claims, probabilities).iterations(500);
    let summary = monte_carlo_simulate(&request).unwrap();

    assert_eq!(summary.expected_revenue, 100.0);
    assert_eq!(summary.min_revenue, 100.0);
    assert_eq!(summary.max_revenue, 100.0);
    assert_eq!(summary.percentiles.p25, 100.0);
    assert_eq!(summary.percentiles.p50, 100.0);
    assert_eq!(summary.percentiles.p75, 100.0);
    assert_eq!(summary.percentiles.p95, 100.0);
    assert_eq!(summary.chart_points(), vec![(100, 500)]);
}

#[test]
fn test_unknown_status_never_pays() {
    let claims = vec![
        Claim::new("A", 100.0, ClaimStatus::Approved),
        Claim::new("X", 10_000.0, "Appealed"),
    ];
    let probabilities = ProbabilityMap::empty().with(ClaimStatus::Approved, 1.0);

    let summary = simulate(&claims, &probabilities, 200).unwrap();
    assert_eq!(summary.max_revenue, 100.0);
}

#[test]
fn test_out_of_range_probabilities_clamp() {
    let claims = vec![
        Claim::new("A", 100.0, ClaimStatus::Approved),
        Claim::new("D", 300.0, ClaimStatus::Denied),
    ];
    let probabilities = ProbabilityMap::empty()
        .with(ClaimStatus::Approved, 1.5)
        .with(ClaimStatus::Denied, -0.5);

    let summary = simulate(&claims, &probabilities, 400).unwrap();
    assert_eq!(summary.min_revenue, 100.0);
    assert_eq!(summary.max_revenue, 100.0);
}

#[test]
fn test_run_trial_bounds() {
    let claims = mixed_claims();
    let total: f64 = claims.iter().map(|c| c.amount).sum();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let outcome = run_trial(&claims, &ProbabilityMap::default(), &mut rng);
        assert!((0.0..=total).contains(&outcome));
    }
}

#[test]
fn test_single_iteration() {
    let mut rng = StdRng::seed_from_u64(1);
    let summary =
        simulate_with_rng(&mixed_claims(), &ProbabilityMap::default(), 1, &mut rng).unwrap();

    assert_eq!(summary.iterations, 1);
    assert_eq!(summary.min_revenue, summary.max_revenue);
    assert_eq!(summary.percentiles.p95, summary.max_revenue);
    assert_eq!(summary.distribution_total(), 1);
}
