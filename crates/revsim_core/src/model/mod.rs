mod claims;
mod probabilities;
mod results;
mod stats;

pub use claims::{Claim, ClaimStatus};
pub use probabilities::ProbabilityMap;
pub use results::{
    DEFAULT_ITERATIONS, DistributionBucket, Percentiles, SimulationRequest, SimulationSummary,
};
pub use stats::ClaimStats;
