//! Integration tests for the revenue simulation engine
//!
//! Tests are organized by topic:
//! - `basic` - Trial mechanics and degenerate inputs
//! - `properties` - Summary invariants over randomized claim sets
//! - `reproducibility` - Seeded runs and batch parallelism

mod basic;

use crate::model::{Claim, ClaimStatus};

/// Small mixed claim set used across the topic modules
pub(crate) fn mixed_claims() -> Vec<Claim> {
    vec![
        Claim::new("P1", 1_675.50, ClaimStatus::Pending),
        Claim::new("P2", 2_310.09, ClaimStatus::Approved),
        Claim::new("P3", 4_945.57, ClaimStatus::Pending),
        Claim::new("P4", 8_338.89, ClaimStatus::Denied),
        Claim::new("P5", 3_220.05, ClaimStatus::Denied),
        Claim::new("P6", 980.00, ClaimStatus::Approved),
    ]
}
