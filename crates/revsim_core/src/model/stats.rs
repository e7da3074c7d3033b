//! Aggregate statistics over a claim set

use serde::{Deserialize, Serialize};

use super::claims::{Claim, ClaimStatus};

/// Totals by payment status, in order of first appearance
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClaimStats {
    pub total_amount: f64,
    pub total_claims: usize,
    pub status_counts: Vec<(ClaimStatus, usize)>,
    pub amount_by_status: Vec<(ClaimStatus, f64)>,
}

impl ClaimStats {
    pub fn from_claims(claims: &[Claim]) -> Self {
        let mut stats = Self {
            total_claims: claims.len(),
            ..Default::default()
        };

        for claim in claims {
            stats.total_amount += claim.amount;

            match stats
                .status_counts
                .iter()
                .position(|(status, _)| *status == claim.status)
            {
                Some(idx) => {
                    stats.status_counts[idx].1 += 1;
                    stats.amount_by_status[idx].1 += claim.amount;
                }
                None => {
                    stats.status_counts.push((claim.status.clone(), 1));
                    stats
                        .amount_by_status
                        .push((claim.status.clone(), claim.amount));
                }
            }
        }

        stats
    }

    pub fn count_for(&self, status: &ClaimStatus) -> usize {
        self.status_counts
            .iter()
            .find(|(s, _)| s == status)
            .map_or(0, |(_, count)| *count)
    }

    pub fn amount_for(&self, status: &ClaimStatus) -> f64 {
        self.amount_by_status
            .iter()
            .find(|(s, _)| s == status)
            .map_or(0.0, |(_, amount)| *amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let stats = ClaimStats::from_claims(&[]);
        assert_eq!(stats.total_claims, 0);
        assert_eq!(stats.total_amount, 0.0);
        assert!(stats.status_counts.is_empty());
    }

    #[test]
    fn test_first_appearance_order() {
        let claims = vec![
            Claim::new("P1", 100.0, ClaimStatus::Pending),
            Claim::new("P2", 250.0, ClaimStatus::Denied),
            Claim::new("P3", 50.0, ClaimStatus::Pending),
            Claim::new("P4", 25.0, ClaimStatus::Approved),
        ];
        let stats = ClaimStats::from_claims(&claims);

        assert_eq!(stats.total_claims, 4);
        assert_eq!(stats.total_amount, 425.0);
        assert_eq!(
            stats.status_counts,
            vec![
                (ClaimStatus::Pending, 2),
                (ClaimStatus::Denied, 1),
                (ClaimStatus::Approved, 1),
            ]
        );
        assert_eq!(stats.amount_for(&ClaimStatus::Pending), 150.0);
        assert_eq!(stats.count_for(&ClaimStatus::Other("Appealed".into())), 0);
    }
}
