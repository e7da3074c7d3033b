//! Per-status payment probabilities

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::claims::ClaimStatus;

/// Probability that a claim in a given status gets paid in one trial.
///
/// Statuses missing from the map never pay. Values are not validated: a
/// probability above 1 always pays and one below 0 never does, which falls out
/// of the `draw < p` comparison in the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProbabilityMap {
    entries: FxHashMap<ClaimStatus, f64>,
}

impl ProbabilityMap {
    /// Create a map with no entries (every status has probability 0)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Probability for a status, 0 when absent
    #[inline]
    pub fn get(&self, status: &ClaimStatus) -> f64 {
        self.entries.get(status).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, status: impl Into<ClaimStatus>, probability: f64) {
        self.entries.insert(status.into(), probability);
    }

    /// Set a probability from a whole-percent slider value (0..=100)
    pub fn set_percent(&mut self, status: impl Into<ClaimStatus>, percent: f64) {
        self.set(status, percent / 100.0);
    }

    #[must_use]
    pub fn with(mut self, status: impl Into<ClaimStatus>, probability: f64) -> Self {
        self.set(status, probability);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by status (Approved, Pending, Denied, then custom labels)
    pub fn iter(&self) -> impl Iterator<Item = (&ClaimStatus, f64)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(s, p)| (s, *p)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}

impl Default for ProbabilityMap {
    fn default() -> Self {
        Self::empty()
            .with(ClaimStatus::Approved, 0.95)
            .with(ClaimStatus::Pending, 0.60)
            .with(ClaimStatus::Denied, 0.10)
    }
}

impl FromIterator<(ClaimStatus, f64)> for ProbabilityMap {
    fn from_iter<I: IntoIterator<Item = (ClaimStatus, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
