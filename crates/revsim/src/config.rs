//! Forecast input files and command-line overrides
//!
//! A forecast file is YAML:
//!
//! ```yaml
//! iterations: 2000
//! seed: 42
//! probabilities:
//!   Approved: 0.95
//!   Pending: 0.6
//!   Denied: 0.1
//! claims:
//!   - id: P1
//!     amount: 1675.5
//!     status: Pending
//!     patient_name: John Smith
//!     claim_date: "2025-03-25"
//!     payer: Blue Shield
//! ```
//!
//! Every field except `claims` is optional and falls back to the engine
//! defaults.

use std::path::Path;

use color_eyre::eyre::WrapErr;
use revsim_core::{
    Claim, ClaimStatus, DEFAULT_ITERATIONS, ProbabilityMap, SimulationRequest,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<ProbabilityMap>,
    #[serde(default)]
    pub claims: Vec<Claim>,
}

impl ForecastFile {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Read and parse a forecast file from disk
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read forecast file {}", path.display()))?;
        let file = Self::from_yaml(&content)
            .wrap_err_with(|| format!("failed to parse forecast file {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            claims = file.claims.len(),
            "Loaded forecast file"
        );
        Ok(file)
    }

    /// Write a forecast file to disk
    pub fn save(&self, path: &Path) -> color_eyre::Result<()> {
        let yaml = self
            .to_yaml()
            .wrap_err("failed to serialize forecast file")?;
        std::fs::write(path, yaml)
            .wrap_err_with(|| format!("failed to write forecast file {}", path.display()))?;
        Ok(())
    }

    /// Build a simulation request, applying any overrides on top of the file
    pub fn into_request(self, overrides: &ForecastOverrides) -> SimulationRequest {
        let mut probabilities = self.probabilities.unwrap_or_default();
        overrides.apply_to(&mut probabilities);

        SimulationRequest {
            claims: self.claims,
            probabilities,
            iterations: overrides
                .iterations
                .or(self.iterations)
                .unwrap_or(DEFAULT_ITERATIONS),
            seed: overrides.seed.or(self.seed),
        }
    }
}

/// Values supplied on the command line that take precedence over the file.
///
/// Status overrides are whole percents, matching the forecast sliders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastOverrides {
    pub iterations: Option<usize>,
    pub seed: Option<u64>,
    pub approved_percent: Option<f64>,
    pub pending_percent: Option<f64>,
    pub denied_percent: Option<f64>,
}

impl ForecastOverrides {
    pub fn apply_to(&self, probabilities: &mut ProbabilityMap) {
        let statuses = [
            (ClaimStatus::Approved, self.approved_percent),
            (ClaimStatus::Pending, self.pending_percent),
            (ClaimStatus::Denied, self.denied_percent),
        ];
        for (status, percent) in statuses {
            if let Some(percent) = percent {
                probabilities.set_percent(status, percent);
            }
        }
    }
}
