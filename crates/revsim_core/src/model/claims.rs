//! Billing claims and their payment status

use std::fmt;

use serde::{Deserialize, Serialize};

/// Payment status of a claim
///
/// The three statuses used by billing systems are named variants; any other
/// label is carried through as `Other` so custom workflows can still be
/// simulated. Serialized as the plain label string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClaimStatus {
    Approved,
    Pending,
    Denied,
    Other(String),
}

impl ClaimStatus {
    pub fn label(&self) -> &str {
        match self {
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Denied => "Denied",
            ClaimStatus::Other(label) => label,
        }
    }
}

impl From<&str> for ClaimStatus {
    fn from(label: &str) -> Self {
        match label {
            "Approved" => ClaimStatus::Approved,
            "Pending" => ClaimStatus::Pending,
            "Denied" => ClaimStatus::Denied,
            other => ClaimStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for ClaimStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Approved" => ClaimStatus::Approved,
            "Pending" => ClaimStatus::Pending,
            "Denied" => ClaimStatus::Denied,
            _ => ClaimStatus::Other(label),
        }
    }
}

impl From<ClaimStatus> for String {
    fn from(status: ClaimStatus) -> Self {
        match status {
            ClaimStatus::Other(label) => label,
            named => named.label().to_string(),
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single billing claim
///
/// Claims are owned by the caller; the engine only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub id: String,
    /// Billed amount (non-negative)
    pub amount: f64,
    pub status: ClaimStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_date: Option<jiff::civil::Date>,
    /// Insurance provider responsible for payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_code: Option<String>,
}

impl Claim {
    pub fn new(id: impl Into<String>, amount: f64, status: impl Into<ClaimStatus>) -> Self {
        Self {
            id: id.into(),
            amount,
            status: status.into(),
            patient_name: None,
            claim_date: None,
            payer: None,
            billing_code: None,
        }
    }

    #[must_use]
    pub fn with_patient_name(mut self, name: impl Into<String>) -> Self {
        self.patient_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: jiff::civil::Date) -> Self {
        self.claim_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_payer(mut self, payer: impl Into<String>) -> Self {
        self.payer = Some(payer.into());
        self
    }

    #[must_use]
    pub fn with_billing_code(mut self, code: impl Into<String>) -> Self {
        self.billing_code = Some(code.into());
        self
    }
}
