//! Built-in sample claims for demos and smoke tests.

use revsim_core::{Claim, ClaimStatus};

/// One row of the mock billing data
struct SampleRecord {
    patient: &'static str,
    name: &'static str,
    code: &'static str,
    amount: f64,
    payer: &'static str,
    status: ClaimStatus,
    date: (i16, i8, i8),
}

static SAMPLE_RECORDS: [SampleRecord; 5] = [
    SampleRecord {
        patient: "P1",
        name: "John Smith",
        code: "B1001",
        amount: 1_675.50,
        payer: "Blue Shield",
        status: ClaimStatus::Pending,
        date: (2025, 3, 25),
    },
    SampleRecord {
        patient: "P2",
        name: "Sarah Johnson",
        code: "B2002",
        amount: 2_310.09,
        payer: "Medicare",
        status: ClaimStatus::Approved,
        date: (2025, 1, 5),
    },
    SampleRecord {
        patient: "P3",
        name: "Robert Chen",
        code: "B3003",
        amount: 4_945.57,
        payer: "Aetna",
        status: ClaimStatus::Pending,
        date: (2025, 3, 4),
    },
    SampleRecord {
        patient: "P4",
        name: "Lisa Williams",
        code: "B4004",
        amount: 8_338.89,
        payer: "UnitedHealth",
        status: ClaimStatus::Denied,
        date: (2025, 3, 20),
    },
    SampleRecord {
        patient: "P5",
        name: "Michael Garcia",
        code: "B5005",
        amount: 3_220.05,
        payer: "Cigna",
        status: ClaimStatus::Denied,
        date: (2025, 2, 21),
    },
];

/// Number of times each patient appears in the sample set
const VISITS_PER_PATIENT: usize = 4;

/// Twenty sample billing claims: five patients with four identical visits each.
pub fn sample_claims() -> Vec<Claim> {
    (1..=VISITS_PER_PATIENT)
        .flat_map(|visit| {
            SAMPLE_RECORDS.iter().map(move |record| {
                let (y, m, d) = record.date;
                Claim::new(
                    format!("{}-{visit}", record.patient),
                    record.amount,
                    record.status.clone(),
                )
                .with_patient_name(record.name)
                .with_billing_code(record.code)
                .with_payer(record.payer)
                .with_date(jiff::civil::date(y, m, d))
            })
        })
        .collect()
}
