use serde::{Deserialize, Serialize};

/// Quality signal derived from sample-asset metadata, all values 0.0..=0.95.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub completeness: f64,
    pub accuracy: f64,
    pub consistency: f64,
    pub timeliness: f64,
}

/// Compliance readiness relative to the industry's required tag set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReadiness {
    pub score: f64,
    pub tag_coverage: f64,
    pub verification_coverage: f64,
    pub ownership_coverage: f64,
    pub industry_compliance: f64,
}
