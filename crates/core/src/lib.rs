pub mod config;
pub mod domain;
pub mod errors;
pub mod industry;
pub mod report;
pub mod scoring;

pub use domain::asset::{AssetRecord, CertificationStatus, Connection};
pub use domain::quality::{ComplianceReadiness, QualityMetrics};
pub use domain::tenant::{ComplianceIndicators, GovernanceRates, TenantOverview, TenantSnapshot};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use industry::{Industry, IndustryProfile};
pub use report::{generate_assessment, AssessmentContext};
pub use scoring::{ComponentScores, Grade, HealthScoreResult, HealthScorer, ScoringWeights};
