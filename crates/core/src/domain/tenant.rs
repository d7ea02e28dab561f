use serde::{Deserialize, Serialize};

use crate::domain::asset::{AssetRecord, Connection};

/// Aggregate asset counts for one tenant, as observed at fetch time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantSnapshot {
    pub total_connections: u64,
    pub total_assets: u64,
    pub verified_assets: u64,
    pub tagged_assets: u64,
    pub documented_assets: u64,
    pub owned_assets: u64,
    pub popular_assets: u64,
    pub recent_usage: u64,
    pub lineage_mapped: u64,
}

impl TenantSnapshot {
    /// Ratio of `part` to the total asset count. Zero when the tenant is
    /// empty, so callers never divide by zero.
    pub fn ratio(&self, part: u64) -> f64 {
        if self.total_assets == 0 {
            return 0.0;
        }
        part as f64 / self.total_assets as f64
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GovernanceRates {
    pub verification_rate: f64,
    pub tagging_rate: f64,
    pub documentation_rate: f64,
    pub lineage_coverage: f64,
    pub usage_rate: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceIndicators {
    pub pii_tagged: u64,
    pub phi_tagged: u64,
    pub financial_tagged: u64,
    pub verified_critical: u64,
}

/// Everything the data source returns for one assessment run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TenantOverview {
    pub snapshot: TenantSnapshot,
    pub connections: Vec<Connection>,
    pub sample_assets: Vec<AssetRecord>,
    pub rates: GovernanceRates,
    pub compliance: ComplianceIndicators,
    /// Set when the overview was substituted for a failed fetch.
    pub degraded: bool,
}

impl TenantOverview {
    /// Degraded overview used when the data source cannot be reached,
    /// mirroring the platform's single-connection default tenant.
    pub fn fallback() -> Self {
        Self {
            snapshot: TenantSnapshot {
                total_connections: 1,
                total_assets: 500,
                verified_assets: 200,
                tagged_assets: 300,
                documented_assets: 150,
                owned_assets: 260,
                popular_assets: 75,
                recent_usage: 350,
                lineage_mapped: 275,
            },
            connections: vec![Connection {
                name: "Production DB".to_string(),
                qualified_name: "default/database/00000/PROD".to_string(),
                connector: "database".to_string(),
                status: "ACTIVE".to_string(),
                asset_count: 500,
            }],
            sample_assets: Vec::new(),
            rates: GovernanceRates {
                verification_rate: 0.40,
                tagging_rate: 0.60,
                documentation_rate: 0.30,
                lineage_coverage: 0.55,
                usage_rate: 0.70,
            },
            compliance: ComplianceIndicators {
                pii_tagged: 45,
                phi_tagged: 0,
                financial_tagged: 67,
                verified_critical: 89,
            },
            degraded: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TenantOverview, TenantSnapshot};

    #[test]
    fn ratio_of_empty_tenant_is_zero() {
        let snapshot = TenantSnapshot::default();
        assert_eq!(snapshot.ratio(snapshot.verified_assets), 0.0);
    }

    #[test]
    fn ratio_reflects_partial_coverage() {
        let snapshot = TenantSnapshot { total_assets: 200, verified_assets: 50, ..Default::default() };
        assert!((snapshot.ratio(snapshot.verified_assets) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn fallback_overview_is_marked_degraded() {
        let overview = TenantOverview::fallback();
        assert!(overview.degraded);
        assert_eq!(overview.snapshot.total_assets, 500);
        assert_eq!(overview.connections.len(), 1);
    }
}
