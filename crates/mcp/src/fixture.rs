//! Canned tenant data standing in for live MCP tool calls.

use async_trait::async_trait;
use tracing::debug;

use govpulse_core::domain::asset::{AssetRecord, CertificationStatus, Connection};
use govpulse_core::domain::tenant::{
    ComplianceIndicators, GovernanceRates, TenantOverview, TenantSnapshot,
};

use crate::source::{DataSourceError, SearchFilters, TenantDataSource, ATLAN_TOOLS};

const BASE_VERIFIED_RATE: f64 = 0.45;
const BASE_TAGGED_RATE: f64 = 0.62;
const BASE_DOCUMENTED_RATE: f64 = 0.38;
const BASE_OWNED_RATE: f64 = 0.52;
const POPULAR_RATE: f64 = 0.15;
const RECENT_USAGE_RATE: f64 = 0.70;
const LINEAGE_RATE: f64 = 0.55;

/// The single `TenantDataSource` implementation: deterministic fixture data
/// shaped like the metadata platform's search responses.
#[derive(Clone, Debug, Default)]
pub struct FixtureDataSource {
    simulate_outage: bool,
}

impl FixtureDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose fetches always fail, for exercising the degraded
    /// fallback path.
    pub fn failing() -> Self {
        Self { simulate_outage: true }
    }
}

#[async_trait]
impl TenantDataSource for FixtureDataSource {
    async fn fetch_overview(
        &self,
        tenant_url: Option<&str>,
        filters: &SearchFilters,
    ) -> Result<TenantOverview, DataSourceError> {
        if self.simulate_outage {
            return Err(DataSourceError::Fetch("simulated tenant outage".to_string()));
        }

        debug!(
            event_name = "mcp.fixture.fetch",
            tenant_url = tenant_url.unwrap_or("unknown"),
            tools = ?ATLAN_TOOLS,
            "serving fixture tenant overview"
        );

        let connections = connections_matching(filters);
        let total_assets: u64 = connections.iter().map(|connection| connection.asset_count).sum();

        let verified_rate = if filters.certificate == Some(CertificationStatus::Verified) {
            // Filtering for verified assets means nearly everything returned
            // is verified.
            0.95
        } else {
            BASE_VERIFIED_RATE
        };
        let tagged_rate = if filters.tags.is_empty() { BASE_TAGGED_RATE } else { 0.85 };

        let snapshot = TenantSnapshot {
            total_connections: connections.len() as u64,
            total_assets,
            verified_assets: scaled(total_assets, verified_rate),
            tagged_assets: scaled(total_assets, tagged_rate),
            documented_assets: scaled(total_assets, BASE_DOCUMENTED_RATE),
            owned_assets: scaled(total_assets, BASE_OWNED_RATE),
            popular_assets: scaled(total_assets, POPULAR_RATE),
            recent_usage: scaled(total_assets, RECENT_USAGE_RATE),
            lineage_mapped: scaled(total_assets, LINEAGE_RATE),
        };

        let sample_assets = sample_assets_matching(filters);
        let compliance = compliance_indicators(&sample_assets);

        Ok(TenantOverview {
            snapshot,
            connections,
            sample_assets,
            rates: GovernanceRates {
                verification_rate: verified_rate,
                tagging_rate: tagged_rate,
                documentation_rate: BASE_DOCUMENTED_RATE,
                lineage_coverage: LINEAGE_RATE,
                usage_rate: RECENT_USAGE_RATE,
            },
            compliance,
            degraded: false,
        })
    }
}

fn scaled(total: u64, rate: f64) -> u64 {
    (total as f64 * rate) as u64
}

fn connections_matching(filters: &SearchFilters) -> Vec<Connection> {
    let all = fixture_connections();
    if filters.connections.is_empty() {
        return all;
    }

    let wanted: Vec<String> =
        filters.connections.iter().map(|name| name.to_ascii_lowercase()).collect();
    let matching: Vec<Connection> = all
        .iter()
        .filter(|connection| {
            wanted.iter().any(|name| connection.connector.to_ascii_lowercase().starts_with(name))
        })
        .cloned()
        .collect();

    // An unmatched connection filter falls back to the full tenant rather
    // than reporting an empty catalog.
    if matching.is_empty() {
        all
    } else {
        matching
    }
}

fn fixture_connections() -> Vec<Connection> {
    vec![
        Connection {
            name: "Snowflake Production".to_string(),
            qualified_name: "default/snowflake/12345/PROD".to_string(),
            connector: "snowflake".to_string(),
            status: "ACTIVE".to_string(),
            asset_count: 1247,
        },
        Connection {
            name: "PostgreSQL Analytics".to_string(),
            qualified_name: "default/postgres/67890/ANALYTICS".to_string(),
            connector: "postgres".to_string(),
            status: "ACTIVE".to_string(),
            asset_count: 589,
        },
        Connection {
            name: "Tableau Server".to_string(),
            qualified_name: "default/tableau/11111/REPORTING".to_string(),
            connector: "tableau".to_string(),
            status: "ACTIVE".to_string(),
            asset_count: 156,
        },
    ]
}

fn sample_assets_matching(filters: &SearchFilters) -> Vec<AssetRecord> {
    let samples = fixture_assets();
    if filters.tags.is_empty() {
        return samples;
    }

    samples.into_iter().filter(|asset| asset.has_any_tag(&filters.tags)).collect()
}

fn fixture_assets() -> Vec<AssetRecord> {
    vec![
        AssetRecord {
            name: "customer_transactions".to_string(),
            qualified_name: "default/snowflake/12345/PROD/FINANCE/customer_transactions"
                .to_string(),
            certification: Some(CertificationStatus::Verified),
            tags: vec!["PII".to_string(), "Financial".to_string(), "Customer".to_string()],
            owners: vec!["amanda.kuelker@company.com".to_string()],
            connector: "snowflake".to_string(),
            description: Some("Customer transaction history for financial reporting".to_string()),
            popularity_score: 0.87,
            read_count: 2456,
        },
        AssetRecord {
            name: "patient_records".to_string(),
            qualified_name: "default/postgres/67890/ANALYTICS/HEALTHCARE/patient_records"
                .to_string(),
            certification: Some(CertificationStatus::Draft),
            tags: vec!["PHI".to_string(), "HIPAA".to_string(), "Sensitive".to_string()],
            owners: vec!["data.steward@company.com".to_string()],
            connector: "postgres".to_string(),
            description: Some("Protected health information records".to_string()),
            popularity_score: 0.34,
            read_count: 891,
        },
        AssetRecord {
            name: "sales_dashboard".to_string(),
            qualified_name: "default/tableau/11111/REPORTING/SALES/sales_dashboard".to_string(),
            certification: Some(CertificationStatus::Verified),
            tags: vec!["Public".to_string(), "Sales".to_string()],
            owners: vec!["sales.analyst@company.com".to_string()],
            connector: "tableau".to_string(),
            description: Some("Executive sales performance dashboard".to_string()),
            popularity_score: 0.92,
            read_count: 3287,
        },
    ]
}

fn compliance_indicators(assets: &[AssetRecord]) -> ComplianceIndicators {
    let critical_tags = ["PII", "PHI", "Financial"];
    ComplianceIndicators {
        pii_tagged: assets.iter().filter(|asset| asset.has_tag("PII")).count() as u64,
        phi_tagged: assets.iter().filter(|asset| asset.has_tag("PHI")).count() as u64,
        financial_tagged: assets.iter().filter(|asset| asset.has_tag("Financial")).count() as u64,
        verified_critical: assets
            .iter()
            .filter(|asset| asset.is_verified() && asset.has_any_tag(&critical_tags))
            .count() as u64,
    }
}
