use async_trait::async_trait;
use thiserror::Error;

use govpulse_core::domain::asset::CertificationStatus;
use govpulse_core::domain::tenant::TenantOverview;
use govpulse_slack::commands::{FilterValue, ParsedCommand};

/// MCP tools a live metadata integration would call. Kept for log context;
/// the fixture source never leaves the process.
pub const ATLAN_TOOLS: &[&str] = &[
    "atlan:search_assets_tool",
    "atlan:get_assets_by_dsl_tool",
    "atlan:traverse_lineage_tool",
    "atlan:query_asset_tool",
];

#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("tenant metadata fetch failed: {0}")]
    Fetch(String),
}

/// Search conditions derived from the user's filter tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub tags: Vec<String>,
    pub connections: Vec<String>,
    pub certificate: Option<CertificationStatus>,
    pub asset_type: Option<String>,
}

impl SearchFilters {
    /// Lift the recognized keys out of a parsed command; unrecognized keys
    /// are ignored, matching the permissive web handler behavior.
    pub fn from_command(command: &ParsedCommand) -> Self {
        let list = |value: &FilterValue| -> Vec<String> {
            value.as_list().into_iter().map(str::to_string).collect()
        };

        Self {
            tags: command.filter("tags").map(&list).unwrap_or_default(),
            connections: command.filter("connections").map(&list).unwrap_or_default(),
            certificate: command
                .filter("certificate")
                .and_then(|value| CertificationStatus::parse(value.first())),
            asset_type: command
                .filter("asset_type")
                .map(|value| value.first().to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
            && self.connections.is_empty()
            && self.certificate.is_none()
            && self.asset_type.is_none()
    }
}

/// Seam between the assessment pipeline and the metadata platform.
#[async_trait]
pub trait TenantDataSource: Send + Sync {
    async fn fetch_overview(
        &self,
        tenant_url: Option<&str>,
        filters: &SearchFilters,
    ) -> Result<TenantOverview, DataSourceError>;
}
