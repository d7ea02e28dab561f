use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificationStatus {
    Verified,
    Draft,
    Deprecated,
}

impl CertificationStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "VERIFIED" => Some(Self::Verified),
            "DRAFT" => Some(Self::Draft),
            "DEPRECATED" => Some(Self::Deprecated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verified => "VERIFIED",
            Self::Draft => "DRAFT",
            Self::Deprecated => "DEPRECATED",
        }
    }
}

/// One catalog asset as surfaced by the metadata platform. Lives only for
/// the duration of a single assessment request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub name: String,
    pub qualified_name: String,
    pub certification: Option<CertificationStatus>,
    pub tags: Vec<String>,
    pub owners: Vec<String>,
    pub connector: String,
    pub description: Option<String>,
    pub popularity_score: f64,
    pub read_count: u64,
}

impl AssetRecord {
    pub fn is_verified(&self) -> bool {
        self.certification == Some(CertificationStatus::Verified)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate.eq_ignore_ascii_case(tag))
    }

    pub fn has_any_tag(&self, tags: &[impl AsRef<str>]) -> bool {
        tags.iter().any(|tag| self.has_tag(tag.as_ref()))
    }

    pub fn is_documented(&self) -> bool {
        self.description.as_ref().map(|text| !text.trim().is_empty()).unwrap_or(false)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub name: String,
    pub qualified_name: String,
    pub connector: String,
    pub status: String,
    pub asset_count: u64,
}

#[cfg(test)]
mod tests {
    use super::{AssetRecord, CertificationStatus};

    fn asset(certification: Option<CertificationStatus>, tags: &[&str]) -> AssetRecord {
        AssetRecord {
            name: "customer_transactions".to_string(),
            qualified_name: "default/snowflake/12345/PROD/FINANCE/customer_transactions"
                .to_string(),
            certification,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            owners: vec!["data.steward@company.com".to_string()],
            connector: "snowflake".to_string(),
            description: Some("Customer transaction history".to_string()),
            popularity_score: 0.87,
            read_count: 2456,
        }
    }

    #[test]
    fn certification_parses_case_insensitively() {
        assert_eq!(CertificationStatus::parse("verified"), Some(CertificationStatus::Verified));
        assert_eq!(CertificationStatus::parse(" DRAFT "), Some(CertificationStatus::Draft));
        assert_eq!(CertificationStatus::parse("retired"), None);
    }

    #[test]
    fn tag_lookup_ignores_case() {
        let asset = asset(Some(CertificationStatus::Verified), &["PII", "Financial"]);
        assert!(asset.has_tag("pii"));
        assert!(asset.has_any_tag(&["SOX", "Financial"]));
        assert!(!asset.has_any_tag(&["PHI"]));
    }

    #[test]
    fn uncertified_asset_is_not_verified() {
        assert!(!asset(None, &[]).is_verified());
        assert!(asset(Some(CertificationStatus::Verified), &[]).is_verified());
    }
}
