use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Industry verticals the assessment knows how to weight. Profiles are
/// compiled in and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Finance,
    Healthcare,
    Construction,
    Retail,
    Technology,
    Manufacturing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndustryProfile {
    pub industry: Industry,
    pub display_name: &'static str,
    pub icon: &'static str,
    pub regulations: &'static [&'static str],
    pub focus_areas: &'static [&'static str],
    /// Tags regulators expect on critical assets in this vertical.
    pub required_tags: &'static [&'static str],
    /// Conservative haircut applied to the weighted score, 0.80..=0.92.
    pub health_multiplier: f64,
}

const FINANCE: IndustryProfile = IndustryProfile {
    industry: Industry::Finance,
    display_name: "Financial Services",
    icon: "🏦",
    regulations: &["SOX", "PCI-DSS", "GDPR", "Basel III"],
    focus_areas: &[
        "Customer data lineage",
        "PII classification coverage",
        "Regulatory reporting certification",
        "Access and ownership certification",
    ],
    required_tags: &["PII", "Financial", "SOX", "Customer"],
    health_multiplier: 0.85,
};

const HEALTHCARE: IndustryProfile = IndustryProfile {
    industry: Industry::Healthcare,
    display_name: "Healthcare",
    icon: "🏥",
    regulations: &["HIPAA", "HITECH", "GDPR"],
    focus_areas: &[
        "PHI protection and masking",
        "Consent and retention tracking",
        "Clinical data quality",
        "Audit readiness",
    ],
    required_tags: &["PHI", "HIPAA", "Patient", "Medical"],
    health_multiplier: 0.80,
};

const CONSTRUCTION: IndustryProfile = IndustryProfile {
    industry: Industry::Construction,
    display_name: "Construction",
    icon: "🏗️",
    regulations: &["OSHA", "EPA", "ISO 45001"],
    focus_areas: &[
        "Safety incident reporting",
        "Project cost data stewardship",
        "Environmental compliance records",
        "Subcontractor data onboarding",
    ],
    required_tags: &["Safety", "Environmental", "OSHA"],
    health_multiplier: 0.88,
};

const RETAIL: IndustryProfile = IndustryProfile {
    industry: Industry::Retail,
    display_name: "Retail",
    icon: "🛒",
    regulations: &["PCI-DSS", "CCPA", "GDPR"],
    focus_areas: &[
        "Customer 360 consolidation",
        "Payment data controls",
        "Inventory data accuracy",
        "Marketing consent management",
    ],
    required_tags: &["PII", "Customer", "Payment"],
    health_multiplier: 0.90,
};

const TECHNOLOGY: IndustryProfile = IndustryProfile {
    industry: Industry::Technology,
    display_name: "Technology",
    icon: "💻",
    regulations: &["SOC 2", "GDPR", "ISO 27001"],
    focus_areas: &[
        "Product analytics governance",
        "User privacy classification",
        "Security telemetry ownership",
        "Data contract adoption",
    ],
    required_tags: &["User", "Security", "Privacy"],
    health_multiplier: 0.92,
};

const MANUFACTURING: IndustryProfile = IndustryProfile {
    industry: Industry::Manufacturing,
    display_name: "Manufacturing",
    icon: "🏭",
    regulations: &["ISO 9001", "OSHA", "REACH"],
    focus_areas: &[
        "Quality metric lineage",
        "Supply chain traceability",
        "Production telemetry stewardship",
        "Safety record certification",
    ],
    required_tags: &["Safety", "Quality", "Production"],
    health_multiplier: 0.87,
};

const HEALTHCARE_TERMS: &[&str] = &["hospital", "health", "medical", "clinic", "pharma", "care"];
const FINANCE_TERMS: &[&str] = &["bank", "financial", "finance", "capital", "insurance", "credit"];
const CONSTRUCTION_TERMS: &[&str] =
    &["construction", "builder", "contracting", "engineering", "infrastructure"];
const RETAIL_TERMS: &[&str] = &["retail", "store", "shop", "commerce", "market"];
const MANUFACTURING_TERMS: &[&str] = &["manufactur", "factory", "industrial", "automotive"];

impl Industry {
    pub const ALL: [Industry; 6] = [
        Industry::Finance,
        Industry::Healthcare,
        Industry::Construction,
        Industry::Retail,
        Industry::Technology,
        Industry::Manufacturing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Healthcare => "healthcare",
            Self::Construction => "construction",
            Self::Retail => "retail",
            Self::Technology => "technology",
            Self::Manufacturing => "manufacturing",
        }
    }

    pub fn profile(&self) -> &'static IndustryProfile {
        match self {
            Self::Finance => &FINANCE,
            Self::Healthcare => &HEALTHCARE,
            Self::Construction => &CONSTRUCTION,
            Self::Retail => &RETAIL,
            Self::Technology => &TECHNOLOGY,
            Self::Manufacturing => &MANUFACTURING,
        }
    }

    /// Classify a tenant. An explicit `industry` filter value wins; otherwise
    /// keyword-match the company name in fixed priority order, defaulting to
    /// technology.
    pub fn detect(company_name: &str, explicit: Option<&str>) -> Self {
        if let Some(label) = explicit {
            if let Ok(industry) = label.parse::<Industry>() {
                return industry;
            }
        }

        let normalized = company_name.to_ascii_lowercase();
        let matches = |terms: &[&str]| terms.iter().any(|term| normalized.contains(term));

        if matches(HEALTHCARE_TERMS) {
            Self::Healthcare
        } else if matches(FINANCE_TERMS) {
            Self::Finance
        } else if matches(CONSTRUCTION_TERMS) {
            Self::Construction
        } else if matches(RETAIL_TERMS) {
            Self::Retail
        } else if matches(MANUFACTURING_TERMS) {
            Self::Manufacturing
        } else {
            Self::Technology
        }
    }
}

impl std::str::FromStr for Industry {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "finance" => Ok(Self::Finance),
            "healthcare" => Ok(Self::Healthcare),
            "construction" => Ok(Self::Construction),
            "retail" => Ok(Self::Retail),
            "technology" => Ok(Self::Technology),
            "manufacturing" => Ok(Self::Manufacturing),
            other => Err(DomainError::UnknownIndustry(other.to_string())),
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
