use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Tag Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Region {
    #[serde(rename = "LATAM")]
    Latam,
    Africa,
    Asia,
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    Oceania,
    Global,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Latam => "LATAM",
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::Oceania => "Oceania",
            Region::Global => "Global",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ServiceCategory {
    #[serde(rename = "General VA")]
    GeneralVa,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
    #[serde(rename = "Sales / SDR")]
    SalesSdr,
    #[serde(rename = "E-commerce Support")]
    EcommerceSupport,
    #[serde(rename = "Real Estate VA")]
    RealEstateVa,
    #[serde(rename = "Accounting / Bookkeeping")]
    AccountingBookkeeping,
    #[serde(rename = "Medical Billing")]
    MedicalBilling,
    #[serde(rename = "Tech Support")]
    TechSupport,
    #[serde(rename = "Back Office")]
    BackOffice,
    Other,
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::GeneralVa => "General VA",
            ServiceCategory::CustomerSupport => "Customer Support",
            ServiceCategory::SalesSdr => "Sales / SDR",
            ServiceCategory::EcommerceSupport => "E-commerce Support",
            ServiceCategory::RealEstateVa => "Real Estate VA",
            ServiceCategory::AccountingBookkeeping => "Accounting / Bookkeeping",
            ServiceCategory::MedicalBilling => "Medical Billing",
            ServiceCategory::TechSupport => "Tech Support",
            ServiceCategory::BackOffice => "Back Office",
            ServiceCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum CertificationBadge {
    SigmaVerified,
    PayrollReady,
    CryptoFriendly,
    LatamSpecialist,
    AfricaSpecialist,
}

impl CertificationBadge {
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificationBadge::SigmaVerified => "SigmaVerified",
            CertificationBadge::PayrollReady => "PayrollReady",
            CertificationBadge::CryptoFriendly => "CryptoFriendly",
            CertificationBadge::LatamSpecialist => "LatamSpecialist",
            CertificationBadge::AfricaSpecialist => "AfricaSpecialist",
        }
    }
}

impl std::fmt::Display for CertificationBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// --- Agency ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgencyLocation {
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Display label such as "GMT-5", not an IANA zone id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone_label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min_usd_per_hour: f64,
    pub max_usd_per_hour: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamSize {
    pub min: u32,
    pub max: u32,
}

/// Review aggregates approximating G2/Clutch style scores (1 to 5).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub g2_like_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clutch_like_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_reviews: Option<u32>,
}

/// A virtual-assistant / outsourcing agency listed in the directory.
///
/// `id` and `slug` are unique across the catalog. Records are immutable
/// after load; there is no create/update/delete path at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub id: String,
    /// URL-safe identifier derived from the name, used for lookup and routing.
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub short_description: String,
    pub long_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size: Option<TeamSize>,
    pub hq_location: AgencyLocation,
    #[serde(default)]
    pub delivery_locations: Vec<AgencyLocation>,
    pub regions_served: Vec<Region>,
    pub services: Vec<ServiceCategory>,
    pub languages: Vec<String>,
    pub price_range: PriceRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_monthly_retainer_usd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typical_engagement_length_months: Option<f64>,
    pub certifications: Vec<CertificationBadge>,
    /// True if the agency already runs payroll on SigmaRemote rails.
    pub is_sigma_remote_partner: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigma_remote_notes: Option<String>,
    /// Human-readable phrases describing what the agency is especially good at.
    pub primary_use_cases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_summary: Option<ReviewSummary>,
}

// --- Filter Options ---

/// Constraints for narrowing the catalog. Every field is optional; absent
/// fields impose no constraint.
///
/// Region, services, and certification are carried as raw tag strings rather
/// than enums: the directory accepts arbitrary strings at the boundary and a
/// tag that matches nothing in the catalog yields zero matches instead of a
/// deserialization error. `"Any"` is the certification sentinel meaning
/// "no certification constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgencyFilterOptions {
    pub query: Option<String>,
    pub region: Option<String>,
    pub services: Option<Vec<String>>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub certification: Option<String>,
}

/// Sentinel certification value that disables the certification constraint.
pub const CERTIFICATION_ANY: &str = "Any";

// --- Leads ---

/// Contact-form submission as received from the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub company_size: Option<String>,
    pub description: String,
    /// Structured answers collected by the guided search flow, kept opaque.
    pub answers: Option<serde_json::Value>,
    pub matched_agencies: Vec<String>,
}

impl LeadSubmission {
    /// Name, email, and description are required; everything else is optional.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.description.trim().is_empty()
    }
}

/// An accepted lead. Persistence is not wired up; leads are assigned an id
/// and logged so the capture path has a stable shape when storage lands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    #[serde(flatten)]
    pub submission: LeadSubmission,
}

impl Lead {
    pub fn new(submission: LeadSubmission) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            submission,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_labels_round_trip_through_serde() {
        let r: Region = serde_json::from_str("\"North America\"").unwrap();
        assert_eq!(r, Region::NorthAmerica);
        assert_eq!(serde_json::to_string(&r).unwrap(), "\"North America\"");

        let s: ServiceCategory = serde_json::from_str("\"Sales / SDR\"").unwrap();
        assert_eq!(s, ServiceCategory::SalesSdr);
        assert_eq!(s.as_str(), "Sales / SDR");

        let c: CertificationBadge = serde_json::from_str("\"PayrollReady\"").unwrap();
        assert_eq!(c.as_str(), "PayrollReady");
    }

    #[test]
    fn agency_serializes_camel_case_and_omits_absent_fields() {
        let agency = Agency {
            id: "1".into(),
            slug: "test-agency".into(),
            name: "Test Agency".into(),
            tagline: "tagline".into(),
            short_description: "short".into(),
            long_description: "long".into(),
            website_url: None,
            logo_url: None,
            founded_year: None,
            team_size: None,
            hq_location: AgencyLocation {
                country: "Kenya".into(),
                city: None,
                time_zone_label: None,
            },
            delivery_locations: vec![],
            regions_served: vec![Region::Africa],
            services: vec![ServiceCategory::BackOffice],
            languages: vec!["English".into()],
            price_range: PriceRange {
                min_usd_per_hour: 4.0,
                max_usd_per_hour: 7.0,
            },
            min_monthly_retainer_usd: None,
            typical_engagement_length_months: None,
            certifications: vec![CertificationBadge::SigmaVerified],
            is_sigma_remote_partner: false,
            sigma_remote_notes: None,
            primary_use_cases: vec![],
            review_summary: None,
        };

        let value = serde_json::to_value(&agency).unwrap();
        assert_eq!(value["shortDescription"], "short");
        assert_eq!(value["regionsServed"][0], "Africa");
        assert_eq!(value["priceRange"]["minUsdPerHour"], 4.0);
        assert!(value.get("websiteUrl").is_none());
        assert!(value.get("reviewSummary").is_none());
    }

    #[test]
    fn lead_submission_requires_name_email_description() {
        let mut lead = LeadSubmission {
            name: "Jordan".into(),
            email: "jordan@example.com".into(),
            description: "Need support coverage".into(),
            ..Default::default()
        };
        assert!(lead.is_valid());

        lead.description = "   ".into();
        assert!(!lead.is_valid());
    }
}
