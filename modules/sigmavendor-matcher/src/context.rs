//! Compact catalog projection sent to the model as context.
//!
//! Long-form descriptions and review data are deliberately excluded to
//! bound prompt size; only fields useful for matching go in.

use serde::Serialize;

use sigmavendor_common::{Agency, CertificationBadge, PriceRange, Region, ServiceCategory};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyContext<'a> {
    pub id: &'a str,
    pub slug: &'a str,
    pub name: &'a str,
    pub tagline: &'a str,
    pub short_description: &'a str,
    pub regions_served: &'a [Region],
    pub services: &'a [ServiceCategory],
    pub price_range: &'a PriceRange,
    pub is_sigma_remote_partner: bool,
    pub certifications: &'a [CertificationBadge],
    pub primary_use_cases: &'a [String],
}

impl<'a> From<&'a Agency> for AgencyContext<'a> {
    fn from(a: &'a Agency) -> Self {
        Self {
            id: &a.id,
            slug: &a.slug,
            name: &a.name,
            tagline: &a.tagline,
            short_description: &a.short_description,
            regions_served: &a.regions_served,
            services: &a.services,
            price_range: &a.price_range,
            is_sigma_remote_partner: a.is_sigma_remote_partner,
            certifications: &a.certifications,
            primary_use_cases: &a.primary_use_cases,
        }
    }
}

/// Serialize the whole catalog as one JSON array string for the prompt.
pub fn build_agency_context(agencies: &[Agency]) -> Result<String, serde_json::Error> {
    let projections: Vec<AgencyContext<'_>> = agencies.iter().map(AgencyContext::from).collect();
    serde_json::to_string(&projections)
}
