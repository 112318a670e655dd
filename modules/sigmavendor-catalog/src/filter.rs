//! The directory filter engine.
//!
//! A pure function over the catalog: constraints AND together across
//! fields, OR within the multi-valued services field. Order of the input
//! list is preserved and nothing is ranked. Tags that match nothing in the
//! catalog produce zero matches rather than an error.

use sigmavendor_common::{Agency, AgencyFilterOptions, CERTIFICATION_ANY};

/// Return the agencies satisfying every constraint in `options`.
pub fn filter_agencies(agencies: &[Agency], options: &AgencyFilterOptions) -> Vec<Agency> {
    let query = options
        .query
        .as_deref()
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    agencies
        .iter()
        .filter(|agency| {
            query
                .as_deref()
                .map_or(true, |q| searchable_text(agency).contains(q))
        })
        .filter(|agency| {
            options
                .region
                .as_deref()
                .map_or(true, |region| agency.regions_served.iter().any(|r| r.as_str() == region))
        })
        .filter(|agency| match options.services.as_deref() {
            None | Some([]) => true,
            Some(wanted) => agency
                .services
                .iter()
                .any(|s| wanted.iter().any(|w| w == s.as_str())),
        })
        .filter(|agency| {
            // Range-overlap test: the agency's range must not lie entirely
            // below the floor or entirely above the ceiling.
            options
                .price_min
                .map_or(true, |min| agency.price_range.max_usd_per_hour >= min)
        })
        .filter(|agency| {
            options
                .price_max
                .map_or(true, |max| agency.price_range.min_usd_per_hour <= max)
        })
        .filter(|agency| match options.certification.as_deref() {
            None | Some(CERTIFICATION_ANY) => true,
            Some(badge) => agency.certifications.iter().any(|c| c.as_str() == badge),
        })
        .cloned()
        .collect()
}

/// Concatenation of the text fields the free-text query is matched against:
/// name, tagline, short description, service tags, and HQ/delivery
/// countries and cities. Empty fields are dropped before joining.
fn searchable_text(agency: &Agency) -> String {
    let mut parts: Vec<&str> = vec![
        agency.name.as_str(),
        agency.tagline.as_str(),
        agency.short_description.as_str(),
    ];
    parts.extend(agency.services.iter().map(|s| s.as_str()));
    parts.push(&agency.hq_location.country);
    if let Some(city) = agency.hq_location.city.as_deref() {
        parts.push(city);
    }
    for location in &agency.delivery_locations {
        parts.push(&location.country);
        if let Some(city) = location.city.as_deref() {
            parts.push(city);
        }
    }
    parts
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
