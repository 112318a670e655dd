//! Catalog construction and lookup.
//!
//! The catalog is assembled from two static sources: a built-in seed dataset
//! and a vendors overlay, both embedded at compile time. The two are merged
//! into one slug-keyed, insertion-ordered map with a last-writer-wins rule:
//! the overlay replaces a seed entry that reuses its slug. Callers see a
//! single logical, read-only list; there is no create/update/delete path.

use indexmap::IndexMap;
use tracing::debug;

use sigmavendor_common::{Agency, AgencyFilterOptions, SigmaVendorError};

const SEED_AGENCIES: &str = include_str!("../data/agencies.json");
const VENDOR_AGENCIES: &str = include_str!("../data/vendors.json");

#[derive(Debug, Clone)]
pub struct Catalog {
    agencies: Vec<Agency>,
}

impl Catalog {
    /// Parse and merge the embedded datasets. Fails only if the embedded
    /// JSON is malformed, which is a build defect, so the server treats
    /// this as a startup error.
    pub fn load() -> Result<Self, SigmaVendorError> {
        let seed: Vec<Agency> = serde_json::from_str(SEED_AGENCIES)?;
        let vendors: Vec<Agency> = serde_json::from_str(VENDOR_AGENCIES)?;
        Ok(Self::from_sources(seed, vendors))
    }

    /// Merge `seed` then `overlay` into one slug-keyed catalog,
    /// last writer wins. Result order is seed order followed by overlay
    /// slugs not present in the seed.
    pub fn from_sources(seed: Vec<Agency>, overlay: Vec<Agency>) -> Self {
        let mut by_slug: IndexMap<String, Agency> = IndexMap::new();
        for agency in seed.into_iter().chain(overlay) {
            if by_slug.contains_key(&agency.slug) {
                debug!(slug = %agency.slug, "catalog merge: overlay replaced seed entry");
            }
            by_slug.insert(agency.slug.clone(), agency);
        }
        Self {
            agencies: by_slug.into_values().collect(),
        }
    }

    /// Build a catalog from an already-merged list. Test seam.
    pub fn from_agencies(agencies: Vec<Agency>) -> Self {
        Self { agencies }
    }

    pub fn agencies(&self) -> &[Agency] {
        &self.agencies
    }

    pub fn agency_by_slug(&self, slug: &str) -> Option<&Agency> {
        self.agencies.iter().find(|a| a.slug == slug)
    }

    pub fn agency_by_id(&self, id: &str) -> Option<&Agency> {
        self.agencies.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.agencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agencies.is_empty()
    }

    // Convenience views expressed through the filter engine so the
    // constraint semantics live in one place.

    pub fn by_region(&self, region: &str) -> Vec<Agency> {
        self.filtered(AgencyFilterOptions {
            region: Some(region.to_string()),
            ..Default::default()
        })
    }

    pub fn by_service(&self, service: &str) -> Vec<Agency> {
        self.filtered(AgencyFilterOptions {
            services: Some(vec![service.to_string()]),
            ..Default::default()
        })
    }

    pub fn by_certification(&self, certification: &str) -> Vec<Agency> {
        self.filtered(AgencyFilterOptions {
            certification: Some(certification.to_string()),
            ..Default::default()
        })
    }

    pub fn filtered(&self, options: AgencyFilterOptions) -> Vec<Agency> {
        crate::filter::filter_agencies(&self.agencies, &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agency(id: &str, slug: &str, name: &str) -> Agency {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "slug": slug,
            "name": name,
            "tagline": "",
            "shortDescription": "",
            "longDescription": "",
            "hqLocation": { "country": "Kenya" },
            "deliveryLocations": [],
            "regionsServed": ["Africa"],
            "services": ["Back Office"],
            "languages": ["English"],
            "priceRange": { "minUsdPerHour": 4, "maxUsdPerHour": 7 },
            "certifications": [],
            "isSigmaRemotePartner": false,
            "primaryUseCases": []
        }))
        .expect("invalid test agency")
    }

    #[test]
    fn embedded_data_loads_and_slugs_are_unique() {
        let catalog = Catalog::load().expect("embedded catalog must parse");
        assert!(catalog.len() >= 12);

        let mut slugs: Vec<&str> = catalog.agencies().iter().map(|a| a.slug.as_str()).collect();
        slugs.sort();
        let before = slugs.len();
        slugs.dedup();
        assert_eq!(before, slugs.len(), "duplicate slug in merged catalog");
    }

    #[test]
    fn overlay_wins_on_slug_collision_and_keeps_seed_position() {
        let seed = vec![
            agency("1", "alpha", "Alpha Seed"),
            agency("2", "beta", "Beta Seed"),
        ];
        let overlay = vec![
            agency("90", "beta", "Beta Overlay"),
            agency("91", "gamma", "Gamma Overlay"),
        ];

        let catalog = Catalog::from_sources(seed, overlay);

        let names: Vec<&str> = catalog.agencies().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha Seed", "Beta Overlay", "Gamma Overlay"]);
        assert_eq!(catalog.agency_by_slug("beta").unwrap().id, "90");
    }

    #[test]
    fn lookup_by_slug_and_id() {
        let catalog = Catalog::from_sources(vec![agency("1", "alpha", "Alpha")], vec![]);
        assert!(catalog.agency_by_slug("alpha").is_some());
        assert!(catalog.agency_by_slug("missing").is_none());
        assert!(catalog.agency_by_id("1").is_some());
        assert!(catalog.agency_by_id("2").is_none());
    }
}
