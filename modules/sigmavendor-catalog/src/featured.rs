use sigmavendor_common::{Agency, CertificationBadge};

pub const DEFAULT_FEATURED_LIMIT: usize = 6;

/// The single named "featured" selection rule: SigmaRemote partners and
/// agencies carrying the SigmaVerified or PayrollReady badge, in catalog
/// order, truncated to `limit`.
pub fn featured_agencies(agencies: &[Agency], limit: usize) -> Vec<Agency> {
    agencies
        .iter()
        .filter(|agency| {
            agency.is_sigma_remote_partner
                || agency
                    .certifications
                    .contains(&CertificationBadge::SigmaVerified)
                || agency
                    .certifications
                    .contains(&CertificationBadge::PayrollReady)
        })
        .take(limit)
        .cloned()
        .collect()
}
