// src/domain/filter.rs
//
// AND-combined criteria over businesses. Each criterion reuses the same
// predicate as the matching single-purpose collection query.

use crate::domain::{Business, TaxKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

/// Every set field must match. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusinessFilter {
    pub supervisor_district: Option<String>,
    pub business_corridor: Option<String>,
    pub industry_prefix: Option<String>,
    pub tax: Option<TaxKind>,
    pub radius: Option<RadiusQuery>,
    pub active_only: bool,
}

impl BusinessFilter {
    pub fn matches(&self, business: &Business) -> bool {
        if self.active_only && !business.is_active {
            return false;
        }
        if let Some(district) = &self.supervisor_district {
            if !business.in_district(district) {
                return false;
            }
        }
        if let Some(corridor) = &self.business_corridor {
            if !business.in_corridor(corridor) {
                return false;
            }
        }
        if let Some(prefix) = &self.industry_prefix {
            if !business.has_industry_prefix(prefix) {
                return false;
            }
        }
        if let Some(kind) = self.tax {
            if !business.pays_tax(kind) {
                return false;
            }
        }
        if let Some(r) = self.radius {
            if !business.within_radius(r.latitude, r.longitude, r.radius_km) {
                return false;
            }
        }
        true
    }
}
