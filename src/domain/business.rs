// src/domain/business.rs

use crate::domain::naics::{self, UNKNOWN_SECTOR};
use crate::domain::ArgumentError;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::str::FromStr;

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Radius searches tighter than this return nothing.
pub const MIN_RADIUS_KM: f64 = 0.1;

/// A registered business location, normalized from one open-data row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: String,
    pub certificate_number: String,
    pub ownership_name: String,
    pub dba_name: String,

    pub address: Address,
    pub mailing_address: Option<Address>,
    pub dates: BusinessDates,

    pub naic_code: Option<String>,
    pub naic_description: Option<String>,

    pub taxes: Taxes,
    pub location: Option<Location>,

    pub supervisor_district: String,
    pub neighborhood: String,
    pub business_corridor: Option<String>,

    /// No registration end and no location end on record.
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDates {
    pub dba_start: Option<NaiveDateTime>,
    pub dba_end: Option<NaiveDateTime>,
    pub location_start: Option<NaiveDateTime>,
    pub location_end: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxes {
    pub parking: bool,
    pub transient_occupancy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Back to GeoJSON order, `[longitude, latitude]`.
    pub fn coordinates(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TaxKind {
    Parking,
    TransientOccupancy,
}

impl FromStr for TaxKind {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parking" => Ok(TaxKind::Parking),
            "transientOccupancy" | "transient_occupancy" => Ok(TaxKind::TransientOccupancy),
            other => Err(ArgumentError::UnknownTaxKind(other.to_string())),
        }
    }
}

impl Business {
    /// Two-character sector prefix of the NAICS code, if there is a code.
    pub fn sector_prefix(&self) -> Option<&str> {
        self.naic_code.as_deref().map(naics::sector_prefix)
    }

    /// Label used by the industry breakdowns: the sector name, "Other" for
    /// unmapped prefixes, "Unknown" without a code.
    pub fn industry_label(&self) -> &'static str {
        match self.naic_code.as_deref() {
            Some(code) => naics::sector_for_code(code),
            None => UNKNOWN_SECTOR,
        }
    }

    pub fn has_industry_prefix(&self, prefix: &str) -> bool {
        self.naic_code
            .as_deref()
            .is_some_and(|code| code.starts_with(prefix))
    }

    pub fn in_district(&self, district: &str) -> bool {
        self.supervisor_district == district
    }

    pub fn in_corridor(&self, corridor: &str) -> bool {
        self.business_corridor.as_deref() == Some(corridor)
    }

    pub fn pays_tax(&self, kind: TaxKind) -> bool {
        match kind {
            TaxKind::Parking => self.taxes.parking,
            TaxKind::TransientOccupancy => self.taxes.transient_occupancy,
        }
    }

    /// Great-circle distance to a point, if this business has a location.
    pub fn distance_km(&self, latitude: f64, longitude: f64) -> Option<f64> {
        self.location
            .map(|loc| haversine_km(latitude, longitude, loc.latitude, loc.longitude))
    }

    pub fn within_radius(&self, latitude: f64, longitude: f64, radius_km: f64) -> bool {
        if radius_km < MIN_RADIUS_KM {
            return false;
        }
        self.distance_km(latitude, longitude)
            .is_some_and(|d| d <= radius_km)
    }
}

pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_kind_parses_both_spellings() {
        assert_eq!("parking".parse::<TaxKind>(), Ok(TaxKind::Parking));
        assert_eq!(
            "transientOccupancy".parse::<TaxKind>(),
            Ok(TaxKind::TransientOccupancy)
        );
        assert_eq!(
            "transient_occupancy".parse::<TaxKind>(),
            Ok(TaxKind::TransientOccupancy)
        );
    }

    #[test]
    fn tax_kind_rejects_anything_else() {
        assert_eq!(
            "sales".parse::<TaxKind>(),
            Err(ArgumentError::UnknownTaxKind("sales".into()))
        );
        assert!("Parking".parse::<TaxKind>().is_err());
    }

    #[test]
    fn haversine_is_zero_for_same_point() {
        assert_eq!(haversine_km(37.78, -122.4, 37.78, -122.4), 0.0);
    }

    #[test]
    fn haversine_matches_known_distance() {
        // Ferry Building to Twin Peaks summit, roughly 6.6 km.
        let d = haversine_km(37.7955, -122.3937, 37.7544, -122.4477);
        assert!((d - 6.6).abs() < 0.1, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let d = haversine_km(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }
}
