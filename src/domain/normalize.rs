// src/domain/normalize.rs

use crate::domain::{Address, Business, BusinessDates, Location, NormalizeError, Taxes};
use crate::fetcher::RawBusinessRecord;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

impl Business {
    /// Builds a `Business` from a raw row. Optional fields that are missing
    /// or empty become `None`; a timestamp that is present but unreadable
    /// rejects the row.
    pub fn from_raw(raw: &RawBusinessRecord) -> Result<Self, NormalizeError> {
        let timestamp = |field: &'static str, value: &Option<String>| {
            present(value)
                .map(|s| {
                    parse_timestamp(s).ok_or_else(|| NormalizeError::InvalidTimestamp {
                        record_id: raw.uniqueid.clone(),
                        field,
                        value: s.to_string(),
                    })
                })
                .transpose()
        };

        let dates = BusinessDates {
            dba_start: timestamp("dba_start_date", &raw.dba_start_date)?,
            dba_end: timestamp("dba_end_date", &raw.dba_end_date)?,
            location_start: timestamp("location_start_date", &raw.location_start_date)?,
            location_end: timestamp("location_end_date", &raw.location_end_date)?,
        };

        let mailing_address = present(&raw.mailing_address_1).map(|street| Address {
            street: street.to_string(),
            city: raw.mail_city.clone().unwrap_or_default(),
            state: raw.mail_state.clone().unwrap_or_default(),
            zip: raw.mail_zipcode.clone().unwrap_or_default(),
        });

        let location = raw.location.as_ref().map(|point| Location {
            longitude: point.coordinates[0],
            latitude: point.coordinates[1],
        });

        let is_active = dates.dba_end.is_none() && dates.location_end.is_none();

        Ok(Business {
            id: raw.uniqueid.clone(),
            certificate_number: raw.certificate_number.clone(),
            ownership_name: raw.ownership_name.clone(),
            dba_name: raw.dba_name.clone(),
            address: Address {
                street: raw.full_business_address.clone(),
                city: raw.city.clone(),
                state: raw.state.clone(),
                zip: raw.business_zip.clone(),
            },
            mailing_address,
            dates,
            naic_code: present(&raw.naic_code).map(str::to_string),
            naic_description: present(&raw.naic_code_description).map(str::to_string),
            taxes: Taxes {
                parking: raw.parking_tax,
                transient_occupancy: raw.transient_occupancy_tax,
            },
            location,
            supervisor_district: raw.supervisor_district.clone(),
            neighborhood: raw.neighborhoods_analysis_boundaries.clone(),
            business_corridor: present(&raw.business_corridor).map(str::to_string),
            is_active,
        })
    }
}

/// Empty strings count as missing. Whitespace does not: a blank timestamp
/// is malformed, not absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Accepts RFC 3339, the API's floating `YYYY-MM-DDTHH:MM:SS.fff`, and bare
/// dates. Every result is local civil time: floating values are taken as
/// written and offset values are converted to the local zone, the same zone
/// `BusinessCollection::monthly_activity` takes "today" from.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
