use serde::{Deserialize, Serialize};

// row (g8m3-pdis)
//  ├── uniqueid / ttxid / certificate_number
//  ├── ownership_name / dba_name
//  ├── full_business_address, city, state, business_zip
//  ├── mailing_address_1?, mail_city?, mail_state?, mail_zipcode?
//  ├── dba_start_date?, dba_end_date?
//  ├── location_start_date?, location_end_date?
//  ├── parking_tax, transient_occupancy_tax
//  ├── supervisor_district, neighborhoods_analysis_boundaries
//  ├── business_corridor?
//  ├── location?
//  │    ├── type
//  │    └── coordinates [lon, lat]
//  ├── naic_code?, naic_code_description?, naics_code_descriptions_list?
//  └── data_as_of, data_loaded_at

/// One row of the registered business locations dataset, exactly as the
/// open-data API returns it. Required fields fail deserialization when missing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawBusinessRecord {
    pub uniqueid: String,
    pub ttxid: String,
    pub certificate_number: String,

    pub ownership_name: String,
    pub dba_name: String,

    pub full_business_address: String,
    pub city: String,
    pub state: String,
    pub business_zip: String,

    pub dba_start_date: Option<String>,
    pub dba_end_date: Option<String>,
    pub location_start_date: Option<String>,
    pub location_end_date: Option<String>,

    pub mailing_address_1: Option<String>,
    pub mail_city: Option<String>,
    pub mail_zipcode: Option<String>,
    pub mail_state: Option<String>,

    pub naic_code: Option<String>,
    pub naic_code_description: Option<String>,
    pub naics_code_descriptions_list: Option<String>,

    pub parking_tax: bool,
    pub transient_occupancy_tax: bool,

    pub supervisor_district: String,
    pub neighborhoods_analysis_boundaries: String,
    pub business_corridor: Option<String>,

    pub location: Option<RawPoint>,

    pub data_as_of: String,
    pub data_loaded_at: String,
}

/// GeoJSON point. A fixed-size array rejects anything but two coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawPoint {
    #[serde(rename = "type")]
    pub geometry_type: String,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}
