use crate::fetcher::{RawBusinessRecord, RawPoint};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// A minimal active row: every required field set, every optional one absent.
pub fn raw_record(id: &str) -> RawBusinessRecord {
    RawBusinessRecord {
        uniqueid: id.to_string(),
        ttxid: format!("ttx-{id}"),
        certificate_number: format!("cert-{id}"),
        ownership_name: "Owner LLC".into(),
        dba_name: format!("Business {id}"),
        full_business_address: "1 Market St".into(),
        city: "San Francisco".into(),
        state: "CA".into(),
        business_zip: "94105".into(),
        dba_start_date: None,
        dba_end_date: None,
        location_start_date: None,
        location_end_date: None,
        mailing_address_1: None,
        mail_city: None,
        mail_zipcode: None,
        mail_state: None,
        naic_code: None,
        naic_code_description: None,
        naics_code_descriptions_list: None,
        parking_tax: false,
        transient_occupancy_tax: false,
        supervisor_district: "6".into(),
        neighborhoods_analysis_boundaries: "Financial District/South Beach".into(),
        business_corridor: None,
        location: None,
        data_as_of: "2025-06-07T00:00:00.000".into(),
        data_loaded_at: "2025-06-07T04:12:40.000".into(),
    }
}

pub fn point(longitude: f64, latitude: f64) -> Option<RawPoint> {
    Some(RawPoint {
        geometry_type: "Point".into(),
        coordinates: [longitude, latitude],
    })
}

/// Two closed businesses and one active one, as the dataset returns them.
pub fn sample_rows() -> Vec<RawBusinessRecord> {
    let mut photography = raw_record("1038156-08-151-1017634");
    photography.ttxid = "1038156-08-151".into();
    photography.certificate_number = "1017634".into();
    photography.ownership_name = "Josh Andrews Photography".into();
    photography.dba_name = "Josh Andrews Photography".into();
    photography.full_business_address = "188 South Parks St #6".into();
    photography.business_zip = "94107".into();
    photography.dba_start_date = Some("2015-08-24T00:00:00.000".into());
    photography.dba_end_date = Some("2016-05-05T00:00:00.000".into());
    photography.location_start_date = Some("2015-08-24T00:00:00.000".into());
    photography.location_end_date = Some("2016-05-05T00:00:00.000".into());
    photography.supervisor_district = "6".into();
    photography.location = point(-122.394944732, 37.780848202);

    let mut ventures = raw_record("1247900-03-201-1112531");
    ventures.ttxid = "1247900-03-201".into();
    ventures.certificate_number = "1112531".into();
    ventures.ownership_name = "Streamlined Ventures Management, LLC".into();
    ventures.dba_name = "Streamlined Ventures".into();
    ventures.full_business_address = "353 Kearny St".into();
    ventures.business_zip = "94110".into();
    ventures.dba_start_date = Some("2018-04-03T00:00:00.000".into());
    ventures.dba_end_date = Some("2019-05-07T00:00:00.000".into());
    ventures.location_start_date = Some("2018-04-03T00:00:00.000".into());
    ventures.location_end_date = Some("2019-05-07T00:00:00.000".into());
    ventures.mailing_address_1 = Some("1825 Emerson St".into());
    ventures.mail_city = Some("Palo Alto".into());
    ventures.mail_zipcode = Some("94301".into());
    ventures.mail_state = Some("CA".into());
    ventures.naic_code = Some("5210".into());
    ventures.naic_code_description = Some("Financial Services".into());
    ventures.naics_code_descriptions_list = Some("Financial Services".into());
    ventures.supervisor_district = "3".into();
    ventures.business_corridor = Some("Chinatown".into());
    ventures.location = point(-122.404392959, 37.791500007);

    let mut active = raw_record("test-active-business");
    active.ttxid = "test-123".into();
    active.certificate_number = "123456".into();
    active.ownership_name = "Active Business LLC".into();
    active.dba_name = "Active Business".into();
    active.full_business_address = "123 Main St".into();
    active.dba_start_date = Some("2023-01-01T00:00:00.000".into());
    active.location_start_date = Some("2023-01-01T00:00:00.000".into());
    active.naic_code = Some("7210".into());
    active.naic_code_description = Some("Professional Services".into());
    active.parking_tax = true;
    active.supervisor_district = "1".into();
    active.neighborhoods_analysis_boundaries = "SOMA".into();
    active.location = point(-122.4, 37.78);

    vec![photography, ventures, active]
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
