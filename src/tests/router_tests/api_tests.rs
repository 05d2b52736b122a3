use crate::cache::{CachePolicy, CollectionSource, LoadError, QueryCache};
use crate::domain::BusinessCollection;
use crate::fetcher::FetchError;
use crate::geos::Neighborhood;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{get, read_body, sample_rows};
use astra::Response;
use serde_json::Value;

/// Serves the sample rows for most neighborhoods. A few stand in for
/// failing upstreams: "Presidio" is unreachable, "Mission" returns a row with
/// a bad date, "SoMa" returns an undecodable page and "Sunset" has a broken
/// client.
struct FixtureSource;

impl CollectionSource for FixtureSource {
    fn load(&self, nhood: Neighborhood) -> Result<BusinessCollection, LoadError> {
        match nhood.key() {
            "Presidio" => Err(FetchError::Network("connection refused".into()).into()),
            "Mission" => {
                let mut rows = sample_rows();
                rows[0].dba_end_date = Some("sometime in May".into());
                Ok(BusinessCollection::new(rows)?)
            }
            "SoMa" => Err(FetchError::Decode {
                offset: 0,
                message: "expected value at line 1 column 1".into(),
            }
            .into()),
            "Sunset" => Err(FetchError::Client("invalid API base".into()).into()),
            _ => Ok(BusinessCollection::new(sample_rows())?),
        }
    }
}

fn cache() -> QueryCache<FixtureSource> {
    let policy = CachePolicy {
        max_retries: 0,
        ..CachePolicy::default()
    };
    QueryCache::new(FixtureSource, policy)
}

fn call(uri: &str) -> Response {
    match handle(get(uri), &cache()) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    }
}

fn json(resp: Response) -> Value {
    serde_json::from_str(&read_body(resp)).unwrap()
}

#[test]
fn lists_every_neighborhood() {
    let resp = call("/api/neighborhoods");
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "application/json");

    let body = json(resp);
    let all = body.as_array().unwrap();
    assert_eq!(all.len(), Neighborhood::all().count());
    assert!(all
        .iter()
        .any(|n| n["key"] == "SoMa" && n["label"] == "South of Market"));
}

#[test]
fn summary_reports_counts_and_breakdowns() {
    let resp = call("/api/summary?nhood=FiDi");
    assert_eq!(resp.status(), 200);

    let body = json(resp);
    assert_eq!(body["neighborhood"]["key"], "FiDi");
    assert_eq!(body["total"], 3);
    assert_eq!(body["active"], 1);
    assert_eq!(body["uniqueSectors"], 2);
    assert_eq!(body["districtBreakdown"]["6"], 1);
    assert_eq!(body["monthlyActivity"].as_array().unwrap().len(), 12);

    let top = body["topIndustries"].as_array().unwrap();
    assert_eq!(top.last().unwrap()["key"], "other");
}

#[test]
fn businesses_applies_filters() {
    let body = json(call("/api/businesses?nhood=FiDi&tax=parking"));
    assert_eq!(body["count"], 1);
    assert_eq!(body["businesses"][0]["id"], "test-active-business");

    let body = json(call(
        "/api/businesses?nhood=FiDi&lat=37.78&lon=-122.4&radius_km=0.2",
    ));
    assert_eq!(body["count"], 1);

    let body = json(call("/api/businesses?nhood=FiDi&district=3&active=true"));
    assert_eq!(body["count"], 0);

    let body = json(call("/api/businesses?nhood=FiDi"));
    assert_eq!(body["count"], 3);
}

#[test]
fn neighborhood_keys_are_url_decoded() {
    let body = json(call("/api/summary?nhood=Presidio%20Heights"));
    assert_eq!(body["neighborhood"]["label"], "Presidio Heights");

    let body = json(call("/api/summary?nhood=Presidio+Heights"));
    assert_eq!(body["neighborhood"]["key"], "Presidio Heights");
}

#[test]
fn business_lookup_by_id_and_certificate() {
    let body = json(call("/api/business?nhood=FiDi&id=1247900-03-201-1112531"));
    assert_eq!(body["dbaName"], "Streamlined Ventures");
    assert_eq!(body["mailingAddress"]["city"], "Palo Alto");

    let body = json(call("/api/business?nhood=FiDi&certificate=123456"));
    assert_eq!(body["id"], "test-active-business");

    assert_eq!(call("/api/business?nhood=FiDi&id=nope").status(), 404);
    assert_eq!(call("/api/business?nhood=FiDi").status(), 400);
}

#[test]
fn bad_arguments_are_rejected() {
    assert_eq!(call("/api/summary").status(), 400);
    assert_eq!(call("/api/summary?nhood=Atlantis").status(), 400);
    assert_eq!(call("/api/summary?nhood=soma").status(), 400);
    assert_eq!(call("/api/businesses?nhood=FiDi&tax=sales").status(), 400);
    assert_eq!(call("/api/businesses?nhood=FiDi&active=maybe").status(), 400);
    assert_eq!(call("/api/businesses?nhood=FiDi&lat=37.78").status(), 400);

    let resp = call("/api/businesses?nhood=FiDi&lat=north&lon=1&radius_km=1");
    assert_eq!(resp.status(), 400);
    assert!(json(resp)["error"].as_str().unwrap().contains("lat"));
}

#[test]
fn upstream_failure_maps_to_bad_gateway() {
    let resp = call("/api/summary?nhood=Presidio");
    assert_eq!(resp.status(), 502);
    assert!(json(resp)["error"].is_string());
}

#[test]
fn malformed_upstream_data_maps_to_unprocessable() {
    let resp = call("/api/summary?nhood=Mission");
    assert_eq!(resp.status(), 422);
    assert!(json(resp)["error"]
        .as_str()
        .unwrap()
        .contains("sometime in May"));

    assert_eq!(call("/api/businesses?nhood=SoMa").status(), 422);
}

#[test]
fn client_setup_failure_is_internal_error() {
    let resp = call("/api/summary?nhood=Sunset");
    assert_eq!(resp.status(), 500);
    assert_eq!(json(resp)["error"], "Internal Server Error");
}

#[test]
fn empty_filter_values_are_ignored() {
    let body = json(call(
        "/api/businesses?nhood=FiDi&tax=&district=&corridor=&naics=&active=&lat=&lon=&radius_km=",
    ));
    assert_eq!(body["count"], 3);
}

#[test]
fn unknown_route_is_not_found() {
    assert_eq!(call("/nowhere").status(), 404);
    assert_eq!(call("/api/neighborhood").status(), 404);
}
