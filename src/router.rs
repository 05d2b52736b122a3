use crate::cache::{CollectionSource, QueryCache};
use crate::domain::{ArgumentError, BusinessFilter, RadiusQuery, TaxKind};
use crate::errors::ServerError;
use crate::geos::Neighborhood;
use crate::responses::{json_response, ResultResp};
use crate::views::{BusinessListVm, NeighborhoodVm, SummaryVm};
use astra::Request;
use std::collections::HashMap;
use std::str::FromStr;

pub fn handle<S: CollectionSource>(req: Request, cache: &QueryCache<S>) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    tracing::debug!(method, path, "request");

    match (method, path) {
        ("GET", "/api/neighborhoods") => {
            let all: Vec<NeighborhoodVm> = Neighborhood::all().map(NeighborhoodVm::from).collect();
            json_response(&all)
        }

        ("GET", "/api/summary") => {
            let nhood = neighborhood_param(&params)?;
            let collection = cache.get(nhood)?;
            json_response(&SummaryVm::build(nhood, &collection))
        }

        ("GET", "/api/businesses") => {
            let nhood = neighborhood_param(&params)?;
            let filter = filter_from_params(&params)?;
            let collection = cache.get(nhood)?;
            json_response(&BusinessListVm::new(nhood, collection.filtered(&filter)))
        }

        ("GET", "/api/business") => {
            let nhood = neighborhood_param(&params)?;
            let collection = cache.get(nhood)?;

            let found = match (params.get("id"), params.get("certificate")) {
                (Some(id), _) => collection.find_by_id(id),
                (None, Some(cert)) => collection.find_by_certificate(cert),
                (None, None) => {
                    return Err(ServerError::BadRequest(
                        "expected an id or certificate parameter".into(),
                    ))
                }
            };

            match found {
                Some(business) => json_response(business),
                None => Err(ServerError::NotFound),
            }
        }

        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn neighborhood_param(params: &HashMap<String, String>) -> Result<Neighborhood, ServerError> {
    let key = params
        .get("nhood")
        .ok_or_else(|| ServerError::BadRequest("missing nhood parameter".into()))?;
    Ok(key.parse()?)
}

fn number_param<T: FromStr>(
    params: &HashMap<String, String>,
    name: &'static str,
) -> Result<Option<T>, ArgumentError> {
    params
        .get(name)
        .filter(|v| !v.is_empty())
        .map(|raw| {
            raw.trim().parse().map_err(|_| ArgumentError::InvalidParameter {
                name,
                value: raw.clone(),
            })
        })
        .transpose()
}

fn filter_from_params(params: &HashMap<String, String>) -> Result<BusinessFilter, ArgumentError> {
    // an empty value is the same as leaving the parameter out
    let text = |name: &str| params.get(name).filter(|v| !v.is_empty()).cloned();

    let tax = text("tax")
        .map(|kind| TaxKind::from_str(&kind))
        .transpose()?;

    let active_only = match text("active").as_deref() {
        None | Some("false") | Some("0") => false,
        Some("true") | Some("1") => true,
        Some(other) => {
            return Err(ArgumentError::InvalidParameter {
                name: "active",
                value: other.to_string(),
            })
        }
    };

    let lat = number_param::<f64>(params, "lat")?;
    let lon = number_param::<f64>(params, "lon")?;
    let radius_km = number_param::<f64>(params, "radius_km")?;

    let radius = match (lat, lon, radius_km) {
        (Some(latitude), Some(longitude), Some(radius_km)) => Some(RadiusQuery {
            latitude,
            longitude,
            radius_km,
        }),
        (None, None, None) => None,
        _ => {
            return Err(ArgumentError::InvalidParameter {
                name: "radius_km",
                value: "lat, lon and radius_km must be given together".into(),
            })
        }
    };

    Ok(BusinessFilter {
        supervisor_district: text("district"),
        business_corridor: text("corridor"),
        industry_prefix: text("naics"),
        tax,
        radius,
        active_only,
    })
}
