use crate::domain::Business;
use crate::geos::Neighborhood;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NeighborhoodVm {
    pub key: &'static str,
    pub label: &'static str,
}

impl From<Neighborhood> for NeighborhoodVm {
    fn from(n: Neighborhood) -> Self {
        Self {
            key: n.key(),
            label: n.label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BusinessListVm<'a> {
    pub neighborhood: Neighborhood,
    pub count: usize,
    pub businesses: Vec<&'a Business>,
}

impl<'a> BusinessListVm<'a> {
    pub fn new(neighborhood: Neighborhood, businesses: Vec<&'a Business>) -> Self {
        Self {
            neighborhood,
            count: businesses.len(),
            businesses,
        }
    }
}
