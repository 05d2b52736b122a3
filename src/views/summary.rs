use crate::domain::{
    Breakdown, BusinessCollection, MonthlyActivity, TopIndustries, DEFAULT_TOP_INDUSTRIES,
};
use crate::geos::Neighborhood;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Everything the dashboard cards and charts show for one neighborhood.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryVm {
    pub neighborhood: Neighborhood,
    pub total: usize,
    pub active: usize,
    pub unique_sectors: usize,
    pub industry_breakdown: Breakdown,
    pub district_breakdown: Breakdown,
    pub top_industries: TopIndustries,
    pub monthly_activity: Vec<MonthlyActivity>,
}

impl SummaryVm {
    pub fn build(nhood: Neighborhood, collection: &BusinessCollection) -> Self {
        Self::build_at(nhood, collection, Local::now().date_naive())
    }

    pub fn build_at(nhood: Neighborhood, collection: &BusinessCollection, today: NaiveDate) -> Self {
        SummaryVm {
            neighborhood: nhood,
            total: collection.len(),
            active: collection.active_count(),
            unique_sectors: collection.count_unique_industry_sectors(),
            industry_breakdown: collection.industry_breakdown(),
            district_breakdown: collection.district_breakdown(),
            top_industries: collection.top_industries(DEFAULT_TOP_INDUSTRIES),
            monthly_activity: collection.monthly_activity_at(today),
        }
    }
}
