// src/domain/collection.rs

use crate::domain::activity::{self, MonthlyActivity, ACTIVITY_MONTHS};
use crate::domain::{Breakdown, Business, BusinessFilter, NormalizeError, TaxKind, TopIndustries};
use crate::fetcher::RawBusinessRecord;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use std::collections::HashSet;

/// Normalized businesses for one neighborhood fetch. Built once, never
/// mutated; every query borrows from the stored sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusinessCollection {
    businesses: Vec<Business>,
}

impl BusinessCollection {
    /// Normalizes every raw row, keeping input order. Fails on the first row
    /// that cannot be normalized.
    pub fn new(raw: Vec<RawBusinessRecord>) -> Result<Self, NormalizeError> {
        let businesses = raw
            .iter()
            .map(Business::from_raw)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = businesses.len(), "built business collection");
        Ok(Self { businesses })
    }

    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    pub fn as_slice(&self) -> &[Business] {
        &self.businesses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Business> {
        self.businesses.iter()
    }

    fn select<F>(&self, pred: F) -> Vec<&Business>
    where
        F: Fn(&Business) -> bool,
    {
        self.businesses.iter().filter(|&b| pred(b)).collect()
    }

    pub fn active_businesses(&self) -> Vec<&Business> {
        self.select(|b| b.is_active)
    }

    pub fn active_count(&self) -> usize {
        self.businesses.iter().filter(|b| b.is_active).count()
    }

    /// Distinct two-character NAICS prefixes among coded businesses.
    /// Prefixes missing from the sector table still count here.
    pub fn count_unique_industry_sectors(&self) -> usize {
        self.businesses
            .iter()
            .filter_map(Business::sector_prefix)
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn by_industry_prefix(&self, prefix: &str) -> Vec<&Business> {
        self.select(|b| b.has_industry_prefix(prefix))
    }

    pub fn by_supervisor_district(&self, district: &str) -> Vec<&Business> {
        self.select(|b| b.in_district(district))
    }

    pub fn by_business_corridor(&self, corridor: &str) -> Vec<&Business> {
        self.select(|b| b.in_corridor(corridor))
    }

    pub fn by_tax_flag(&self, kind: TaxKind) -> Vec<&Business> {
        self.select(|b| b.pays_tax(kind))
    }

    /// Located businesses within `radius_km` of the center. Radii under
    /// [`crate::domain::MIN_RADIUS_KM`] match nothing.
    pub fn within_radius(&self, latitude: f64, longitude: f64, radius_km: f64) -> Vec<&Business> {
        self.select(|b| b.within_radius(latitude, longitude, radius_km))
    }

    pub fn filtered(&self, filter: &BusinessFilter) -> Vec<&Business> {
        self.select(|b| filter.matches(b))
    }

    /// Sector name -> count over every business, with "Unknown" for missing
    /// codes and "Other" for unmapped prefixes.
    pub fn industry_breakdown(&self) -> Breakdown {
        self.businesses.iter().map(Business::industry_label).collect()
    }

    pub fn district_breakdown(&self) -> Breakdown {
        self.businesses
            .iter()
            .map(|b| b.supervisor_district.as_str())
            .collect()
    }

    /// Largest sectors among active, coded businesses.
    pub fn top_industries(&self, limit: usize) -> TopIndustries {
        let breakdown: Breakdown = self
            .businesses
            .iter()
            .filter(|b| b.is_active && b.naic_code.is_some())
            .map(Business::industry_label)
            .collect();

        TopIndustries::from_breakdown(&breakdown, limit)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Business> {
        self.businesses.iter().find(|b| b.id == id)
    }

    pub fn find_by_certificate(&self, certificate_number: &str) -> Option<&Business> {
        self.businesses
            .iter()
            .find(|b| b.certificate_number == certificate_number)
    }

    pub fn count_opened_in_month(&self, year: i32, month: u32) -> usize {
        self.count_in_month(year, month, |b| b.dates.dba_start)
    }

    pub fn count_closed_in_month(&self, year: i32, month: u32) -> usize {
        self.count_in_month(year, month, |b| b.dates.dba_end)
    }

    fn count_in_month<F>(&self, year: i32, month: u32, date_of: F) -> usize
    where
        F: Fn(&Business) -> Option<NaiveDateTime>,
    {
        self.businesses
            .iter()
            .filter_map(date_of)
            .filter(|d| d.year() == year && d.month() == month)
            .count()
    }

    /// Openings and closings for the trailing twelve months, ending with the
    /// current local month. Stored dates are local civil time as well (see
    /// [`crate::domain::normalize::parse_timestamp`]).
    pub fn monthly_activity(&self) -> Vec<MonthlyActivity> {
        self.monthly_activity_at(Local::now().date_naive())
    }

    pub fn monthly_activity_at(&self, today: NaiveDate) -> Vec<MonthlyActivity> {
        activity::trailing_months(today, ACTIVITY_MONTHS)
            .into_iter()
            .map(|(year, month)| MonthlyActivity {
                date: activity::month_label(year, month),
                new_biz: self.count_opened_in_month(year, month),
                closed_biz: self.count_closed_in_month(year, month),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a BusinessCollection {
    type Item = &'a Business;
    type IntoIter = std::slice::Iter<'a, Business>;

    fn into_iter(self) -> Self::IntoIter {
        self.businesses.iter()
    }
}
