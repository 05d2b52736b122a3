pub mod activity;
pub mod breakdown;
pub mod business;
pub mod collection;
pub mod domain_error;
pub mod filter;
pub mod naics;
pub mod normalize;

pub use activity::MonthlyActivity;
pub use breakdown::{Breakdown, IndustryBucket, TopIndustries, DEFAULT_TOP_INDUSTRIES};
pub use business::{
    Address, Business, BusinessDates, Location, TaxKind, Taxes, MIN_RADIUS_KM,
};
pub use collection::BusinessCollection;
pub use domain_error::{ArgumentError, NormalizeError};
pub use filter::{BusinessFilter, RadiusQuery};
