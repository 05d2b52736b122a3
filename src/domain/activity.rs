// src/domain/activity.rs

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Length of the trailing activity window.
pub const ACTIVITY_MONTHS: usize = 12;

/// Openings and closings within one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyActivity {
    /// `YYYY-MM`
    pub date: String,
    pub new_biz: usize,
    pub closed_biz: usize,
}

/// `(year, month)` for the `count` months ending with `today`'s month,
/// oldest first.
pub fn trailing_months(today: NaiveDate, count: usize) -> Vec<(i32, u32)> {
    let current = today.year() * 12 + today.month0() as i32;

    (0..count as i32)
        .rev()
        .map(|back| {
            let idx = current - back;
            (idx.div_euclid(12), idx.rem_euclid(12) as u32 + 1)
        })
        .collect()
}

pub fn month_label(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}
