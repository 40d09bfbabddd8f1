//! Month and weekday restriction of a loaded dataset

use chrono::{Datelike, Month, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::core::types::{
    FilterCriteria, FilteredDataset, MonthFilter, TripDataset, TripRecord, WeekdayFilter,
};

/// Half-open range `[first of month 00:00, first of next month 00:00)`
fn month_bounds(year: i32, month: Month) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)?;
    let end = match month {
        Month::December => NaiveDate::from_ymd_opt(year + 1, 1, 1)?,
        _ => NaiveDate::from_ymd_opt(year, month.number_from_month() + 1, 1)?,
    };
    Some((start.and_hms_opt(0, 0, 0)?, end.and_hms_opt(0, 0, 0)?))
}

struct Predicate {
    month_range: Option<(NaiveDateTime, NaiveDateTime)>,
    month_active: bool,
    weekday: WeekdayFilter,
}

impl Predicate {
    fn new(criteria: &FilterCriteria, year: i32) -> Self {
        match criteria.month {
            MonthFilter::All => Self {
                month_range: None,
                month_active: false,
                weekday: criteria.weekday,
            },
            MonthFilter::Only(month) => Self {
                month_range: month_bounds(year, month),
                month_active: true,
                weekday: criteria.weekday,
            },
        }
    }

    fn matches(&self, record: &TripRecord) -> bool {
        if self.month_active {
            // An unrepresentable month range keeps nothing
            let Some((start, end)) = self.month_range else {
                return false;
            };
            if record.start_time < start || record.start_time >= end {
                return false;
            }
        }
        if let WeekdayFilter::Only(day) = self.weekday
            && record.start_time.weekday().num_days_from_monday() != day.num_days_from_monday()
        {
            return false;
        }
        true
    }
}

/// Keep the trips whose start time satisfies both the month and weekday
/// filters. `year` is the single calendar year the dataset was recorded in.
pub(crate) fn apply<'a>(
    dataset: &'a TripDataset,
    criteria: &FilterCriteria,
    year: i32,
) -> FilteredDataset<'a> {
    let predicate = Predicate::new(criteria, year);
    let records: Vec<&TripRecord> = dataset
        .records
        .iter()
        .filter(|r| predicate.matches(r))
        .collect();

    debug!(
        city = dataset.city.key(),
        month = %criteria.month,
        day = %criteria.weekday,
        kept = records.len(),
        total = dataset.records.len(),
        "Applied filters"
    );

    FilteredDataset {
        capabilities: dataset.capabilities,
        records,
    }
}
