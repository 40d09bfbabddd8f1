//! Statistic aggregators over a filtered trip set
//!
//! Each aggregator reads the filtered records independently. "Most common"
//! picks go through [`most_common`], which breaks ties toward the smallest
//! key (earliest month, Monday-first weekday, earliest hour, alphabetically
//! first station, earliest birth year).

use chrono::{Datelike, Month, Timelike, Weekday};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::consts::UNKNOWN;
use crate::core::types::{FilteredDataset, MONTHS, WEEKDAYS};

/// A winning value and how many trips had it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Peak<K> {
    pub(crate) value: K,
    pub(crate) count: usize,
}

/// A statistic that depends on a column the dataset may not carry
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Measured<T> {
    Available(T),
    NotAvailable,
}

/// Count occurrences per key
pub(crate) fn tally<K: Ord, I: IntoIterator<Item = K>>(items: I) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Most frequent key; among equal counts the smallest key wins.
/// Returns `None` for an empty input.
pub(crate) fn most_common<K: Ord, I: IntoIterator<Item = K>>(items: I) -> Option<Peak<K>> {
    // BTreeMap yields keys ascending, so only a strictly larger count replaces
    // the current best.
    tally(items)
        .into_iter()
        .fold(None, |best: Option<Peak<K>>, (value, count)| {
            if best.as_ref().is_some_and(|b| b.count >= count) {
                best
            } else {
                Some(Peak { value, count })
            }
        })
}

/// Category counts ordered by descending count, then ascending name
fn ranked_counts<'a, I: IntoIterator<Item = &'a str>>(items: I) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = tally(items)
        .into_iter()
        .map(|(k, n)| (k.to_string(), n))
        .collect();
    ranked.sort_by_key(|(name, count)| (Reverse(*count), name.clone()));
    ranked
}

// ============================================================================
// Time
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TimeStats {
    pub(crate) month: Option<Peak<Month>>,
    pub(crate) weekday: Option<Peak<Weekday>>,
    /// Hour of day, 0..=23
    pub(crate) hour: Option<Peak<u32>>,
}

pub(crate) fn time_stats(data: &FilteredDataset<'_>) -> TimeStats {
    let month = most_common(data.records.iter().map(|r| r.start_time.month0())).map(|p| Peak {
        value: MONTHS[p.value as usize],
        count: p.count,
    });
    let weekday = most_common(
        data.records
            .iter()
            .map(|r| r.start_time.weekday().num_days_from_monday()),
    )
    .map(|p| Peak {
        value: WEEKDAYS[p.value as usize],
        count: p.count,
    });
    let hour = most_common(data.records.iter().map(|r| r.start_time.hour()));

    TimeStats {
        month,
        weekday,
        hour,
    }
}

// ============================================================================
// Stations
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StationStats {
    pub(crate) start: Option<Peak<String>>,
    pub(crate) end: Option<Peak<String>>,
    /// Ordered (start, end) pair
    pub(crate) trip: Option<Peak<(String, String)>>,
}

pub(crate) fn station_stats(data: &FilteredDataset<'_>) -> StationStats {
    let owned = |p: Peak<&str>| Peak {
        value: p.value.to_string(),
        count: p.count,
    };
    let start = most_common(data.records.iter().map(|r| r.start_station.as_str())).map(owned);
    let end = most_common(data.records.iter().map(|r| r.end_station.as_str())).map(owned);
    let trip = most_common(
        data.records
            .iter()
            .map(|r| (r.start_station.as_str(), r.end_station.as_str())),
    )
    .map(|p| Peak {
        value: (p.value.0.to_string(), p.value.1.to_string()),
        count: p.count,
    });

    StationStats { start, end, trip }
}

// ============================================================================
// Duration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DurationStats {
    pub(crate) trip_count: usize,
    pub(crate) total_seconds: f64,
    /// Zero when there are no trips
    pub(crate) mean_seconds: f64,
}

pub(crate) fn duration_stats(data: &FilteredDataset<'_>) -> DurationStats {
    let trip_count = data.len();
    let total_seconds: f64 = data.records.iter().map(|r| r.duration_seconds).sum();
    let mean_seconds = if trip_count == 0 {
        0.0
    } else {
        total_seconds / trip_count as f64
    };
    DurationStats {
        trip_count,
        total_seconds,
        mean_seconds,
    }
}

// ============================================================================
// Demographics
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BirthYearStats {
    pub(crate) earliest: Option<i32>,
    pub(crate) latest: Option<i32>,
    pub(crate) most_common: Option<Peak<i32>>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DemographicsStats {
    pub(crate) user_types: Vec<(String, usize)>,
    pub(crate) gender: Measured<Vec<(String, usize)>>,
    pub(crate) birth_year: Measured<BirthYearStats>,
}

pub(crate) fn demographics_stats(data: &FilteredDataset<'_>) -> DemographicsStats {
    let user_types = ranked_counts(data.records.iter().map(|r| {
        if r.user_type.is_empty() {
            UNKNOWN
        } else {
            r.user_type.as_str()
        }
    }));

    let gender = if data.capabilities.has_gender {
        Measured::Available(ranked_counts(
            data.records.iter().filter_map(|r| r.gender.as_deref()),
        ))
    } else {
        Measured::NotAvailable
    };

    let birth_year = if data.capabilities.has_birth_year {
        let years = || data.records.iter().filter_map(|r| r.birth_year);
        Measured::Available(BirthYearStats {
            earliest: years().min(),
            latest: years().max(),
            most_common: most_common(years()),
        })
    } else {
        Measured::NotAvailable
    };

    DemographicsStats {
        user_types,
        gender,
        birth_year,
    }
}
