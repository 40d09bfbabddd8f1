//! Core data types for the trip statistics pipeline
//!
//! Raw trips, the datasets that hold them, and the filter criteria that
//! restrict which trips are analysed.

use chrono::{Month, NaiveDateTime, Weekday};
use serde::Serialize;
use std::fmt;

use crate::error::AppError;

/// Cities with a bundled trip dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    pub(crate) const ALL: [City; 3] = [City::Chicago, City::NewYork, City::Washington];

    /// Stable key used in config files and JSON output
    pub(crate) fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYork => "new_york",
            City::Washington => "washington",
        }
    }

    pub(crate) fn display_name(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYork => "New York City",
            City::Washington => "Washington",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            City::Chicago => &["chi"],
            City::NewYork => &["new york", "new york city", "nyc"],
            City::Washington => &["dc", "washington dc"],
        }
    }

    /// Parse a city by key or alias, ignoring case and surrounding whitespace
    pub(crate) fn parse(input: &str) -> Result<Self, AppError> {
        let needle = input.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.key() == needle || c.aliases().contains(&needle.as_str()))
            .ok_or_else(|| AppError::InvalidCity {
                input: input.trim().to_string(),
            })
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Calendar months, January first
pub(crate) const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Months the datasets cover and the month filter accepts
pub(crate) const FILTER_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Weekdays indexed Monday = 0 through Sunday = 6
pub(crate) const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub(crate) fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    pub(crate) fn parse(input: &str) -> Result<Self, AppError> {
        let needle = input.trim().to_lowercase();
        if needle == "all" {
            return Ok(MonthFilter::All);
        }
        FILTER_MONTHS
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(&needle))
            .map(MonthFilter::Only)
            .ok_or_else(|| AppError::InvalidMonth {
                input: input.trim().to_string(),
            })
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(m) => f.write_str(&m.name().to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WeekdayFilter {
    All,
    Only(Weekday),
}

impl WeekdayFilter {
    pub(crate) fn parse(input: &str) -> Result<Self, AppError> {
        let needle = input.trim().to_lowercase();
        if needle == "all" {
            return Ok(WeekdayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).eq_ignore_ascii_case(&needle))
            .map(WeekdayFilter::Only)
            .ok_or_else(|| AppError::InvalidWeekday {
                input: input.trim().to_string(),
            })
    }
}

impl fmt::Display for WeekdayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekdayFilter::All => f.write_str("all"),
            WeekdayFilter::Only(d) => f.write_str(&weekday_name(*d).to_lowercase()),
        }
    }
}

/// Which city to load and which trips of it to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FilterCriteria {
    pub(crate) city: City,
    pub(crate) month: MonthFilter,
    pub(crate) weekday: WeekdayFilter,
}

impl FilterCriteria {
    /// Build criteria from raw user input, rejecting anything outside the
    /// known city, month and weekday names
    pub(crate) fn parse(city: &str, month: &str, weekday: &str) -> Result<Self, AppError> {
        Ok(Self {
            city: City::parse(city)?,
            month: MonthFilter::parse(month)?,
            weekday: WeekdayFilter::parse(weekday)?,
        })
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Month: {}, Day: {}",
            self.city.key(),
            self.month,
            self.weekday
        )
    }
}

/// One bicycle trip
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TripRecord {
    pub(crate) start_time: NaiveDateTime,
    pub(crate) end_time: NaiveDateTime,
    /// Sourced independently of start/end time
    pub(crate) duration_seconds: f64,
    pub(crate) start_station: String,
    pub(crate) end_station: String,
    pub(crate) user_type: String,
    pub(crate) gender: Option<String>,
    pub(crate) birth_year: Option<i32>,
}

/// Optional columns a city dataset may carry, decided once from the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Capabilities {
    pub(crate) has_gender: bool,
    pub(crate) has_birth_year: bool,
}

/// All trips loaded from one city file
#[derive(Debug, Clone)]
pub(crate) struct TripDataset {
    pub(crate) city: City,
    pub(crate) capabilities: Capabilities,
    pub(crate) records: Vec<TripRecord>,
}

/// Trips of a dataset that passed the filters; borrows from the dataset
#[derive(Debug, Clone)]
pub(crate) struct FilteredDataset<'a> {
    pub(crate) capabilities: Capabilities,
    pub(crate) records: Vec<&'a TripRecord>,
}

impl FilteredDataset<'_> {
    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
