//! Report assembly
//!
//! Turns the typed aggregator outputs into named sections of display-ready
//! metrics. No statistics are computed here.

use serde::Serialize;

use crate::core::aggregator::{
    DemographicsStats, DurationStats, Measured, Peak, StationStats, TimeStats,
};
use crate::core::types::{City, FilterCriteria, weekday_name};
use crate::utils::{format_duration, format_hour};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub(crate) enum MetricValue {
    Text(String),
    Integer(i64),
    /// The dataset does not carry the column this metric needs
    NotAvailable,
    /// The column exists but no filtered trip has a value for it
    NoData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Metric {
    pub(crate) key: String,
    pub(crate) label: String,
    pub(crate) value: MetricValue,
}

impl Metric {
    fn new(key: impl Into<String>, label: impl Into<String>, value: MetricValue) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ReportSection {
    pub(crate) name: &'static str,
    pub(crate) title: &'static str,
    pub(crate) metrics: Vec<Metric>,
}

impl ReportSection {
    pub(crate) fn get(&self, key: &str) -> Option<&MetricValue> {
        self.metrics.iter().find(|m| m.key == key).map(|m| &m.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct StatisticsReport {
    pub(crate) city: City,
    pub(crate) month: String,
    pub(crate) day: String,
    pub(crate) trip_count: usize,
    pub(crate) sections: Vec<ReportSection>,
}

impl StatisticsReport {
    pub(crate) fn section(&self, name: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.name == name)
    }
}

fn text_or_no_data<K>(peak: Option<&Peak<K>>, render: impl Fn(&K) -> String) -> MetricValue {
    match peak {
        Some(p) => MetricValue::Text(render(&p.value)),
        None => MetricValue::NoData,
    }
}

fn year_value(year: Option<i32>) -> MetricValue {
    year.map_or(MetricValue::NoData, |y| MetricValue::Integer(i64::from(y)))
}

fn count_value(n: usize) -> MetricValue {
    MetricValue::Integer(i64::try_from(n).unwrap_or(i64::MAX))
}

fn time_section(stats: &TimeStats) -> ReportSection {
    ReportSection {
        name: "time",
        title: "Most Frequent Times of Travel",
        metrics: vec![
            Metric::new(
                "most_common_month",
                "Most common month",
                text_or_no_data(stats.month.as_ref(), |m| m.name().to_string()),
            ),
            Metric::new(
                "most_common_day",
                "Most common day",
                text_or_no_data(stats.weekday.as_ref(), |d| weekday_name(*d).to_string()),
            ),
            Metric::new(
                "most_common_hour",
                "Most common start hour",
                text_or_no_data(stats.hour.as_ref(), |h| format_hour(*h)),
            ),
        ],
    }
}

fn station_section(stats: &StationStats) -> ReportSection {
    ReportSection {
        name: "stations",
        title: "Most Popular Stations and Trip",
        metrics: vec![
            Metric::new(
                "most_common_start_station",
                "Most common start station",
                text_or_no_data(stats.start.as_ref(), String::clone),
            ),
            Metric::new(
                "most_common_end_station",
                "Most common end station",
                text_or_no_data(stats.end.as_ref(), String::clone),
            ),
            Metric::new(
                "most_common_trip",
                "Most common trip",
                text_or_no_data(stats.trip.as_ref(), |(from, to)| format!("{from} to {to}")),
            ),
        ],
    }
}

fn duration_section(stats: &DurationStats) -> ReportSection {
    ReportSection {
        name: "duration",
        title: "Trip Duration",
        metrics: vec![
            Metric::new(
                "total_travel_time",
                "Total travel time",
                MetricValue::Text(format_duration(stats.total_seconds)),
            ),
            Metric::new(
                "mean_travel_time",
                "Mean travel time",
                MetricValue::Text(format_duration(stats.mean_seconds)),
            ),
        ],
    }
}

fn demographics_section(stats: &DemographicsStats) -> ReportSection {
    let mut metrics: Vec<Metric> = stats
        .user_types
        .iter()
        .map(|(name, n)| {
            Metric::new(
                format!("user_type:{name}"),
                format!("User type: {name}"),
                count_value(*n),
            )
        })
        .collect();

    match &stats.gender {
        Measured::NotAvailable => {
            metrics.push(Metric::new("gender", "Gender", MetricValue::NotAvailable));
        }
        Measured::Available(counts) if counts.is_empty() => {
            metrics.push(Metric::new("gender", "Gender", MetricValue::NoData));
        }
        Measured::Available(counts) => {
            metrics.extend(counts.iter().map(|(name, n)| {
                Metric::new(
                    format!("gender:{name}"),
                    format!("Gender: {name}"),
                    count_value(*n),
                )
            }));
        }
    }

    let (earliest, latest, most_common) = match &stats.birth_year {
        Measured::NotAvailable => (
            MetricValue::NotAvailable,
            MetricValue::NotAvailable,
            MetricValue::NotAvailable,
        ),
        Measured::Available(years) => (
            year_value(years.earliest),
            year_value(years.latest),
            year_value(years.most_common.as_ref().map(|p| p.value)),
        ),
    };
    metrics.push(Metric::new(
        "earliest_birth_year",
        "Earliest birth year",
        earliest,
    ));
    metrics.push(Metric::new(
        "latest_birth_year",
        "Most recent birth year",
        latest,
    ));
    metrics.push(Metric::new(
        "most_common_birth_year",
        "Most common birth year",
        most_common,
    ));

    ReportSection {
        name: "demographics",
        title: "User Stats",
        metrics,
    }
}

/// Compose the four aggregator outputs into one report
pub(crate) fn assemble(
    criteria: &FilterCriteria,
    time: &TimeStats,
    stations: &StationStats,
    duration: &DurationStats,
    demographics: &DemographicsStats,
) -> StatisticsReport {
    StatisticsReport {
        city: criteria.city,
        month: criteria.month.to_string(),
        day: criteria.weekday.to_string(),
        trip_count: duration.trip_count,
        sections: vec![
            time_section(time),
            station_section(stations),
            duration_section(duration),
            demographics_section(demographics),
        ],
    }
}
