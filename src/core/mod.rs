//! Core module - trip types, filtering, aggregation and report assembly

mod aggregator;
mod filter;
pub(crate) mod report;
mod types;

pub(crate) use aggregator::{demographics_stats, duration_stats, station_stats, time_stats};
pub(crate) use filter::apply as apply_filters;
pub(crate) use report::{MetricValue, StatisticsReport, assemble};
pub(crate) use types::{
    Capabilities, City, FilterCriteria, MonthFilter, TripDataset, TripRecord, WeekdayFilter,
};
