//! Single-shot statistics pipeline
//!
//! `load -> filter -> aggregate -> assemble`, then rendering. Nothing is kept
//! between runs; the interactive loop calls [`execute`] once per round.

use std::time::Instant;

use tracing::debug;

use crate::core::{
    FilterCriteria, StatisticsReport, TripDataset, apply_filters, assemble, demographics_stats,
    duration_stats, station_stats, time_stats,
};
use crate::error::AppError;
use crate::output::{NumberFormat, ReportTableOptions, output_report_json, render_report_table};
use crate::source::{CityCatalog, load};

pub(crate) struct CommandContext<'a> {
    pub(crate) catalog: &'a CityCatalog,
    pub(crate) json: bool,
    pub(crate) use_color: bool,
    pub(crate) number_format: NumberFormat,
}

fn timed<T>(stage: &'static str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    debug!(
        stage,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Computed statistics"
    );
    out
}

/// Filter an already loaded dataset and compute every statistic.
/// An empty filter result short-circuits with [`AppError::NoMatchingTrips`].
pub(crate) fn build_report(
    dataset: &TripDataset,
    criteria: &FilterCriteria,
    year: i32,
) -> Result<StatisticsReport, AppError> {
    let filtered = apply_filters(dataset, criteria, year);
    if filtered.is_empty() {
        return Err(AppError::NoMatchingTrips {
            criteria: criteria.to_string(),
        });
    }

    let time = timed("time", || time_stats(&filtered));
    let stations = timed("stations", || station_stats(&filtered));
    let duration = timed("duration", || duration_stats(&filtered));
    let demographics = timed("demographics", || demographics_stats(&filtered));

    Ok(assemble(criteria, &time, &stations, &duration, &demographics))
}

/// Load the criteria's city and build its report
pub(crate) fn run_pipeline(
    catalog: &CityCatalog,
    criteria: &FilterCriteria,
) -> Result<StatisticsReport, AppError> {
    let dataset = load(catalog, criteria.city)?;
    build_report(&dataset, criteria, catalog.year())
}

/// Run the pipeline and render the result for display
pub(crate) fn execute(criteria: &FilterCriteria, ctx: &CommandContext<'_>) -> Result<String, AppError> {
    let start = Instant::now();
    let report = run_pipeline(ctx.catalog, criteria)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(criteria = %criteria, elapsed_ms, "Pipeline finished");

    if ctx.json {
        Ok(format!("{}\n", output_report_json(&report, Some(elapsed_ms))))
    } else {
        Ok(render_report_table(
            &report,
            ReportTableOptions {
                use_color: ctx.use_color,
                number_format: ctx.number_format,
                elapsed_ms: Some(elapsed_ms),
            },
        ))
    }
}
