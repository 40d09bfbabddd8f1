use comfy_table::{Cell, Color};
use std::fmt::Write;

use crate::consts::NOT_AVAILABLE;
use crate::core::{MetricValue, StatisticsReport};
use crate::output::format::{
    NumberFormat, create_styled_table, format_number, header_cell, right_cell, styled_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ReportTableOptions {
    pub(crate) use_color: bool,
    pub(crate) number_format: NumberFormat,
    /// Pipeline time shown in the summary line
    pub(crate) elapsed_ms: Option<f64>,
}

fn value_cell(value: &MetricValue, opts: &ReportTableOptions) -> Cell {
    let dim = if opts.use_color {
        Some(Color::DarkGrey)
    } else {
        None
    };
    match value {
        MetricValue::Text(text) => Cell::new(text),
        MetricValue::Integer(n) => right_cell(&format_number(*n, opts.number_format), None, false),
        MetricValue::NotAvailable => styled_cell(NOT_AVAILABLE, dim, false),
        MetricValue::NoData => styled_cell("no data", dim, false),
    }
}

fn summary_line(report: &StatisticsReport, opts: &ReportTableOptions) -> String {
    let trips = format!(
        "{} trips analyzed",
        format_number(
            i64::try_from(report.trip_count).unwrap_or(i64::MAX),
            opts.number_format
        )
    );
    match opts.elapsed_ms {
        Some(ms) if opts.use_color => format!("  {trips} | \x1b[36m{ms:.0}ms\x1b[0m"),
        Some(ms) => format!("  {trips} | {ms:.0}ms"),
        None => format!("  {trips}"),
    }
}

/// Render the report as one titled two-column table per section
pub(crate) fn render_report_table(report: &StatisticsReport, opts: ReportTableOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n  Bikeshare data for {}, Month: {}, Day: {}",
        report.city.display_name(),
        report.month,
        report.day
    );

    for section in &report.sections {
        let mut table = create_styled_table();
        table.set_header(vec![
            header_cell("Metric", opts.use_color),
            header_cell("Value", opts.use_color),
        ]);
        for metric in &section.metrics {
            table.add_row(vec![Cell::new(&metric.label), value_cell(&metric.value, &opts)]);
        }
        let _ = writeln!(out, "\n  {}\n", section.title);
        let _ = writeln!(out, "{table}");
    }

    let _ = writeln!(out, "\n{}\n", summary_line(report, &opts));
    out
}
