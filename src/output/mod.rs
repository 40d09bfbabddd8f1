mod format;
mod json;
mod table;

pub(crate) use format::NumberFormat;
pub(crate) use json::output_report_json;
pub(crate) use table::{ReportTableOptions, render_report_table};
