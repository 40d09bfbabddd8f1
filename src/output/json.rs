use serde_json::Value;

use crate::core::StatisticsReport;

/// Serialize the report. `elapsed_ms` is attached outside the report itself.
pub(crate) fn output_report_json(report: &StatisticsReport, elapsed_ms: Option<f64>) -> String {
    let mut value = serde_json::to_value(report).unwrap_or(Value::Null);
    if let (Some(ms), Value::Object(map)) = (elapsed_ms, &mut value) {
        map.insert("elapsed_ms".to_string(), serde_json::json!(ms));
    }
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "null".to_string())
}
