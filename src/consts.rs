/// Timestamp layout used by every city dataset: "2017-01-01 09:07:57"
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Year all bundled datasets were recorded in
pub(crate) const DEFAULT_DATASET_YEAR: i32 = 2017;

/// Fallback category when a trip's user type cell is blank
pub(crate) const UNKNOWN: &str = "unknown";

/// Display label for statistics the dataset does not measure
pub(crate) const NOT_AVAILABLE: &str = "not available";

/// Environment variable overriding the directory holding the city CSV files
pub(crate) const DATA_DIR_ENV: &str = "BIKESTATS_DATA_DIR";
