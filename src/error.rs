use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid city \"{input}\" (expected chicago, new york or washington)")]
    InvalidCity { input: String },

    #[error("Invalid month \"{input}\" (expected all, january, february, ... , june)")]
    InvalidMonth { input: String },

    #[error("Invalid day \"{input}\" (expected all, monday, tuesday, ... , sunday)")]
    InvalidWeekday { input: String },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("No trips match the given filters ({criteria})")]
    NoMatchingTrips { criteria: String },

    #[error("{0}")]
    DataSource(#[from] DataSourceError),
}

/// Failures reading a city's trip file. Any of these aborts the whole load.
#[derive(Debug, Error)]
pub(crate) enum DataSourceError {
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read CSV {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error("{} is missing required column \"{column}\"", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{} row {row}: invalid timestamp in \"{column}\": \"{raw}\"", path.display())]
    InvalidTimestamp {
        path: PathBuf,
        row: usize,
        column: &'static str,
        raw: String,
    },

    #[error("{} row {row}: invalid number in \"{column}\": \"{raw}\"", path.display())]
    InvalidNumber {
        path: PathBuf,
        row: usize,
        column: &'static str,
        raw: String,
    },
}
