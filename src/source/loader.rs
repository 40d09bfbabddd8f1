//! Trip record store
//!
//! Reads one city's CSV file into a [`TripDataset`]. Columns are located by
//! header name so their order and any extra columns do not matter. Every
//! call re-reads the file.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::StringRecord;
use tracing::{debug, info};

use crate::core::{Capabilities, City, TripDataset, TripRecord};
use crate::error::DataSourceError;
use crate::source::CityCatalog;
use crate::utils::parse_timestamp;

const START_TIME: &str = "Start Time";
const END_TIME: &str = "End Time";
const TRIP_DURATION: &str = "Trip Duration";
const START_STATION: &str = "Start Station";
const END_STATION: &str = "End Station";
const USER_TYPE: &str = "User Type";
const GENDER: &str = "Gender";
const BIRTH_YEAR: &str = "Birth Year";

/// Column positions resolved from the header row
struct ColumnMap {
    start_time: usize,
    end_time: usize,
    duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord, path: &Path) -> Result<Self, DataSourceError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| {
            find(name).ok_or_else(|| DataSourceError::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })
        };

        Ok(Self {
            start_time: require(START_TIME)?,
            end_time: require(END_TIME)?,
            duration: require(TRIP_DURATION)?,
            start_station: require(START_STATION)?,
            end_station: require(END_STATION)?,
            user_type: require(USER_TYPE)?,
            gender: find(GENDER),
            birth_year: find(BIRTH_YEAR),
        })
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            has_gender: self.gender.is_some(),
            has_birth_year: self.birth_year.is_some(),
        }
    }
}

/// Per-row parsing context for error reporting
struct RowParser<'a> {
    path: &'a Path,
    row: usize,
    record: &'a StringRecord,
}

impl RowParser<'_> {
    fn text(&self, idx: usize) -> &str {
        self.record.get(idx).unwrap_or("").trim()
    }

    fn optional_text(&self, idx: Option<usize>) -> Option<String> {
        let value = self.text(idx?);
        (!value.is_empty()).then(|| value.to_string())
    }

    fn timestamp(
        &self,
        idx: usize,
        column: &'static str,
    ) -> Result<chrono::NaiveDateTime, DataSourceError> {
        let raw = self.text(idx);
        parse_timestamp(raw).ok_or_else(|| DataSourceError::InvalidTimestamp {
            path: self.path.to_path_buf(),
            row: self.row,
            column,
            raw: raw.to_string(),
        })
    }

    fn number(&self, raw: &str, column: &'static str) -> Result<f64, DataSourceError> {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| DataSourceError::InvalidNumber {
                path: self.path.to_path_buf(),
                row: self.row,
                column,
                raw: raw.to_string(),
            })
    }

    /// Birth years are often stored as floats ("1989.0"); blank means unknown
    fn birth_year(&self, idx: Option<usize>) -> Result<Option<i32>, DataSourceError> {
        let Some(idx) = idx else {
            return Ok(None);
        };
        let raw = self.text(idx);
        if raw.is_empty() {
            return Ok(None);
        }
        let year = self.number(raw, BIRTH_YEAR)?;
        Ok(Some(year.round() as i32))
    }
}

fn parse_row(
    cols: &ColumnMap,
    record: &StringRecord,
    row: usize,
    path: &Path,
) -> Result<TripRecord, DataSourceError> {
    let p = RowParser { path, row, record };
    Ok(TripRecord {
        start_time: p.timestamp(cols.start_time, START_TIME)?,
        end_time: p.timestamp(cols.end_time, END_TIME)?,
        duration_seconds: p.number(p.text(cols.duration), TRIP_DURATION)?,
        start_station: p.text(cols.start_station).to_string(),
        end_station: p.text(cols.end_station).to_string(),
        user_type: p.text(cols.user_type).to_string(),
        gender: p.optional_text(cols.gender),
        birth_year: p.birth_year(cols.birth_year)?,
    })
}

/// Parse trips from any CSV reader. `path` is only used in error messages.
pub(crate) fn load_from_reader<R: Read>(
    reader: R,
    city: City,
    path: &Path,
) -> Result<TripDataset, DataSourceError> {
    let csv_err = |source: csv::Error| DataSourceError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    let headers = rdr.headers().map_err(csv_err)?.clone();
    let cols = ColumnMap::resolve(&headers, path)?;
    let capabilities = cols.capabilities();

    let mut records = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        // 1-based, counting the header as row 1
        let row = idx + 2;
        let record = result.map_err(csv_err)?;
        records.push(parse_row(&cols, &record, row, path)?);
    }

    Ok(TripDataset {
        city,
        capabilities,
        records,
    })
}

/// Load every trip of `city` from the file the catalog points at
pub(crate) fn load(catalog: &CityCatalog, city: City) -> Result<TripDataset, DataSourceError> {
    let path = catalog.path(city);
    let start = Instant::now();
    debug!(city = city.key(), path = %path.display(), "Loading trips");

    let file = File::open(path).map_err(|source| DataSourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_from_reader(file, city, path)?;

    info!(
        city = city.key(),
        rows = dataset.records.len(),
        has_gender = dataset.capabilities.has_gender,
        has_birth_year = dataset.capabilities.has_birth_year,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Loaded trips"
    );
    Ok(dataset)
}
