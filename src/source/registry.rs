//! City catalog
//!
//! Maps each city to the CSV file holding its trips. Built once at startup
//! from configuration and passed by reference to the loader.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::core::City;

fn default_file_name(city: City) -> &'static str {
    match city {
        City::Chicago => "chicago.csv",
        City::NewYork => "new_york_city.csv",
        City::Washington => "washington.csv",
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CityCatalog {
    year: i32,
    files: BTreeMap<City, PathBuf>,
}

impl CityCatalog {
    /// `overrides` maps city keys (or aliases) to file names, relative to
    /// `data_dir` unless absolute
    pub(crate) fn new(data_dir: &Path, year: i32, overrides: &BTreeMap<String, String>) -> Self {
        let mut files: BTreeMap<City, PathBuf> = City::ALL
            .into_iter()
            .map(|c| (c, data_dir.join(default_file_name(c))))
            .collect();

        for (key, file) in overrides {
            match City::parse(key) {
                Ok(city) => {
                    files.insert(city, data_dir.join(file));
                }
                Err(_) => warn!(key = %key, "Ignoring file override for unknown city"),
            }
        }

        Self { year, files }
    }

    /// Calendar year the datasets were recorded in
    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    pub(crate) fn path(&self, city: City) -> &Path {
        // Every city is inserted in `new`
        self.files
            .get(&city)
            .map(PathBuf::as_path)
            .unwrap_or_else(|| Path::new(default_file_name(city)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_live_in_data_dir() {
        let catalog = CityCatalog::new(Path::new("/data"), 2017, &BTreeMap::new());
        assert_eq!(catalog.path(City::Chicago), Path::new("/data/chicago.csv"));
        assert_eq!(
            catalog.path(City::NewYork),
            Path::new("/data/new_york_city.csv")
        );
        assert_eq!(
            catalog.path(City::Washington),
            Path::new("/data/washington.csv")
        );
        assert_eq!(catalog.year(), 2017);
    }

    #[test]
    fn overrides_replace_file_names() {
        let mut overrides = BTreeMap::new();
        overrides.insert("nyc".to_string(), "nyc_2017.csv".to_string());
        overrides.insert("atlantis".to_string(), "sunk.csv".to_string());
        let catalog = CityCatalog::new(Path::new("data"), 2017, &overrides);
        assert_eq!(catalog.path(City::NewYork), Path::new("data/nyc_2017.csv"));
        assert_eq!(catalog.path(City::Chicago), Path::new("data/chicago.csv"));
    }

    #[test]
    fn absolute_override_ignores_data_dir() {
        let mut overrides = BTreeMap::new();
        overrides.insert("chicago".to_string(), "/srv/chi.csv".to_string());
        let catalog = CityCatalog::new(Path::new("data"), 2017, &overrides);
        assert_eq!(catalog.path(City::Chicago), Path::new("/srv/chi.csv"));
    }
}
