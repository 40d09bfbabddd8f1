use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) json: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    /// Directory holding the city CSV files
    #[serde(default)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Year the datasets were recorded in
    #[serde(default)]
    pub(crate) year: Option<i32>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    /// City key -> CSV file name
    #[serde(default)]
    pub(crate) files: BTreeMap<String, String>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content) {
                    Ok(config) => {
                        info!(path = %path.display(), "Loaded config");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "Failed to parse config");
                    }
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/bikestats/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("bikestats").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("bikestats").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.bikestats.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".bikestats.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        for p in &paths {
            println!("Path: {:?}, exists: {}", p, p.exists());
        }
        assert!(!paths.is_empty());
    }

    #[test]
    fn parse_empty_is_default() {
        let config = Config::parse("").unwrap();
        assert!(!config.json);
        assert!(config.data_dir.is_none());
        assert!(config.year.is_none());
        assert!(config.files.is_empty());
    }

    #[test]
    fn parse_full_config() {
        let config = Config::parse(
            r#"
json = true
color = "never"
data_dir = "/srv/bikeshare"
year = 2018
locale = "de"

[files]
chicago = "divvy_2018.csv"
"new york" = "citibike.csv"
"#,
        )
        .unwrap();
        assert!(config.json);
        assert_eq!(config.color, Some(ConfigColorMode::Never));
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/bikeshare")));
        assert_eq!(config.year, Some(2018));
        assert_eq!(config.locale.as_deref(), Some("de"));
        assert_eq!(config.files["chicago"], "divvy_2018.csv");
        assert_eq!(config.files["new york"], "citibike.csv");
    }

    #[test]
    fn parse_rejects_bad_color() {
        assert!(Config::parse(r#"color = "sometimes""#).is_err());
    }
}
