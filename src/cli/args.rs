//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::{DATA_DIR_ENV, DEFAULT_DATASET_YEAR};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "bikestats")]
#[command(
    about = "Explore US bikeshare trip data: popular times, stations, durations and riders",
    version
)]
pub(crate) struct Cli {
    /// City to analyze (chicago, new york, washington)
    #[arg(long)]
    pub(crate) city: Option<String>,

    /// Month to filter by (all, january, ... , june)
    #[arg(short, long)]
    pub(crate) month: Option<String>,

    /// Day of week to filter by (all, monday, ... , sunday)
    #[arg(short, long)]
    pub(crate) day: Option<String>,

    /// Prompt for filters and offer to restart after each report
    #[arg(short, long)]
    pub(crate) interactive: bool,

    /// Directory containing the city CSV files
    #[arg(long, value_name = "DIR")]
    pub(crate) data_dir: Option<PathBuf>,

    /// Year the datasets were recorded in (month filters apply to this year)
    #[arg(long)]
    pub(crate) year: Option<i32>,

    /// Output as JSON
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Locale for number formatting (e.g., "en", "de", "fr")
    #[arg(long, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.json && config.json {
            self.json = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // Value options: only apply if CLI didn't set them
        if self.data_dir.is_none() {
            self.data_dir = std::env::var_os(DATA_DIR_ENV)
                .map(PathBuf::from)
                .or_else(|| config.data_dir.clone());
        }
        if self.year.is_none() {
            self.year = config.year;
        }
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }

        self
    }

    pub(crate) fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub(crate) fn dataset_year(&self) -> i32 {
        self.year.unwrap_or(DEFAULT_DATASET_YEAR)
    }

    /// All three filters were given, so no prompting is needed
    pub(crate) fn has_all_filters(&self) -> bool {
        self.city.is_some() && self.month.is_some() && self.day.is_some()
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color || self.json {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
