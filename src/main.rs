mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod source;
mod utils;

use std::io;

use clap::Parser;

use app::{CommandContext, execute};
use cli::{Cli, Prefill, run_interactive};
use config::Config;
use crate::core::FilterCriteria;
use error::AppError;
use output::NumberFormat;
use source::CityCatalog;
use utils::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = Config::load();
    let cli = cli.with_config(&config);

    let number_format = match NumberFormat::from_locale(cli.locale.as_deref()) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let catalog = CityCatalog::new(&cli.data_dir(), cli.dataset_year(), &config.files);
    let ctx = CommandContext {
        catalog: &catalog,
        json: cli.json,
        use_color: cli.use_color(),
        number_format,
    };

    if cli.interactive || !cli.has_all_filters() {
        let prefill = Prefill {
            city: cli.city.clone(),
            month: cli.month.clone(),
            day: cli.day.clone(),
        };
        let mut input = io::stdin().lock();
        let mut out = io::stdout().lock();
        if let Err(e) = run_interactive(&mut input, &mut out, &ctx, prefill) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    let (Some(city), Some(month), Some(day)) = (&cli.city, &cli.month, &cli.day) else {
        return;
    };
    let result = FilterCriteria::parse(city, month, day).and_then(|criteria| execute(&criteria, &ctx));
    match result {
        Ok(rendered) => print!("{rendered}"),
        Err(AppError::NoMatchingTrips { criteria }) => {
            println!("No trips match the given filters ({criteria}).");
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
