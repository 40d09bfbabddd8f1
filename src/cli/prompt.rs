//! Interactive prompting and the restart loop
//!
//! Reads filters line by line, re-asking until each one is valid, runs the
//! pipeline once per round and asks whether to go again.

use std::io::{self, BufRead, Write};

use crate::app::{CommandContext, execute};
use crate::core::{City, FilterCriteria, MonthFilter, WeekdayFilter};
use crate::error::AppError;

/// Filter values supplied on the command line, used for the first round
#[derive(Debug, Clone, Default)]
pub(crate) struct Prefill {
    pub(crate) city: Option<String>,
    pub(crate) month: Option<String>,
    pub(crate) day: Option<String>,
}

struct Prompter<'a, R, W> {
    input: &'a mut R,
    out: &'a mut W,
}

impl<R: BufRead, W: Write> Prompter<'_, R, W> {
    /// `None` once input is exhausted
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        invalid: &str,
        prefill: Option<&str>,
        parse: impl Fn(&str) -> Result<T, AppError>,
    ) -> io::Result<Option<T>> {
        if let Some(value) = prefill {
            match parse(value) {
                Ok(v) => return Ok(Some(v)),
                Err(_) => writeln!(self.out, "{invalid}")?,
            }
        }
        loop {
            write!(self.out, "{prompt}")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(v) => return Ok(Some(v)),
                Err(_) => writeln!(self.out, "{invalid}")?,
            }
        }
    }

    fn get_filters(&mut self, prefill: &Prefill) -> io::Result<Option<FilterCriteria>> {
        writeln!(self.out, "Hello! Let's explore some US bikeshare data!")?;

        let Some(city) = self.ask(
            "Please enter a city (Chicago, New York, Washington): ",
            "Invalid city input.",
            prefill.city.as_deref(),
            City::parse,
        )?
        else {
            return Ok(None);
        };
        let Some(month) = self.ask(
            "Please enter a month (all, January, February, ... , June): ",
            "Invalid month input.",
            prefill.month.as_deref(),
            MonthFilter::parse,
        )?
        else {
            return Ok(None);
        };
        let Some(weekday) = self.ask(
            "Please enter a day of the week (all, Monday, Tuesday, ... Sunday): ",
            "Invalid day input.",
            prefill.day.as_deref(),
            WeekdayFilter::parse,
        )?
        else {
            return Ok(None);
        };

        writeln!(self.out, "{}", "-".repeat(40))?;
        Ok(Some(FilterCriteria {
            city,
            month,
            weekday,
        }))
    }

    fn wants_restart(&mut self) -> io::Result<bool> {
        writeln!(self.out, "\nWould you like to restart? Enter yes or no.")?;
        self.out.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("yes")))
    }
}

/// Prompt, report, and repeat until the user declines or input ends.
/// Pipeline errors are reported and the user may try again.
pub(crate) fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    ctx: &CommandContext<'_>,
    prefill: Prefill,
) -> io::Result<()> {
    let mut prompter = Prompter { input, out };
    let mut prefill = prefill;

    loop {
        let Some(criteria) = prompter.get_filters(&prefill)? else {
            return Ok(());
        };
        // Command-line values only seed the first round
        prefill = Prefill::default();

        match execute(&criteria, ctx) {
            Ok(rendered) => write!(prompter.out, "{rendered}")?,
            Err(AppError::NoMatchingTrips { criteria }) => {
                writeln!(prompter.out, "No trips match the given filters ({criteria}).")?;
            }
            Err(e) => writeln!(prompter.out, "Error: {e}")?,
        }

        if !prompter.wants_restart()? {
            return Ok(());
        }
    }
}
