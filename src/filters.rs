//! Interactive selection of city, month and weekday.

use anyhow::Result;
use chrono::{Month, Weekday};
use std::fmt;
use std::io::{BufRead, Write};
use tracing::{info, warn};

use crate::config::{self, ALL, City};
use crate::console::Console;

pub const RULE_WIDTH: usize = 40;

const CITY_PROMPT: &str =
    "\nWhich city would you like to analyze? (Chicago, New York City, or Washington):";
const MONTH_PROMPT: &str = "\nWhich month would you like to analyze? (January, February, March, April, May, June, or All):";
const DAY_PROMPT: &str = "\nWhich day of the week would you like to analyze? (Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday, or All):";

/// A validated (city, month-or-all, day-or-all) triple. `None` means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl Selection {
    pub fn new(city: City, month: Option<Month>, day: Option<Weekday>) -> Self {
        Self { city, month, day }
    }

    /// Selection with neither a month nor a day filter.
    pub fn whole(city: City) -> Self {
        Self::new(city, None, None)
    }

    pub fn month_label(&self) -> String {
        self.month
            .map(|m| m.name().to_lowercase())
            .unwrap_or_else(|| ALL.to_string())
    }

    pub fn day_label(&self) -> String {
        self.day
            .map(|d| config::weekday_name(d).to_lowercase())
            .unwrap_or_else(|| ALL.to_string())
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (month: {}, day: {})",
            self.city,
            self.month_label(),
            self.day_label()
        )
    }
}

/// Parses a month answer: a selectable month name or "all", in any casing.
pub fn parse_month_choice(input: &str) -> Option<Option<Month>> {
    if input.eq_ignore_ascii_case(ALL) {
        return Some(None);
    }
    config::parse_month(input).map(Some)
}

/// Parses a day answer: a full weekday name or "all", in any casing.
pub fn parse_day_choice(input: &str) -> Option<Option<Weekday>> {
    if input.eq_ignore_ascii_case(ALL) {
        return Some(None);
    }
    config::parse_weekday(input).map(Some)
}

/// Prompts for city, month and day, re-asking each until the answer is valid.
///
/// # Errors
///
/// Only fails if the console cannot be read or written.
pub fn get_filters<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Selection> {
    writeln!(console.out(), "Hello! Let's explore some US bikeshare data!")?;

    let city = prompt_until(console, CITY_PROMPT, City::parse)?;
    let month = prompt_until(console, MONTH_PROMPT, parse_month_choice)?;
    let day = prompt_until(console, DAY_PROMPT, parse_day_choice)?;

    writeln!(console.out(), "{}", "-".repeat(RULE_WIDTH))?;

    let selection = Selection::new(city, month, day);
    info!(%selection, "Filters selected");
    Ok(selection)
}

fn prompt_until<R, W, T>(
    console: &mut Console<R, W>,
    prompt: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
{
    loop {
        let answer = console.ask(prompt)?;
        match parse(&answer) {
            Some(value) => return Ok(value),
            None => {
                warn!(answer = %answer, "Rejected selection input");
                writeln!(
                    console.out(),
                    "{answer} is not a valid value. Please try again."
                )?;
            }
        }
    }
}
