//! Fixed lookup tables and the city → backing file catalog.
//!
//! The three tables (cities, selectable months, weekdays) are compile-time
//! constants. The catalog is built once at startup from them, optionally
//! overridden by a JSON file, and is read-only afterwards:
//! ```json
//! {
//!   "chicago": "chicago_2017.csv.gz",
//!   "washington": "dc/washington.csv"
//! }
//! ```

use anyhow::{Context, Result};
use chrono::{Month, Weekday};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ExplorerError;

/// Months a user may filter on. Records outside this range only show up under "all".
pub const MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

pub const DAYS_OF_WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Sentinel accepted by the month and day prompts to disable that filter.
pub const ALL: &str = "all";

/// A supported city dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-cased canonical name, as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    pub fn default_file(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(input: &str) -> Option<City> {
        let lowered = input.to_lowercase();
        City::ALL.into_iter().find(|c| c.name() == lowered)
    }
}

impl FromStr for City {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::parse(s).ok_or_else(|| ExplorerError::UnknownCity(s.to_string()))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive lookup of a selectable month (January through June).
pub fn parse_month(input: &str) -> Option<Month> {
    MONTHS
        .into_iter()
        .find(|m| m.name().eq_ignore_ascii_case(input))
}

/// Case-insensitive lookup of a full weekday name.
pub fn parse_weekday(input: &str) -> Option<Weekday> {
    DAYS_OF_WEEK
        .into_iter()
        .find(|d| weekday_name(*d).eq_ignore_ascii_case(input))
}

/// Title-cased full weekday name ("Monday").
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Resolves each city to the file holding its trips.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    data_dir: PathBuf,
    files: BTreeMap<City, String>,
}

impl CityCatalog {
    /// Catalog with the default file names, resolved against `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let files = City::ALL
            .into_iter()
            .map(|c| (c, c.default_file().to_string()))
            .collect();
        Self {
            data_dir: data_dir.into(),
            files,
        }
    }

    /// Replaces file names with the entries of a JSON object keyed by city name.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not a JSON string map, or names a
    /// city outside the supported set.
    pub fn with_overrides(mut self, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading city config {}", path.display()))?;
        let entries: HashMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("parsing city config {}", path.display()))?;

        for (name, file) in entries {
            let city: City = name.parse()?;
            self.files.insert(city, file);
        }
        Ok(self)
    }

    pub fn path_for(&self, city: City) -> PathBuf {
        let file = self
            .files
            .get(&city)
            .map(String::as_str)
            .unwrap_or(city.default_file());
        self.data_dir.join(file)
    }
}
