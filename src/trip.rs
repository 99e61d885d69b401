//! Trip records, their derived calendar fields, and the column schema of a
//! loaded table.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use csv::StringRecord;
use serde::Deserialize;

use crate::error::ExplorerError;

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Columns every city file carries, in display order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    START_TIME,
    END_TIME,
    TRIP_DURATION,
    START_STATION,
    END_STATION,
    USER_TYPE,
];

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// One row as it appears in a city file. Unknown columns are ignored and the
/// optional demographic columns may be absent entirely.
#[derive(Debug, Deserialize)]
pub(crate) struct RawTrip {
    #[serde(rename = "Start Time")]
    pub(crate) start_time: String,
    #[serde(rename = "End Time")]
    pub(crate) end_time: String,
    #[serde(rename = "Trip Duration")]
    pub(crate) trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub(crate) start_station: Option<String>,
    #[serde(rename = "End Station")]
    pub(crate) end_station: Option<String>,
    #[serde(rename = "User Type")]
    pub(crate) user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub(crate) gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub(crate) birth_year: Option<f64>,
}

/// A parsed trip with its derived fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Seconds.
    pub trip_duration: f64,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    /// 1-12
    pub month: u32,
    pub day_of_week: Weekday,
    /// 0-23
    pub start_hour: u32,
    /// "{start} to {end}"; null when either station is.
    pub station_pair: Option<String>,
}

impl Trip {
    /// Builds a trip from a raw row, deriving the calendar fields from the start time.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::BadTimestamp`] if either timestamp is unparseable.
    /// `row` is only used for the error message.
    pub(crate) fn from_raw(raw: RawTrip, row: usize) -> Result<Self, ExplorerError> {
        let start_time = parse_timestamp(&raw.start_time).ok_or(ExplorerError::BadTimestamp {
            row,
            value: raw.start_time.clone(),
        })?;
        let end_time = parse_timestamp(&raw.end_time).ok_or(ExplorerError::BadTimestamp {
            row,
            value: raw.end_time.clone(),
        })?;

        let start_station = non_blank(raw.start_station);
        let end_station = non_blank(raw.end_station);
        let station_pair = match (&start_station, &end_station) {
            (Some(start), Some(end)) => Some(station_pair(start, end)),
            _ => None,
        };

        Ok(Trip {
            start_time,
            end_time,
            trip_duration: raw.trip_duration,
            start_station,
            end_station,
            user_type: non_blank(raw.user_type),
            gender: non_blank(raw.gender),
            birth_year: raw
                .birth_year
                .filter(|y| y.is_finite())
                .map(|y| y.round() as i32),
            month: start_time.month(),
            day_of_week: start_time.weekday(),
            start_hour: start_time.hour(),
            station_pair,
        })
    }
}

pub fn station_pair(start: &str, end: &str) -> String {
    format!("{start} to {end}")
}

/// Parses the timestamp layouts found in city files.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Column names present in a loaded file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns {
    names: Vec<String>,
}

impl Columns {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_headers(headers: &StringRecord) -> Self {
        Self::new(headers.iter().map(str::trim))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn has_gender(&self) -> bool {
        self.contains(GENDER)
    }

    pub fn has_birth_year(&self) -> bool {
        self.contains(BIRTH_YEAR)
    }

    /// Required columns that are missing, in display order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_COLUMNS
            .into_iter()
            .filter(|c| !self.contains(c))
            .collect()
    }

    /// Columns shown by the raw-data pager: the required ones, then Gender and
    /// Birth Year when the file has them.
    pub fn display_columns(&self) -> Vec<&'static str> {
        let mut cols = REQUIRED_COLUMNS.to_vec();
        if self.has_gender() {
            cols.push(GENDER);
        }
        if self.has_birth_year() {
            cols.push(BIRTH_YEAR);
        }
        cols
    }
}

/// A city's trips together with the columns its file declared.
///
/// Reports and the pager only read from it.
#[derive(Debug, Clone, Default)]
pub struct TripTable {
    pub columns: Columns,
    pub trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(columns: Columns, trips: Vec<Trip>) -> Self {
        Self { columns, trips }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
