//! Loads a city's trip file and narrows it to the selected month and day.
//!
//! Files ending in `.gz` are decompressed on the fly.

use anyhow::{Context, Result, bail};
use chrono::{Month, Weekday};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

use crate::config::CityCatalog;
use crate::filters::Selection;
use crate::trip::{Columns, RawTrip, Trip, TripTable};

/// Loads the selected city's file and applies the month/day filters.
///
/// # Errors
///
/// A missing or malformed file is fatal and reported with the file path.
#[tracing::instrument(skip_all, fields(selection = %selection))]
pub fn load_data(catalog: &CityCatalog, selection: &Selection) -> Result<TripTable> {
    let path = catalog.path_for(selection.city);
    let table = load_city_file(&path)?;
    let loaded = table.len();

    let filtered = apply_filters(table, selection.month, selection.day);
    debug!(loaded, retained = filtered.len(), "Applied filters");

    Ok(filtered)
}

/// Reads every trip in `path`, without filtering.
pub fn load_city_file(path: &Path) -> Result<TripTable> {
    let file =
        File::open(path).with_context(|| format!("opening trip data {}", path.display()))?;

    let gzipped = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"));

    let reader: Box<dyn Read> = if gzipped {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let table = read_trips(reader).with_context(|| format!("loading {}", path.display()))?;
    debug!(path = %path.display(), rows = table.len(), gzipped, "Loaded trip data");
    Ok(table)
}

/// Parses delimited trip rows from any reader. The first line must be a header.
pub fn read_trips<R: Read>(reader: R) -> Result<TripTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?);
    let missing = columns.missing_required();
    if !missing.is_empty() {
        bail!("missing required column(s): {}", missing.join(", "));
    }

    let mut trips = Vec::new();
    for (idx, result) in rdr.deserialize::<RawTrip>().enumerate() {
        let row = idx + 1;
        let raw = result.with_context(|| format!("row {row}"))?;
        trips.push(Trip::from_raw(raw, row)?);
    }

    Ok(TripTable::new(columns, trips))
}

/// Keeps trips starting in `month` (if given) and on `day` (if given).
///
/// The two filters commute.
pub fn apply_filters(
    mut table: TripTable,
    month: Option<Month>,
    day: Option<Weekday>,
) -> TripTable {
    if let Some(month) = month {
        let number = month.number_from_month();
        table.trips.retain(|t| t.month == number);
    }

    if let Some(day) = day {
        table.trips.retain(|t| t.day_of_week == day);
    }

    table
}
