use anyhow::Result;
use std::io::Write;
use std::time::Instant;

use super::format::{footer, format_duration};
use crate::stats::{mean, sum};
use crate::trip::{TRIP_DURATION, TripTable};

/// Total and average trip duration.
pub fn trip_duration_stats<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let started = Instant::now();

    let total = sum(&table.trips, |t| Some(t.trip_duration));
    writeln!(
        out,
        " - The total travel time is: {}\n",
        format_duration(total)
    )?;

    let average = mean(&table.trips, TRIP_DURATION, |t| Some(t.trip_duration))?;
    writeln!(
        out,
        " - The average trip duration is: {}.\n",
        format_duration(average)
    )?;

    writeln!(out, "{}", footer(started))?;
    Ok(())
}
