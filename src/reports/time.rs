use anyhow::Result;
use chrono::Month;
use std::io::Write;
use std::time::Instant;
use tracing::debug;

use super::format::{footer, group_thousands};
use crate::config::weekday_name;
use crate::stats::most_common;
use crate::trip::TripTable;

/// Most common month, weekday and start hour, each with its trip count.
pub fn time_stats<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let started = Instant::now();

    let (month, trips) = most_common(&table.trips, "month", |t| Some(t.month))?;
    writeln!(
        out,
        " - The most common month of travel is: {} with {} trips.\n",
        month_name(month),
        group_thousands(trips)
    )?;

    let (day, trips) = most_common(&table.trips, "day_of_week", |t| {
        Some(weekday_name(t.day_of_week))
    })?;
    writeln!(
        out,
        " - The most common day of travel is: {} with {} trips.\n",
        day,
        group_thousands(trips)
    )?;

    let (hour, trips) = most_common(&table.trips, "start_hour", |t| Some(t.start_hour))?;
    writeln!(
        out,
        " - The most common start hour of travel is: {} with {} trips.\n",
        hour,
        group_thousands(trips)
    )?;

    debug!(elapsed_ms = started.elapsed().as_millis() as u64, "Time stats done");
    writeln!(out, "{}", footer(started))?;
    Ok(())
}

fn month_name(number: u32) -> String {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| number.to_string())
}
