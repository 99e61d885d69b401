use anyhow::Result;
use std::io::Write;
use std::time::Instant;

use super::format::{footer, group_thousands};
use crate::stats::most_common;
use crate::trip::{END_STATION, START_STATION, TripTable};

/// Most popular start station, end station, and start/end combination.
pub fn station_stats<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let started = Instant::now();

    let (start, trips) = most_common(&table.trips, START_STATION, |t| t.start_station.as_deref())?;
    writeln!(
        out,
        " - The most common start station is: {start} with {} trips.\n",
        group_thousands(trips)
    )?;

    let (end, trips) = most_common(&table.trips, END_STATION, |t| t.end_station.as_deref())?;
    writeln!(
        out,
        " - The most common end station is: {end} with {} trips.\n",
        group_thousands(trips)
    )?;

    let (pair, trips) = most_common(&table.trips, "Station Pair", |t| t.station_pair.as_deref())?;
    writeln!(
        out,
        " - The most common station combination is: {pair} with {} trips.\n",
        group_thousands(trips)
    )?;

    writeln!(out, "{}", footer(started))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures::{chicago_like, washington_like};

    #[test]
    fn test_station_stats_values() {
        let mut out = Vec::new();
        station_stats(&chicago_like(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("The most common start station is: Canal St with 2 trips."));
        // Canal St and Clark St both end two trips; the alphabetically first wins
        assert!(text.contains("The most common end station is: Canal St with 2 trips."));
        assert!(text.contains(
            "The most common station combination is: Canal St to Clark St with 2 trips."
        ));
    }

    #[test]
    fn test_station_stats_all_distinct() {
        let mut out = Vec::new();
        station_stats(&washington_like(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains(
            "The most common start station is: 14th & Belmont St NW with 1 trips."
        ));
    }
}
