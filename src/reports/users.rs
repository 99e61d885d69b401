use anyhow::Result;
use std::io::Write;
use std::time::Instant;

use super::format::{footer, format_counts};
use crate::stats::{max, min, most_common, value_counts};
use crate::trip::{BIRTH_YEAR, TripTable};

/// User type breakdown, plus gender and birth-year figures when the loaded
/// file has those columns.
pub fn user_stats<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    let started = Instant::now();

    writeln!(out, " - User Type Counts:\n")?;
    let user_types = value_counts(&table.trips, |t| t.user_type.as_deref());
    write!(out, "{}", format_counts(&user_types))?;

    if table.columns.has_gender() {
        writeln!(out, "\n - Gender Counts:\n")?;
        let genders = value_counts(&table.trips, |t| t.gender.as_deref());
        write!(out, "{}", format_counts(&genders))?;
    }

    if table.columns.has_birth_year() {
        let earliest = min(&table.trips, BIRTH_YEAR, |t| t.birth_year)?;
        let latest = max(&table.trips, BIRTH_YEAR, |t| t.birth_year)?;
        let (common, _) = most_common(&table.trips, BIRTH_YEAR, |t| t.birth_year)?;

        writeln!(out, "\n - Earliest birth year: {earliest}\n")?;
        writeln!(out, " - Most recent birth year: {latest}\n")?;
        writeln!(out, " - Most common birth year: {common}\n")?;
    }

    writeln!(out, "{}", footer(started))?;
    Ok(())
}
