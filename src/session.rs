//! The interactive loop: select, load, report, page, and offer a restart.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

use crate::config::CityCatalog;
use crate::console::Console;
use crate::filters::get_filters;
use crate::loader::load_data;
use crate::pager::view_raw_data;
use crate::reports;

/// Runs selections until the user declines to restart.
///
/// Each iteration loads its table from scratch and drops it before the next one.
///
/// # Errors
///
/// A missing or malformed city file, an empty selection feeding a statistic,
/// or closed input ends the session with that error.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &CityCatalog,
) -> Result<()> {
    let mut rounds = 0usize;
    loop {
        rounds += 1;
        let selection = get_filters(console)?;
        let table = load_data(catalog, &selection)?;
        info!(round = rounds, %selection, rows = table.len(), "Dataset ready");

        reports::print_all(&table, console.out())?;
        view_raw_data(console, &table)?;

        if !console.confirm("\nWould you like to restart? Enter yes or no.")? {
            break;
        }
    }

    info!(rounds, "Session finished");
    Ok(())
}
