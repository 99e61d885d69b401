//! Paged display of the filtered trips.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::console::Console;
use crate::trip::{
    BIRTH_YEAR, END_STATION, END_TIME, GENDER, START_STATION, START_TIME, TRIP_DURATION, Trip,
    TripTable, USER_TYPE,
};

pub const MAX_PAGE_SIZE: usize = 10;

const TIMESTAMP_DISPLAY: &str = "%Y-%m-%d %H:%M:%S";
const NULL_CELL: &str = "-";

/// Offers the raw rows and pages through them until the user declines.
///
/// Returns the page size used, or `None` when the user did not want raw data.
pub fn view_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<Option<usize>> {
    let wants_raw = console
        .confirm("\nWould you like to view the first rows of the raw data? Enter yes or no.")?;
    if !wants_raw {
        return Ok(None);
    }

    let page_size = loop {
        let answer =
            console.ask("\nHow many records would you like to see? Enter 1 through 10.")?;
        match parse_page_size(&answer) {
            Some(size) => break size,
            None => {
                warn!(answer = %answer, "Rejected page size");
                writeln!(
                    console.out(),
                    "\n{answer} is not a valid integer between 1 and {MAX_PAGE_SIZE}. Please try again.\n"
                )?;
            }
        }
    };

    let mut page = 0;
    loop {
        write!(console.out(), "{}", render_page(table, page, page_size))?;
        debug!(page, page_size, "Displayed raw page");

        let prompt = format!("\nWould you like to see {page_size} more rows? Enter yes or no.");
        if !console.confirm(&prompt)? {
            break;
        }
        page += 1;
    }

    Ok(Some(page_size))
}

/// An integer in `1..=MAX_PAGE_SIZE`; surrounding whitespace is allowed.
pub fn parse_page_size(input: &str) -> Option<usize> {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|n| (1..=MAX_PAGE_SIZE as i64).contains(n))
        .map(|n| n as usize)
}

/// Rows `page * page_size .. page * page_size + page_size`, clipped to the table.
/// Pages past the end are empty.
pub fn page_rows(trips: &[Trip], page: usize, page_size: usize) -> &[Trip] {
    let start = page.saturating_mul(page_size).min(trips.len());
    let end = start.saturating_add(page_size).min(trips.len());
    &trips[start..end]
}

/// Renders one page as a right-aligned text table with a leading row-position column.
pub fn render_page(table: &TripTable, page: usize, page_size: usize) -> String {
    let columns = table.columns.display_columns();
    let offset = page.saturating_mul(page_size);

    let mut grid: Vec<Vec<String>> = Vec::new();
    let mut header = vec![String::new()];
    header.extend(columns.iter().map(|c| c.to_string()));
    grid.push(header);

    for (i, trip) in page_rows(&table.trips, page, page_size).iter().enumerate() {
        let mut row = vec![(offset + i).to_string()];
        row.extend(columns.iter().map(|c| cell(trip, c)));
        grid.push(row);
    }

    let mut widths = vec![0; columns.len() + 1];
    for row in &grid {
        for (w, value) in widths.iter_mut().zip(row) {
            *w = (*w).max(value.chars().count());
        }
    }

    let mut out = String::new();
    for row in &grid {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(value, &w)| format!("{value:>w$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

fn cell(trip: &Trip, column: &str) -> String {
    let text = |v: &Option<String>| v.clone().unwrap_or_else(|| NULL_CELL.to_string());
    match column {
        START_TIME => trip.start_time.format(TIMESTAMP_DISPLAY).to_string(),
        END_TIME => trip.end_time.format(TIMESTAMP_DISPLAY).to_string(),
        TRIP_DURATION => {
            if trip.trip_duration.fract() == 0.0 {
                format!("{:.0}", trip.trip_duration)
            } else {
                trip.trip_duration.to_string()
            }
        }
        START_STATION => text(&trip.start_station),
        END_STATION => text(&trip.end_station),
        USER_TYPE => text(&trip.user_type),
        GENDER => text(&trip.gender),
        BIRTH_YEAR => trip
            .birth_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| NULL_CELL.to_string()),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::read_trips;
    use crate::reports::fixtures::{chicago_like, washington_like};
    use std::io::Cursor;

    fn run(script: &str, table: &TripTable) -> (Option<usize>, String) {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let size = view_raw_data(&mut console, table).unwrap();
        (size, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_parse_page_size_bounds() {
        assert_eq!(parse_page_size("1"), Some(1));
        assert_eq!(parse_page_size(" 10 "), Some(10));
        assert_eq!(parse_page_size("0"), None);
        assert_eq!(parse_page_size("11"), None);
        assert_eq!(parse_page_size("-3"), None);
        assert_eq!(parse_page_size("five"), None);
        assert_eq!(parse_page_size("2.5"), None);
    }

    #[test]
    fn test_page_rows_past_end_is_empty() {
        let t = chicago_like();
        assert_eq!(page_rows(&t.trips, 0, 3).len(), 3);
        assert_eq!(page_rows(&t.trips, 1, 3).len(), 1);
        assert!(page_rows(&t.trips, 2, 3).is_empty());
        assert!(page_rows(&t.trips, usize::MAX, 10).is_empty());
    }

    #[test]
    fn test_page_rows_window_position() {
        let t = chicago_like();
        assert_eq!(page_rows(&t.trips, 1, 2)[0], t.trips[2]);
        assert_eq!(page_rows(&t.trips, 1, 2)[1], t.trips[3]);
    }

    #[test]
    fn test_render_page_columns_follow_schema() {
        let chicago = render_page(&chicago_like(), 0, 1);
        let header = chicago.lines().next().unwrap();
        assert!(header.contains("User Type"));
        assert!(header.ends_with("Gender  Birth Year"));
        assert!(chicago.contains("2017-01-02 08:05:00"));

        let washington = render_page(&washington_like(), 0, 5);
        assert!(!washington.contains("Gender"));
        assert!(washington.lines().next().unwrap().ends_with("User Type"));
        assert_eq!(washington.lines().count(), 4);
        assert!(washington.contains("489.066"));
    }

    #[test]
    fn test_render_page_blank_station_shows_dash() {
        let csv = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,2017-01-02 08:10:00,600,,Clark St,Subscriber
";
        let out = render_page(&read_trips(csv.as_bytes()).unwrap(), 0, 1);
        let row = out.lines().nth(1).unwrap();
        let cells: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(&cells[5..], &["600", "-", "Clark", "St", "Subscriber"]);
    }

    #[test]
    fn test_render_page_empty_page() {
        let out = render_page(&washington_like(), 5, 2);
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_view_raw_data_declined() {
        let (size, out) = run("no\n", &chicago_like());
        assert_eq!(size, None);
        assert!(!out.contains("How many records"));
    }

    #[test]
    fn test_view_raw_data_reprompts_then_pages() {
        let (size, out) = run("Yes\nabc\n0\n2\nyes\nYES\nnope\n", &chicago_like());
        assert_eq!(size, Some(2));
        assert!(out.contains("abc is not a valid integer between 1 and 10"));
        assert!(out.contains("0 is not a valid integer between 1 and 10"));
        assert_eq!(out.matches("Would you like to see 2 more rows?").count(), 3);
        // rows 0-3 shown once each, third page empty
        assert!(out.contains("2017-03-06 08:30:00"));
        assert_eq!(out.matches("Start Time").count(), 3);
    }

    #[test]
    fn test_view_raw_data_decline_stops_paging() {
        let (size, out) = run("yes\n2\nno\n", &chicago_like());
        assert_eq!(size, Some(2));
        assert_eq!(out.matches("Start Time").count(), 1);
        assert_eq!(out.matches("Would you like to see 2 more rows?").count(), 1);
        assert!(out.contains("2017-01-02 08:05:00"));
        assert!(out.contains("2017-01-02 08:45:00"));
        assert!(!out.contains("2017-01-03 17:10:00"));
        assert!(!out.contains("2017-03-06 08:30:00"));
    }
}
