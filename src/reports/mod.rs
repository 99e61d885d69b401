//! The four descriptive reports printed for every selection.
//!
//! Each report reads the filtered table, writes its section to `out`, and
//! ends with the time it took and a dashed rule. An empty selection makes the
//! first aggregate fail, and that error is returned as-is.

pub mod duration;
pub mod format;
pub mod station;
pub mod time;
pub mod users;

use anyhow::Result;
use std::io::Write;

use crate::trip::TripTable;

pub use duration::trip_duration_stats;
pub use station::station_stats;
pub use time::time_stats;
pub use users::user_stats;

/// Runs the reports in their fixed order: times, stations, durations, users.
pub fn print_all<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    time_stats(table, out)?;
    station_stats(table, out)?;
    trip_duration_stats(table, out)?;
    user_stats(table, out)?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::loader::read_trips;
    use crate::trip::TripTable;

    // Mondays: 2017-01-02, 2017-03-06. Tuesday: 2017-01-03.
    pub(crate) const CHICAGO_LIKE: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:05:00,2017-01-02 08:15:00,600,Canal St,Clark St,Subscriber,Male,1980.0
1,2017-01-02 08:45:00,2017-01-02 09:00:00,900,Canal St,Clark St,Subscriber,Female,1991.0
2,2017-01-03 17:10:00,2017-01-03 17:20:00,3661,Adams St,Canal St,Customer,,
3,2017-03-06 08:30:00,2017-03-06 08:40:00,439,Clark St,Canal St,Subscriber,Male,1980.0
";

    pub(crate) const WASHINGTON_LIKE: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
2017-05-30 01:02:59,2017-05-30 01:13:37,637.251,17th St & Massachusetts Ave NW,5th & K St NW,Registered
";

    pub(crate) fn chicago_like() -> TripTable {
        read_trips(CHICAGO_LIKE.as_bytes()).unwrap()
    }

    pub(crate) fn washington_like() -> TripTable {
        read_trips(WASHINGTON_LIKE.as_bytes()).unwrap()
    }
}
