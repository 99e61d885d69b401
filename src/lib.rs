//! Interactive explorer for US bikeshare trip data.
//!
//! A session asks for a city and optional month/day filters, loads that
//! city's trip file, prints time, station, duration and user statistics, and
//! optionally pages through the raw rows.

pub mod config;
pub mod console;
pub mod error;
pub mod filters;
pub mod loader;
pub mod logging;
pub mod pager;
pub mod reports;
pub mod session;
pub mod stats;
pub mod trip;
