//! Column aggregates over a slice of trips.
//!
//! Every function takes the column's display name (used only in errors) and
//! an accessor returning `None` for null cells. Nulls are skipped, and an
//! aggregate over a column with no values fails with
//! [`ExplorerError::EmptyColumn`] instead of inventing a default.

use std::collections::BTreeMap;

use crate::error::ExplorerError;
use crate::trip::Trip;

/// Occurrences of each non-null value, in ascending value order.
fn tally<'a, T, F>(trips: &'a [Trip], key: F) -> BTreeMap<T, usize>
where
    T: Ord,
    F: Fn(&'a Trip) -> Option<T>,
{
    let mut counts = BTreeMap::new();
    for value in trips.iter().filter_map(key) {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Mode of a column and the number of trips holding it.
///
/// Ties go to the smallest value in `T`'s ordering.
pub fn most_common<'a, T, F>(
    trips: &'a [Trip],
    column: &'static str,
    key: F,
) -> Result<(T, usize), ExplorerError>
where
    T: Ord,
    F: Fn(&'a Trip) -> Option<T>,
{
    let mut best: Option<(T, usize)> = None;
    for (value, count) in tally(trips, key) {
        if best.as_ref().is_none_or(|(_, best_count)| count > *best_count) {
            best = Some((value, count));
        }
    }
    best.ok_or(ExplorerError::EmptyColumn { column })
}

/// Every distinct value with its count, most frequent first; ties ascending by value.
pub fn value_counts<'a, T, F>(trips: &'a [Trip], key: F) -> Vec<(T, usize)>
where
    T: Ord,
    F: Fn(&'a Trip) -> Option<T>,
{
    let mut counts: Vec<_> = tally(trips, key).into_iter().collect();
    // stable: equal counts keep ascending value order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn sum<F>(trips: &[Trip], key: F) -> f64
where
    F: Fn(&Trip) -> Option<f64>,
{
    trips.iter().filter_map(key).sum()
}

pub fn mean<F>(trips: &[Trip], column: &'static str, key: F) -> Result<f64, ExplorerError>
where
    F: Fn(&Trip) -> Option<f64>,
{
    let values: Vec<f64> = trips.iter().filter_map(key).collect();
    if values.is_empty() {
        return Err(ExplorerError::EmptyColumn { column });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn min<'a, T, F>(trips: &'a [Trip], column: &'static str, key: F) -> Result<T, ExplorerError>
where
    T: Ord,
    F: Fn(&'a Trip) -> Option<T>,
{
    trips
        .iter()
        .filter_map(key)
        .min()
        .ok_or(ExplorerError::EmptyColumn { column })
}

pub fn max<'a, T, F>(trips: &'a [Trip], column: &'static str, key: F) -> Result<T, ExplorerError>
where
    T: Ord,
    F: Fn(&'a Trip) -> Option<T>,
{
    trips
        .iter()
        .filter_map(key)
        .max()
        .ok_or(ExplorerError::EmptyColumn { column })
}
