//! Domain errors surfaced by the explorer.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExplorerError {
    /// An aggregate was requested over a column with no non-null values.
    #[error("cannot aggregate column `{column}`: no values in the filtered data")]
    EmptyColumn { column: &'static str },

    #[error("unknown city `{0}` (expected chicago, new york city, or washington)")]
    UnknownCity(String),

    #[error("row {row}: cannot parse timestamp `{value}`")]
    BadTimestamp { row: usize, value: String },

    /// Standard input reached end-of-file while a prompt was waiting for an answer.
    #[error("input closed while waiting for an answer")]
    InputClosed,
}
