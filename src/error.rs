#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The single error class raised by the problem adapters.
//!
//! Every adapter validates its arguments once, before the first search step.
//! A search never fails half way: a well-formed input without a solution
//! produces an empty result, not an error.

use thiserror::Error;

/// Rejected arguments, reported before any search begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// A size parameter that has to be at least one was zero.
    #[error("{what} must be a positive integer")]
    NotPositive {
        /// Name of the argument.
        what: &'static str,
    },

    /// A grid or matrix with no rows or no columns.
    #[error("{what} must not be empty")]
    Empty {
        /// Name of the argument.
        what: &'static str,
    },

    /// A grid whose rows do not all have the same length.
    #[error("{what} must be rectangular: row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Name of the argument.
        what: &'static str,
        /// Index of the first offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A grid that has to be square but is not.
    #[error("{what} must be square: row {row} has {found} cells, expected {expected}")]
    NotSquare {
        /// Name of the argument.
        what: &'static str,
        /// Index of the first offending row.
        row: usize,
        /// Number of rows, which every row length has to match.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A grid whose dimension is not one of the accepted sizes.
    #[error("{what} must be one of {allowed:?} rows wide, got {found}")]
    WrongSize {
        /// Name of the argument.
        what: &'static str,
        /// Accepted side lengths.
        allowed: &'static [usize],
        /// Side length that was supplied.
        found: usize,
    },

    /// A cell value outside the accepted range.
    #[error("{what}[{row}][{col}] = {value} is outside {min}..={max}")]
    OutOfRange {
        /// Name of the argument.
        what: &'static str,
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// Value found in the cell.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// A size whose board would not fit in memory addresses.
    #[error("{what} = {found} is too large")]
    TooLarge {
        /// Name of the argument.
        what: &'static str,
        /// Size that was supplied.
        found: usize,
    },

    /// A combination-sum candidate that is zero or negative.
    #[error("candidates[{index}] = {value} must be positive")]
    NonPositiveCandidate {
        /// Position of the candidate.
        index: usize,
        /// Value of the candidate.
        value: i64,
    },
}

/// Result alias used by every fallible adapter.
pub type Result<T> = std::result::Result<T, InvalidInput>;
