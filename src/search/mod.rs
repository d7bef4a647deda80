#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Generic backtracking search.
//!
//! A problem implements [`Problem`] (candidates, validity, apply/undo,
//! terminal test, snapshot) and a [`Backtracker`] drives it in one of several
//! modes: first solution, all solutions, a capped number of solutions, or a
//! plain count. Custom result handling goes through a [`Sink`].

pub mod backtracker;
pub mod problem;
pub mod sink;
pub mod stats;

pub use backtracker::Backtracker;
pub use problem::{Applied, Candidates, Problem};
pub use sink::{Collect, Count, First, Limit, Sink, Visit};
pub use stats::SearchStats;
