//! Argument parsing and result reporting for the `backtrack` binary.

pub(crate) mod cli;
