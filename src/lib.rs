#![warn(missing_docs)]
//! A generic backtracking engine and the classic puzzles built on it.
//!
//! The [`search`] module holds the engine: a problem describes its decision
//! tree through the [`Problem`](search::Problem) trait and a
//! [`Backtracker`](search::Backtracker) walks it depth first, undoing every
//! choice on the way back. The [`problems`] module expresses thirteen
//! classic puzzles (N-Queens, Sudoku, word search, subset and combination
//! sums, permutations, rat in a maze, Hamiltonian cycles, knight's tours,
//! palindrome partitioning, balanced parentheses, wildcard matching and magic
//! squares) as problems for that engine.
//!
//! ```
//! use backtracking::problems::n_queens;
//!
//! let boards = n_queens(4).unwrap();
//! assert_eq!(boards, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
//! ```

/// The error type shared by every puzzle.
pub mod error;

/// Readers for the text formats of the command-line tool.
pub mod input;

/// The puzzle adapters.
pub mod problems;

/// The backtracking engine.
pub mod search;

/// Input checks run before a search starts.
pub mod validate;

pub use error::InvalidInput;
pub use problems::BACKTRACKING_ALGORITHM_PROPERTIES;
pub use search::{Backtracker, Problem, SearchStats};
