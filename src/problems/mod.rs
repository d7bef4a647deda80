#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Classic backtracking problems, each expressed as a [`Problem`](crate::search::Problem)
//! and driven by the shared [`Backtracker`](crate::search::Backtracker).
//!
//! Every module exposes the problem type (for callers that want statistics,
//! limits or custom sinks) and a plain function that validates its input,
//! runs the search and returns the result.

pub mod combination_sum;
pub mod hamiltonian;
pub mod knights_tour;
pub mod magic_square;
pub mod n_queens;
pub mod palindrome;
pub mod parentheses;
pub mod pattern;
pub mod permutations;
pub mod rat_in_maze;
pub mod subset_sum;
pub mod sudoku;
pub mod word_search;

pub use combination_sum::combination_sum;
pub use hamiltonian::hamiltonian_cycle;
pub use knights_tour::knights_tour;
pub use magic_square::magic_square;
pub use n_queens::n_queens;
pub use palindrome::palindrome_partitioning;
pub use parentheses::all_possible_valid_parentheses;
pub use pattern::string_pattern_matching;
pub use permutations::permutations;
pub use rat_in_maze::rat_in_maze;
pub use subset_sum::subset_sum;
pub use sudoku::sudoku_solver;
pub use word_search::word_search;

/// A `(row, column)` position on a grid.
pub type Cell = (usize, usize);

/// What every algorithm in this module has in common.
pub const BACKTRACKING_ALGORITHM_PROPERTIES: [&str; 4] = [
    "Uses recursion to explore all possible configurations",
    "Backtracks when a configuration is found to be invalid",
    "Often used for constraint satisfaction problems",
    "Can be inefficient for large problem spaces without optimizations",
];

/// The cells reached from `cell` by `offsets` on a `rows` × `cols` grid, in the
/// order given, dropping those that fall off the grid.
pub(crate) fn neighbours(
    (row, col): Cell,
    rows: usize,
    cols: usize,
    offsets: &[(isize, isize)],
) -> impl Iterator<Item = Cell> + '_ {
    offsets.iter().filter_map(move |&(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < rows && c < cols).then_some((r, c))
    })
}
