//! The N-Queens problem.
//!
//! Place `n` queens on an `n` × `n` board so that no two share a row, a
//! column or a diagonal. Queens are placed one row at a time, so the state
//! is just the column chosen for each row so far, and a solution is a
//! column index per row.

use crate::error::Result;
use crate::search::{Backtracker, Candidates, Problem};
use crate::validate;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Search state: the column of the queen in each placed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NQueens {
    n: usize,
    columns: SmallVec<[usize; 16]>,
}

impl NQueens {
    /// An empty `n` × `n` board.
    ///
    /// # Errors
    ///
    /// `InvalidInput::NotPositive` if `n == 0`.
    pub fn new(n: usize) -> Result<Self> {
        let n = validate::positive(n, "n")?;
        Ok(Self {
            n,
            columns: SmallVec::new(),
        })
    }

    /// Columns placed so far, one per row.
    #[must_use]
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }
}

impl Problem for NQueens {
    type Candidate = usize;
    type Solution = Vec<usize>;

    fn candidates(&self, _depth: usize) -> Candidates<usize> {
        (0..self.n).collect()
    }

    fn is_valid(&self, &col: &usize, row: usize) -> bool {
        self.columns
            .iter()
            .enumerate()
            .all(|(r, &c)| c != col && c.abs_diff(col) != row - r)
    }

    fn apply(&mut self, &col: &usize, _row: usize) {
        self.columns.push(col);
    }

    fn undo(&mut self, _col: &usize, _row: usize) {
        self.columns.pop();
    }

    fn is_terminal(&self, row: usize) -> bool {
        row == self.n
    }

    fn snapshot(&self) -> Vec<usize> {
        self.columns.to_vec()
    }

    fn name(&self) -> &str {
        "n-queens"
    }
}

/// Every placement of `n` non-attacking queens, as the queen's column in each
/// row, in lexicographic order.
///
/// # Errors
///
/// `InvalidInput::NotPositive` if `n == 0`.
pub fn n_queens(n: usize) -> Result<Vec<Vec<usize>>> {
    Ok(Backtracker::new(NQueens::new(n)?).solve_all())
}

/// Checks that `columns` describes `columns.len()` mutually non-attacking
/// queens, one per row.
#[must_use]
pub fn is_valid_placement(columns: &[usize]) -> bool {
    let n = columns.len();
    let mut cols = FxHashSet::default();
    let mut diagonals = FxHashSet::default();
    let mut anti_diagonals = FxHashSet::default();

    columns.iter().enumerate().all(|(row, &col)| {
        col < n
            && cols.insert(col)
            && diagonals.insert(row + n - col)
            && anti_diagonals.insert(row + col)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInput;

    #[test]
    fn test_four_queens() {
        let solutions = n_queens(4).unwrap();
        assert_eq!(solutions, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
        assert!(solutions.iter().all(|s| is_valid_placement(s)));
    }

    #[test]
    fn test_solution_counts() {
        assert_eq!(n_queens(1).unwrap(), vec![vec![0]]);
        assert!(n_queens(2).unwrap().is_empty());
        assert!(n_queens(3).unwrap().is_empty());
        assert_eq!(n_queens(6).unwrap().len(), 4);
        assert_eq!(Backtracker::new(NQueens::new(8).unwrap()).count(), 92);
    }

    #[test]
    fn test_zero_is_rejected() {
        assert_eq!(n_queens(0), Err(InvalidInput::NotPositive { what: "n" }));
    }

    #[test]
    fn test_board_is_empty_after_search() {
        let mut search = Backtracker::new(NQueens::new(5).unwrap());
        assert_eq!(search.solve_all().len(), 10);
        assert!(search.problem().columns().is_empty());
    }

    #[test]
    fn test_is_valid_placement() {
        assert!(is_valid_placement(&[1, 3, 0, 2]));
        assert!(!is_valid_placement(&[0, 1, 2, 3]));
        assert!(!is_valid_placement(&[1, 1, 0, 2]));
        assert!(!is_valid_placement(&[0, 4]));
        assert!(is_valid_placement(&[]));
    }
}
