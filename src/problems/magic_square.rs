//! Magic squares by exhaustive backtracking.
//!
//! Cells are filled row-major with the numbers `1..=n²`, each used once. A
//! line (row, column or diagonal) is only checked against the magic constant
//! once its last cell is filled, so most pruning happens late. This keeps
//! the search simple; it is fine for `n <= 3` and hopeless much beyond.

use crate::error::{InvalidInput, Result};
use crate::search::{Backtracker, Candidates, Problem};
use crate::validate;
use bit_vec::BitVec;
use rustc_hash::FxHashSet;

/// The common line sum of an `n` × `n` magic square, `n(n² + 1) / 2`, or
/// `None` if it overflows `usize`.
#[must_use]
pub const fn magic_constant(n: usize) -> Option<usize> {
    match n.checked_mul(n) {
        Some(square) if square < usize::MAX => match n.checked_mul(square + 1) {
            Some(total) => Some(total / 2),
            None => None,
        },
        _ => None,
    }
}

/// Search state: cells filled so far (`0` = empty) and the numbers used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicSquare {
    n: usize,
    magic: usize,
    cells: Vec<usize>,
    used: BitVec,
}

impl MagicSquare {
    /// # Errors
    ///
    /// `InvalidInput::NotPositive` if `n == 0`, `InvalidInput::TooLarge` if
    /// the magic constant overflows `usize`.
    pub fn new(n: usize) -> Result<Self> {
        let cells = validate::area(n, "n")?;
        let magic = magic_constant(n).ok_or(InvalidInput::TooLarge { what: "n", found: n })?;
        Ok(Self {
            n,
            magic,
            cells: vec![0; cells],
            used: BitVec::from_elem(cells + 1, false),
        })
    }

    fn line_sum(&self, cells: impl Iterator<Item = usize>) -> usize {
        cells.map(|i| self.cells[i]).sum()
    }

    /// Whether no cell is filled and no number is marked as used.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.used.none() && self.cells.iter().all(|&c| c == 0)
    }
}

impl Problem for MagicSquare {
    type Candidate = usize;
    type Solution = Vec<Vec<usize>>;

    fn candidates(&self, _depth: usize) -> Candidates<usize> {
        (1..=self.n * self.n).collect()
    }

    fn is_valid(&self, &num: &usize, depth: usize) -> bool {
        if self.used[num] {
            return false;
        }

        let n = self.n;
        let (row, col) = (depth / n, depth % n);
        let last = n - 1;
        let completes = |sum: usize| sum + num == self.magic;

        (col != last || completes(self.line_sum(row * n..row * n + col)))
            && (row != last || completes(self.line_sum((0..row).map(|r| r * n + col))))
            && (row != last || col != last || completes(self.line_sum((0..last).map(|i| i * n + i))))
            && (row != last || col != 0 || completes(self.line_sum((0..last).map(|i| i * n + last - i))))
    }

    fn apply(&mut self, &num: &usize, depth: usize) {
        self.cells[depth] = num;
        self.used.set(num, true);
    }

    fn undo(&mut self, &num: &usize, depth: usize) {
        self.cells[depth] = 0;
        self.used.set(num, false);
    }

    fn is_terminal(&self, depth: usize) -> bool {
        depth == self.n * self.n
    }

    fn snapshot(&self) -> Vec<Vec<usize>> {
        self.cells.chunks(self.n).map(<[usize]>::to_vec).collect()
    }

    fn name(&self) -> &str {
        "magic square"
    }
}

/// The first `n` × `n` magic square in search order, or `None` if there is
/// none (`n == 2`).
///
/// # Errors
///
/// `InvalidInput::NotPositive` if `n == 0`, `InvalidInput::TooLarge` if `n`
/// is too large to build the board.
pub fn magic_square(n: usize) -> Result<Option<Vec<Vec<usize>>>> {
    Ok(Backtracker::new(MagicSquare::new(n)?).solve())
}

/// Whether `square` holds `1..=n²` once each with every row, column and both
/// diagonals summing to the magic constant.
#[must_use]
pub fn is_magic(square: &[Vec<usize>]) -> bool {
    let n = square.len();
    if n == 0 || square.iter().any(|row| row.len() != n) {
        return false;
    }
    let Some(magic) = magic_constant(n) else {
        return false;
    };

    let numbers: FxHashSet<usize> = square.iter().flatten().copied().collect();
    if numbers.len() != n * n || !numbers.iter().all(|v| (1..=n * n).contains(v)) {
        return false;
    }

    let rows = square.iter().all(|row| row.iter().sum::<usize>() == magic);
    let cols = (0..n).all(|c| square.iter().map(|row| row[c]).sum::<usize>() == magic);
    let diagonal = (0..n).map(|i| square[i][i]).sum::<usize>() == magic;
    let anti_diagonal = (0..n).map(|i| square[i][n - 1 - i]).sum::<usize>() == magic;

    rows && cols && diagonal && anti_diagonal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_by_three() {
        let square = magic_square(3).unwrap().unwrap();
        assert_eq!(square, vec![vec![2, 7, 6], vec![9, 5, 1], vec![4, 3, 8]]);
        assert!(is_magic(&square));
    }

    #[test]
    fn test_small_sizes() {
        assert_eq!(magic_square(1), Ok(Some(vec![vec![1]])));
        assert_eq!(magic_square(2), Ok(None));
        assert_eq!(magic_square(0), Err(InvalidInput::NotPositive { what: "n" }));
    }

    #[test]
    fn test_magic_constant() {
        assert_eq!(magic_constant(1), Some(1));
        assert_eq!(magic_constant(3), Some(15));
        assert_eq!(magic_constant(4), Some(34));
        assert_eq!(magic_constant(1 << 32), None);
        assert_eq!(magic_constant(1 << 22), None);
    }

    #[test]
    fn test_huge_sizes_are_rejected() {
        assert_eq!(
            MagicSquare::new(1 << 32),
            Err(InvalidInput::TooLarge { what: "n", found: 1 << 32 })
        );
        assert_eq!(
            magic_square(usize::MAX),
            Err(InvalidInput::TooLarge { what: "n", found: usize::MAX })
        );
    }

    #[test]
    fn test_state_is_cleared() {
        let mut search = Backtracker::new(MagicSquare::new(3).unwrap());
        assert!(search.solve().is_some());
        assert!(search.problem().is_clear());
    }

    #[test]
    fn test_eight_squares_of_order_three() {
        let all = Backtracker::new(MagicSquare::new(3).unwrap()).solve_all();
        assert_eq!(all.len(), 8);
        assert!(all.iter().all(|s| is_magic(s)));
    }

    #[test]
    fn test_is_magic() {
        assert!(is_magic(&[vec![1]]));
        assert!(!is_magic(&[vec![2, 7, 6], vec![9, 5, 1], vec![4, 8, 3]]));
        assert!(!is_magic(&[vec![5, 5, 5], vec![5, 5, 5], vec![5, 5, 5]]));
        assert!(!is_magic(&[]));
    }
}
