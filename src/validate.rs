#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Shape and range checks shared by the adapters.
//!
//! These run once per top-level call, before the initial search state is
//! built. Each one returns the first violation it finds.

use crate::error::{InvalidInput, Result};
use log::debug;

/// Rejects a zero size parameter.
///
/// # Errors
///
/// `InvalidInput::NotPositive` if `n == 0`.
pub const fn positive(n: usize, what: &'static str) -> Result<usize> {
    if n == 0 {
        return Err(InvalidInput::NotPositive { what });
    }
    Ok(n)
}

/// Rejects a zero side length, or one whose square board (plus one spare
/// slot) overflows `usize`. Returns `n * n`.
///
/// # Errors
///
/// `InvalidInput::NotPositive` if `n == 0`, `InvalidInput::TooLarge` on overflow.
pub fn area(n: usize, what: &'static str) -> Result<usize> {
    let n = positive(n, what)?;
    match n.checked_mul(n).filter(|&cells| cells < usize::MAX) {
        Some(cells) => Ok(cells),
        None => {
            debug!("rejecting {what}: {n} x {n} overflows");
            Err(InvalidInput::TooLarge { what, found: n })
        }
    }
}

/// Checks that `grid` has at least one row, at least one column and that
/// every row is as long as the first. Returns `(rows, cols)`.
///
/// # Errors
///
/// `InvalidInput::Empty` or `InvalidInput::Ragged`.
pub fn rectangular<T>(grid: &[Vec<T>], what: &'static str) -> Result<(usize, usize)> {
    let cols = grid.first().map_or(0, Vec::len);
    if cols == 0 {
        debug!("rejecting {what}: empty grid");
        return Err(InvalidInput::Empty { what });
    }

    if let Some((row, found)) = grid
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != cols)
    {
        debug!("rejecting {what}: row {row} has {found} cells");
        return Err(InvalidInput::Ragged {
            what,
            row,
            expected: cols,
            found,
        });
    }

    Ok((grid.len(), cols))
}

/// Checks that `grid` is a non-empty square matrix and returns its side.
///
/// # Errors
///
/// `InvalidInput::Empty` or `InvalidInput::NotSquare`.
pub fn square<T>(grid: &[Vec<T>], what: &'static str) -> Result<usize> {
    let n = grid.len();
    if n == 0 {
        debug!("rejecting {what}: empty matrix");
        return Err(InvalidInput::Empty { what });
    }

    if let Some((row, found)) = grid
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != n)
    {
        debug!("rejecting {what}: row {row} has {found} cells, not {n}");
        return Err(InvalidInput::NotSquare {
            what,
            row,
            expected: n,
            found,
        });
    }

    Ok(n)
}

/// Checks that every cell of `grid` lies in `min..=max`.
///
/// # Errors
///
/// `InvalidInput::OutOfRange` for the first cell, in row-major order, that does not.
pub fn cells_within<T>(grid: &[Vec<T>], what: &'static str, min: i64, max: i64) -> Result<()>
where
    T: Copy,
    i64: TryFrom<T>,
{
    for (row, cells) in grid.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            let value = i64::try_from(cell).unwrap_or(i64::MAX);
            if !(min..=max).contains(&value) {
                debug!("rejecting {what}: cell ({row}, {col}) holds {value}");
                return Err(InvalidInput::OutOfRange {
                    what,
                    row,
                    col,
                    value,
                    min,
                    max,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert_eq!(positive(3, "n"), Ok(3));
        assert_eq!(positive(0, "n"), Err(InvalidInput::NotPositive { what: "n" }));
    }

    #[test]
    fn test_area() {
        assert_eq!(area(3, "n"), Ok(9));
        assert_eq!(area(0, "n"), Err(InvalidInput::NotPositive { what: "n" }));
        assert_eq!(
            area(1 << 32, "n"),
            Err(InvalidInput::TooLarge { what: "n", found: 1 << 32 })
        );
        assert!(area(usize::MAX, "n").is_err());
    }

    #[test]
    fn test_rectangular() {
        let grid = vec![vec!['a', 'b', 'c'], vec!['d', 'e', 'f']];
        assert_eq!(rectangular(&grid, "board"), Ok((2, 3)));

        let empty: Vec<Vec<char>> = vec![];
        assert_eq!(
            rectangular(&empty, "board"),
            Err(InvalidInput::Empty { what: "board" })
        );

        let no_columns: Vec<Vec<char>> = vec![vec![]];
        assert_eq!(
            rectangular(&no_columns, "board"),
            Err(InvalidInput::Empty { what: "board" })
        );

        let ragged = vec![vec!['a', 'b'], vec!['c']];
        assert_eq!(
            rectangular(&ragged, "board"),
            Err(InvalidInput::Ragged {
                what: "board",
                row: 1,
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn test_square() {
        let grid = vec![vec![1u8, 0], vec![1, 1]];
        assert_eq!(square(&grid, "maze"), Ok(2));

        let wide = vec![vec![1u8, 0, 1], vec![1, 1, 1]];
        assert_eq!(
            square(&wide, "maze"),
            Err(InvalidInput::NotSquare {
                what: "maze",
                row: 0,
                expected: 2,
                found: 3,
            })
        );
    }

    #[test]
    fn test_cells_within() {
        let grid = vec![vec![0u8, 1], vec![1, 2]];
        assert_eq!(cells_within(&grid, "maze", 0, 2), Ok(()));
        assert_eq!(
            cells_within(&grid, "maze", 0, 1),
            Err(InvalidInput::OutOfRange {
                what: "maze",
                row: 1,
                col: 1,
                value: 2,
                min: 0,
                max: 1,
            })
        );
    }
}
