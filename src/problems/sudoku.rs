//! Sudoku by backtracking.
//!
//! The first empty cell (row-major) is filled with each digit in turn; a
//! digit is kept if it does not repeat in its row, column or block. Boards of
//! side 4, 9, 16 and 25 are supported by [`solve_board`]; [`sudoku_solver`]
//! accepts the classic 9 × 9 board only.

use crate::error::{InvalidInput, Result};
use crate::search::{Backtracker, Candidates, Problem};
use crate::validate;
use itertools::Itertools;
use log::debug;
use rustc_hash::FxHashSet;
use std::fmt::{self, Display, Formatter};

/// A square Sudoku grid; `0` marks an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board(Vec<Vec<usize>>);

impl Board {
    /// Wraps the rows as given; nothing is checked until a search is built.
    #[must_use]
    pub const fn new(board: Vec<Vec<usize>>) -> Self {
        Self(board)
    }

    /// The rows of the board.
    #[must_use]
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.0
    }

    /// Side length (number of rows).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the board has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Positions of the empty cells, row-major.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell == 0)
                .map(move |(c, _)| (r, c))
        })
    }
}

impl From<Vec<Vec<usize>>> for Board {
    fn from(board: Vec<Vec<usize>>) -> Self {
        Self::new(board)
    }
}

impl From<Board> for Vec<Vec<usize>> {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl From<&Board> for Vec<Vec<usize>> {
    fn from(board: &Board) -> Self {
        board.0.clone()
    }
}

impl<const N: usize> From<[[usize; N]; N]> for Board {
    fn from(board: [[usize; N]; N]) -> Self {
        Self::new(board.iter().map(|r| r.to_vec()).collect())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self.len().to_string().len();
        for row in &self.0 {
            let line = row
                .iter()
                .map(|&cell| {
                    if cell == 0 {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{cell:>width$}")
                    }
                })
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// A classic 9 × 9 puzzle with a unique solution.
pub const EXAMPLE_NINE: [[usize; 9]; 9] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

/// The supported board sides. The discriminant is the side length.
#[derive(Debug, Clone, PartialEq, Eq, Copy, PartialOrd, Ord, Hash)]
pub enum Size {
    /// 4 × 4 with 2 × 2 blocks.
    Four = 4,
    /// 9 × 9 with 3 × 3 blocks.
    Nine = 9,
    /// 16 × 16 with 4 × 4 blocks.
    Sixteen = 16,
    /// 25 × 25 with 5 × 5 blocks.
    TwentyFive = 25,
}

impl Size {
    const ALL: &'static [usize] = &[4, 9, 16, 25];

    /// Side length of one block.
    #[must_use]
    pub const fn block_size(self) -> usize {
        match self {
            Self::Four => 2,
            Self::Nine => 3,
            Self::Sixteen => 4,
            Self::TwentyFive => 5,
        }
    }
}

impl TryFrom<usize> for Size {
    type Error = ();

    fn try_from(value: usize) -> std::result::Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            9 => Ok(Self::Nine),
            16 => Ok(Self::Sixteen),
            25 => Ok(Self::TwentyFive),
            _ => Err(()),
        }
    }
}

impl From<Size> for usize {
    fn from(size: Size) -> Self {
        size as Self
    }
}

/// A digit written into an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Row of the cell.
    pub row: usize,
    /// Column of the cell.
    pub col: usize,
    /// Digit written, `1..=side`.
    pub digit: usize,
}

/// Search state: the board being filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sudoku {
    board: Board,
    size: Size,
    clashing: bool,
}

impl Sudoku {
    /// Validates `board` and wraps it for searching.
    ///
    /// # Errors
    ///
    /// `NotSquare`, `Empty` or `WrongSize` for a malformed grid, `OutOfRange`
    /// for a cell outside `0..=side`.
    pub fn new(board: Board) -> Result<Self> {
        let side = validate::square(board.rows(), "board")?;
        let size = Size::try_from(side).map_err(|()| InvalidInput::WrongSize {
            what: "board",
            allowed: Size::ALL,
            found: side,
        })?;
        validate::cells_within(board.rows(), "board", 0, side as i64)?;

        let mut sudoku = Self {
            board,
            size,
            clashing: false,
        };
        sudoku.clashing = sudoku.clues_clash();
        if sudoku.clashing {
            debug!("sudoku clues clash, nothing to search");
        }
        Ok(sudoku)
    }

    /// The board in its current state.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The side of the board.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    fn allows(&self, row: usize, col: usize, digit: usize) -> bool {
        let cells = &self.board.0;
        let block = self.size.block_size();
        let (top, left) = (block * (row / block), block * (col / block));

        (0..self.size as usize).all(|i| {
            (i == col || cells[row][i] != digit)
                && (i == row || cells[i][col] != digit)
                && {
                    let (r, c) = (top + i / block, left + i % block);
                    (r == row && c == col) || cells[r][c] != digit
                }
        })
    }

    /// Whether the given digits clashed with one another when the board was
    /// wrapped. Such a board has no solution and is never searched.
    #[must_use]
    pub const fn has_conflicting_clues(&self) -> bool {
        self.clashing
    }

    fn clues_clash(&self) -> bool {
        self.board.0.iter().enumerate().any(|(r, row)| {
            row.iter()
                .enumerate()
                .any(|(c, &digit)| digit != 0 && !self.allows(r, c, digit))
        })
    }
}

impl Problem for Sudoku {
    type Candidate = Placement;
    type Solution = Board;

    fn candidates(&self, _depth: usize) -> Candidates<Placement> {
        if self.clashing {
            return Candidates::new();
        }
        self.board
            .empty_cells()
            .next()
            .map(|(row, col)| {
                (1..=self.size as usize)
                    .map(|digit| Placement { row, col, digit })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn is_valid(&self, p: &Placement, _depth: usize) -> bool {
        self.allows(p.row, p.col, p.digit)
    }

    fn apply(&mut self, p: &Placement, _depth: usize) {
        self.board.0[p.row][p.col] = p.digit;
    }

    fn undo(&mut self, p: &Placement, _depth: usize) {
        self.board.0[p.row][p.col] = 0;
    }

    fn is_terminal(&self, _depth: usize) -> bool {
        !self.clashing && self.board.empty_cells().next().is_none()
    }

    fn snapshot(&self) -> Board {
        self.board.clone()
    }

    fn name(&self) -> &str {
        "sudoku"
    }
}

/// Solves `board` in place. Returns `false`, leaving the board untouched,
/// when it has no solution (clashing clues included).
///
/// # Errors
///
/// See [`Sudoku::new`].
pub fn solve_board(board: &mut Board) -> Result<bool> {
    match Backtracker::new(Sudoku::new(board.clone())?).solve() {
        Some(solved) => {
            *board = solved;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Solves a 9 × 9 `board` in place; see [`solve_board`].
///
/// # Errors
///
/// `WrongSize` unless the board is 9 × 9, otherwise as [`Sudoku::new`].
pub fn sudoku_solver(board: &mut Board) -> Result<bool> {
    if board.len() != 9 {
        return Err(InvalidInput::WrongSize {
            what: "board",
            allowed: &[9],
            found: board.len(),
        });
    }
    solve_board(board)
}

/// Whether `board` is completely and correctly filled in.
#[must_use]
pub fn is_solved(board: &Board) -> bool {
    let Ok(size) = Size::try_from(board.len()) else {
        return false;
    };
    let n = size as usize;
    let block = size.block_size();
    let rows = board.rows();
    if rows.iter().any(|row| row.len() != n) {
        return false;
    }

    let complete = |cells: &mut dyn Iterator<Item = usize>| {
        let seen: FxHashSet<usize> = cells.collect();
        seen.len() == n && seen.iter().all(|d| (1..=n).contains(d))
    };

    (0..n).all(|i| {
        let (top, left) = (block * (i / block), block * (i % block));
        complete(&mut rows[i].iter().copied())
            && complete(&mut rows.iter().map(|row| row[i]))
            && complete(&mut (0..n).map(|j| rows[top + j / block][left + j % block]))
    })
}
