//! Knight's tour: visit every square of an `n` × `n` board exactly once with
//! knight moves, starting in the top-left corner.
//!
//! The eight moves are always tried in the same order, so the tour found is
//! deterministic. Without a move-ordering heuristic the search grows quickly;
//! boards much beyond 6 × 6 are impractical.

use crate::error::Result;
use crate::problems::{Cell, neighbours};
use crate::search::{Backtracker, Candidates, Problem};
use crate::validate;
use smallvec::smallvec;

const MOVES: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// A complete tour.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tour {
    n: usize,
    path: Vec<Cell>,
}

impl Tour {
    /// The squares in the order visited.
    #[must_use]
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// The board with each square holding the index of the move that reached it.
    #[must_use]
    pub fn board(&self) -> Vec<Vec<usize>> {
        let mut board = vec![vec![0; self.n]; self.n];
        for (step, &(row, col)) in self.path.iter().enumerate() {
            board[row][col] = step;
        }
        board
    }
}

impl From<Tour> for Vec<Cell> {
    fn from(tour: Tour) -> Self {
        tour.path
    }
}

/// Search state: move index per square (`None` if unvisited) and the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnightsTour {
    n: usize,
    board: Vec<Option<usize>>,
    path: Vec<Cell>,
}

impl KnightsTour {
    /// # Errors
    ///
    /// `InvalidInput::NotPositive` if `n == 0`, `InvalidInput::TooLarge` if
    /// `n * n` overflows.
    pub fn new(n: usize) -> Result<Self> {
        let squares = validate::area(n, "n")?;
        Ok(Self {
            n,
            board: vec![None; squares],
            path: Vec::with_capacity(squares),
        })
    }

    /// Whether every square is unvisited.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.path.is_empty() && self.board.iter().all(Option::is_none)
    }
}

impl Problem for KnightsTour {
    type Candidate = Cell;
    type Solution = Tour;

    fn candidates(&self, _depth: usize) -> Candidates<Cell> {
        match self.path.last() {
            None => smallvec![(0, 0)],
            Some(&from) => neighbours(from, self.n, self.n, &MOVES).collect(),
        }
    }

    fn is_valid(&self, &(row, col): &Cell, _depth: usize) -> bool {
        self.board[row * self.n + col].is_none()
    }

    fn apply(&mut self, &(row, col): &Cell, step: usize) {
        self.board[row * self.n + col] = Some(step);
        self.path.push((row, col));
    }

    fn undo(&mut self, &(row, col): &Cell, _step: usize) {
        self.board[row * self.n + col] = None;
        self.path.pop();
    }

    fn is_terminal(&self, depth: usize) -> bool {
        depth == self.n * self.n
    }

    fn snapshot(&self) -> Tour {
        Tour {
            n: self.n,
            path: self.path.clone(),
        }
    }

    fn name(&self) -> &str {
        "knight's tour"
    }
}

/// The first knight's tour from the top-left corner, or `None`.
///
/// # Errors
///
/// `InvalidInput::NotPositive` if `n == 0`, `InvalidInput::TooLarge` if
/// `n * n` overflows.
pub fn knights_tour(n: usize) -> Result<Option<Tour>> {
    Ok(Backtracker::new(KnightsTour::new(n)?).solve())
}

/// Whether `path` visits all `n * n` squares once, by knight moves.
#[must_use]
pub fn is_valid_tour(n: usize, path: &[Cell]) -> bool {
    if n.checked_mul(n) != Some(path.len()) {
        return false;
    }

    let mut seen = vec![false; n * n];
    let distinct = path.iter().all(|&(r, c)| {
        r < n && c < n && !std::mem::replace(&mut seen[r * n + c], true)
    });

    distinct
        && path.windows(2).all(|w| {
            let (dr, dc) = (w[0].0.abs_diff(w[1].0), w[0].1.abs_diff(w[1].1));
            (dr, dc) == (1, 2) || (dr, dc) == (2, 1)
        })
}
