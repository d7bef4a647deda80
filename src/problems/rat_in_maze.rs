//! Rat in a maze: every simple path from the top-left to the bottom-right
//! cell of a square grid, moving down, right, up or left through open cells.
//!
//! `1` is an open cell and `0` a wall.

use crate::error::Result;
use crate::problems::{Cell, neighbours};
use crate::search::{Backtracker, Candidates, Problem};
use crate::validate;
use bit_vec::BitVec;
use smallvec::smallvec;

const STEPS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Search state: the path walked so far and the cells it covers.
#[derive(Debug, Clone)]
pub struct RatInMaze<'a> {
    maze: &'a [Vec<u8>],
    n: usize,
    visited: BitVec,
    path: Vec<Cell>,
}

impl<'a> RatInMaze<'a> {
    /// # Errors
    ///
    /// `Empty` or `NotSquare` for a malformed grid, `OutOfRange` for a cell
    /// that is neither `0` nor `1`.
    pub fn new(maze: &'a [Vec<u8>]) -> Result<Self> {
        let n = validate::square(maze, "maze")?;
        validate::cells_within(maze, "maze", 0, 1)?;
        Ok(Self {
            maze,
            n,
            visited: BitVec::from_elem(n * n, false),
            path: Vec::new(),
        })
    }

    /// Whether no cell is marked as visited.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.visited.none() && self.path.is_empty()
    }
}

impl Problem for RatInMaze<'_> {
    type Candidate = Cell;
    type Solution = Vec<Cell>;

    fn candidates(&self, _depth: usize) -> Candidates<Cell> {
        match self.path.last() {
            None => smallvec![(0, 0)],
            Some(&last) => neighbours(last, self.n, self.n, &STEPS).collect(),
        }
    }

    fn is_valid(&self, &(row, col): &Cell, _depth: usize) -> bool {
        self.maze[row][col] == 1 && !self.visited[row * self.n + col]
    }

    fn apply(&mut self, &(row, col): &Cell, _depth: usize) {
        self.visited.set(row * self.n + col, true);
        self.path.push((row, col));
    }

    fn undo(&mut self, &(row, col): &Cell, _depth: usize) {
        self.visited.set(row * self.n + col, false);
        self.path.pop();
    }

    fn is_terminal(&self, _depth: usize) -> bool {
        self.path.last() == Some(&(self.n - 1, self.n - 1))
    }

    fn snapshot(&self) -> Vec<Cell> {
        self.path.clone()
    }

    fn name(&self) -> &str {
        "rat in maze"
    }
}

/// Every path through `maze`, in the order the moves are tried.
///
/// # Errors
///
/// See [`RatInMaze::new`].
pub fn rat_in_maze(maze: &[Vec<u8>]) -> Result<Vec<Vec<Cell>>> {
    Ok(Backtracker::new(RatInMaze::new(maze)?).solve_all())
}

/// Whether `path` is a simple walk through open cells of `maze` from the
/// top-left to the bottom-right corner.
#[must_use]
pub fn is_maze_path(maze: &[Vec<u8>], path: &[Cell]) -> bool {
    let n = maze.len();
    if n == 0 || path.first() != Some(&(0, 0)) || path.last() != Some(&(n - 1, n - 1)) {
        return false;
    }

    let mut seen = BitVec::from_elem(n * n, false);
    let cells_ok = path.iter().all(|&(r, c)| {
        let open = r < n && c < n && maze[r].get(c) == Some(&1);
        open && !seen.get(r * n + c).unwrap_or(true) && {
            seen.set(r * n + c, true);
            true
        }
    });

    cells_ok
        && path
            .windows(2)
            .all(|w| w[0].0.abs_diff(w[1].0) + w[0].1.abs_diff(w[1].1) == 1)
}
