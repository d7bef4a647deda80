//! Word search on a letter grid.
//!
//! A word is found when its letters can be traced through orthogonally
//! adjacent cells without using a cell twice. The first letter may start
//! anywhere; cells are tried in row-major order and neighbours in the order
//! down, up, right, left.

use crate::error::Result;
use crate::problems::{Cell, neighbours};
use crate::search::{Backtracker, Candidates, Problem};
use crate::validate;
use bit_vec::BitVec;

const STEPS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Search state: the cells traced so far and which cells they occupy.
#[derive(Debug, Clone)]
pub struct WordSearch<'a> {
    board: &'a [Vec<char>],
    word: Vec<char>,
    rows: usize,
    cols: usize,
    visited: BitVec,
    path: Vec<Cell>,
}

impl<'a> WordSearch<'a> {
    /// # Errors
    ///
    /// `InvalidInput::Empty` or `InvalidInput::Ragged` if the board is not a
    /// non-empty rectangle.
    pub fn new(board: &'a [Vec<char>], word: &str) -> Result<Self> {
        let (rows, cols) = validate::rectangular(board, "board")?;
        Ok(Self {
            board,
            word: word.chars().collect(),
            rows,
            cols,
            visited: BitVec::from_elem(rows * cols, false),
            path: Vec::with_capacity(word.len()),
        })
    }

    const fn index(&self, (row, col): Cell) -> usize {
        row * self.cols + col
    }
}

impl Problem for WordSearch<'_> {
    type Candidate = Cell;
    type Solution = Vec<Cell>;

    fn candidates(&self, _depth: usize) -> Candidates<Cell> {
        match self.path.last() {
            None => (0..self.rows)
                .flat_map(|r| (0..self.cols).map(move |c| (r, c)))
                .collect(),
            Some(&last) => neighbours(last, self.rows, self.cols, &STEPS).collect(),
        }
    }

    fn is_valid(&self, &(row, col): &Cell, depth: usize) -> bool {
        !self.visited.get(self.index((row, col))).unwrap_or(true)
            && self.word.get(depth) == Some(&self.board[row][col])
    }

    fn apply(&mut self, &cell: &Cell, _depth: usize) {
        let index = self.index(cell);
        self.visited.set(index, true);
        self.path.push(cell);
    }

    fn undo(&mut self, &cell: &Cell, _depth: usize) {
        let index = self.index(cell);
        self.visited.set(index, false);
        self.path.pop();
    }

    fn is_terminal(&self, depth: usize) -> bool {
        !self.word.is_empty() && depth == self.word.len()
    }

    fn snapshot(&self) -> Vec<Cell> {
        self.path.clone()
    }

    fn name(&self) -> &str {
        "word search"
    }
}

/// The cells spelling `word`, if it can be traced on `board`.
///
/// An empty word, or an empty board, is never found.
///
/// # Errors
///
/// `InvalidInput::Ragged` if the rows differ in length.
pub fn find_word(board: &[Vec<char>], word: &str) -> Result<Option<Vec<Cell>>> {
    if board.first().is_none_or(Vec::is_empty) {
        return Ok(None);
    }
    Ok(Backtracker::new(WordSearch::new(board, word)?).solve())
}

/// Whether `word` can be traced on `board`; see [`find_word`].
///
/// # Errors
///
/// `InvalidInput::Ragged` if the rows differ in length.
pub fn word_search(board: &[Vec<char>], word: &str) -> Result<bool> {
    Ok(find_word(board, word)?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInput;

    fn grid(rows: &[&str]) -> Vec<Vec<char>> {
        rows.iter().map(|r| r.chars().collect()).collect()
    }

    #[test]
    fn test_classic_board() {
        let board = grid(&["ABCE", "SFCS", "ADEE"]);
        assert_eq!(word_search(&board, "ABCCED"), Ok(true));
        assert_eq!(word_search(&board, "SEE"), Ok(true));
        assert_eq!(word_search(&board, "ABCB"), Ok(false));
    }

    #[test]
    fn test_path_is_reported() {
        let board = grid(&["AB", "CD"]);
        assert_eq!(word_search(&board, "ABCD"), Ok(false));
        assert_eq!(
            find_word(&board, "ABDC"),
            Ok(Some(vec![(0, 0), (0, 1), (1, 1), (1, 0)]))
        );
    }

    #[test]
    fn test_empty_inputs() {
        let board = grid(&["AB"]);
        assert_eq!(word_search(&board, ""), Ok(false));
        assert_eq!(word_search(&[], "A"), Ok(false));
        assert_eq!(word_search(&[vec![]], "A"), Ok(false));
    }

    #[test]
    fn test_empty_word_through_backtracker() {
        let board = grid(&["A"]);
        let mut search = Backtracker::new(WordSearch::new(&board, "").unwrap());
        assert_eq!(search.solve(), None);
        assert_eq!(search.count(), 0);
        assert_eq!(find_word(&board, ""), Ok(None));
    }

    #[test]
    fn test_ragged_board() {
        let board = grid(&["AB", "C"]);
        assert!(matches!(
            word_search(&board, "AB"),
            Err(InvalidInput::Ragged { row: 1, .. })
        ));
    }

    #[test]
    fn test_visited_is_reset() {
        let board = grid(&["ABCE", "SFCS", "ADEE"]);
        let mut search = Backtracker::new(WordSearch::new(&board, "ABCCED").unwrap());
        assert!(search.solve().is_some());
        let problem = search.into_problem();
        assert!(problem.visited.none());
        assert!(problem.path.is_empty());
    }
}
