#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Plain-text readers for the grid inputs of the command-line tool.
//!
//! Three line-oriented formats are understood:
//!
//! -   **Sudoku boards**: one row per line. Cells are digits, either separated
//!     by whitespace (`5 3 0 0 7 ...`, needed once values exceed 9) or written
//!     together (`530070000`). `0` and `.` mark empty cells.
//! -   **Integer grids** (mazes, adjacency matrices): whitespace-separated
//!     integers, one row per line.
//! -   **Letter grids** (word search): one row per line, whitespace ignored.
//!
//! Blank lines are skipped everywhere. Lines starting with `#` are comments;
//! Sudoku files also accept DIMACS-style `c` comment lines.
//!
//! Every reader checks that the grid is rectangular (and square where the
//! puzzle needs it), so the adapters only ever see well-formed input.

use crate::error::InvalidInput;
use crate::problems::sudoku::{Board, Sudoku};
use crate::validate;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Failure to read a puzzle from text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A token that is not valid in this format.
    #[error("line {line}: unexpected token '{token}'")]
    BadToken {
        /// 1-based line number.
        line: usize,
        /// The offending text.
        token: String,
    },

    /// The text parsed but does not describe a valid puzzle.
    #[error(transparent)]
    Invalid(#[from] InvalidInput),
}

/// Result type of the readers.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Content lines with their 1-based numbers, comments and blanks dropped.
fn content_lines<R: BufRead>(
    reader: R,
    comment: impl Fn(&str) -> bool,
) -> impl Iterator<Item = Result<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .filter_map(move |(index, line)| match line {
            Err(e) => Some(Err(ParseError::from(e))),
            Ok(line) => {
                let trimmed = line.trim();
                (!trimmed.is_empty() && !comment(trimmed))
                    .then(|| Ok((index + 1, trimmed.to_string())))
            }
        })
}

fn parse_cell(line: usize, token: &str) -> Result<usize> {
    if token == "." {
        return Ok(0);
    }
    token.parse().map_err(|_| ParseError::BadToken {
        line,
        token: token.to_string(),
    })
}

/// Reads a Sudoku board. The board must be square with side 4, 9, 16 or 25
/// and every value must lie in `0..=side`.
///
/// # Errors
///
/// `ParseError::BadToken` for anything that is not a digit, `.` or
/// whitespace; `ParseError::Invalid` for a ragged, unsupported-size or
/// out-of-range board; `ParseError::Io` if reading fails.
pub fn parse_sudoku<R: BufRead>(reader: R) -> Result<Board> {
    let mut rows = Vec::new();

    for line in content_lines(reader, |l| l.starts_with('#') || l.starts_with('c')) {
        let (number, text) = line?;
        let row = if text.contains(char::is_whitespace) {
            text.split_whitespace()
                .map(|token| parse_cell(number, token))
                .collect::<Result<Vec<_>>>()?
        } else {
            text.chars()
                .map(|c| parse_cell(number, c.encode_utf8(&mut [0; 4])))
                .collect::<Result<Vec<_>>>()?
        };
        rows.push(row);
    }

    let board = Board::new(rows);
    Sudoku::new(board.clone())?;
    Ok(board)
}

/// Reads a rectangular grid of integers.
///
/// # Errors
///
/// `ParseError::BadToken` for a token that is not an integer;
/// `ParseError::Invalid` if the grid is empty or ragged; `ParseError::Io` if
/// reading fails.
pub fn parse_int_grid<R: BufRead>(reader: R) -> Result<Vec<Vec<u8>>> {
    let mut rows = Vec::new();

    for line in content_lines(reader, |l| l.starts_with('#')) {
        let (number, text) = line?;
        let row = text
            .split_whitespace()
            .map(|token| {
                token.parse::<u8>().map_err(|_| ParseError::BadToken {
                    line: number,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }

    validate::rectangular(&rows, "grid")?;
    Ok(rows)
}

/// Reads a rectangular grid of letters.
///
/// # Errors
///
/// `ParseError::Invalid` if the grid is empty or ragged; `ParseError::Io` if
/// reading fails.
pub fn parse_char_grid<R: BufRead>(reader: R) -> Result<Vec<Vec<char>>> {
    let mut rows = Vec::new();

    for line in content_lines(reader, |l| l.starts_with('#')) {
        let (_, text) = line?;
        rows.push(text.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>());
    }

    validate::rectangular(&rows, "board")?;
    Ok(rows)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

/// [`parse_sudoku`] on the contents of a file.
///
/// # Errors
///
/// As [`parse_sudoku`], plus `ParseError::Io` if the file cannot be opened.
pub fn parse_sudoku_file(path: impl AsRef<Path>) -> Result<Board> {
    parse_sudoku(open(path.as_ref())?)
}

/// [`parse_int_grid`] on the contents of a file.
///
/// # Errors
///
/// As [`parse_int_grid`], plus `ParseError::Io` if the file cannot be opened.
pub fn parse_int_grid_file(path: impl AsRef<Path>) -> Result<Vec<Vec<u8>>> {
    parse_int_grid(open(path.as_ref())?)
}

/// [`parse_char_grid`] on the contents of a file.
///
/// # Errors
///
/// As [`parse_char_grid`], plus `ParseError::Io` if the file cannot be opened.
pub fn parse_char_grid_file(path: impl AsRef<Path>) -> Result<Vec<Vec<char>>> {
    parse_char_grid(open(path.as_ref())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::sudoku::EXAMPLE_NINE;

    const COMPACT: &str = "\
# example board
530070000
600195000
098000060
800060003
400803001
700020006
060000280
000419005
000080079
";

    #[test]
    fn test_parse_compact_sudoku() {
        let board = parse_sudoku(COMPACT.as_bytes()).unwrap();
        assert_eq!(board, Board::from(EXAMPLE_NINE));
    }

    #[test]
    fn test_parse_spaced_sudoku_with_dots() {
        let text = "c four by four\n1 . . 4\n. 4 1 .\n\n4 . . 1\n. 1 4 .\n";
        let board = parse_sudoku(text.as_bytes()).unwrap();
        assert_eq!(
            Vec::<Vec<usize>>::from(board),
            vec![
                vec![1, 0, 0, 4],
                vec![0, 4, 1, 0],
                vec![4, 0, 0, 1],
                vec![0, 1, 4, 0],
            ]
        );
    }

    #[test]
    fn test_sudoku_bad_token() {
        let err = parse_sudoku("12x4\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::BadToken { line: 1, ref token } if token == "x"));
    }

    #[test]
    fn test_sudoku_wrong_shape() {
        assert!(matches!(
            parse_sudoku("123\n123\n123\n".as_bytes()),
            Err(ParseError::Invalid(InvalidInput::WrongSize { found: 3, .. }))
        ));
        assert!(matches!(
            parse_sudoku("12\n1\n".as_bytes()),
            Err(ParseError::Invalid(InvalidInput::NotSquare { .. }))
        ));
        assert!(matches!(
            parse_sudoku("5000\n0000\n0000\n0000\n".as_bytes()),
            Err(ParseError::Invalid(InvalidInput::OutOfRange { value: 5, .. }))
        ));
    }

    #[test]
    fn test_parse_int_grid() {
        let text = "# maze\n1 0 0\n1 1 0\n0 1 1\n";
        assert_eq!(
            parse_int_grid(text.as_bytes()).unwrap(),
            vec![vec![1, 0, 0], vec![1, 1, 0], vec![0, 1, 1]]
        );
        assert!(matches!(
            parse_int_grid("1 0\n1\n".as_bytes()),
            Err(ParseError::Invalid(InvalidInput::Ragged { row: 1, .. }))
        ));
        assert!(matches!(
            parse_int_grid("1 -1\n".as_bytes()),
            Err(ParseError::BadToken { line: 1, .. })
        ));
        assert!(matches!(
            parse_int_grid("# nothing\n".as_bytes()),
            Err(ParseError::Invalid(InvalidInput::Empty { .. }))
        ));
    }

    #[test]
    fn test_parse_char_grid() {
        let text = "A B C E\nSFCS\nA D E E\n";
        assert_eq!(
            parse_char_grid(text.as_bytes()).unwrap(),
            vec![
                vec!['A', 'B', 'C', 'E'],
                vec!['S', 'F', 'C', 'S'],
                vec!['A', 'D', 'E', 'E'],
            ]
        );
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            parse_sudoku_file("/nonexistent/board.sudoku"),
            Err(ParseError::Io(_))
        ));
    }
}
