//! Partitions of a string into palindromic pieces.
//!
//! The next piece is chosen among the prefixes of the unconsumed suffix,
//! shortest first. Works on `char`s, so multi-byte text splits on character
//! boundaries.

use crate::search::{Backtracker, Candidates, Problem};

/// Search state: end offsets (in chars) of the pieces cut so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalindromePartitioning {
    chars: Vec<char>,
    cuts: Vec<usize>,
}

impl PalindromePartitioning {
    /// Starts with no cuts made in `s`.
    #[must_use]
    pub fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
            cuts: Vec::new(),
        }
    }

    fn start(&self) -> usize {
        self.cuts.last().copied().unwrap_or(0)
    }
}

fn is_palindrome(chars: &[char]) -> bool {
    chars.iter().eq(chars.iter().rev())
}

impl Problem for PalindromePartitioning {
    type Candidate = usize;
    type Solution = Vec<String>;

    fn candidates(&self, _depth: usize) -> Candidates<usize> {
        (self.start() + 1..=self.chars.len()).collect()
    }

    fn is_valid(&self, &end: &usize, _depth: usize) -> bool {
        is_palindrome(&self.chars[self.start()..end])
    }

    fn apply(&mut self, &end: &usize, _depth: usize) {
        self.cuts.push(end);
    }

    fn undo(&mut self, _end: &usize, _depth: usize) {
        self.cuts.pop();
    }

    fn is_terminal(&self, _depth: usize) -> bool {
        self.start() == self.chars.len()
    }

    fn snapshot(&self) -> Vec<String> {
        let mut start = 0;
        self.cuts
            .iter()
            .map(|&end| {
                let piece = self.chars[start..end].iter().collect();
                start = end;
                piece
            })
            .collect()
    }

    fn name(&self) -> &str {
        "palindrome partitioning"
    }
}

/// Every way to cut `s` into palindromes. The empty string has one
/// partition with no pieces.
#[must_use]
pub fn palindrome_partitioning(s: &str) -> Vec<Vec<String>> {
    Backtracker::new(PalindromePartitioning::new(s)).solve_all()
}
