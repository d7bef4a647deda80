//! Balanced strings of `n` pairs of parentheses.

use crate::search::{Backtracker, Candidates, Problem};
use smallvec::smallvec;

/// One character appended to the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    /// `(`
    Open,
    /// `)`
    Close,
}

/// Search state: the prefix and how many of each parenthesis it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parentheses {
    pairs: usize,
    prefix: String,
    open: usize,
    close: usize,
}

impl Parentheses {
    /// An empty prefix for `pairs` pairs.
    #[must_use]
    pub fn new(pairs: usize) -> Self {
        Self {
            pairs,
            prefix: String::with_capacity(2 * pairs),
            open: 0,
            close: 0,
        }
    }
}

impl Problem for Parentheses {
    type Candidate = Paren;
    type Solution = String;

    fn candidates(&self, _depth: usize) -> Candidates<Paren> {
        smallvec![Paren::Open, Paren::Close]
    }

    fn is_valid(&self, paren: &Paren, _depth: usize) -> bool {
        match paren {
            Paren::Open => self.open < self.pairs,
            Paren::Close => self.close < self.open,
        }
    }

    fn apply(&mut self, paren: &Paren, _depth: usize) {
        match paren {
            Paren::Open => {
                self.prefix.push('(');
                self.open += 1;
            }
            Paren::Close => {
                self.prefix.push(')');
                self.close += 1;
            }
        }
    }

    fn undo(&mut self, paren: &Paren, _depth: usize) {
        self.prefix.pop();
        match paren {
            Paren::Open => self.open -= 1,
            Paren::Close => self.close -= 1,
        }
    }

    fn is_terminal(&self, depth: usize) -> bool {
        depth == 2 * self.pairs
    }

    fn snapshot(&self) -> String {
        self.prefix.clone()
    }

    fn name(&self) -> &str {
        "valid parentheses"
    }
}

/// Every balanced string of `n` pairs, `(` tried before `)`. For `n == 0`
/// the only such string is empty.
#[must_use]
pub fn all_possible_valid_parentheses(n: usize) -> Vec<String> {
    Backtracker::new(Parentheses::new(n)).solve_all()
}
