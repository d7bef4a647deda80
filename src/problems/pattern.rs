//! Pattern matching with `.` and `*`.
//!
//! `.` matches any single character and `x*` matches zero or more `x`. The
//! whole text has to match the whole pattern. At a starred element the
//! search first tries skipping it, then consuming one more character with
//! it; everything else is a plain one-character advance.

use crate::search::{Backtracker, Candidates, Problem};
use smallvec::smallvec;

/// A move through text and pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Match one text character against one pattern character.
    Advance,
    /// Drop a starred element without consuming text.
    Skip,
    /// Consume one text character with a starred element, staying on it.
    Repeat,
}

/// Search state: positions in the text and in the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    text: Vec<char>,
    pattern: Vec<char>,
    i: usize,
    j: usize,
}

impl PatternMatch {
    /// Both positions at the start.
    #[must_use]
    pub fn new(text: &str, pattern: &str) -> Self {
        Self {
            text: text.chars().collect(),
            pattern: pattern.chars().collect(),
            i: 0,
            j: 0,
        }
    }

    fn first_matches(&self) -> bool {
        match (self.text.get(self.i), self.pattern.get(self.j)) {
            (Some(&t), Some(&p)) => p == t || p == '.',
            _ => false,
        }
    }

    fn starred(&self) -> bool {
        self.pattern.get(self.j + 1) == Some(&'*')
    }
}

impl Problem for PatternMatch {
    type Candidate = Step;
    type Solution = ();

    fn candidates(&self, _depth: usize) -> Candidates<Step> {
        if self.j >= self.pattern.len() {
            Candidates::new()
        } else if self.starred() {
            smallvec![Step::Skip, Step::Repeat]
        } else {
            smallvec![Step::Advance]
        }
    }

    fn is_valid(&self, step: &Step, _depth: usize) -> bool {
        match step {
            Step::Skip => true,
            Step::Advance | Step::Repeat => self.first_matches(),
        }
    }

    fn apply(&mut self, step: &Step, _depth: usize) {
        match step {
            Step::Advance => {
                self.i += 1;
                self.j += 1;
            }
            Step::Skip => self.j += 2,
            Step::Repeat => self.i += 1,
        }
    }

    fn undo(&mut self, step: &Step, _depth: usize) {
        match step {
            Step::Advance => {
                self.i -= 1;
                self.j -= 1;
            }
            Step::Skip => self.j -= 2,
            Step::Repeat => self.i -= 1,
        }
    }

    fn is_terminal(&self, _depth: usize) -> bool {
        self.i == self.text.len() && self.j == self.pattern.len()
    }

    fn snapshot(&self) {}

    fn name(&self) -> &str {
        "pattern matching"
    }
}

/// Whether all of `s` matches all of `pattern`.
#[must_use]
pub fn string_pattern_matching(s: &str, pattern: &str) -> bool {
    Backtracker::new(PatternMatch::new(s, pattern)).solve().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_cases() {
        assert!(string_pattern_matching("aab", "c*a*b"));
        assert!(!string_pattern_matching("mississippi", "mis*is*p*."));
        assert!(string_pattern_matching("mississippi", "mis*is*ip*."));
    }

    #[test]
    fn test_literals_and_wildcards() {
        assert!(!string_pattern_matching("aa", "a"));
        assert!(string_pattern_matching("aa", "a*"));
        assert!(string_pattern_matching("ab", ".*"));
        assert!(string_pattern_matching("abc", "a.c"));
        assert!(!string_pattern_matching("abc", "a.d"));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(string_pattern_matching("", ""));
        assert!(string_pattern_matching("", "a*"));
        assert!(string_pattern_matching("", "a*b*.*"));
        assert!(!string_pattern_matching("a", ""));
        assert!(!string_pattern_matching("", "."));
    }

    #[test]
    fn test_positions_are_restored() {
        let mut search = Backtracker::new(PatternMatch::new("aab", "c*a*b"));
        assert_eq!(search.solve(), Some(()));
        assert_eq!((search.problem().i, search.problem().j), (0, 0));
    }
}
