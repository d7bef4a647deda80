//! Combinations, with repetition, that add up to a target.
//!
//! Like subset sum, but a candidate can be picked again: after choosing the
//! candidate at index `i`, the next choice starts at `i` rather than `i + 1`.
//! Candidates have to be positive, otherwise a branch could grow forever.

use crate::error::{InvalidInput, Result};
use crate::search::{Backtracker, Candidates, Problem};
use log::debug;

/// Search state: indices picked so far (non-decreasing) and their total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationSum<'a> {
    candidates: &'a [i64],
    target: i64,
    picked: Vec<usize>,
    total: i64,
}

impl<'a> CombinationSum<'a> {
    /// # Errors
    ///
    /// `InvalidInput::NonPositiveCandidate` for the first candidate `<= 0`.
    pub fn new(candidates: &'a [i64], target: i64) -> Result<Self> {
        if let Some((index, &value)) = candidates.iter().enumerate().find(|(_, v)| **v <= 0) {
            debug!("combination sum: rejecting candidate {value} at {index}");
            return Err(InvalidInput::NonPositiveCandidate { index, value });
        }
        Ok(Self {
            candidates,
            target,
            picked: Vec::new(),
            total: 0,
        })
    }
}

impl Problem for CombinationSum<'_> {
    type Candidate = usize;
    type Solution = Vec<i64>;

    fn candidates(&self, _depth: usize) -> Candidates<usize> {
        let start = self.picked.last().copied().unwrap_or(0);
        (start..self.candidates.len()).collect()
    }

    fn is_valid(&self, &index: &usize, _depth: usize) -> bool {
        self.total
            .checked_add(self.candidates[index])
            .is_some_and(|total| total <= self.target)
    }

    fn apply(&mut self, &index: &usize, _depth: usize) {
        self.picked.push(index);
        self.total += self.candidates[index];
    }

    fn undo(&mut self, &index: &usize, _depth: usize) {
        self.picked.pop();
        self.total -= self.candidates[index];
    }

    fn is_terminal(&self, _depth: usize) -> bool {
        self.total == self.target
    }

    fn snapshot(&self) -> Vec<i64> {
        self.picked.iter().map(|&i| self.candidates[i]).collect()
    }

    fn name(&self) -> &str {
        "combination sum"
    }
}

/// Every multiset of `candidates` adding up to `target`, each listed in input
/// order.
///
/// # Errors
///
/// `InvalidInput::NonPositiveCandidate` if a candidate is zero or negative.
pub fn combination_sum(candidates: &[i64], target: i64) -> Result<Vec<Vec<i64>>> {
    Ok(Backtracker::new(CombinationSum::new(candidates, target)?).solve_all())
}
