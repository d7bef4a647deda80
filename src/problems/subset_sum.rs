//! Subsets of a list that add up to a target.
//!
//! Elements are chosen by increasing index, so each subset is reported once,
//! in the order its elements appear in the input. A branch is abandoned as
//! soon as its running sum would exceed the target, and a subset that hits
//! the target exactly is recorded without being extended further. A negative
//! target has no solutions, even when some elements are negative.

use crate::search::{Backtracker, Candidates, Problem};

/// Search state: indices chosen so far and their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetSum<'a> {
    nums: &'a [i64],
    target: i64,
    chosen: Vec<usize>,
    sum: i64,
}

impl<'a> SubsetSum<'a> {
    /// Starts with nothing chosen.
    #[must_use]
    pub const fn new(nums: &'a [i64], target: i64) -> Self {
        Self {
            nums,
            target,
            chosen: Vec::new(),
            sum: 0,
        }
    }

    /// The sum of the chosen elements.
    #[must_use]
    pub const fn sum(&self) -> i64 {
        self.sum
    }
}

impl Problem for SubsetSum<'_> {
    type Candidate = usize;
    type Solution = Vec<i64>;

    fn candidates(&self, _depth: usize) -> Candidates<usize> {
        if self.target < 0 {
            return Candidates::new();
        }
        let start = self.chosen.last().map_or(0, |&i| i + 1);
        (start..self.nums.len()).collect()
    }

    fn is_valid(&self, &index: &usize, _depth: usize) -> bool {
        self.sum
            .checked_add(self.nums[index])
            .is_some_and(|sum| sum <= self.target)
    }

    fn apply(&mut self, &index: &usize, _depth: usize) {
        self.chosen.push(index);
        self.sum += self.nums[index];
    }

    fn undo(&mut self, &index: &usize, _depth: usize) {
        self.chosen.pop();
        self.sum -= self.nums[index];
    }

    fn is_terminal(&self, _depth: usize) -> bool {
        self.sum == self.target
    }

    fn snapshot(&self) -> Vec<i64> {
        self.chosen.iter().map(|&i| self.nums[i]).collect()
    }

    fn name(&self) -> &str {
        "subset sum"
    }
}

/// Every subset of `nums` (by position) whose elements add up to `target`.
///
/// The empty subset is a solution for a zero target. A negative target has
/// no solutions.
#[must_use]
pub fn subset_sum(nums: &[i64], target: i64) -> Vec<Vec<i64>> {
    Backtracker::new(SubsetSum::new(nums, target)).solve_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_example() {
        assert_eq!(subset_sum(&[1, 2, 3], 3), vec![vec![1, 2], vec![3]]);
        assert_eq!(
            subset_sum(&[1, 2, 3, 4, 5], 5),
            vec![vec![1, 4], vec![2, 3], vec![5]]
        );
    }

    #[test]
    fn test_negative_elements() {
        assert_eq!(subset_sum(&[-1, 1, 2], 1), vec![vec![-1, 2], vec![1]]);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(subset_sum(&[], 3), Vec::<Vec<i64>>::new());
        assert_eq!(subset_sum(&[], 0), vec![Vec::<i64>::new()]);
        assert_eq!(subset_sum(&[4, 5], 0), vec![Vec::<i64>::new()]);
        assert!(subset_sum(&[1, 2], -1).is_empty());
        assert!(subset_sum(&[-1, 2], -1).is_empty());
        assert!(subset_sum(&[4, 5], 3).is_empty());
    }

    #[test]
    fn test_duplicates_are_positional() {
        assert_eq!(subset_sum(&[2, 2], 2), vec![vec![2], vec![2]]);
    }

    #[test]
    fn test_negative_target_through_backtracker() {
        let nums = [-1, -2, 3];
        let mut search = Backtracker::new(SubsetSum::new(&nums, -1));
        assert_eq!(search.solve(), None);
        assert_eq!(search.stats().candidates, 0);
        assert_eq!(search.solve_all(), subset_sum(&nums, -1));
    }

    #[test]
    fn test_state_is_reset() {
        let nums = [3, 1, 4, 1, 5, 9, 2, 6];
        let mut search = Backtracker::new(SubsetSum::new(&nums, 10));
        let first = search.solve_all();
        assert!(first.iter().all(|s| s.iter().sum::<i64>() == 10));
        assert_eq!(search.problem().sum(), 0);
        assert_eq!(search.solve_all(), first);
    }
}
