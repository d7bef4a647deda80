//! All orderings of a list, by in-place swaps.
//!
//! Position `d` is filled by swapping it with every position `i >= d` in
//! turn. The resulting order is the swap order, not lexicographic order:
//! `[1, 2, 3]` gives `123, 132, 213, 231, 321, 312`.

use crate::search::{Backtracker, Candidates, Problem};

/// Search state: the list, permuted in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutations<T> {
    items: Vec<T>,
}

impl<T: Clone> Permutations<T> {
    /// Copies `items` as the starting order.
    #[must_use]
    pub fn new(items: &[T]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }

    /// The list in its current arrangement.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Problem for Permutations<T> {
    type Candidate = usize;
    type Solution = Vec<T>;

    fn candidates(&self, position: usize) -> Candidates<usize> {
        (position..self.items.len()).collect()
    }

    fn apply(&mut self, &other: &usize, position: usize) {
        self.items.swap(position, other);
    }

    fn undo(&mut self, &other: &usize, position: usize) {
        self.items.swap(position, other);
    }

    fn is_terminal(&self, position: usize) -> bool {
        position == self.items.len()
    }

    fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }

    fn name(&self) -> &str {
        "permutations"
    }
}

/// Every permutation of `items`, in swap order. Repeated elements give
/// repeated permutations; an empty list has exactly one, empty, permutation.
#[must_use]
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    Backtracker::new(Permutations::new(items)).solve_all()
}
