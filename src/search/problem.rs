//! The capabilities a problem supplies to the backtracking driver.
//!
//! A problem *is* its search state: the driver holds it by value, asks it for
//! candidates at each depth, and mutates it through `apply`/`undo`. The
//! [`Applied`] guard pairs the two so that every mutation is reversed on
//! every exit path, including the early exit of a first-solution search.

use smallvec::SmallVec;
use std::ops::{Deref, DerefMut};

/// Candidate list returned by [`Problem::candidates`].
///
/// Most decision points branch at most eight ways (knight moves, grid
/// neighbours, queen columns on small boards), so those stay on the stack.
pub type Candidates<C> = SmallVec<[C; 8]>;

/// A backtracking problem.
///
/// Implementors hold the mutable partial solution and describe the decision
/// tree over it. `depth` is the number of candidates currently applied, so an
/// implementation can use it as a row, a position or a move counter.
///
/// `apply` followed by `undo` with the same candidate and depth must leave the
/// state exactly as it was. The driver relies on this to give every sibling
/// candidate the same starting state.
pub trait Problem {
    /// One admissible extension at a decision point.
    type Candidate;

    /// Independently owned copy of a terminal state.
    type Solution;

    /// The ordered candidates to try at `depth`. Order decides the order in
    /// which solutions are reported.
    fn candidates(&self, depth: usize) -> Candidates<Self::Candidate>;

    /// Whether applying `candidate` keeps the state feasible.
    ///
    /// Must not mutate the state. The default accepts every candidate.
    fn is_valid(&self, candidate: &Self::Candidate, depth: usize) -> bool {
        let _ = (candidate, depth);
        true
    }

    /// Extends the state with `candidate`.
    fn apply(&mut self, candidate: &Self::Candidate, depth: usize);

    /// Reverses a previous `apply(candidate, depth)`.
    fn undo(&mut self, candidate: &Self::Candidate, depth: usize);

    /// Whether the state at `depth` is complete.
    fn is_terminal(&self, depth: usize) -> bool;

    /// Copies the current (terminal) state out.
    fn snapshot(&self) -> Self::Solution;

    /// Label used in log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A candidate applied to a problem for the lifetime of the guard.
///
/// Creating the guard calls [`Problem::apply`]; dropping it calls
/// [`Problem::undo`] with the same candidate and depth.
pub struct Applied<'a, P: Problem> {
    problem: &'a mut P,
    candidate: P::Candidate,
    depth: usize,
}

impl<'a, P: Problem> Applied<'a, P> {
    /// Applies `candidate` at `depth` and returns the guard that will undo it.
    pub fn new(problem: &'a mut P, candidate: P::Candidate, depth: usize) -> Self {
        problem.apply(&candidate, depth);
        Self {
            problem,
            candidate,
            depth,
        }
    }

    /// The applied candidate.
    pub const fn candidate(&self) -> &P::Candidate {
        &self.candidate
    }
}

impl<P: Problem> Deref for Applied<'_, P> {
    type Target = P;

    fn deref(&self) -> &Self::Target {
        self.problem
    }
}

impl<P: Problem> DerefMut for Applied<'_, P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.problem
    }
}

impl<P: Problem> Drop for Applied<'_, P> {
    fn drop(&mut self) {
        self.problem.undo(&self.candidate, self.depth);
    }
}
