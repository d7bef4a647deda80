//! Result sinks: what the driver does with a terminal state.
//!
//! A sink returns `ControlFlow::Break` to end the whole search and
//! `ControlFlow::Continue` to carry on with the remaining candidates.

use crate::search::problem::Problem;
use std::ops::ControlFlow;

/// Receives terminal states from the driver.
pub trait Sink<P: Problem> {
    /// Called with the problem in a terminal state.
    fn accept(&mut self, problem: &P) -> ControlFlow<()>;
}

/// Keeps the first solution and stops the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct First<S> {
    solution: Option<S>,
}

impl<S> First<S> {
    /// An empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { solution: None }
    }

    /// The solution, if one was found.
    pub fn into_inner(self) -> Option<S> {
        self.solution
    }
}

impl<S> Default for First<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Problem> Sink<P> for First<P::Solution> {
    fn accept(&mut self, problem: &P) -> ControlFlow<()> {
        self.solution = Some(problem.snapshot());
        ControlFlow::Break(())
    }
}

/// Keeps every solution, in the order found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collect<S> {
    solutions: Vec<S>,
}

impl<S> Collect<S> {
    /// An empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            solutions: Vec::new(),
        }
    }

    /// The collected solutions.
    pub fn into_inner(self) -> Vec<S> {
        self.solutions
    }
}

impl<S> Default for Collect<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Problem> Sink<P> for Collect<P::Solution> {
    fn accept(&mut self, problem: &P) -> ControlFlow<()> {
        self.solutions.push(problem.snapshot());
        ControlFlow::Continue(())
    }
}

/// Keeps at most `limit` solutions, then stops the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limit<S> {
    solutions: Vec<S>,
    limit: usize,
}

impl<S> Limit<S> {
    /// A sink that stops after `limit` solutions.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            solutions: Vec::new(),
            limit,
        }
    }

    /// Whether the limit has been reached.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.solutions.len() >= self.limit
    }

    /// The collected solutions.
    pub fn into_inner(self) -> Vec<S> {
        self.solutions
    }
}

impl<P: Problem> Sink<P> for Limit<P::Solution> {
    fn accept(&mut self, problem: &P) -> ControlFlow<()> {
        if !self.is_full() {
            self.solutions.push(problem.snapshot());
        }
        if self.is_full() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// Counts terminal states without copying them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Count {
    count: usize,
}

impl Count {
    /// Number of terminal states seen.
    #[must_use]
    pub const fn get(&self) -> usize {
        self.count
    }
}

impl<P: Problem> Sink<P> for Count {
    fn accept(&mut self, _problem: &P) -> ControlFlow<()> {
        self.count += 1;
        ControlFlow::Continue(())
    }
}

/// Adapts a closure into a sink.
pub struct Visit<F>(pub F);

impl<P, F> Sink<P> for Visit<F>
where
    P: Problem,
    F: FnMut(&P) -> ControlFlow<()>,
{
    fn accept(&mut self, problem: &P) -> ControlFlow<()> {
        (self.0)(problem)
    }
}
