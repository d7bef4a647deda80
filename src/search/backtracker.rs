//! The generic depth-first driver.
//!
//! The driver owns a [`Problem`] and walks its decision tree:
//!
//! 1.  If the state is terminal, hand it to the sink. A sink that breaks ends
//!     the whole search; otherwise the driver returns to the parent, which goes
//!     on with its remaining candidates.
//! 2.  Otherwise ask the problem for its ordered candidates.
//! 3.  For each candidate that passes the validity predicate, apply it, descend
//!     one level and undo it again.
//!
//! Undo goes through an [`Applied`] guard, so the state observed by the next
//! sibling is the state the first sibling saw, including after a sink broke
//! out of the search. Solutions therefore have to be copied out by the sink
//! while the terminal state is live.

use crate::search::problem::{Applied, Problem};
use crate::search::sink::{Collect, Count, First, Limit, Sink};
use crate::search::stats::SearchStats;
use log::{debug, trace};
use std::ops::ControlFlow;

/// Runs backtracking searches over a problem.
#[derive(Debug, Clone)]
pub struct Backtracker<P: Problem> {
    problem: P,
    stats: SearchStats,
}

impl<P: Problem> Backtracker<P> {
    /// Wraps `problem`, which must be in its initial state.
    pub const fn new(problem: P) -> Self {
        Self {
            problem,
            stats: SearchStats {
                nodes: 0,
                candidates: 0,
                pruned: 0,
                backtracks: 0,
                solutions: 0,
                max_depth: 0,
            },
        }
    }

    /// Searches until `sink` breaks or the tree is exhausted.
    ///
    /// Returns `true` if the sink ended the search early.
    pub fn run<K: Sink<P>>(&mut self, sink: &mut K) -> bool {
        self.stats = SearchStats::default();
        debug!(target: "search", "starting search: {}", self.problem.name());

        let flow = descend(&mut self.problem, 0, sink, &mut self.stats);

        debug!(
            target: "search",
            "finished search: {} ({}, stopped early: {})",
            self.problem.name(),
            self.stats,
            flow.is_break()
        );
        flow.is_break()
    }

    /// First-solution mode: the first terminal state in candidate order.
    pub fn solve(&mut self) -> Option<P::Solution> {
        let mut sink = First::new();
        self.run(&mut sink);
        sink.into_inner()
    }

    /// Enumeration mode: every terminal state, in candidate order.
    pub fn solve_all(&mut self) -> Vec<P::Solution> {
        let mut sink = Collect::new();
        self.run(&mut sink);
        sink.into_inner()
    }

    /// Enumeration mode capped at `limit` solutions.
    pub fn solve_limited(&mut self, limit: usize) -> Vec<P::Solution> {
        if limit == 0 {
            self.stats = SearchStats::default();
            return Vec::new();
        }
        let mut sink = Limit::new(limit);
        self.run(&mut sink);
        sink.into_inner()
    }

    /// Number of terminal states, without copying any of them.
    pub fn count(&mut self) -> usize {
        let mut sink = Count::default();
        self.run(&mut sink);
        sink.get()
    }

    /// Statistics of the most recent run.
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The problem, back in its initial state between runs.
    pub const fn problem(&self) -> &P {
        &self.problem
    }

    /// Gives the problem back.
    pub fn into_problem(self) -> P {
        self.problem
    }
}

fn descend<P, K>(
    problem: &mut P,
    depth: usize,
    sink: &mut K,
    stats: &mut SearchStats,
) -> ControlFlow<()>
where
    P: Problem,
    K: Sink<P>,
{
    stats.enter(depth);

    if problem.is_terminal(depth) {
        stats.solutions += 1;
        trace!(target: "search", "terminal state at depth {depth}");
        return sink.accept(problem);
    }

    let candidates = problem.candidates(depth);
    stats.candidates += candidates.len();

    for candidate in candidates {
        if !problem.is_valid(&candidate, depth) {
            stats.pruned += 1;
            continue;
        }

        trace!(target: "search", "descending to depth {}", depth + 1);
        let flow = {
            let mut applied = Applied::new(&mut *problem, candidate, depth);
            descend(&mut *applied, depth + 1, sink, stats)
        };
        stats.backtracks += 1;

        if flow.is_break() {
            return flow;
        }
    }

    ControlFlow::Continue(())
}
