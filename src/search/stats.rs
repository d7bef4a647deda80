//! Counters collected while the driver runs.

use std::fmt::{self, Display, Formatter};

/// Statistics of a single driver run.
///
/// Reset at the start of every run, so a reused `Backtracker` reports the
/// last search only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SearchStats {
    /// States entered, the root included.
    pub nodes: usize,
    /// Candidates produced by the choice generator.
    pub candidates: usize,
    /// Candidates rejected by the validity predicate.
    pub pruned: usize,
    /// Applied candidates that were undone again.
    pub backtracks: usize,
    /// Terminal states handed to the sink.
    pub solutions: usize,
    /// Deepest depth reached.
    pub max_depth: usize,
}

impl SearchStats {
    pub(crate) const fn enter(&mut self, depth: usize) {
        self.nodes += 1;
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }

    /// Fraction of generated candidates that were pruned, in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn prune_ratio(&self) -> f64 {
        if self.candidates == 0 {
            0.0
        } else {
            self.pruned as f64 / self.candidates as f64
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes={} candidates={} pruned={} backtracks={} solutions={} max_depth={}",
            self.nodes, self.candidates, self.pruned, self.backtracks, self.solutions, self.max_depth
        )
    }
}
