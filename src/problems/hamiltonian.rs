//! Hamiltonian cycle in an undirected graph given as an adjacency matrix.
//!
//! The cycle starts at vertex 0; the remaining vertices are appended one at
//! a time, lowest number first, as long as they are adjacent to the previous
//! vertex and not yet on the path. The path is complete once it holds every
//! vertex and its last vertex is adjacent to 0.

use crate::error::Result;
use crate::search::{Backtracker, Candidates, Problem};
use crate::validate;
use bit_vec::BitVec;

/// Search state: the path from vertex 0 and the set of vertices on it.
#[derive(Debug, Clone)]
pub struct HamiltonianCycle<'a> {
    graph: &'a [Vec<u8>],
    n: usize,
    path: Vec<usize>,
    on_path: BitVec,
}

impl<'a> HamiltonianCycle<'a> {
    /// # Errors
    ///
    /// `Empty` or `NotSquare` for a malformed matrix, `OutOfRange` for an
    /// entry that is neither `0` nor `1`.
    pub fn new(graph: &'a [Vec<u8>]) -> Result<Self> {
        let n = validate::square(graph, "graph")?;
        validate::cells_within(graph, "graph", 0, 1)?;

        let mut on_path = BitVec::from_elem(n, false);
        on_path.set(0, true);
        Ok(Self {
            graph,
            n,
            path: vec![0],
            on_path,
        })
    }

    fn last(&self) -> usize {
        self.path.last().copied().unwrap_or(0)
    }
}

impl Problem for HamiltonianCycle<'_> {
    type Candidate = usize;
    type Solution = Vec<usize>;

    fn candidates(&self, _depth: usize) -> Candidates<usize> {
        (1..self.n).collect()
    }

    fn is_valid(&self, &vertex: &usize, _depth: usize) -> bool {
        self.graph[self.last()][vertex] == 1 && !self.on_path[vertex]
    }

    fn apply(&mut self, &vertex: &usize, _depth: usize) {
        self.path.push(vertex);
        self.on_path.set(vertex, true);
    }

    fn undo(&mut self, &vertex: &usize, _depth: usize) {
        self.path.pop();
        self.on_path.set(vertex, false);
    }

    fn is_terminal(&self, _depth: usize) -> bool {
        self.path.len() == self.n && self.graph[self.last()][0] == 1
    }

    fn snapshot(&self) -> Vec<usize> {
        let mut cycle = self.path.clone();
        cycle.push(0);
        cycle
    }

    fn name(&self) -> &str {
        "hamiltonian cycle"
    }
}

/// A Hamiltonian cycle through `graph`, written as the vertex sequence from
/// 0 back to 0, or `None` if there is none.
///
/// # Errors
///
/// See [`HamiltonianCycle::new`].
pub fn hamiltonian_cycle(graph: &[Vec<u8>]) -> Result<Option<Vec<usize>>> {
    Ok(Backtracker::new(HamiltonianCycle::new(graph)?).solve())
}

/// Whether `cycle` visits every vertex of `graph` exactly once, along edges,
/// and returns to where it started.
#[must_use]
pub fn is_hamiltonian_cycle(graph: &[Vec<u8>], cycle: &[usize]) -> bool {
    let n = graph.len();
    if cycle.len() != n + 1 || cycle.first() != cycle.last() {
        return false;
    }

    let mut seen = BitVec::from_elem(n, false);
    let distinct = cycle[..n].iter().all(|&v| {
        v < n && !seen[v] && {
            seen.set(v, true);
            true
        }
    });

    distinct
        && cycle
            .windows(2)
            .all(|w| graph[w[0]].get(w[1]) == Some(&1))
}
