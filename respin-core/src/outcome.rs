//! Result type for null-model driver runs.

use crate::graph::UndirectedGraph;

/// The outcome of one driver invocation: the rewired graph plus the
/// counters needed to tell a full rewire from a truncated one.
///
/// A run that exhausts its attempt budget still returns the best-effort
/// graph accumulated so far; [`RewireOutcome::quota_met`] is the signal that
/// distinguishes it from a fully compliant run.
///
/// # Examples
/// ```
/// use respin_core::{RewireOptions, UndirectedGraph, random_1k};
///
/// let cycle = UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 4), (4, 1)]).expect("simple");
/// let outcome = random_1k(&cycle, &RewireOptions::new().with_max_tries(10)).expect("valid input");
/// assert!(outcome.attempts() <= 10);
/// assert_eq!(outcome.graph().edge_count(), cycle.edge_count());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RewireOutcome {
    graph: UndirectedGraph,
    swaps_completed: u64,
    attempts: u64,
    swap_target: u64,
}

impl RewireOutcome {
    pub(crate) const fn new(
        graph: UndirectedGraph,
        swaps_completed: u64,
        attempts: u64,
        swap_target: u64,
    ) -> Self {
        Self {
            graph,
            swaps_completed,
            attempts,
            swap_target,
        }
    }

    /// The rewired graph, independent of the caller's input.
    #[must_use]
    pub const fn graph(&self) -> &UndirectedGraph {
        &self.graph
    }

    /// Consumes the outcome and returns the rewired graph.
    #[must_use]
    pub fn into_graph(self) -> UndirectedGraph {
        self.graph
    }

    /// Number of committed swaps.
    #[must_use]
    pub const fn swaps_completed(&self) -> u64 {
        self.swaps_completed
    }

    /// Number of attempts charged against the budget, degenerate draws and
    /// rejections included.
    #[must_use]
    pub const fn attempts(&self) -> u64 {
        self.attempts
    }

    /// The success quota the run was asked for.
    #[must_use]
    pub const fn swap_target(&self) -> u64 {
        self.swap_target
    }

    /// Returns `true` when the run committed its full swap quota.
    #[must_use]
    pub const fn quota_met(&self) -> bool {
        self.swaps_completed >= self.swap_target
    }
}
