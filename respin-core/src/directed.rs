//! Legacy rewiring for directed graphs.
//!
//! This variant predates the undirected engine and carries a materially
//! weaker contract: no degree-biased sampling, no connectivity predicate, no
//! clustering checks. It is kept apart from the engine on purpose: folding
//! it in would suggest guarantees it does not make.

use std::collections::{BTreeMap, BTreeSet};

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{instrument, warn};

use crate::{
    error::{Result, RewireError},
    graph::{GraphError, NodeId},
    models::RewireOptions,
};

/// Minimum node count for the directed swap's four distinct endpoints.
const MIN_NODES_DIRECTED: usize = 4;

/// Simple directed graph backed by successor sets.
///
/// Only the operations the legacy variant needs are provided: arc insertion
/// and removal, membership, and enumeration in deterministic order.
///
/// # Examples
/// ```
/// use respin_core::{DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_arcs([(0, 1), (1, 2)]).expect("simple arc list");
/// assert!(graph.has_arc(NodeId::new(0), NodeId::new(1)));
/// assert!(!graph.has_arc(NodeId::new(1), NodeId::new(0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    successors: BTreeMap<NodeId, BTreeSet<NodeId>>,
    arc_count: usize,
}

impl DirectedGraph {
    /// Creates an empty directed graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a `(tail, head)` arc list.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] or [`GraphError::DuplicateEdge`] when
    /// the list is not simple.
    pub fn from_arcs<I>(arcs: I) -> core::result::Result<Self, GraphError>
    where
        I: IntoIterator<Item = (u64, u64)>,
    {
        let mut graph = Self::new();
        for (tail, head) in arcs {
            graph.add_arc(NodeId::new(tail), NodeId::new(head))?;
        }
        Ok(graph)
    }

    /// Inserts an isolated node; a no-op when the node already exists.
    pub fn add_node(&mut self, node: NodeId) {
        self.successors.entry(node).or_default();
    }

    /// Adds the arc `tail -> head`.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when `tail == head` and
    /// [`GraphError::DuplicateEdge`] when the arc is already present.
    pub fn add_arc(&mut self, tail: NodeId, head: NodeId) -> core::result::Result<(), GraphError> {
        if tail == head {
            return Err(GraphError::SelfLoop { node: tail });
        }
        if self.has_arc(tail, head) {
            return Err(GraphError::DuplicateEdge {
                left: tail,
                right: head,
            });
        }
        self.successors.entry(tail).or_default().insert(head);
        self.successors.entry(head).or_default();
        self.arc_count += 1;
        Ok(())
    }

    /// Removes the arc `tail -> head`.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeNotFound`] when the arc is absent.
    pub fn remove_arc(
        &mut self,
        tail: NodeId,
        head: NodeId,
    ) -> core::result::Result<(), GraphError> {
        if !self.has_arc(tail, head) {
            return Err(GraphError::EdgeNotFound {
                left: tail,
                right: head,
            });
        }
        if let Some(heads) = self.successors.get_mut(&tail) {
            heads.remove(&head);
        }
        self.arc_count -= 1;
        Ok(())
    }

    /// Returns `true` when `tail -> head` is an arc.
    #[must_use]
    pub fn has_arc(&self, tail: NodeId, head: NodeId) -> bool {
        self.successors
            .get(&tail)
            .is_some_and(|heads| heads.contains(&head))
    }

    /// Iterates all arcs as `(tail, head)` in deterministic order.
    pub fn arcs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.successors.iter().flat_map(|(&tail, heads)| {
            heads.iter().copied().map(move |head| (tail, head))
        })
    }

    /// Iterates all nodes in ascending identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.successors.keys().copied()
    }

    /// Returns the out-degree of `node`.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.successors.get(&node).map_or(0, BTreeSet::len)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.successors.len()
    }

    /// Returns the number of arcs.
    #[must_use]
    pub const fn arc_count(&self) -> usize {
        self.arc_count
    }
}

/// The outcome of the legacy directed run.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectedOutcome {
    graph: DirectedGraph,
    swaps_completed: u64,
    attempts: u64,
    swap_target: u64,
}

impl DirectedOutcome {
    /// The rewired graph, independent of the caller's input.
    #[must_use]
    pub const fn graph(&self) -> &DirectedGraph {
        &self.graph
    }

    /// Consumes the outcome and returns the rewired graph.
    #[must_use]
    pub fn into_graph(self) -> DirectedGraph {
        self.graph
    }

    /// Number of committed swaps.
    #[must_use]
    pub const fn swaps_completed(&self) -> u64 {
        self.swaps_completed
    }

    /// Number of attempts charged against the budget.
    #[must_use]
    pub const fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Returns `true` when the run committed its full swap quota.
    #[must_use]
    pub const fn quota_met(&self) -> bool {
        self.swaps_completed >= self.swap_target
    }
}

/// Legacy directed 1K rewiring: uniform 2-arc swaps.
///
/// Two distinct arcs `u -> v` and `x -> y` are redirected to `u -> y` and
/// `x -> v` when the four endpoints are distinct and neither target arc
/// exists. Out- and in-degree sequences are preserved; connectivity is not
/// checked. `preserve_connectivity` and the clustering tolerance in
/// `options` are ignored by this variant.
///
/// # Errors
/// Returns [`RewireError::TooFewNodes`] below four nodes and
/// [`RewireError::SwapQuotaExceedsTries`] when `n_swap > max_tries`.
///
/// # Examples
/// ```
/// use respin_core::{DirectedGraph, RewireOptions, random_1kd};
///
/// let graph = DirectedGraph::from_arcs([(0, 1), (2, 3), (3, 0), (1, 2)]).expect("simple");
/// let outcome = random_1kd(&graph, &RewireOptions::new().with_max_tries(20)).expect("valid");
/// assert_eq!(outcome.graph().arc_count(), graph.arc_count());
/// ```
#[instrument(
    name = "model.random_1kd",
    err,
    skip(graph, options),
    fields(nodes = graph.node_count(), arcs = graph.arc_count(), n_swap = options.n_swap()),
)]
pub fn random_1kd(graph: &DirectedGraph, options: &RewireOptions) -> Result<DirectedOutcome> {
    if graph.node_count() < MIN_NODES_DIRECTED {
        return Err(RewireError::TooFewNodes {
            nodes: graph.node_count(),
            minimum: MIN_NODES_DIRECTED,
        });
    }
    if options.n_swap() > options.max_tries() {
        return Err(RewireError::SwapQuotaExceedsTries {
            n_swap: options.n_swap(),
            max_tries: options.max_tries(),
        });
    }

    let mut working = graph.clone();
    let mut rng = SmallRng::seed_from_u64(options.rng_seed());
    let mut attempts = 0u64;
    let mut swaps_completed = 0u64;

    while swaps_completed < options.n_swap() {
        if attempts >= options.max_tries() {
            warn!(
                attempts,
                swaps = swaps_completed,
                target = options.n_swap(),
                "attempt budget exhausted before swap quota was met"
            );
            break;
        }
        attempts += 1;

        let arcs: Vec<(NodeId, NodeId)> = working.arcs().collect();
        if arcs.len() < 2 {
            continue;
        }
        let first = rng.gen_range(0..arcs.len());
        let mut second = rng.gen_range(0..arcs.len() - 1);
        if second >= first {
            second += 1;
        }
        let Some(&(u, v)) = arcs.get(first) else {
            continue;
        };
        let Some(&(x, y)) = arcs.get(second) else {
            continue;
        };
        if u == x || u == y || v == x || v == y {
            continue;
        }
        if working.has_arc(u, y) || working.has_arc(x, v) {
            continue;
        }
        working.remove_arc(u, v)?;
        working.remove_arc(x, y)?;
        working.add_arc(u, y)?;
        working.add_arc(x, v)?;
        swaps_completed += 1;
    }

    Ok(DirectedOutcome {
        graph: working,
        swaps_completed,
        attempts,
        swap_target: options.n_swap(),
    })
}

#[cfg(test)]
mod tests;
