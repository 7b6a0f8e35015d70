//! Acceptance predicates evaluated against a speculatively applied swap.
//!
//! Predicates are stateless readers: they see the pristine baseline graph,
//! the working graph with the proposal applied, and the proposal itself.
//! Drivers order them cheapest-first so expensive checks short-circuit.

use std::collections::BTreeSet;

use crate::{
    clustering::{average_clustering, degree_buckets, local_clustering},
    connectivity::is_connected,
    graph::{NodeId, UndirectedGraph},
};

use super::proposal::SwapProposal;

/// Read-only view handed to predicates after a speculative apply.
#[derive(Clone, Copy, Debug)]
pub struct PredicateContext<'a> {
    baseline: &'a UndirectedGraph,
    current: &'a UndirectedGraph,
    proposal: &'a SwapProposal,
}

impl<'a> PredicateContext<'a> {
    pub(crate) const fn new(
        baseline: &'a UndirectedGraph,
        current: &'a UndirectedGraph,
        proposal: &'a SwapProposal,
    ) -> Self {
        Self {
            baseline,
            current,
            proposal,
        }
    }

    /// The pristine copy of the driver's input graph.
    #[must_use]
    pub const fn baseline(&self) -> &'a UndirectedGraph {
        self.baseline
    }

    /// The working graph with the proposal speculatively applied.
    #[must_use]
    pub const fn current(&self) -> &'a UndirectedGraph {
        self.current
    }

    /// The applied proposal.
    #[must_use]
    pub const fn proposal(&self) -> &'a SwapProposal {
        self.proposal
    }

    /// The proposal's endpoints together with their current neighbourhoods.
    ///
    /// This is the node set the clustering predicates inspect: only these
    /// nodes can change coefficient under a swap that touches the endpoints.
    #[must_use]
    pub fn affected_neighbourhood(&self) -> BTreeSet<NodeId> {
        let mut affected: BTreeSet<NodeId> = self.proposal.endpoints().iter().copied().collect();
        for &endpoint in self.proposal.endpoints() {
            affected.extend(self.current.neighbors(endpoint));
        }
        affected
    }
}

/// A pure accept/reject decision over a speculatively applied swap.
pub trait AcceptancePredicate {
    /// Short name used in rollback diagnostics.
    fn name(&self) -> &'static str;

    /// Returns `true` when the swap may stand.
    fn accept(&self, ctx: &PredicateContext<'_>) -> bool;
}

/// Rejects swaps that disconnect the working graph.
#[derive(Clone, Copy, Debug, Default)]
pub struct PreserveConnectivity;

impl AcceptancePredicate for PreserveConnectivity {
    fn name(&self) -> &'static str {
        "connectivity"
    }

    fn accept(&self, ctx: &PredicateContext<'_>) -> bool {
        is_connected(ctx.current())
    }
}

/// Rejects cross swaps whose exchanged endpoints differ in degree.
///
/// Degrees are invariant under a cross swap, so evaluating after the
/// speculative apply reads the same values the proposal-time check would.
/// Proposals without an exchanged pair are accepted vacuously.
#[derive(Clone, Copy, Debug, Default)]
pub struct DegreeExchangeMatch;

impl AcceptancePredicate for DegreeExchangeMatch {
    fn name(&self) -> &'static str {
        "degree-match"
    }

    fn accept(&self, ctx: &PredicateContext<'_>) -> bool {
        let Some((v, y)) = ctx.proposal().exchanged() else {
            return true;
        };
        ctx.current().degree(v) == ctx.current().degree(y)
    }
}

/// Rejects swaps that move the average clustering of any touched degree
/// class away from the baseline.
///
/// The affected nodes are grouped by degree and each group's mean local
/// clustering is compared between baseline and working graph. The default
/// tolerance of `0.0` demands exact floating-point equality, reproducing the
/// reference behaviour; a positive tolerance is an explicit, documented
/// relaxation.
#[derive(Clone, Copy, Debug)]
pub struct ClusteringSpectrumMatch {
    tolerance: f64,
}

impl ClusteringSpectrumMatch {
    /// Creates the predicate with an absolute per-bucket tolerance.
    #[must_use]
    pub const fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl AcceptancePredicate for ClusteringSpectrumMatch {
    fn name(&self) -> &'static str {
        "clustering-spectrum"
    }

    fn accept(&self, ctx: &PredicateContext<'_>) -> bool {
        let affected = ctx.affected_neighbourhood();
        for bucket in degree_buckets(ctx.current(), affected).values() {
            let before = average_clustering(ctx.baseline(), bucket.iter().copied());
            let after = average_clustering(ctx.current(), bucket.iter().copied());
            if (before - after).abs() > self.tolerance {
                return false;
            }
        }
        true
    }
}

/// Rejects swaps that change any touched node's local clustering
/// coefficient relative to the baseline.
///
/// Same comparison convention as [`ClusteringSpectrumMatch`], applied per
/// node instead of per degree class.
#[derive(Clone, Copy, Debug)]
pub struct LocalClusteringMatch {
    tolerance: f64,
}

impl LocalClusteringMatch {
    /// Creates the predicate with an absolute per-node tolerance.
    #[must_use]
    pub const fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl AcceptancePredicate for LocalClusteringMatch {
    fn name(&self) -> &'static str {
        "local-clustering"
    }

    fn accept(&self, ctx: &PredicateContext<'_>) -> bool {
        for node in ctx.affected_neighbourhood() {
            let before = local_clustering(ctx.baseline(), node);
            let after = local_clustering(ctx.current(), node);
            if (before - after).abs() > self.tolerance {
                return false;
            }
        }
        true
    }
}
