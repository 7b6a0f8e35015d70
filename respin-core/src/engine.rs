//! Transactional edge-swap engine.
//!
//! The engine owns a working copy of a driver's input graph and runs the
//! proposal lifecycle: structural pre-check, speculative apply, predicate
//! evaluation in driver order, then commit or exact-inverse rollback. Every
//! null-model variant is a configuration of this loop (a candidate selector
//! plus an ordered predicate list) rather than its own control flow.

mod predicates;
mod proposal;

use rand::rngs::SmallRng;
use tracing::{debug, warn};

use crate::{
    graph::{GraphError, UndirectedGraph},
    outcome::RewireOutcome,
};

pub use self::predicates::{
    AcceptancePredicate, ClusteringSpectrumMatch, DegreeExchangeMatch, LocalClusteringMatch,
    PredicateContext, PreserveConnectivity,
};
pub use self::proposal::SwapProposal;

/// Supplies swap candidates for one null-model variant.
///
/// Selectors only read the graph; the engine owns all mutation. A `None`
/// proposal is a degenerate draw and is charged against the attempt budget
/// by the run loop.
pub trait CandidateSelector {
    /// Proposes the next candidate, or `None` when this draw is degenerate.
    fn propose(&mut self, graph: &UndirectedGraph, rng: &mut SmallRng) -> Option<SwapProposal>;

    /// Returns `true` when no further useful candidates can exist.
    ///
    /// The rich-club policies use this to end a run once their candidate
    /// pool is structurally empty; the answer must be derived from the live
    /// graph, never from cached state.
    fn exhausted(&self, graph: &UndirectedGraph) -> bool {
        let _ = graph;
        false
    }
}

/// Success quota and attempt ceiling for one driver run.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AttemptBudget {
    pub(crate) n_swap: u64,
    pub(crate) max_tries: u64,
}

/// Result of a single proposal attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum AttemptOutcome {
    /// The structural pre-check failed; nothing was mutated.
    Degenerate,
    /// A predicate rejected the applied swap; the mutation was rolled back.
    Rejected {
        /// Name of the rejecting predicate.
        predicate: &'static str,
    },
    /// All predicates passed; the mutation stands.
    Committed,
}

/// The transactional core: one working graph, one attempt at a time.
pub(crate) struct RewireEngine<'a> {
    baseline: &'a UndirectedGraph,
    graph: UndirectedGraph,
    swaps_completed: u64,
    attempts: u64,
}

impl<'a> RewireEngine<'a> {
    pub(crate) fn new(baseline: &'a UndirectedGraph) -> Self {
        Self {
            baseline,
            graph: baseline.clone(),
            swaps_completed: 0,
            attempts: 0,
        }
    }

    pub(crate) const fn graph(&self) -> &UndirectedGraph {
        &self.graph
    }

    pub(crate) const fn swaps_completed(&self) -> u64 {
        self.swaps_completed
    }

    /// Structural pre-check: endpoints pairwise distinct, every removal a
    /// current edge, every addition currently absent. Failing here costs an
    /// attempt but performs no mutation.
    fn precheck(&self, proposal: &SwapProposal) -> bool {
        proposal.endpoints_distinct()
            && proposal
                .removed()
                .iter()
                .all(|edge| self.graph.has_edge(edge.left(), edge.right()))
            && proposal
                .added()
                .iter()
                .all(|edge| !self.graph.has_edge(edge.left(), edge.right()))
    }

    fn apply(&mut self, proposal: &SwapProposal) -> Result<(), GraphError> {
        for edge in proposal.removed() {
            self.graph.remove_edge(edge.left(), edge.right())?;
        }
        for edge in proposal.added() {
            self.graph.add_edge(edge.left(), edge.right())?;
        }
        Ok(())
    }

    /// Exact inverse of [`Self::apply`]: the additions come back out in
    /// reverse order, then the removals go back in.
    fn rollback(&mut self, proposal: &SwapProposal) -> Result<(), GraphError> {
        for edge in proposal.added().iter().rev() {
            self.graph.remove_edge(edge.left(), edge.right())?;
        }
        for edge in proposal.removed().iter().rev() {
            self.graph.add_edge(edge.left(), edge.right())?;
        }
        Ok(())
    }

    /// Runs one proposal through the full lifecycle.
    ///
    /// A [`GraphError`] here means the pre-check and the store disagreed,
    /// which is a logic error; it is surfaced rather than swallowed.
    pub(crate) fn attempt(
        &mut self,
        proposal: &SwapProposal,
        predicates: &[Box<dyn AcceptancePredicate>],
    ) -> Result<AttemptOutcome, GraphError> {
        if !self.precheck(proposal) {
            return Ok(AttemptOutcome::Degenerate);
        }
        self.apply(proposal)?;
        for predicate in predicates {
            let ctx = PredicateContext::new(self.baseline, &self.graph, proposal);
            if !predicate.accept(&ctx) {
                self.rollback(proposal)?;
                debug!(predicate = predicate.name(), "swap rejected, rolled back");
                return Ok(AttemptOutcome::Rejected {
                    predicate: predicate.name(),
                });
            }
        }
        self.swaps_completed += 1;
        Ok(AttemptOutcome::Committed)
    }
}

/// Drives the engine until the swap quota, the attempt ceiling, or the
/// selector's exhaustion condition ends the run.
///
/// Every loop iteration, degenerate draws included, counts against
/// `max_tries`, so the loop always terminates. A quota shortfall is reported
/// through [`RewireOutcome::quota_met`] and a warning, never an error.
pub(crate) fn run_rewire(
    baseline: &UndirectedGraph,
    budget: AttemptBudget,
    rng: &mut SmallRng,
    selector: &mut dyn CandidateSelector,
    predicates: &[Box<dyn AcceptancePredicate>],
) -> Result<RewireOutcome, GraphError> {
    let mut engine = RewireEngine::new(baseline);
    while engine.swaps_completed() < budget.n_swap {
        if selector.exhausted(engine.graph()) {
            debug!(
                swaps = engine.swaps_completed(),
                "candidate pool exhausted, ending run early"
            );
            break;
        }
        if engine.attempts >= budget.max_tries {
            warn!(
                attempts = engine.attempts,
                swaps = engine.swaps_completed(),
                target = budget.n_swap,
                "attempt budget exhausted before swap quota was met"
            );
            break;
        }
        engine.attempts += 1;
        let Some(proposal) = selector.propose(engine.graph(), rng) else {
            continue;
        };
        engine.attempt(&proposal, predicates)?;
    }
    Ok(RewireOutcome::new(
        engine.graph,
        engine.swaps_completed,
        engine.attempts,
        budget.n_swap,
    ))
}
