//! Null-model drivers.
//!
//! Each driver validates its input eagerly, then configures the rewiring
//! engine with a candidate-selection policy and an ordered predicate list.
//! The variants differ only in that configuration; the transactional loop is
//! shared.

mod selectors;

use rand::{SeedableRng, rngs::SmallRng};
use tracing::instrument;

use crate::{
    connectivity::is_connected,
    engine::{
        AcceptancePredicate, AttemptBudget, CandidateSelector, ClusteringSpectrumMatch,
        DegreeExchangeMatch, LocalClusteringMatch, PreserveConnectivity, run_rewire,
    },
    error::{Result, RewireError},
    graph::UndirectedGraph,
    outcome::RewireOutcome,
};

use self::selectors::{DegreeBiasedCross, DegreeSortedRepair, HubBreak, HubCross, UniformRelocate};

/// Default seed keeping unconfigured runs reproducible.
const DEFAULT_RNG_SEED: u64 = 0x5EED_D1CE;

/// Most variants need four distinct endpoints drawn from two existing edges.
const MIN_NODES: usize = 3;
/// The 1K variant insists on one extra node, as the reference does.
const MIN_NODES_1K: usize = 4;

/// Configuration shared by every null-model driver.
///
/// The defaults mirror the reference procedure: one successful swap, one
/// hundred attempts, connectivity preserved, a fixed RNG seed and exact
/// floating-point comparison for the clustering predicates.
///
/// # Examples
/// ```
/// use respin_core::RewireOptions;
///
/// let options = RewireOptions::new()
///     .with_n_swap(20)
///     .with_max_tries(2_000)
///     .with_rng_seed(7);
/// assert_eq!(options.n_swap(), 20);
/// assert!(options.preserve_connectivity());
/// ```
#[derive(Clone, Debug)]
pub struct RewireOptions {
    n_swap: u64,
    max_tries: u64,
    preserve_connectivity: bool,
    rng_seed: u64,
    clustering_tolerance: f64,
}

impl Default for RewireOptions {
    fn default() -> Self {
        Self {
            n_swap: 1,
            max_tries: 100,
            preserve_connectivity: true,
            rng_seed: DEFAULT_RNG_SEED,
            clustering_tolerance: 0.0,
        }
    }
}

impl RewireOptions {
    /// Creates options populated with the reference defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of successful swaps to aim for.
    #[must_use]
    pub const fn with_n_swap(mut self, n_swap: u64) -> Self {
        self.n_swap = n_swap;
        self
    }

    /// Sets the attempt ceiling that bounds the run.
    #[must_use]
    pub const fn with_max_tries(mut self, max_tries: u64) -> Self {
        self.max_tries = max_tries;
        self
    }

    /// Chooses whether swaps that disconnect the graph are rejected.
    #[must_use]
    pub const fn with_preserve_connectivity(mut self, preserve: bool) -> Self {
        self.preserve_connectivity = preserve;
        self
    }

    /// Seeds the run's RNG to make it deterministic.
    #[must_use]
    pub const fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Sets the absolute tolerance used by the clustering predicates.
    ///
    /// The default of `0.0` demands exact floating-point equality, matching
    /// the reference procedure; any positive value is a documented deviation
    /// that loosens 2.5K/3K acceptance.
    #[must_use]
    pub const fn with_clustering_tolerance(mut self, tolerance: f64) -> Self {
        self.clustering_tolerance = tolerance;
        self
    }

    /// Returns the configured success quota.
    #[must_use]
    pub const fn n_swap(&self) -> u64 {
        self.n_swap
    }

    /// Returns the configured attempt ceiling.
    #[must_use]
    pub const fn max_tries(&self) -> u64 {
        self.max_tries
    }

    /// Returns whether connectivity-preserving rejection is active.
    #[must_use]
    pub const fn preserve_connectivity(&self) -> bool {
        self.preserve_connectivity
    }

    /// Returns the configured RNG seed.
    #[must_use]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    /// Returns the clustering comparison tolerance.
    #[must_use]
    pub const fn clustering_tolerance(&self) -> f64 {
        self.clustering_tolerance
    }
}

/// Eager input validation shared by all undirected drivers.
///
/// Nothing is mutated when any check fails; the connectivity requirement
/// applies to the variants that demand a connected starting point no matter
/// whether connectivity preservation was requested.
fn validate(
    graph: &UndirectedGraph,
    options: &RewireOptions,
    minimum_nodes: usize,
    require_connected: bool,
) -> Result<AttemptBudget> {
    if graph.node_count() < minimum_nodes {
        return Err(RewireError::TooFewNodes {
            nodes: graph.node_count(),
            minimum: minimum_nodes,
        });
    }
    if options.n_swap() > options.max_tries() {
        return Err(RewireError::SwapQuotaExceedsTries {
            n_swap: options.n_swap(),
            max_tries: options.max_tries(),
        });
    }
    if require_connected && !is_connected(graph) {
        return Err(RewireError::Disconnected);
    }
    Ok(AttemptBudget {
        n_swap: options.n_swap(),
        max_tries: options.max_tries(),
    })
}

fn drive(
    graph: &UndirectedGraph,
    options: &RewireOptions,
    budget: AttemptBudget,
    selector: &mut dyn CandidateSelector,
    predicates: Vec<Box<dyn AcceptancePredicate>>,
) -> Result<RewireOutcome> {
    let mut rng = SmallRng::seed_from_u64(options.rng_seed());
    let mut ordered = predicates;
    if options.preserve_connectivity() {
        ordered.push(Box::new(PreserveConnectivity));
    }
    run_rewire(graph, budget, &mut rng, selector, &ordered).map_err(RewireError::from)
}

/// 0K null model: random reconnection preserving node and edge counts only.
///
/// A uniform existing edge is cut and a uniform currently-unlinked node pair
/// is joined; the degree sequence is free to drift.
///
/// # Errors
/// Returns [`RewireError::TooFewNodes`] for graphs below three nodes and
/// [`RewireError::SwapQuotaExceedsTries`] when `n_swap > max_tries`.
///
/// # Examples
/// ```
/// use respin_core::{RewireOptions, UndirectedGraph, random_0k};
///
/// let graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]).expect("simple");
/// let outcome = random_0k(&graph, &RewireOptions::new()).expect("valid input");
/// assert_eq!(outcome.graph().edge_count(), graph.edge_count());
/// ```
#[instrument(
    name = "model.random_0k",
    err,
    skip(graph, options),
    fields(nodes = graph.node_count(), edges = graph.edge_count(), n_swap = options.n_swap()),
)]
pub fn random_0k(graph: &UndirectedGraph, options: &RewireOptions) -> Result<RewireOutcome> {
    let budget = validate(graph, options, MIN_NODES, false)?;
    drive(graph, options, budget, &mut UniformRelocate, Vec::new())
}

/// 1K null model: degree-preserving random rewiring.
///
/// Degree-biased candidates keep the degree sequence exactly while all
/// higher-order structure is randomized.
///
/// # Errors
/// Returns [`RewireError::Disconnected`] for disconnected input,
/// [`RewireError::TooFewNodes`] below four nodes and
/// [`RewireError::SwapQuotaExceedsTries`] when `n_swap > max_tries`.
///
/// # Examples
/// ```
/// use respin_core::{RewireOptions, UndirectedGraph, random_1k};
///
/// let cycle = UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 4), (4, 1)]).expect("simple");
/// let outcome = random_1k(&cycle, &RewireOptions::new().with_max_tries(10)).expect("valid");
/// for node in outcome.graph().nodes() {
///     assert_eq!(outcome.graph().degree(node), 2);
/// }
/// ```
#[instrument(
    name = "model.random_1k",
    err,
    skip(graph, options),
    fields(nodes = graph.node_count(), edges = graph.edge_count(), n_swap = options.n_swap()),
)]
pub fn random_1k(graph: &UndirectedGraph, options: &RewireOptions) -> Result<RewireOutcome> {
    let budget = validate(graph, options, MIN_NODES_1K, true)?;
    let mut selector = DegreeBiasedCross::new(graph);
    drive(graph, options, budget, &mut selector, Vec::new())
}

/// 2K null model: preserves the joint degree distribution.
///
/// On top of the 1K policy, a swap is only accepted when the two exchanged
/// endpoints have equal degree, so every edge keeps the degree pair it
/// connects.
///
/// # Errors
/// As [`random_1k`], with a three-node minimum.
#[instrument(
    name = "model.random_2k",
    err,
    skip(graph, options),
    fields(nodes = graph.node_count(), edges = graph.edge_count(), n_swap = options.n_swap()),
)]
pub fn random_2k(graph: &UndirectedGraph, options: &RewireOptions) -> Result<RewireOutcome> {
    let budget = validate(graph, options, MIN_NODES, true)?;
    let mut selector = DegreeBiasedCross::new(graph);
    drive(
        graph,
        options,
        budget,
        &mut selector,
        vec![Box::new(DegreeExchangeMatch)],
    )
}

/// 2.5K null model: preserves the joint degree distribution and the
/// clustering spectrum.
///
/// A 2K swap is additionally rejected when the mean local clustering of any
/// touched degree class moves away from the input graph's value.
///
/// # Errors
/// As [`random_2k`].
#[instrument(
    name = "model.random_25k",
    err,
    skip(graph, options),
    fields(nodes = graph.node_count(), edges = graph.edge_count(), n_swap = options.n_swap()),
)]
pub fn random_25k(graph: &UndirectedGraph, options: &RewireOptions) -> Result<RewireOutcome> {
    let budget = validate(graph, options, MIN_NODES, true)?;
    let mut selector = DegreeBiasedCross::new(graph);
    drive(
        graph,
        options,
        budget,
        &mut selector,
        vec![
            Box::new(DegreeExchangeMatch),
            Box::new(ClusteringSpectrumMatch::new(options.clustering_tolerance())),
        ],
    )
}

/// 3K null model: preserves degree-correlated clustering node by node.
///
/// A 2K swap is additionally rejected when any touched node's local
/// clustering coefficient differs from its value in the input graph.
///
/// # Errors
/// As [`random_2k`].
#[instrument(
    name = "model.random_3k",
    err,
    skip(graph, options),
    fields(nodes = graph.node_count(), edges = graph.edge_count(), n_swap = options.n_swap()),
)]
pub fn random_3k(graph: &UndirectedGraph, options: &RewireOptions) -> Result<RewireOutcome> {
    let budget = validate(graph, options, MIN_NODES, true)?;
    let mut selector = DegreeBiasedCross::new(graph);
    drive(
        graph,
        options,
        budget,
        &mut selector,
        vec![
            Box::new(DegreeExchangeMatch),
            Box::new(LocalClusteringMatch::new(options.clustering_tolerance())),
        ],
    )
}

/// Rich-club creation: rewires hub neighbourhoods until the hubs form a
/// clique or the budget runs out.
///
/// Nodes with degree at least `hub_degree` count as hubs. Each accepted swap
/// replaces two hub-non-hub edges with one hub-hub and one
/// non-hub-non-hub edge; the run also ends as soon as every hub pair is
/// already linked.
///
/// # Errors
/// As [`random_2k`].
///
/// # Examples
/// ```
/// use respin_core::{RewireOptions, UndirectedGraph, rich_club_create};
///
/// let graph = UndirectedGraph::from_edges([
///     (0, 2), (0, 3), (0, 4), (1, 5), (1, 6), (1, 7), (4, 5),
/// ]).expect("simple");
/// let outcome = rich_club_create(&graph, 3, &RewireOptions::new().with_max_tries(50))
///     .expect("valid input");
/// assert_eq!(outcome.graph().edge_count(), graph.edge_count());
/// ```
#[instrument(
    name = "model.rich_club_create",
    err,
    skip(graph, options),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn rich_club_create(
    graph: &UndirectedGraph,
    hub_degree: usize,
    options: &RewireOptions,
) -> Result<RewireOutcome> {
    let budget = validate(graph, options, MIN_NODES, true)?;
    let mut selector = HubCross::new(hub_degree);
    drive(graph, options, budget, &mut selector, Vec::new())
}

/// Rich-club destruction: dissolves hub-hub links into mixed edges.
///
/// Nodes with degree strictly above `hub_degree` count as hubs. Each
/// accepted swap crosses a hub-hub edge with a non-hub-non-hub edge; the run
/// ends early once either edge class is empty.
///
/// # Errors
/// As [`random_2k`].
#[instrument(
    name = "model.rich_club_break",
    err,
    skip(graph, options),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn rich_club_break(
    graph: &UndirectedGraph,
    hub_degree: usize,
    options: &RewireOptions,
) -> Result<RewireOutcome> {
    let budget = validate(graph, options, MIN_NODES, true)?;
    let mut selector = HubBreak::new(hub_degree);
    drive(graph, options, budget, &mut selector, Vec::new())
}

/// Assortative remixing: links the drawn quadruple's similar-degree nodes.
///
/// The four endpoints of a degree-biased draw are re-paired in descending
/// degree order, first with second and third with fourth, pushing the degree
/// correlation upwards while the degree sequence stays fixed.
///
/// # Errors
/// As [`random_2k`].
#[instrument(
    name = "model.assort_mixing",
    err,
    skip(graph, options),
    fields(nodes = graph.node_count(), edges = graph.edge_count(), n_swap = options.n_swap()),
)]
pub fn assort_mixing(graph: &UndirectedGraph, options: &RewireOptions) -> Result<RewireOutcome> {
    let budget = validate(graph, options, MIN_NODES, true)?;
    let mut selector = DegreeSortedRepair::new(graph, true);
    drive(graph, options, budget, &mut selector, Vec::new())
}

/// Disassortative remixing: links the drawn quadruple's dissimilar-degree
/// nodes.
///
/// Like [`assort_mixing`] but pairing first with fourth and second with
/// third, pushing the degree correlation downwards.
///
/// # Errors
/// As [`random_2k`].
#[instrument(
    name = "model.disassort_mixing",
    err,
    skip(graph, options),
    fields(nodes = graph.node_count(), edges = graph.edge_count(), n_swap = options.n_swap()),
)]
pub fn disassort_mixing(graph: &UndirectedGraph, options: &RewireOptions) -> Result<RewireOutcome> {
    let budget = validate(graph, options, MIN_NODES, true)?;
    let mut selector = DegreeSortedRepair::new(graph, false);
    drive(graph, options, budget, &mut selector, Vec::new())
}

#[cfg(test)]
mod tests;
