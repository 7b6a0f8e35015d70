//! Degree-biased node sampling.
//!
//! Swap candidates are drawn with probability proportional to current degree
//! so that high-degree nodes are rewired as often as their edges are. The
//! cumulative table is built once per driver call: 2-edge swaps exchange
//! which edges realise each degree but never the degrees themselves, so the
//! weights stay valid for the whole run.

use rand::Rng;

use crate::graph::{NodeId, UndirectedGraph};

/// Bounded number of redraws before a pair draw gives up.
///
/// A draw can only fail to produce distinct nodes when one node carries
/// almost all of the degree mass, and the attempt budget is the caller's
/// bound on retries, not ours.
const MAX_REDRAWS: usize = 32;

/// Samples node pairs weighted by current degree.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use respin_core::{DegreeSampler, UndirectedGraph};
///
/// let graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]).expect("simple");
/// let sampler = DegreeSampler::new(&graph);
/// let mut rng = SmallRng::seed_from_u64(7);
/// let (a, b) = sampler.sample_pair(&mut rng).expect("cycle has degree mass");
/// assert_ne!(a, b);
/// ```
#[derive(Clone, Debug)]
pub struct DegreeSampler {
    keys: Vec<NodeId>,
    cumulative: Vec<u64>,
    total: u64,
}

impl DegreeSampler {
    /// Builds the cumulative degree table for the graph's current node set.
    #[must_use]
    pub fn new(graph: &UndirectedGraph) -> Self {
        let mut keys = Vec::with_capacity(graph.node_count());
        let mut cumulative = Vec::with_capacity(graph.node_count());
        let mut running = 0u64;
        for (node, degree) in graph.degrees() {
            keys.push(node);
            running += degree as u64;
            cumulative.push(running);
        }
        Self {
            keys,
            cumulative,
            total: running,
        }
    }

    /// Returns `true` when no node carries any degree mass.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Draws a single node weighted by degree.
    ///
    /// Returns `None` when the graph has no edges.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<NodeId> {
        if self.total == 0 {
            return None;
        }
        let draw = rng.gen_range(0..self.total);
        let index = self.cumulative.partition_point(|&mass| mass <= draw);
        self.keys.get(index).copied()
    }

    /// Draws two distinct degree-weighted nodes.
    ///
    /// Equal draws are retried internally up to a fixed bound; `None` means
    /// the caller should charge a degenerate attempt against its budget and
    /// try again.
    pub fn sample_pair<R: Rng>(&self, rng: &mut R) -> Option<(NodeId, NodeId)> {
        let first = self.sample(rng)?;
        for _ in 0..MAX_REDRAWS {
            let second = self.sample(rng)?;
            if second != first {
                return Some((first, second));
            }
        }
        None
    }
}
