//! Candidate-selection policies, one per null-model family.
//!
//! Selectors read the live graph and draw from the run's seeded RNG; all
//! structural validation beyond the draw itself is the engine pre-check's
//! job, so a selector may return a candidate the engine then discards as
//! degenerate.

use rand::{Rng, rngs::SmallRng};

use crate::{
    engine::{CandidateSelector, SwapProposal},
    graph::{Edge, NodeId, UndirectedGraph},
    sampler::DegreeSampler,
};

/// Draws a uniform neighbour of `node`, or `None` for isolated nodes.
fn uniform_neighbor(graph: &UndirectedGraph, node: NodeId, rng: &mut SmallRng) -> Option<NodeId> {
    let degree = graph.degree(node);
    if degree == 0 {
        return None;
    }
    graph.neighbors(node).nth(rng.gen_range(0..degree))
}

/// Draws two distinct uniform indices below `len`.
fn distinct_index_pair(len: usize, rng: &mut SmallRng) -> Option<(usize, usize)> {
    if len < 2 {
        return None;
    }
    let first = rng.gen_range(0..len);
    let mut second = rng.gen_range(0..len - 1);
    if second >= first {
        second += 1;
    }
    Some((first, second))
}

/// 0K policy: a uniform existing edge is cut and a uniform unlinked node
/// pair is joined. Degree counts are not preserved, only the edge count.
pub(crate) struct UniformRelocate;

impl CandidateSelector for UniformRelocate {
    fn propose(&mut self, graph: &UndirectedGraph, rng: &mut SmallRng) -> Option<SwapProposal> {
        let edges: Vec<Edge> = graph.edges().collect();
        let cut = edges.get(rng.gen_range(0..edges.len().max(1))).copied()?;
        let nodes: Vec<NodeId> = graph.nodes().collect();
        let (i, j) = distinct_index_pair(nodes.len(), rng)?;
        let x = nodes.get(i).copied()?;
        let y = nodes.get(j).copied()?;
        if graph.has_edge(x, y) {
            return None;
        }
        Some(SwapProposal::relocate(cut.left(), cut.right(), x, y))
    }
}

/// 1K-family policy: two degree-biased nodes, one uniform neighbour each,
/// proposed as a cross swap.
pub(crate) struct DegreeBiasedCross {
    sampler: DegreeSampler,
}

impl DegreeBiasedCross {
    pub(crate) fn new(graph: &UndirectedGraph) -> Self {
        Self {
            sampler: DegreeSampler::new(graph),
        }
    }
}

impl CandidateSelector for DegreeBiasedCross {
    fn propose(&mut self, graph: &UndirectedGraph, rng: &mut SmallRng) -> Option<SwapProposal> {
        let (u, x) = self.sampler.sample_pair(rng)?;
        let v = uniform_neighbor(graph, u, rng)?;
        let y = uniform_neighbor(graph, x, rng)?;
        Some(SwapProposal::cross(u, v, x, y))
    }
}

/// Rich-club creation policy: two uniform hubs trade their non-hub
/// neighbours for a direct hub-hub link.
pub(crate) struct HubCross {
    threshold: usize,
}

impl HubCross {
    pub(crate) const fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    fn hubs(&self, graph: &UndirectedGraph) -> Vec<NodeId> {
        graph
            .degrees()
            .filter(|&(_, degree)| degree >= self.threshold)
            .map(|(node, _)| node)
            .collect()
    }
}

impl CandidateSelector for HubCross {
    fn propose(&mut self, graph: &UndirectedGraph, rng: &mut SmallRng) -> Option<SwapProposal> {
        let hubs = self.hubs(graph);
        let (i, j) = distinct_index_pair(hubs.len(), rng)?;
        let u = hubs.get(i).copied()?;
        let y = hubs.get(j).copied()?;
        let v = uniform_neighbor(graph, u, rng)?;
        let x = uniform_neighbor(graph, y, rng)?;
        // The traded neighbours must sit outside the club so the swap only
        // ever adds hub-hub and non-hub-non-hub links.
        if graph.degree(v) > self.threshold || graph.degree(x) > self.threshold {
            return None;
        }
        Some(SwapProposal::cross(u, v, x, y))
    }

    /// Exhausted once every hub pair is already linked. Recomputed from the
    /// live graph so the count can never drift after swaps.
    fn exhausted(&self, graph: &UndirectedGraph) -> bool {
        let hubs = self.hubs(graph);
        let possible = hubs.len() * hubs.len().saturating_sub(1) / 2;
        let linked = graph
            .edges()
            .filter(|edge| {
                graph.degree(edge.left()) >= self.threshold
                    && graph.degree(edge.right()) >= self.threshold
            })
            .count();
        linked >= possible
    }
}

/// Rich-club destruction policy: a hub-hub edge and a non-hub-non-hub edge
/// are crossed, replacing both class-internal links with mixed ones.
pub(crate) struct HubBreak {
    threshold: usize,
}

impl HubBreak {
    pub(crate) const fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    fn is_hub(&self, graph: &UndirectedGraph, node: NodeId) -> bool {
        graph.degree(node) > self.threshold
    }

    fn partition(&self, graph: &UndirectedGraph) -> (Vec<Edge>, Vec<Edge>) {
        let mut hub_edges = Vec::new();
        let mut plain_edges = Vec::new();
        for edge in graph.edges() {
            let left_hub = self.is_hub(graph, edge.left());
            let right_hub = self.is_hub(graph, edge.right());
            if left_hub && right_hub {
                hub_edges.push(edge);
            } else if !left_hub && !right_hub {
                plain_edges.push(edge);
            }
        }
        (hub_edges, plain_edges)
    }
}

impl CandidateSelector for HubBreak {
    fn propose(&mut self, graph: &UndirectedGraph, rng: &mut SmallRng) -> Option<SwapProposal> {
        let (hub_edges, plain_edges) = self.partition(graph);
        let rich = hub_edges
            .get(rng.gen_range(0..hub_edges.len().max(1)))
            .copied()?;
        let plain = plain_edges
            .get(rng.gen_range(0..plain_edges.len().max(1)))
            .copied()?;
        Some(SwapProposal::cross(
            rich.left(),
            rich.right(),
            plain.left(),
            plain.right(),
        ))
    }

    fn exhausted(&self, graph: &UndirectedGraph) -> bool {
        let (hub_edges, plain_edges) = self.partition(graph);
        hub_edges.is_empty() || plain_edges.is_empty()
    }
}

/// Remixing policy: a 1K draw whose four endpoints are re-paired by sorted
/// degree. Assortative runs link adjacent ranks, disassortative runs link
/// the outer and inner ranks.
pub(crate) struct DegreeSortedRepair {
    sampler: DegreeSampler,
    assortative: bool,
}

impl DegreeSortedRepair {
    pub(crate) fn new(graph: &UndirectedGraph, assortative: bool) -> Self {
        Self {
            sampler: DegreeSampler::new(graph),
            assortative,
        }
    }
}

impl CandidateSelector for DegreeSortedRepair {
    fn propose(&mut self, graph: &UndirectedGraph, rng: &mut SmallRng) -> Option<SwapProposal> {
        let (u, x) = self.sampler.sample_pair(rng)?;
        let v = uniform_neighbor(graph, u, rng)?;
        let y = uniform_neighbor(graph, x, rng)?;
        let mut ranked = [u, v, x, y];
        ranked.sort_by(|a, b| graph.degree(*b).cmp(&graph.degree(*a)));
        let [first, second, third, fourth] = ranked;
        let added = if self.assortative {
            [Edge::new(first, second), Edge::new(third, fourth)]
        } else {
            [Edge::new(first, fourth), Edge::new(second, third)]
        };
        Some(SwapProposal::repair(
            [Edge::new(u, v), Edge::new(x, y)],
            added,
        ))
    }
}
