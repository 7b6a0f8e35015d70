//! Shared graph fixtures for the test suites.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::graph::UndirectedGraph;

/// Cycle on `0..n`.
pub(crate) fn cycle_graph(n: u64) -> UndirectedGraph {
    UndirectedGraph::from_edges((0..n).map(|i| (i, (i + 1) % n))).expect("cycle edge list")
}

/// Path on `0..n`.
pub(crate) fn path_graph(n: u64) -> UndirectedGraph {
    UndirectedGraph::from_edges((0..n.saturating_sub(1)).map(|i| (i, i + 1)))
        .expect("path edge list")
}

/// Star with centre `0` and `n - 1` leaves.
pub(crate) fn star_graph(n: u64) -> UndirectedGraph {
    UndirectedGraph::from_edges((1..n).map(|leaf| (0, leaf))).expect("star edge list")
}

/// Complete graph on `0..n`.
pub(crate) fn complete_graph(n: u64) -> UndirectedGraph {
    UndirectedGraph::from_edges((0..n).flat_map(|a| (a + 1..n).map(move |b| (a, b))))
        .expect("complete edge list")
}

/// Seven nodes with mixed degrees (one to four) and two triangles.
pub(crate) fn mixed_graph() -> UndirectedGraph {
    UndirectedGraph::from_edges([
        (0, 1),
        (1, 2),
        (2, 0),
        (2, 3),
        (3, 4),
        (4, 5),
        (5, 6),
        (6, 4),
        (1, 4),
        (0, 5),
    ])
    .expect("mixed edge list")
}

/// Two degree-3 hubs, disjoint leaf sets and one leaf-leaf bridge.
pub(crate) fn twin_hub_graph() -> UndirectedGraph {
    UndirectedGraph::from_edges([(0, 2), (0, 3), (0, 4), (1, 5), (1, 6), (1, 7), (4, 5)])
        .expect("twin hub edge list")
}

/// Connected random graph: a random spanning tree plus `extra` chords.
pub(crate) fn random_connected_graph(n: u64, extra: u64, seed: u64) -> UndirectedGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = UndirectedGraph::new();
    for node in 1..n {
        let anchor = rng.gen_range(0..node);
        graph
            .add_edge(node.into(), anchor.into())
            .expect("tree edges are fresh");
    }
    let mut added = 0;
    let mut budget = extra * 8;
    while added < extra && budget > 0 {
        budget -= 1;
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a == b || graph.has_edge(a.into(), b.into()) {
            continue;
        }
        graph.add_edge(a.into(), b.into()).expect("chord is fresh");
        added += 1;
    }
    graph
}

/// Sorted degree multiset of a graph.
pub(crate) fn degree_multiset(graph: &UndirectedGraph) -> Vec<usize> {
    let mut degrees: Vec<usize> = graph.degrees().map(|(_, degree)| degree).collect();
    degrees.sort_unstable();
    degrees
}
