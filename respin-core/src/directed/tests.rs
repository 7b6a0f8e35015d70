//! Unit tests for the legacy directed variant.

use std::collections::BTreeMap;

use crate::{
    error::RewireErrorCode,
    graph::{GraphErrorCode, NodeId},
    models::RewireOptions,
};

use super::{DirectedGraph, random_1kd};

fn directed_fixture() -> DirectedGraph {
    DirectedGraph::from_arcs([(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).expect("simple arc list")
}

fn out_degree_multiset(graph: &DirectedGraph) -> Vec<usize> {
    let mut degrees: Vec<usize> = graph.nodes().map(|node| graph.out_degree(node)).collect();
    degrees.sort_unstable();
    degrees
}

fn in_degree_multiset(graph: &DirectedGraph) -> Vec<usize> {
    let mut incoming: BTreeMap<NodeId, usize> = graph.nodes().map(|node| (node, 0)).collect();
    for (_, head) in graph.arcs() {
        if let Some(count) = incoming.get_mut(&head) {
            *count += 1;
        }
    }
    let mut degrees: Vec<usize> = incoming.into_values().collect();
    degrees.sort_unstable();
    degrees
}

#[test]
fn arcs_are_directional() {
    let graph = directed_fixture();
    assert!(graph.has_arc(NodeId::new(0), NodeId::new(1)));
    assert!(!graph.has_arc(NodeId::new(1), NodeId::new(0)));
}

#[test]
fn rejects_self_loops_and_duplicate_arcs() {
    let mut graph = directed_fixture();
    let err = graph
        .add_arc(NodeId::new(1), NodeId::new(1))
        .expect_err("self-loop must be rejected");
    assert_eq!(err.code(), GraphErrorCode::SelfLoop);
    let err = graph
        .add_arc(NodeId::new(0), NodeId::new(1))
        .expect_err("duplicate arc must be rejected");
    assert_eq!(err.code(), GraphErrorCode::DuplicateEdge);
    let err = graph
        .remove_arc(NodeId::new(1), NodeId::new(0))
        .expect_err("reverse arc is absent");
    assert_eq!(err.code(), GraphErrorCode::EdgeNotFound);
}

#[test]
fn swaps_preserve_arc_count_and_degree_sequences() {
    let input = directed_fixture();
    let options = RewireOptions::new()
        .with_n_swap(3)
        .with_max_tries(200)
        .with_rng_seed(23);
    let outcome = random_1kd(&input, &options).expect("valid input");
    assert_eq!(outcome.graph().arc_count(), input.arc_count());
    assert_eq!(outcome.graph().node_count(), input.node_count());
    assert_eq!(
        out_degree_multiset(outcome.graph()),
        out_degree_multiset(&input)
    );
    assert_eq!(
        in_degree_multiset(outcome.graph()),
        in_degree_multiset(&input)
    );
}

#[test]
fn fixed_seed_reproduces_the_run() {
    let input = directed_fixture();
    let options = RewireOptions::new()
        .with_n_swap(2)
        .with_max_tries(100)
        .with_rng_seed(9);
    let first = random_1kd(&input, &options).expect("valid input");
    let second = random_1kd(&input, &options).expect("valid input");
    assert_eq!(first, second);
}

#[test]
fn all_degenerate_runs_return_the_input() {
    // Every arc shares node 0, so no two arcs have four distinct endpoints.
    let input = DirectedGraph::from_arcs([(0, 1), (0, 2), (0, 3)]).expect("simple arc list");
    let options = RewireOptions::new().with_max_tries(25).with_rng_seed(31);
    let outcome = random_1kd(&input, &options).expect("valid input");
    assert_eq!(outcome.graph(), &input);
    assert_eq!(outcome.swaps_completed(), 0);
    assert_eq!(outcome.attempts(), 25);
    assert!(!outcome.quota_met());
}

#[test]
fn rejects_undersized_graphs() {
    let graph = DirectedGraph::from_arcs([(0, 1), (1, 2)]).expect("simple arc list");
    let err = random_1kd(&graph, &RewireOptions::new()).expect_err("must be rejected");
    assert_eq!(err.code(), RewireErrorCode::TooFewNodes);
}

#[test]
fn rejects_quota_above_the_attempt_ceiling() {
    let input = directed_fixture();
    let options = RewireOptions::new().with_n_swap(5).with_max_tries(3);
    let err = random_1kd(&input, &options).expect_err("precondition must fail");
    assert_eq!(err.code(), RewireErrorCode::SwapQuotaExceedsTries);
}
