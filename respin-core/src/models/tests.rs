//! Unit and property tests for the null-model drivers.

use proptest::prelude::{ProptestConfig, any, prop_assert, prop_assert_eq, proptest};
use rstest::rstest;

use crate::{
    clustering::{average_clustering, local_clustering},
    connectivity::is_connected,
    error::{Result, RewireErrorCode},
    graph::{NodeId, UndirectedGraph},
    outcome::RewireOutcome,
    test_utils::{
        complete_graph, cycle_graph, degree_multiset, mixed_graph, path_graph,
        random_connected_graph, star_graph, twin_hub_graph,
    },
};

use super::{
    RewireOptions, assort_mixing, disassort_mixing, random_0k, random_1k, random_2k, random_25k,
    random_3k, rich_club_break, rich_club_create,
};

type Driver = fn(&UndirectedGraph, &RewireOptions) -> Result<RewireOutcome>;

fn rich_club_create_3(graph: &UndirectedGraph, options: &RewireOptions) -> Result<RewireOutcome> {
    rich_club_create(graph, 3, options)
}

fn rich_club_break_3(graph: &UndirectedGraph, options: &RewireOptions) -> Result<RewireOutcome> {
    rich_club_break(graph, 3, options)
}

fn degree_preserving_drivers() -> Vec<(&'static str, Driver)> {
    vec![
        ("1k", random_1k as Driver),
        ("2k", random_2k),
        ("25k", random_25k),
        ("3k", random_3k),
        ("rich-club-create", rich_club_create_3),
        ("rich-club-break", rich_club_break_3),
        ("assort", assort_mixing),
        ("disassort", disassort_mixing),
    ]
}

fn all_drivers() -> Vec<(&'static str, Driver)> {
    let mut drivers = degree_preserving_drivers();
    drivers.push(("0k", random_0k));
    drivers
}

fn joint_degree_multiset(graph: &UndirectedGraph) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = graph
        .edges()
        .map(|edge| {
            let a = graph.degree(edge.left());
            let b = graph.degree(edge.right());
            (a.min(b), a.max(b))
        })
        .collect();
    pairs.sort_unstable();
    pairs
}

#[test]
fn degree_preserving_drivers_keep_the_degree_sequence() {
    let input = mixed_graph();
    let options = RewireOptions::new()
        .with_n_swap(5)
        .with_max_tries(400)
        .with_rng_seed(11);
    for (label, driver) in degree_preserving_drivers() {
        let outcome = driver(&input, &options).expect(label);
        assert_eq!(outcome.graph().node_count(), input.node_count(), "{label}");
        assert_eq!(outcome.graph().edge_count(), input.edge_count(), "{label}");
        assert_eq!(
            degree_multiset(outcome.graph()),
            degree_multiset(&input),
            "{label}"
        );
        assert!(is_connected(outcome.graph()), "{label}");
    }
}

#[test]
fn zero_k_preserves_counts_and_connectivity_only() {
    let input = mixed_graph();
    let options = RewireOptions::new()
        .with_n_swap(5)
        .with_max_tries(400)
        .with_rng_seed(7);
    let outcome = random_0k(&input, &options).expect("valid input");
    assert_eq!(outcome.graph().node_count(), input.node_count());
    assert_eq!(outcome.graph().edge_count(), input.edge_count());
    assert!(is_connected(outcome.graph()));
}

#[test]
fn every_driver_rejects_graphs_below_the_minimum() {
    let tiny = path_graph(2);
    let options = RewireOptions::new();
    for (label, driver) in all_drivers() {
        let err = driver(&tiny, &options).expect_err(label);
        assert_eq!(err.code(), RewireErrorCode::TooFewNodes, "{label}");
    }
}

#[test]
fn one_k_insists_on_four_nodes_where_others_accept_three() {
    let triangle = complete_graph(3);
    let options = RewireOptions::new().with_max_tries(5);
    let err = random_1k(&triangle, &options).expect_err("1k needs four nodes");
    assert_eq!(err.code(), RewireErrorCode::TooFewNodes);
    random_2k(&triangle, &options).expect("2k accepts a triangle");
}

#[test]
fn every_driver_rejects_quota_above_the_attempt_ceiling() {
    let input = mixed_graph();
    let options = RewireOptions::new().with_n_swap(5).with_max_tries(3);
    for (label, driver) in all_drivers() {
        let err = driver(&input, &options).expect_err(label);
        assert_eq!(err.code(), RewireErrorCode::SwapQuotaExceedsTries, "{label}");
    }
}

#[test]
fn connected_variants_reject_disconnected_input() {
    let split = UndirectedGraph::from_edges([(0, 1), (1, 2), (3, 4), (4, 5)]).expect("simple");
    let options = RewireOptions::new();
    for (label, driver) in degree_preserving_drivers() {
        let err = driver(&split, &options).expect_err(label);
        assert_eq!(err.code(), RewireErrorCode::Disconnected, "{label}");
    }
    random_0k(&split, &options.with_preserve_connectivity(false))
        .expect("0k accepts disconnected input");
}

#[rstest]
#[case::star(star_graph(6))]
#[case::complete(complete_graph(5))]
fn all_rejected_runs_return_the_input_edge_set(#[case] input: UndirectedGraph) {
    // On a star every candidate shares the hub; on a complete graph every
    // target edge already exists. Either way no swap can ever commit.
    let options = RewireOptions::new()
        .with_n_swap(3)
        .with_max_tries(25)
        .with_rng_seed(19);
    let outcome = random_1k(&input, &options).expect("valid input");
    assert_eq!(outcome.graph(), &input);
    assert_eq!(outcome.swaps_completed(), 0);
    assert_eq!(outcome.attempts(), 25);
    assert!(!outcome.quota_met());
}

#[test]
fn fixed_seed_reproduces_a_fixed_output() {
    let cycle = cycle_graph(4);
    let options = RewireOptions::new().with_max_tries(10).with_rng_seed(123);
    let first = random_1k(&cycle, &options).expect("valid input");
    let second = random_1k(&cycle, &options).expect("valid input");
    assert_eq!(first, second);
}

#[test]
fn one_k_rewires_the_four_cycle_across_seeds() {
    let cycle = cycle_graph(4);
    let mut rewired = 0;
    for seed in 0..32 {
        let options = RewireOptions::new().with_max_tries(10).with_rng_seed(seed);
        let outcome = random_1k(&cycle, &options).expect("valid input");
        assert!(is_connected(outcome.graph()), "seed {seed}");
        for node in outcome.graph().nodes() {
            assert_eq!(outcome.graph().degree(node), 2, "seed {seed}");
        }
        if outcome.graph() != &cycle {
            rewired += 1;
        }
    }
    assert!(rewired > 0, "no seed produced a distinct rewiring");
}

#[test]
fn two_k_preserves_the_joint_degree_distribution() {
    let input = mixed_graph();
    let options = RewireOptions::new()
        .with_n_swap(5)
        .with_max_tries(500)
        .with_rng_seed(29);
    let outcome = random_2k(&input, &options).expect("valid input");
    assert_eq!(
        joint_degree_multiset(outcome.graph()),
        joint_degree_multiset(&input)
    );
}

#[test]
fn three_k_preserves_every_local_coefficient() {
    // A long cycle is triangle-free, so the per-node predicate can accept
    // swaps that keep it triangle-free and the run actually commits.
    let input = cycle_graph(8);
    let options = RewireOptions::new()
        .with_n_swap(3)
        .with_max_tries(400)
        .with_rng_seed(41);
    let outcome = random_3k(&input, &options).expect("valid input");
    assert!(outcome.swaps_completed() > 0);
    for node in input.nodes() {
        assert_eq!(
            local_clustering(outcome.graph(), node),
            local_clustering(&input, node),
            "node {node}"
        );
    }
    assert_eq!(degree_multiset(outcome.graph()), degree_multiset(&input));
    assert!(is_connected(outcome.graph()));
}

#[test]
fn two_five_k_preserves_the_clustering_spectrum() {
    let input = cycle_graph(8);
    let options = RewireOptions::new()
        .with_n_swap(3)
        .with_max_tries(400)
        .with_rng_seed(43);
    let outcome = random_25k(&input, &options).expect("valid input");
    assert!(outcome.swaps_completed() > 0);
    // Every node keeps degree two, so the whole graph is one degree bucket.
    let before = average_clustering(&input, input.nodes());
    let after = average_clustering(outcome.graph(), outcome.graph().nodes());
    assert_eq!(before, after);
}

#[test]
fn rich_club_create_links_the_hubs_and_stops() {
    let input = twin_hub_graph();
    let options = RewireOptions::new()
        .with_n_swap(10)
        .with_max_tries(1_000)
        .with_rng_seed(5);
    let outcome = rich_club_create(&input, 3, &options).expect("valid input");
    assert!(outcome.graph().has_edge(NodeId::new(0), NodeId::new(1)));
    // Once the only hub pair is linked the candidate pool is exhausted, so
    // the run ends well short of both budget figures.
    assert!(!outcome.quota_met());
    assert!(outcome.attempts() < 1_000);
    assert_eq!(degree_multiset(outcome.graph()), degree_multiset(&input));
}

#[test]
fn rich_club_break_dissolves_the_hub_edge() {
    let input = UndirectedGraph::from_edges([
        (0, 1),
        (0, 2),
        (0, 3),
        (0, 4),
        (1, 5),
        (1, 6),
        (1, 7),
        (4, 5),
        (2, 3),
        (6, 7),
    ])
    .expect("simple edge list");
    let options = RewireOptions::new().with_max_tries(400).with_rng_seed(13);
    let outcome = rich_club_break(&input, 3, &options).expect("valid input");
    assert!(outcome.quota_met());
    assert!(!outcome.graph().has_edge(NodeId::new(0), NodeId::new(1)));
    assert_eq!(degree_multiset(outcome.graph()), degree_multiset(&input));
    assert!(is_connected(outcome.graph()));
}

#[rstest]
#[case::assortative(assort_mixing as Driver)]
#[case::disassortative(disassort_mixing as Driver)]
fn remixing_is_deterministic_and_degree_preserving(#[case] driver: Driver) {
    let input = mixed_graph();
    let options = RewireOptions::new()
        .with_n_swap(4)
        .with_max_tries(300)
        .with_rng_seed(17);
    let first = driver(&input, &options).expect("valid input");
    let second = driver(&input, &options).expect("valid input");
    assert_eq!(first, second);
    assert_eq!(degree_multiset(first.graph()), degree_multiset(&input));
    assert!(is_connected(first.graph()));
}

#[test]
fn connectivity_preservation_can_be_disabled() {
    let input = mixed_graph();
    let options = RewireOptions::new()
        .with_n_swap(5)
        .with_max_tries(400)
        .with_rng_seed(3)
        .with_preserve_connectivity(false);
    let outcome = random_1k(&input, &options).expect("valid input");
    assert_eq!(degree_multiset(outcome.graph()), degree_multiset(&input));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn one_k_preserves_structure_on_random_graphs(
        n in 5u64..12,
        extra in 0u64..6,
        graph_seed in any::<u64>(),
        run_seed in any::<u64>(),
    ) {
        let input = random_connected_graph(n, extra, graph_seed);
        let options = RewireOptions::new()
            .with_n_swap(4)
            .with_max_tries(300)
            .with_rng_seed(run_seed);
        let outcome = random_1k(&input, &options).expect("connected input of sufficient size");
        prop_assert_eq!(degree_multiset(outcome.graph()), degree_multiset(&input));
        prop_assert_eq!(outcome.graph().edge_count(), input.edge_count());
        prop_assert!(is_connected(outcome.graph()));
    }

    #[test]
    fn zero_k_preserves_counts_on_random_graphs(
        n in 5u64..12,
        extra in 0u64..6,
        graph_seed in any::<u64>(),
        run_seed in any::<u64>(),
    ) {
        let input = random_connected_graph(n, extra, graph_seed);
        let options = RewireOptions::new()
            .with_n_swap(4)
            .with_max_tries(300)
            .with_rng_seed(run_seed);
        let outcome = random_0k(&input, &options).expect("input is large enough");
        prop_assert_eq!(outcome.graph().node_count(), input.node_count());
        prop_assert_eq!(outcome.graph().edge_count(), input.edge_count());
        prop_assert!(is_connected(outcome.graph()));
    }

    #[test]
    fn two_k_preserves_joint_degrees_on_random_graphs(
        n in 5u64..12,
        extra in 0u64..6,
        graph_seed in any::<u64>(),
        run_seed in any::<u64>(),
    ) {
        let input = random_connected_graph(n, extra, graph_seed);
        let options = RewireOptions::new()
            .with_n_swap(4)
            .with_max_tries(300)
            .with_rng_seed(run_seed);
        let outcome = random_2k(&input, &options).expect("connected input of sufficient size");
        prop_assert_eq!(
            joint_degree_multiset(outcome.graph()),
            joint_degree_multiset(&input)
        );
    }
}
