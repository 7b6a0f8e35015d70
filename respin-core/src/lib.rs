//! Null models for undirected graphs, built on transactional edge swaps.
//!
//! A null model is a randomized graph preserving a chosen set of structural
//! statistics of an input graph (degree sequence, joint degree distribution,
//! clustering spectrum, connectivity, rich-club structure or assortativity)
//! while destroying everything else. Each variant is a
//! configuration of one transactional rewiring engine: propose a swap, apply
//! it speculatively, ask the variant's acceptance predicates, then commit or
//! roll back.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod clustering;
mod connectivity;
mod directed;
mod engine;
mod error;
mod graph;
mod models;
mod outcome;
mod sampler;
#[cfg(test)]
mod test_utils;

pub use crate::{
    clustering::{average_clustering, degree_buckets, local_clustering},
    connectivity::is_connected,
    directed::{DirectedGraph, DirectedOutcome, random_1kd},
    engine::{
        AcceptancePredicate, CandidateSelector, ClusteringSpectrumMatch, DegreeExchangeMatch,
        LocalClusteringMatch, PredicateContext, PreserveConnectivity, SwapProposal,
    },
    error::{Result, RewireError, RewireErrorCode},
    graph::{Edge, GraphError, GraphErrorCode, Neighbors, NodeId, Nodes, UndirectedGraph},
    models::{
        RewireOptions, assort_mixing, disassort_mixing, random_0k, random_1k, random_2k,
        random_25k, random_3k, rich_club_break, rich_club_create,
    },
    outcome::RewireOutcome,
    sampler::DegreeSampler,
};
