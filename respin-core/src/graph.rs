//! Adjacency-set store for simple undirected graphs.
//!
//! The rewiring engine mutates a graph thousands of times per run, always
//! through [`UndirectedGraph::add_edge`] and [`UndirectedGraph::remove_edge`].
//! Adjacency is kept in ordered sets so that seeded runs visit nodes and
//! neighbours in a reproducible order.

use std::collections::{BTreeMap, BTreeSet, btree_map};
use std::fmt;

use thiserror::Error;

/// Errors returned by graph store mutations.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    /// An edge endpoint was repeated; simple graphs carry no self-loops.
    #[error("edge ({node}, {node}) would form a self-loop")]
    SelfLoop {
        /// The repeated endpoint.
        node: NodeId,
    },
    /// The edge is already present; simple graphs carry no multi-edges.
    #[error("edge ({left}, {right}) already exists")]
    DuplicateEdge {
        /// First reported endpoint (canonical order for undirected edges).
        left: NodeId,
        /// Second reported endpoint.
        right: NodeId,
    },
    /// A removal named an edge that is not in the graph.
    #[error("edge ({left}, {right}) is not in the graph")]
    EdgeNotFound {
        /// First reported endpoint (canonical order for undirected edges).
        left: NodeId,
        /// Second reported endpoint.
        right: NodeId,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::SelfLoop { .. } => GraphErrorCode::SelfLoop,
            Self::DuplicateEdge { .. } => GraphErrorCode::DuplicateEdge,
            Self::EdgeNotFound { .. } => GraphErrorCode::EdgeNotFound,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// An edge endpoint was repeated.
    SelfLoop,
    /// The edge is already present.
    DuplicateEdge,
    /// A removal named an edge that is not in the graph.
    EdgeNotFound,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SelfLoop => "SELF_LOOP",
            Self::DuplicateEdge => "DUPLICATE_EDGE",
            Self::EdgeNotFound => "EDGE_NOT_FOUND",
        }
    }
}

/// Opaque node identifier.
///
/// The numeric value carries no meaning beyond identity; the total order is
/// used only for canonical edge form and deterministic iteration.
///
/// # Examples
/// ```
/// use respin_core::NodeId;
///
/// let node = NodeId::new(7);
/// assert_eq!(node.get(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a node identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// An undirected edge in canonical form (`left <= right`).
///
/// # Examples
/// ```
/// use respin_core::{Edge, NodeId};
///
/// let edge = Edge::new(NodeId::new(4), NodeId::new(1));
/// assert_eq!(edge.left(), NodeId::new(1));
/// assert_eq!(edge.right(), NodeId::new(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    left: NodeId,
    right: NodeId,
}

impl Edge {
    /// Creates an edge, canonicalising the endpoint order.
    #[must_use]
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { left: a, right: b }
        } else {
            Self { left: b, right: a }
        }
    }

    /// Returns the smaller endpoint.
    #[rustfmt::skip]
    #[must_use]
    pub const fn left(&self) -> NodeId { self.left }

    /// Returns the larger endpoint.
    #[rustfmt::skip]
    #[must_use]
    pub const fn right(&self) -> NodeId { self.right }

    /// Returns `true` when `node` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, node: NodeId) -> bool {
        self.left == node || self.right == node
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}

/// Simple, undirected, unweighted graph backed by adjacency sets.
///
/// Self-loops and multi-edges are rejected at the mutation boundary, so the
/// edge set always contains each unordered pair at most once. Cloning is the
/// deep copy the drivers use to leave caller-owned input untouched.
///
/// # Examples
/// ```
/// use respin_core::UndirectedGraph;
///
/// let graph = UndirectedGraph::from_edges([(1, 2), (2, 3)])
///     .expect("edge list is simple");
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.degree(2.into()), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    edge_count: usize,
}

impl UndirectedGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an edge list, inserting endpoints as needed.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] or [`GraphError::DuplicateEdge`] when
    /// the list is not a simple graph.
    ///
    /// # Examples
    /// ```
    /// use respin_core::{GraphError, UndirectedGraph};
    ///
    /// let err = UndirectedGraph::from_edges([(1, 1)]).expect_err("self-loop");
    /// assert!(matches!(err, GraphError::SelfLoop { .. }));
    /// ```
    pub fn from_edges<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (u64, u64)>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge(NodeId::new(a), NodeId::new(b))?;
        }
        Ok(graph)
    }

    /// Inserts an isolated node; a no-op when the node already exists.
    pub fn add_node(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    /// Returns `true` when the node is present.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Adds the edge `{a, b}`, inserting missing endpoints.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when `a == b` and
    /// [`GraphError::DuplicateEdge`] when the edge is already present.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop { node: a });
        }
        if self.has_edge(a, b) {
            let edge = Edge::new(a, b);
            return Err(GraphError::DuplicateEdge {
                left: edge.left(),
                right: edge.right(),
            });
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        self.edge_count += 1;
        Ok(())
    }

    /// Removes the edge `{a, b}`; the endpoints stay in the node set.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeNotFound`] when the edge is absent.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        if !self.has_edge(a, b) {
            let edge = Edge::new(a, b);
            return Err(GraphError::EdgeNotFound {
                left: edge.left(),
                right: edge.right(),
            });
        }
        if let Some(neighbours) = self.adjacency.get_mut(&a) {
            neighbours.remove(&b);
        }
        if let Some(neighbours) = self.adjacency.get_mut(&b) {
            neighbours.remove(&a);
        }
        self.edge_count -= 1;
        Ok(())
    }

    /// Returns `true` when `{a, b}` is an edge.
    #[must_use]
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbours| neighbours.contains(&b))
    }

    /// Iterates the neighbours of `node` in ascending identifier order.
    ///
    /// Unknown nodes yield an empty iterator.
    pub fn neighbors(&self, node: NodeId) -> Neighbors<'_> {
        Neighbors {
            inner: self.adjacency.get(&node).map(BTreeSet::iter),
        }
    }

    /// Returns the degree of `node`; unknown nodes have degree zero.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency
            .get(&node)
            .map_or(0, BTreeSet::len)
    }

    /// Iterates all nodes in ascending identifier order.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            inner: self.adjacency.keys(),
        }
    }

    /// Iterates all edges once each, in canonical form and ascending order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().flat_map(|(&node, neighbours)| {
            neighbours
                .iter()
                .copied()
                .filter(move |&other| node < other)
                .map(move |other| Edge::new(node, other))
        })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterates `(node, degree)` pairs in ascending node order.
    pub fn degrees(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.adjacency
            .iter()
            .map(|(&node, neighbours)| (node, neighbours.len()))
    }
}

/// Iterator over the nodes of an [`UndirectedGraph`].
#[derive(Clone, Debug)]
pub struct Nodes<'a> {
    inner: btree_map::Keys<'a, NodeId, BTreeSet<NodeId>>,
}

impl Iterator for Nodes<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Nodes<'_> {}

/// Iterator over the neighbours of a node.
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    inner: Option<std::collections::btree_set::Iter<'a, NodeId>>,
}

impl Iterator for Neighbors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), std::iter::Iterator::size_hint)
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
