//! Speculative swap proposals.

use crate::graph::{Edge, NodeId};

/// A proposed structural perturbation: a set of edge removals and an
/// equal-sized set of edge additions over the same endpoints.
///
/// Proposals are descriptions, not mutations; the engine validates them
/// against the live graph before touching anything. The classic 2-edge swap
/// is [`SwapProposal::cross`]; the 0K relocation and the assortativity
/// re-pairing use [`SwapProposal::relocate`] and [`SwapProposal::repair`].
///
/// # Examples
/// ```
/// use respin_core::{NodeId, SwapProposal};
///
/// let swap = SwapProposal::cross(
///     NodeId::new(1),
///     NodeId::new(2),
///     NodeId::new(3),
///     NodeId::new(4),
/// );
/// assert_eq!(swap.removed().len(), 2);
/// assert_eq!(swap.added().len(), 2);
/// assert_eq!(swap.exchanged(), Some((NodeId::new(2), NodeId::new(4))));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapProposal {
    removed: Vec<Edge>,
    added: Vec<Edge>,
    endpoints: Vec<NodeId>,
    exchanged: Option<(NodeId, NodeId)>,
}

impl SwapProposal {
    /// The classic cross swap: remove `{u,v}` and `{x,y}`, add `{u,y}` and
    /// `{x,v}`. The exchanged endpoints `(v, y)` are recorded for the
    /// degree-match predicate.
    #[must_use]
    pub fn cross(u: NodeId, v: NodeId, x: NodeId, y: NodeId) -> Self {
        Self {
            removed: vec![Edge::new(u, v), Edge::new(x, y)],
            added: vec![Edge::new(u, y), Edge::new(x, v)],
            endpoints: vec![u, v, x, y],
            exchanged: Some((v, y)),
        }
    }

    /// The 0K relocation: remove `{u,v}`, add `{x,y}`.
    ///
    /// All four identifiers must still be pairwise distinct; degree counts
    /// are deliberately not preserved.
    #[must_use]
    pub fn relocate(u: NodeId, v: NodeId, x: NodeId, y: NodeId) -> Self {
        Self {
            removed: vec![Edge::new(u, v)],
            added: vec![Edge::new(x, y)],
            endpoints: vec![u, v, x, y],
            exchanged: None,
        }
    }

    /// A re-pairing of four endpoints: remove two named edges, add two
    /// explicit replacement pairs over the same nodes.
    #[must_use]
    pub fn repair(removed: [Edge; 2], added: [Edge; 2]) -> Self {
        let endpoints = vec![
            removed[0].left(),
            removed[0].right(),
            removed[1].left(),
            removed[1].right(),
        ];
        Self {
            removed: removed.to_vec(),
            added: added.to_vec(),
            endpoints,
            exchanged: None,
        }
    }

    /// The edges the proposal removes.
    #[must_use]
    pub fn removed(&self) -> &[Edge] {
        &self.removed
    }

    /// The edges the proposal adds.
    #[must_use]
    pub fn added(&self) -> &[Edge] {
        &self.added
    }

    /// Every node identifier the proposal names, in proposal order.
    #[must_use]
    pub fn endpoints(&self) -> &[NodeId] {
        &self.endpoints
    }

    /// The endpoints a cross swap trades between its two removed edges.
    #[must_use]
    pub fn exchanged(&self) -> Option<(NodeId, NodeId)> {
        self.exchanged
    }

    /// Returns `true` when the named endpoints are pairwise distinct.
    #[must_use]
    pub fn endpoints_distinct(&self) -> bool {
        for (index, &a) in self.endpoints.iter().enumerate() {
            for &b in self.endpoints.iter().skip(index + 1) {
                if a == b {
                    return false;
                }
            }
        }
        true
    }
}
