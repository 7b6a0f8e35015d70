//! Error types for the respin core library.
//!
//! Defines the driver-facing error enum and a convenient result alias.
//! Degenerate candidates and rejected swaps are not errors; they are
//! recovered inside the engine and only ever show up as attempt counts.

use thiserror::Error;

use crate::graph::GraphError;

/// An error produced while validating or running a null-model driver.
///
/// Every variant is detected before any mutation, except [`RewireError::Graph`]
/// which reports a store/engine disagreement that indicates a logic error.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RewireError {
    /// The input graph is too small for the variant's swap shape.
    #[error("graph has {nodes} nodes but this null model requires at least {minimum}")]
    TooFewNodes {
        /// Number of nodes in the input graph.
        nodes: usize,
        /// Minimum node count the variant needs.
        minimum: usize,
    },
    /// The success quota cannot exceed the attempt ceiling.
    #[error("swap quota {n_swap} exceeds the attempt ceiling {max_tries}")]
    SwapQuotaExceedsTries {
        /// Requested number of successful swaps.
        n_swap: u64,
        /// Configured attempt ceiling.
        max_tries: u64,
    },
    /// The variant requires a connected input graph.
    #[error("this null model requires a connected input graph")]
    Disconnected,
    /// The graph store rejected an engine operation the pre-check had
    /// approved; surfaced instead of panicking.
    #[error("graph store rejected an engine operation: {source}")]
    Graph {
        /// Underlying store error.
        #[from]
        source: GraphError,
    },
}

impl RewireError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> RewireErrorCode {
        match self {
            Self::TooFewNodes { .. } => RewireErrorCode::TooFewNodes,
            Self::SwapQuotaExceedsTries { .. } => RewireErrorCode::SwapQuotaExceedsTries,
            Self::Disconnected => RewireErrorCode::Disconnected,
            Self::Graph { .. } => RewireErrorCode::Graph,
        }
    }
}

/// Machine-readable error codes for [`RewireError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RewireErrorCode {
    /// The input graph is too small.
    TooFewNodes,
    /// The success quota exceeds the attempt ceiling.
    SwapQuotaExceedsTries,
    /// The variant requires a connected input graph.
    Disconnected,
    /// The graph store rejected an engine operation.
    Graph,
}

impl RewireErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooFewNodes => "TOO_FEW_NODES",
            Self::SwapQuotaExceedsTries => "SWAP_QUOTA_EXCEEDS_TRIES",
            Self::Disconnected => "DISCONNECTED",
            Self::Graph => "GRAPH",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, RewireError>;
