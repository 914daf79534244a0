//! InvalidNetworkError: unified error type for netsift public APIs.
//!
//! Integrity violations are programming/data errors surfaced immediately to
//! the caller; the crate never silently repairs malformed input. Errors are
//! raised only when integrity checking is requested explicitly at
//! construction, or when constructor inputs are structurally inconsistent
//! (mismatched array lengths). Operations that skip integrity checking
//! assume well-formed input and may panic on out-of-range indexing instead.

use thiserror::Error;

/// Unified error type for network construction and integrity checking.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidNetworkError {
    /// Each undirected edge must be stored once per direction.
    #[error("number of stored arcs must be even, got {0}")]
    OddArcCount(usize),
    /// Node weight array length disagrees with the node count.
    #[error("node weight array has length {actual}, expected n_nodes = {expected}")]
    NodeWeightsLength { expected: usize, actual: usize },
    /// First-neighbor index array length disagrees with the node count.
    #[error("first-neighbor index array has length {actual}, expected n_nodes + 1 = {expected}")]
    OffsetsLength { expected: usize, actual: usize },
    /// First-neighbor index array does not start at 0.
    #[error("first element of the first-neighbor index array must be 0, got {0}")]
    OffsetsStart(usize),
    /// First-neighbor index array does not end at the arc count.
    #[error("last element of the first-neighbor index array must equal the arc count {expected}, got {actual}")]
    OffsetsEnd { expected: usize, actual: usize },
    /// Neighbor array length disagrees with the arc count.
    #[error("neighbor array has length {actual}, expected arc count {expected}")]
    NeighborsLength { expected: usize, actual: usize },
    /// Edge weight array length disagrees with the arc count.
    #[error("edge weight array has length {actual}, expected arc count {expected}")]
    EdgeWeightsLength { expected: usize, actual: usize },
    /// First-neighbor indices decrease between two consecutive nodes.
    #[error("first-neighbor indices must be non-decreasing (violated at node {0})")]
    OffsetsNotMonotonic(usize),
    /// A stored neighbor index does not name a node of the network.
    #[error("neighbor {neighbor} of node {node} is out of range [0, {n_nodes})")]
    NeighborOutOfRange {
        node: usize,
        neighbor: usize,
        n_nodes: usize,
    },
    /// The neighbor list of a node is not sorted in increasing order.
    #[error("neighbors of node {0} must be listed in increasing order")]
    NeighborsNotIncreasing(usize),
    /// The neighbor list of a node names the same neighbor twice.
    #[error("neighbors of node {node} must not include duplicate values (neighbor {neighbor})")]
    DuplicateNeighbor { node: usize, neighbor: usize },
    /// An arc has no mirror arc in the opposite direction.
    #[error("edge {source} -> {target} is not stored in both directions")]
    MissingReverseArc { r#source: usize, target: usize },
    /// An arc and its mirror carry different weights.
    #[error("edge between {source} and {target} has different weights in the two directions")]
    AsymmetricArcWeight { r#source: usize, target: usize },
    /// Edge endpoint arrays of an edge list have different lengths.
    #[error("edge endpoint arrays have different lengths ({sources} sources, {targets} targets)")]
    EdgeEndpointsMismatch { sources: usize, targets: usize },
    /// Edge weight array of an edge list does not have one weight per edge.
    #[error("edge list weight array has length {actual}, expected one weight per edge ({expected})")]
    EdgeListWeightsMismatch { expected: usize, actual: usize },
}
