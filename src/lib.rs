//! # netsift
//!
//! Core data structures and transformations for community detection in
//! weighted undirected networks, built around the Constant Potts Model (CPM)
//! family of quality functions (Louvain- and Leiden-style search heuristics).
//!
//! The crate provides:
//! - [`Network`]: an immutable weighted undirected graph in compressed
//!   sparse row (CSR) form, with checked and unchecked construction paths,
//! - [`Clustering`]: a mutable node-to-cluster assignment with the
//!   bookkeeping operations multilevel algorithms need,
//! - the transformations connecting the two: induced subnetwork extraction,
//!   reduction of a network to one node per cluster, and clustering
//!   composition, all exactly weight-conserving,
//! - the [`cpm`] contract that concrete CPM clustering algorithms implement
//!   against this substrate, and
//! - the numeric primitives such algorithms rely on (range sums, random
//!   visit-order permutations, a fast exponential approximation).
//!
//! Concrete search heuristics, edge-list I/O, and drivers live outside this
//! crate; it guarantees only that the substrate they operate on is
//! well-formed and weight-conserving under repeated structural
//! transformation.
//!
//! ## Determinism
//!
//! All randomized decisions take an explicit `rand::Rng`. Tests and benches
//! seed `SmallRng` explicitly so runs are reproducible.

pub mod clustering;
pub mod cpm;
pub mod net_error;
pub mod network;
pub mod util;

pub use clustering::Clustering;
pub use net_error::InvalidNetworkError;
pub use network::{Network, NodeWeights};

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::clustering::Clustering;
    pub use crate::cpm::{
        CpmClusteringAlgorithm, CpmParameters, DEFAULT_RESOLUTION,
        IncrementalCpmClusteringAlgorithm,
    };
    pub use crate::net_error::InvalidNetworkError;
    pub use crate::network::{Network, NodeWeights};
    pub use crate::util::arrays::{
        calc_sum, calc_sum_range, generate_random_permutation, permute_randomly, repeat,
    };
    pub use crate::util::fast_math::fast_exp;
}
