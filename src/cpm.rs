//! Contract for clustering algorithms based on the CPM quality function.
//!
//! The Constant Potts Model rewards dense clusters relative to a
//! resolution-scaled penalty on cluster size: a larger resolution favors
//! more, smaller clusters. Concrete search strategies (local node moving,
//! refinement into well-connected subclusters, recursive aggregation via
//! [`Network::create_reduced_network`], convergence detection) live outside
//! this crate and implement these traits against [`Network`] and
//! [`Clustering`].
//!
//! [`Network::create_reduced_network`]: crate::Network::create_reduced_network

use crate::clustering::Clustering;
use crate::network::Network;

/// Default resolution parameter.
pub const DEFAULT_RESOLUTION: f64 = 1.0;

/// Tunable state shared by CPM-based algorithms.
///
/// A plain value type: duplication is an explicit `clone()`, never an
/// implicit alias, so parallel runs at different resolutions and repeated
/// restarts cannot share mutable state. The resolution is expected to be
/// positive.
#[derive(Debug, Clone, PartialEq)]
pub struct CpmParameters {
    /// Resolution parameter of the quality function.
    pub resolution: f64,
}

impl Default for CpmParameters {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

/// A clustering algorithm driven by the CPM quality function.
pub trait CpmClusteringAlgorithm {
    /// Resolution parameter of the quality function.
    fn resolution(&self) -> f64;

    /// Replaces the resolution parameter.
    fn set_resolution(&mut self, resolution: f64);

    /// Returns an independent deep copy of all tunable state.
    fn duplicate(&self) -> Box<dyn CpmClusteringAlgorithm>;
}

/// A CPM algorithm that improves an existing clustering incrementally.
pub trait IncrementalCpmClusteringAlgorithm: CpmClusteringAlgorithm {
    /// Improves `clustering` for `network` in place.
    ///
    /// The clustering must have the same node count as the network. Returns
    /// whether the clustering changed.
    fn improve_clustering(&mut self, network: &Network, clustering: &mut Clustering) -> bool;

    /// Returns an independent deep copy, preserving the incremental
    /// capability.
    fn duplicate_incremental(&self) -> Box<dyn IncrementalCpmClusteringAlgorithm>;

    /// Runs the algorithm starting from a singleton clustering of
    /// `network`'s nodes.
    fn find_clustering(&mut self, network: &Network) -> Clustering {
        let mut clustering = Clustering::new(network.n_nodes());
        self.improve_clustering(network, &mut clustering);
        clustering
    }
}
