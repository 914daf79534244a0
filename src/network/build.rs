//! Network construction paths.
//!
//! Two paths produce the invariant CSR form: an edge-list path (unsorted, or
//! pre-sorted with each edge duplicated per direction) and a pre-built
//! adjacency path. Structural mismatches between input arrays fail
//! immediately; everything else is validated only when the caller requests
//! an integrity check. The unchecked paths assume well-formed input and may
//! panic on out-of-range indexing.

use itertools::Itertools;

use super::Network;
use crate::net_error::InvalidNetworkError;
use crate::util::arrays;

/// Node-weight policy applied during construction.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeWeights {
    /// Every node gets weight 1.
    Unit,
    /// Each node's weight is set to its total incident edge weight.
    TotalEdgeWeight,
    /// Explicit per-node weights; the length must equal the node count.
    Explicit(Vec<f64>),
}

/// One directed arc staged for CSR folding.
type DirectedArc = (usize, usize, f64);

impl Network {
    /// Constructs a network from a list of undirected edges.
    ///
    /// Edge `i` connects `sources[i]` and `targets[i]` with weight
    /// `edge_weights[i]` (weight 1 if no weights are given). The list does
    /// not need to be sorted and each edge must be included only once; every
    /// non-self edge is duplicated in both directions internally, and
    /// self-loop weight goes to the self-link scalar.
    pub fn from_edge_list(
        n_nodes: usize,
        node_weights: NodeWeights,
        sources: &[usize],
        targets: &[usize],
        edge_weights: Option<&[f64]>,
        check: bool,
    ) -> Result<Network, InvalidNetworkError> {
        validate_edge_list(n_nodes, &node_weights, sources, targets, edge_weights)?;

        let mut arcs: Vec<DirectedArc> = Vec::with_capacity(2 * sources.len());
        for (j, (&source, &target)) in sources.iter().zip_eq(targets).enumerate() {
            let weight = edge_weights.map_or(1.0, |weights| weights[j]);
            arcs.push((source, target, weight));
            if source != target {
                arcs.push((target, source, weight));
            }
        }
        sort_arcs(&mut arcs);

        Self::from_arcs(n_nodes, node_weights, &arcs, check)
    }

    /// Constructs a network from a pre-sorted list of directed arcs.
    ///
    /// The caller asserts that the edge list is sorted by `(source, target)`
    /// and that each undirected edge is included twice, once per direction.
    /// This precondition is not re-validated unless `check` is set.
    pub fn from_sorted_edge_list(
        n_nodes: usize,
        node_weights: NodeWeights,
        sources: &[usize],
        targets: &[usize],
        edge_weights: Option<&[f64]>,
        check: bool,
    ) -> Result<Network, InvalidNetworkError> {
        validate_edge_list(n_nodes, &node_weights, sources, targets, edge_weights)?;

        let arcs: Vec<DirectedArc> = sources
            .iter()
            .zip_eq(targets)
            .enumerate()
            .map(|(j, (&source, &target))| {
                (source, target, edge_weights.map_or(1.0, |weights| weights[j]))
            })
            .collect();

        Self::from_arcs(n_nodes, node_weights, &arcs, check)
    }

    /// Constructs a network from a pre-built neighbor list.
    ///
    /// The node count is one less than the length of
    /// `first_neighbor_indices`. Neighbors of a node must be listed in
    /// increasing order. The arrays are taken over as given; self-loops are
    /// not representable on this path, so the self-link scalar is zero.
    pub fn from_adjacency(
        node_weights: NodeWeights,
        first_neighbor_indices: Vec<usize>,
        neighbors: Vec<usize>,
        edge_weights: Option<Vec<f64>>,
        check: bool,
    ) -> Result<Network, InvalidNetworkError> {
        if first_neighbor_indices.is_empty() {
            return Err(InvalidNetworkError::OffsetsLength {
                expected: 1,
                actual: 0,
            });
        }
        let n_nodes = first_neighbor_indices.len() - 1;
        let n_edges = neighbors.len();
        if let Some(weights) = &edge_weights {
            if weights.len() != n_edges {
                return Err(InvalidNetworkError::EdgeWeightsLength {
                    expected: n_edges,
                    actual: weights.len(),
                });
            }
        }
        check_explicit_node_weights(n_nodes, &node_weights)?;

        let mut network = Network {
            n_nodes,
            n_edges,
            node_weights: Vec::new(),
            first_neighbor_indices,
            neighbors,
            edge_weights: edge_weights.unwrap_or_else(|| arrays::repeat(1.0, n_edges)),
            total_edge_weight_self_links: 0.0,
        };
        network.node_weights = resolve_node_weights(node_weights, &network);
        if check {
            network.check_integrity()?;
        }
        Ok(network)
    }

    /// Folds sorted directed arcs into CSR form. Self-arcs accumulate into
    /// the self-link scalar instead of the adjacency arrays.
    fn from_arcs(
        n_nodes: usize,
        node_weights: NodeWeights,
        arcs: &[DirectedArc],
        check: bool,
    ) -> Result<Network, InvalidNetworkError> {
        let mut first_neighbor_indices = vec![0usize; n_nodes + 1];
        let mut neighbors = Vec::with_capacity(arcs.len());
        let mut edge_weights = Vec::with_capacity(arcs.len());
        let mut total_edge_weight_self_links = 0.0;

        let mut next_node = 1;
        for &(source, target, weight) in arcs {
            if source == target {
                total_edge_weight_self_links += weight;
                continue;
            }
            while next_node <= source {
                first_neighbor_indices[next_node] = neighbors.len();
                next_node += 1;
            }
            neighbors.push(target);
            edge_weights.push(weight);
        }
        while next_node <= n_nodes {
            first_neighbor_indices[next_node] = neighbors.len();
            next_node += 1;
        }

        let mut network = Network {
            n_nodes,
            n_edges: neighbors.len(),
            node_weights: Vec::new(),
            first_neighbor_indices,
            neighbors,
            edge_weights,
            total_edge_weight_self_links,
        };
        network.node_weights = resolve_node_weights(node_weights, &network);
        if check {
            network.check_integrity()?;
        }
        Ok(network)
    }
}

/// Stable sort of directed arcs by `(source, target)`, weights carried
/// along. Parallel with the `rayon` feature, matching the original's
/// parallel edge sort.
fn sort_arcs(arcs: &mut [DirectedArc]) {
    #[cfg(feature = "rayon")]
    {
        use rayon::slice::ParallelSliceMut;
        arcs.par_sort_by_key(|&(source, target, _)| (source, target));
    }
    #[cfg(not(feature = "rayon"))]
    arcs.sort_by_key(|&(source, target, _)| (source, target));
}

fn validate_edge_list(
    n_nodes: usize,
    node_weights: &NodeWeights,
    sources: &[usize],
    targets: &[usize],
    edge_weights: Option<&[f64]>,
) -> Result<(), InvalidNetworkError> {
    if sources.len() != targets.len() {
        return Err(InvalidNetworkError::EdgeEndpointsMismatch {
            sources: sources.len(),
            targets: targets.len(),
        });
    }
    if let Some(weights) = edge_weights {
        if weights.len() != sources.len() {
            return Err(InvalidNetworkError::EdgeListWeightsMismatch {
                expected: sources.len(),
                actual: weights.len(),
            });
        }
    }
    check_explicit_node_weights(n_nodes, node_weights)
}

fn check_explicit_node_weights(
    n_nodes: usize,
    node_weights: &NodeWeights,
) -> Result<(), InvalidNetworkError> {
    if let NodeWeights::Explicit(weights) = node_weights {
        if weights.len() != n_nodes {
            return Err(InvalidNetworkError::NodeWeightsLength {
                expected: n_nodes,
                actual: weights.len(),
            });
        }
    }
    Ok(())
}

/// Applies the node-weight policy once the adjacency arrays are in place.
fn resolve_node_weights(node_weights: NodeWeights, network: &Network) -> Vec<f64> {
    match node_weights {
        NodeWeights::Explicit(weights) => weights,
        NodeWeights::Unit => arrays::repeat(1.0, network.n_nodes),
        NodeWeights::TotalEdgeWeight => network.total_edge_weight_per_node(),
    }
}
