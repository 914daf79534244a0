//! Weighted undirected network in compressed sparse row form.
//!
//! Weighted nodes and weighted edges are supported; directed edges are not.
//! Network objects are immutable once constructed: derived networks
//! (subnetworks, reduced networks) are separate, independently owned
//! instances, and every `Vec`-returning accessor hands out a fresh copy.

pub mod build;
pub mod transform;

pub use build::NodeWeights;

use crate::net_error::InvalidNetworkError;
use crate::util::arrays;

/// Weighted undirected graph stored in compressed sparse row (CSR) form.
///
/// The neighbors of node `i` are
/// `neighbors[first_neighbor_indices[i]..first_neighbor_indices[i + 1]]`,
/// listed in strictly increasing order, with parallel edge weights. Each
/// undirected edge is stored once per direction with equal weight. Edges
/// from a node to itself are never stored in the adjacency arrays; their
/// aggregate weight is kept in a separate scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub(crate) n_nodes: usize,
    /// Stored arc count; always even.
    pub(crate) n_edges: usize,
    pub(crate) node_weights: Vec<f64>,
    pub(crate) first_neighbor_indices: Vec<usize>,
    pub(crate) neighbors: Vec<usize>,
    pub(crate) edge_weights: Vec<f64>,
    pub(crate) total_edge_weight_self_links: f64,
}

impl Network {
    /// Number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    /// Number of stored arcs. Each undirected edge is counted twice, once
    /// per direction; self-loops are not counted at all.
    pub fn n_edges(&self) -> usize {
        self.n_edges
    }

    /// Total node weight.
    pub fn total_node_weight(&self) -> f64 {
        arrays::calc_sum(&self.node_weights)
    }

    /// Weight of each node, as a fresh copy.
    pub fn node_weights(&self) -> Vec<f64> {
        self.node_weights.clone()
    }

    /// Sum of the weights of all stored arcs (self-loops excluded).
    pub fn total_edge_weight(&self) -> f64 {
        arrays::calc_sum(&self.edge_weights)
    }

    /// Aggregate weight of edges from a node to itself.
    pub fn total_edge_weight_self_links(&self) -> f64 {
        self.total_edge_weight_self_links
    }

    /// Total edge weight per node: for each node, the sum of the weights of
    /// the edges between the node and its neighbors.
    pub fn total_edge_weight_per_node(&self) -> Vec<f64> {
        (0..self.n_nodes)
            .map(|i| {
                arrays::calc_sum_range(
                    &self.edge_weights,
                    self.first_neighbor_indices[i],
                    self.first_neighbor_indices[i + 1],
                )
            })
            .collect()
    }

    /// Number of neighbors of `node`.
    pub fn degree(&self, node: usize) -> usize {
        self.first_neighbor_indices[node + 1] - self.first_neighbor_indices[node]
    }

    /// Neighbors of `node`, as a borrowed view into the CSR arrays.
    pub fn neighbors_of(&self, node: usize) -> &[usize] {
        &self.neighbors[self.first_neighbor_indices[node]..self.first_neighbor_indices[node + 1]]
    }

    /// Weights of the edges between `node` and its neighbors, parallel to
    /// [`neighbors_of`](Self::neighbors_of).
    pub fn edge_weights_of(&self, node: usize) -> &[f64] {
        &self.edge_weights
            [self.first_neighbor_indices[node]..self.first_neighbor_indices[node + 1]]
    }

    /// Checks the integrity of the network.
    ///
    /// It is checked whether counts and array lengths are consistent, the
    /// CSR offsets are well-formed, neighbor lists are strictly increasing
    /// and in range, and every arc is mirrored with equal weight. Negative
    /// counts and indices are unrepresentable here (`usize`), so that
    /// violation class from externally supplied data cannot arise.
    ///
    /// Intended for validating externally supplied data; the mirror check
    /// costs a binary search per arc.
    pub fn check_integrity(&self) -> Result<(), InvalidNetworkError> {
        if self.n_edges % 2 == 1 {
            return Err(InvalidNetworkError::OddArcCount(self.n_edges));
        }
        if self.node_weights.len() != self.n_nodes {
            return Err(InvalidNetworkError::NodeWeightsLength {
                expected: self.n_nodes,
                actual: self.node_weights.len(),
            });
        }
        if self.first_neighbor_indices.len() != self.n_nodes + 1 {
            return Err(InvalidNetworkError::OffsetsLength {
                expected: self.n_nodes + 1,
                actual: self.first_neighbor_indices.len(),
            });
        }
        if self.first_neighbor_indices[0] != 0 {
            return Err(InvalidNetworkError::OffsetsStart(
                self.first_neighbor_indices[0],
            ));
        }
        if self.first_neighbor_indices[self.n_nodes] != self.n_edges {
            return Err(InvalidNetworkError::OffsetsEnd {
                expected: self.n_edges,
                actual: self.first_neighbor_indices[self.n_nodes],
            });
        }
        if self.neighbors.len() != self.n_edges {
            return Err(InvalidNetworkError::NeighborsLength {
                expected: self.n_edges,
                actual: self.neighbors.len(),
            });
        }
        if self.edge_weights.len() != self.n_edges {
            return Err(InvalidNetworkError::EdgeWeightsLength {
                expected: self.n_edges,
                actual: self.edge_weights.len(),
            });
        }

        // Neighbor lists must be sorted, duplicate-free, and in range.
        for node in 0..self.n_nodes {
            if self.first_neighbor_indices[node + 1] < self.first_neighbor_indices[node] {
                return Err(InvalidNetworkError::OffsetsNotMonotonic(node));
            }
            for j in self.first_neighbor_indices[node]..self.first_neighbor_indices[node + 1] {
                let neighbor = self.neighbors[j];
                if neighbor >= self.n_nodes {
                    return Err(InvalidNetworkError::NeighborOutOfRange {
                        node,
                        neighbor,
                        n_nodes: self.n_nodes,
                    });
                }
                if j > self.first_neighbor_indices[node] {
                    let previous = self.neighbors[j - 1];
                    if neighbor < previous {
                        return Err(InvalidNetworkError::NeighborsNotIncreasing(node));
                    }
                    if neighbor == previous {
                        return Err(InvalidNetworkError::DuplicateNeighbor { node, neighbor });
                    }
                }
            }
        }

        // Every arc must be stored in both directions with equal weight.
        // Neighbor lists are sorted at this point, so the mirror is found by
        // binary search within the target node's range.
        let mut checked = vec![false; self.n_edges];
        for node in 0..self.n_nodes {
            for j in self.first_neighbor_indices[node]..self.first_neighbor_indices[node + 1] {
                if checked[j] {
                    continue;
                }
                let target = self.neighbors[j];
                let range =
                    self.first_neighbor_indices[target]..self.first_neighbor_indices[target + 1];
                match self.neighbors[range.clone()].binary_search(&node) {
                    Err(_) => {
                        return Err(InvalidNetworkError::MissingReverseArc {
                            source: node,
                            target,
                        });
                    }
                    Ok(offset) => {
                        let mirror = range.start + offset;
                        if self.edge_weights[j] != self.edge_weights[mirror] {
                            return Err(InvalidNetworkError::AsymmetricArcWeight {
                                source: node,
                                target,
                            });
                        }
                        checked[j] = true;
                        checked[mirror] = true;
                    }
                }
            }
        }
        Ok(())
    }
}
