//! Clustering-parameterized transformations.
//!
//! Both operations here are pure with respect to their inputs: they read the
//! source network and a clustering of matching node count and return newly
//! allocated networks. Scratch arrays sized by the source network are
//! allocated once per call and reused across the per-cluster loop, keeping
//! the work linear in degree rather than quadratic in cluster count.

use super::Network;
use crate::clustering::Clustering;

/// Staging buffers reused across per-cluster subnetwork builds.
struct SubnetworkScratch {
    /// Original node index -> local index within its cluster.
    local_index: Vec<usize>,
    neighbors: Vec<usize>,
    edge_weights: Vec<f64>,
}

impl Network {
    /// Creates the induced subnetwork of each cluster, ordered by cluster id.
    ///
    /// Each subnetwork keeps exactly the nodes assigned to its cluster, with
    /// neighbor indices remapped to the subnetwork's local numbering and
    /// only the edges internal to the cluster retained. Self-loop weight is
    /// not propagated into subnetworks.
    pub fn create_subnetworks(&self, clustering: &Clustering) -> Vec<Network> {
        let nodes_per_cluster = clustering.nodes_per_cluster();
        let mut scratch = SubnetworkScratch {
            local_index: vec![0; self.n_nodes],
            neighbors: vec![0; self.n_edges],
            edge_weights: vec![0.0; self.n_edges],
        };
        nodes_per_cluster
            .iter()
            .enumerate()
            .map(|(cluster, nodes)| self.create_subnetwork(clustering, cluster, nodes, &mut scratch))
            .collect()
    }

    fn create_subnetwork(
        &self,
        clustering: &Clustering,
        cluster: usize,
        nodes: &[usize],
        scratch: &mut SubnetworkScratch,
    ) -> Network {
        // A singleton cluster needs no adjacency work.
        if nodes.len() == 1 {
            return Network {
                n_nodes: 1,
                n_edges: 0,
                node_weights: vec![self.node_weights[nodes[0]]],
                first_neighbor_indices: vec![0, 0],
                neighbors: Vec::new(),
                edge_weights: Vec::new(),
                total_edge_weight_self_links: 0.0,
            };
        }

        for (local, &node) in nodes.iter().enumerate() {
            scratch.local_index[node] = local;
        }

        let mut n_edges = 0;
        let mut node_weights = Vec::with_capacity(nodes.len());
        let mut first_neighbor_indices = vec![0usize; nodes.len() + 1];
        for (local, &node) in nodes.iter().enumerate() {
            node_weights.push(self.node_weights[node]);
            for j in self.first_neighbor_indices[node]..self.first_neighbor_indices[node + 1] {
                let neighbor = self.neighbors[j];
                if clustering.clusters[neighbor] == cluster {
                    scratch.neighbors[n_edges] = scratch.local_index[neighbor];
                    scratch.edge_weights[n_edges] = self.edge_weights[j];
                    n_edges += 1;
                }
            }
            first_neighbor_indices[local + 1] = n_edges;
        }

        Network {
            n_nodes: nodes.len(),
            n_edges,
            node_weights,
            first_neighbor_indices,
            neighbors: scratch.neighbors[..n_edges].to_vec(),
            edge_weights: scratch.edge_weights[..n_edges].to_vec(),
            total_edge_weight_self_links: 0.0,
        }
    }

    /// Creates the reduced (aggregate) network for a clustering.
    ///
    /// Each node of the reduced network corresponds to one cluster; its
    /// weight is the sum of the member node weights, and the weight of an
    /// edge between two reduced nodes is the sum of the weights of the edges
    /// between the two clusters. Intra-cluster edge weight, plus the source
    /// network's self-link weight, becomes the reduced network's self-link
    /// weight. Total node weight, non-self edge weight, and self-link weight
    /// are each exactly conserved.
    pub fn create_reduced_network(&self, clustering: &Clustering) -> Network {
        let n_clusters = clustering.n_clusters();
        let nodes_per_cluster = clustering.nodes_per_cluster();

        let mut node_weights = vec![0.0; n_clusters];
        let mut first_neighbor_indices = vec![0usize; n_clusters + 1];
        let mut total_edge_weight_self_links = self.total_edge_weight_self_links;
        let mut n_edges = 0;

        let mut reduced_neighbors = vec![0usize; self.n_edges];
        let mut reduced_edge_weights = vec![0.0; self.n_edges];
        // Dense accumulator per target cluster; entries touched while
        // scanning one source cluster are reset before the next, so the
        // accumulation stays linear in degree.
        let mut touched_clusters = vec![0usize; n_clusters.saturating_sub(1)];
        let mut accumulated_weight = vec![0.0; n_clusters];

        for (cluster, nodes) in nodes_per_cluster.iter().enumerate() {
            let mut n_touched = 0;
            for &node in nodes {
                node_weights[cluster] += self.node_weights[node];
                for j in self.first_neighbor_indices[node]..self.first_neighbor_indices[node + 1] {
                    let target = clustering.clusters[self.neighbors[j]];
                    if target == cluster {
                        total_edge_weight_self_links += self.edge_weights[j];
                    } else {
                        if accumulated_weight[target] == 0.0 {
                            touched_clusters[n_touched] = target;
                            n_touched += 1;
                        }
                        accumulated_weight[target] += self.edge_weights[j];
                    }
                }
            }

            for &target in &touched_clusters[..n_touched] {
                reduced_neighbors[n_edges] = target;
                reduced_edge_weights[n_edges] = accumulated_weight[target];
                accumulated_weight[target] = 0.0;
                n_edges += 1;
            }
            first_neighbor_indices[cluster + 1] = n_edges;
        }

        log::debug!(
            "reduced network: {} nodes / {} arcs -> {} clusters / {} arcs",
            self.n_nodes,
            self.n_edges,
            n_clusters,
            n_edges
        );

        Network {
            n_nodes: n_clusters,
            n_edges,
            node_weights,
            first_neighbor_indices,
            neighbors: reduced_neighbors[..n_edges].to_vec(),
            edge_weights: reduced_edge_weights[..n_edges].to_vec(),
            total_edge_weight_self_links,
        }
    }
}
