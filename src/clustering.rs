//! Clustering of the nodes in a network.
//!
//! Each node belongs to exactly one cluster. A clustering is always
//! interpreted relative to one [`Network`](crate::Network) with a matching
//! node count; it never holds a reference to that network.
//!
//! Cluster ids form the contiguous range `0..n_clusters` while the
//! clustering is *normalized*. Operations such as [`merge_clusters`]
//! can leave clusters empty; emptiness is removed explicitly with
//! [`remove_empty_clusters`].
//!
//! [`merge_clusters`]: Clustering::merge_clusters
//! [`remove_empty_clusters`]: Clustering::remove_empty_clusters

/// Assignment of each node to exactly one cluster.
///
/// Copies are explicit: `clone()` deep-copies the assignment array, and the
/// `clusters()` accessor returns a fresh copy, so callers can never alias
/// internal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clustering {
    n_nodes: usize,
    n_clusters: usize,
    pub(crate) clusters: Vec<usize>,
}

impl Clustering {
    /// Constructs a singleton clustering: every node in its own cluster.
    pub fn new(n_nodes: usize) -> Self {
        Clustering {
            n_nodes,
            n_clusters: n_nodes,
            clusters: (0..n_nodes).collect(),
        }
    }

    /// Constructs a clustering from an explicit per-node assignment.
    ///
    /// The cluster count is one past the highest assigned id (0 for an empty
    /// assignment), so unused ids below the maximum count as empty clusters.
    pub fn from_assignment(clusters: Vec<usize>) -> Self {
        let n_clusters = clusters.iter().max().map_or(0, |&c| c + 1);
        Clustering {
            n_nodes: clusters.len(),
            n_clusters,
            clusters,
        }
    }

    /// Number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    /// Number of clusters, including any empty ones.
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Cluster of each node, as a fresh copy.
    pub fn clusters(&self) -> Vec<usize> {
        self.clusters.clone()
    }

    /// Cluster of a single node.
    pub fn cluster_of(&self, node: usize) -> usize {
        self.clusters[node]
    }

    /// For each cluster id, whether any node is assigned to it.
    pub fn cluster_is_not_empty(&self) -> Vec<bool> {
        let mut not_empty = vec![false; self.n_clusters];
        for &cluster in &self.clusters {
            not_empty[cluster] = true;
        }
        not_empty
    }

    /// Number of nodes per cluster.
    pub fn n_nodes_per_cluster(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.n_clusters];
        for &cluster in &self.clusters {
            counts[cluster] += 1;
        }
        counts
    }

    /// Member nodes of each cluster, ordered by cluster id.
    ///
    /// Within each bucket, nodes appear in increasing node order (the order
    /// of first appearance in the assignment array).
    pub fn nodes_per_cluster(&self) -> Vec<Vec<usize>> {
        let counts = self.n_nodes_per_cluster();
        let mut nodes: Vec<Vec<usize>> = counts.iter().map(|&c| Vec::with_capacity(c)).collect();
        for (node, &cluster) in self.clusters.iter().enumerate() {
            nodes[cluster].push(node);
        }
        nodes
    }

    /// Removes empty clusters, relabeling cluster ids to the consecutive
    /// range `0..n_clusters`.
    pub fn remove_empty_clusters(&mut self) {
        self.remove_empty_clusters_larger_than(0);
    }

    /// Removes empty clusters, relabeling only ids at or above
    /// `minimum_cluster`.
    ///
    /// Ids below `minimum_cluster` keep their numeric identity even when
    /// empty; this supports algorithms that reserve a low range of fixed,
    /// externally meaningful cluster ids. Ids at or above the floor are
    /// compacted in order: the first non-empty one becomes `minimum_cluster`,
    /// the next `minimum_cluster + 1`, and so on. For example, with
    /// `minimum_cluster = 5` and clusters 2 and 7 empty, cluster 8 is
    /// relabeled to 7 (9 to 8, ...) while clusters 0-4 stay as they are.
    ///
    /// `minimum_cluster` must not exceed the current cluster count.
    pub fn remove_empty_clusters_larger_than(&mut self, minimum_cluster: usize) {
        let not_empty = self.cluster_is_not_empty();

        let mut relabel = vec![0usize; self.n_clusters];
        for (id, entry) in relabel.iter_mut().enumerate().take(minimum_cluster) {
            *entry = id;
        }

        let mut next = minimum_cluster;
        for old in minimum_cluster..self.n_clusters {
            if not_empty[old] {
                relabel[old] = next;
                next += 1;
            }
        }
        self.n_clusters = next;
        for cluster in &mut self.clusters {
            *cluster = relabel[*cluster];
        }
    }

    /// Merges clusters based on a clustering of the clusters.
    ///
    /// The current per-node assignment is composed with `clustering`, which
    /// must have one entry per current cluster. This is how a clustering of
    /// a reduced network is pulled back onto the original node set after a
    /// multilevel step.
    pub fn merge_clusters(&mut self, clustering: &Clustering) {
        for cluster in &mut self.clusters {
            *cluster = clustering.clusters[*cluster];
        }
        self.n_clusters = clustering.n_clusters;
    }
}
