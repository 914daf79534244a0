//! End-to-end multilevel scenario: the control flow a CPM search heuristic
//! drives, exercised directly against the substrate. A network is reduced
//! along a clustering, the reduced network is clustered again, and the
//! coarse result is pulled back onto the original nodes.

use netsift::prelude::*;

/// 4-cycle 0-1-2-3-0 with unit weights.
fn four_cycle() -> Network {
    Network::from_edge_list(
        4,
        NodeWeights::Unit,
        &[0, 1, 2, 3],
        &[1, 2, 3, 0],
        None,
        true,
    )
    .unwrap()
}

#[test]
fn four_cycle_reduction_scenario() {
    let network = four_cycle();
    let clustering = Clustering::from_assignment(vec![0, 0, 1, 1]);
    let reduced = network.create_reduced_network(&clustering);

    assert_eq!(reduced.n_nodes(), 2);
    assert_eq!(reduced.node_weights(), vec![2.0, 2.0]);
    assert_eq!(reduced.neighbors_of(0), &[1]);
    assert_eq!(reduced.edge_weights_of(0), &[2.0]);
    assert_eq!(reduced.total_edge_weight_self_links(), 2.0);
}

#[test]
fn two_level_aggregation_composes_back_onto_original_nodes() {
    // Two triangles joined by one bridge edge 2-3.
    let network = Network::from_edge_list(
        6,
        NodeWeights::Unit,
        &[0, 1, 2, 3, 4, 5, 2],
        &[1, 2, 0, 4, 5, 3, 3],
        None,
        true,
    )
    .unwrap();

    // Level 1: pair up nodes.
    let mut fine = Clustering::from_assignment(vec![0, 0, 1, 1, 2, 2]);
    let reduced = network.create_reduced_network(&fine);
    assert_eq!(reduced.n_nodes(), 3);
    reduced.check_integrity().unwrap();

    // Level 2: cluster the reduced network into the two triangles.
    let coarse = Clustering::from_assignment(vec![0, 0, 1]);
    let twice_reduced = reduced.create_reduced_network(&coarse);
    assert_eq!(twice_reduced.n_nodes(), 2);

    // Weight totals survive both levels.
    assert_eq!(twice_reduced.total_node_weight(), network.total_node_weight());
    let original = network.total_edge_weight() + network.total_edge_weight_self_links();
    let aggregated =
        twice_reduced.total_edge_weight() + twice_reduced.total_edge_weight_self_links();
    assert!((original - aggregated).abs() < 1e-12);

    // Pulling the coarse clustering back gives the per-node communities.
    fine.merge_clusters(&coarse);
    assert_eq!(fine.clusters(), vec![0, 0, 0, 0, 1, 1]);
    assert_eq!(fine.n_clusters(), 2);
}

#[test]
fn subnetwork_extraction_supports_refinement_steps() {
    // A refinement phase extracts each community and re-clusters it locally.
    let network = four_cycle();
    let communities = Clustering::from_assignment(vec![0, 0, 1, 1]);

    let subnetworks = network.create_subnetworks(&communities);
    assert_eq!(subnetworks.len(), 2);
    for subnetwork in &subnetworks {
        // Each community contains its own 2-node path; its singleton
        // clustering reduces to itself.
        let singleton = Clustering::new(subnetwork.n_nodes());
        let reduced = subnetwork.create_reduced_network(&singleton);
        assert_eq!(&reduced, subnetwork);
    }
}
