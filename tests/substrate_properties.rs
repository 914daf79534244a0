//! Property tests for the substrate's structural guarantees: weight
//! conservation under reduction, edge-list round-trip equivalence, and
//! permutation bijectivity.

use netsift::prelude::*;
use proptest::prelude::*;

/// Strategy: a well-formed edge list over `n_nodes` nodes, each unordered
/// pair (self-loops included) listed at most once, with positive weights.
fn edge_list_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, Vec<f64>)> {
    (1usize..16).prop_flat_map(|n_nodes| {
        let pairs: Vec<(usize, usize)> = (0..n_nodes)
            .flat_map(|u| (u..n_nodes).map(move |v| (u, v)))
            .collect();
        let n_pairs = pairs.len();
        (
            Just(n_nodes),
            proptest::sample::subsequence(pairs, 0..=n_pairs),
        )
            .prop_flat_map(|(n_nodes, edges)| {
                let n_edges = edges.len();
                (
                    Just(n_nodes),
                    Just(edges),
                    proptest::collection::vec(0.1f64..10.0, n_edges),
                )
            })
    })
}

fn build_network(n_nodes: usize, edges: &[(usize, usize)], weights: &[f64]) -> Network {
    let sources: Vec<usize> = edges.iter().map(|&(u, _)| u).collect();
    let targets: Vec<usize> = edges.iter().map(|&(_, v)| v).collect();
    Network::from_edge_list(
        n_nodes,
        NodeWeights::Unit,
        &sources,
        &targets,
        Some(weights),
        true,
    )
    .unwrap()
}

proptest! {
    #[test]
    fn reduction_conserves_all_weight_totals(
        (n_nodes, edges, weights) in edge_list_strategy(),
        cluster_seed in 0usize..7,
    ) {
        let network = build_network(n_nodes, &edges, &weights);
        // Any assignment works; derive one deterministically from the seed.
        let assignment: Vec<usize> =
            (0..n_nodes).map(|node| (node * (cluster_seed + 1) + cluster_seed) % n_nodes).collect();
        let clustering = Clustering::from_assignment(assignment);

        let reduced = network.create_reduced_network(&clustering);

        prop_assert!(
            (reduced.total_node_weight() - network.total_node_weight()).abs() < 1e-9
        );
        let original = network.total_edge_weight() + network.total_edge_weight_self_links();
        let aggregated = reduced.total_edge_weight() + reduced.total_edge_weight_self_links();
        prop_assert!((original - aggregated).abs() < 1e-9);
        prop_assert!(reduced.check_integrity().is_ok());
    }

    #[test]
    fn subnetworks_partition_nodes_and_conserve_node_weight(
        (n_nodes, edges, weights) in edge_list_strategy(),
    ) {
        let network = build_network(n_nodes, &edges, &weights);
        let assignment: Vec<usize> = (0..n_nodes).map(|node| node % 3).collect();
        let clustering = Clustering::from_assignment(assignment);

        let subnetworks = network.create_subnetworks(&clustering);

        prop_assert_eq!(subnetworks.len(), clustering.n_clusters());
        let node_total: usize = subnetworks.iter().map(Network::n_nodes).sum();
        prop_assert_eq!(node_total, network.n_nodes());
        let weight_total: f64 = subnetworks.iter().map(Network::total_node_weight).sum();
        prop_assert!((weight_total - network.total_node_weight()).abs() < 1e-9);
        for subnetwork in &subnetworks {
            prop_assert_eq!(subnetwork.total_edge_weight_self_links(), 0.0);
            prop_assert!(subnetwork.check_integrity().is_ok());
        }
    }

    #[test]
    fn unsorted_and_presorted_edge_lists_build_the_same_network(
        (n_nodes, edges, weights) in edge_list_strategy(),
    ) {
        let unsorted = build_network(n_nodes, &edges, &weights);

        // Duplicate per direction and sort by (source, target), the form the
        // pre-sorted constructor demands.
        let mut arcs: Vec<(usize, usize, f64)> = Vec::new();
        for (&(u, v), &w) in edges.iter().zip(weights.iter()) {
            arcs.push((u, v, w));
            if u != v {
                arcs.push((v, u, w));
            }
        }
        arcs.sort_by_key(|&(u, v, _)| (u, v));
        let sources: Vec<usize> = arcs.iter().map(|&(u, _, _)| u).collect();
        let targets: Vec<usize> = arcs.iter().map(|&(_, v, _)| v).collect();
        let arc_weights: Vec<f64> = arcs.iter().map(|&(_, _, w)| w).collect();
        let presorted = Network::from_sorted_edge_list(
            n_nodes,
            NodeWeights::Unit,
            &sources,
            &targets,
            Some(&arc_weights),
            true,
        )
        .unwrap();

        prop_assert_eq!(unsorted, presorted);
    }

    #[test]
    fn remove_empty_clusters_is_idempotent_and_normalizing(
        assignment in proptest::collection::vec(0usize..20, 1..40),
    ) {
        let mut clustering = Clustering::from_assignment(assignment);
        clustering.remove_empty_clusters();

        prop_assert!(clustering.cluster_is_not_empty().iter().all(|&b| b));
        let ids: Vec<usize> = clustering.clusters();
        prop_assert!(ids.iter().all(|&c| c < clustering.n_clusters()));

        let once = clustering.clone();
        clustering.remove_empty_clusters();
        prop_assert_eq!(clustering, once);
    }

    #[test]
    fn random_permutations_are_bijections(n in 0usize..200, seed: u64) {
        use rand::SeedableRng;
        let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
        let mut permutation = generate_random_permutation(n, &mut rng);
        permutation.sort_unstable();
        let identity: Vec<usize> = (0..n).collect();
        prop_assert_eq!(permutation, identity);
    }
}
