//! Seeded sample data for demonstrations.
//!
//! The same seed always produces the same structures, so a demo can be
//! reproduced exactly.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::bst::BinarySearchTree;
use crate::graph::Graph;

/// Generates `count` distinct keys in `1..=99`, in random insertion order.
///
/// At most 99 keys can be produced; larger requests are capped.
pub fn random_keys(seed: u64, count: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pool: Vec<i64> = (1..=99).collect();
    pool.shuffle(&mut rng);
    pool.truncate(count.min(pool.len()));
    pool
}

/// Builds a tree from [`random_keys`].
pub fn random_tree(seed: u64, count: usize) -> BinarySearchTree {
    BinarySearchTree::from_keys(random_keys(seed, count))
}

/// Builds a connected graph with nodes named `A`, `B`, ... and a few extra edges.
///
/// A random spanning tree keeps every node reachable from `A`; `extra_edges`
/// additional random pairs add cycles. Node count is capped at 26.
pub fn random_graph(seed: u64, nodes: usize, extra_edges: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let names: Vec<String> = (b'A'..=b'Z')
        .take(nodes.min(26))
        .map(|c| (c as char).to_string())
        .collect();

    let mut graph = Graph::new();
    for name in &names {
        // Names are distinct and non-empty.
        let _ = graph.add_node(name.as_str());
    }
    for i in 1..names.len() {
        let parent = rng.gen_range(0..i);
        let _ = graph.add_edge(&names[parent], &names[i]);
    }
    if names.len() > 1 {
        for _ in 0..extra_edges {
            let u = rng.gen_range(0..names.len());
            let v = rng.gen_range(0..names.len());
            if u != v {
                let _ = graph.add_edge(&names[u], &names[v]);
            }
        }
    }
    tracing::debug!(
        seed,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "generated sample graph"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_keys_distinct_and_reproducible() {
        let keys = random_keys(42, 12);
        assert_eq!(keys.len(), 12);
        assert_eq!(keys, random_keys(42, 12));

        let mut sorted = keys.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 12);
        assert!(sorted.iter().all(|k| (1..=99).contains(k)));
    }

    #[test]
    fn test_random_keys_capped() {
        assert_eq!(random_keys(1, 500).len(), 99);
    }

    #[test]
    fn test_random_tree_size() {
        assert_eq!(random_tree(3, 15).len(), 15);
    }

    #[test]
    fn test_random_graph_connected_from_a() {
        let graph = random_graph(42, 8, 3);
        assert_eq!(graph.node_count(), 8);
        assert!(graph.edge_count() >= 7);
        assert_eq!(graph.bfs("A").unwrap().len(), 8);
    }
}
