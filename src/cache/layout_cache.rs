//! Caching of tree and graph layouts between frames.

use dsviz::{BinarySearchTree, Graph, GraphPositions, LayoutConfig, TreeLayout, DEFAULT_SEED};

/// Layouts reused across frames until the structure or the canvas changes.
///
/// Tree layouts are recomputed when the tree's shape or the available width
/// changes, or after an explicit invalidation. Graph positions are recomputed when the node set changes or
/// after an explicit invalidation (sample data, clear), so nodes do not
/// jump around while edges are being added.
#[derive(Debug, Default)]
pub struct LayoutCache {
    tree: Option<TreeLayout>,
    graph: Option<GraphPositions>,
    /// Incremented on every recomputation, for diagnostics
    pub generation: u64,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tree layout for `config`, recomputing it if needed.
    pub fn tree_layout(&mut self, tree: &BinarySearchTree, config: LayoutConfig) -> &TreeLayout {
        let valid = matches!(&self.tree, Some(layout) if layout.config() == config && !layout.is_stale(tree));
        if !valid {
            self.generation += 1;
            tracing::trace!(nodes = tree.len(), width = config.width, "tree relayout");
            self.tree = None;
        }
        self.tree.get_or_insert_with(|| TreeLayout::compute(tree, config))
    }

    /// Returns the graph positions, recomputing them if the node set changed.
    pub fn graph_positions(&mut self, graph: &Graph) -> &GraphPositions {
        let valid = matches!(&self.graph, Some(positions) if !positions.is_stale(graph));
        if !valid {
            self.generation += 1;
            tracing::trace!(nodes = graph.node_count(), "graph relayout");
            self.graph = None;
        }
        self.graph.get_or_insert_with(|| GraphPositions::compute(graph, DEFAULT_SEED))
    }

    /// Drops the cached tree layout.
    pub fn invalidate_tree(&mut self) {
        self.tree = None;
    }

    /// Drops the cached graph positions.
    pub fn invalidate_graph(&mut self) {
        self.graph = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_layout_reused_until_insert() {
        let mut cache = LayoutCache::new();
        let mut tree = BinarySearchTree::from_keys([5, 3]);
        let config = LayoutConfig::default();

        assert_eq!(cache.tree_layout(&tree, config).len(), 2);
        let generation = cache.generation;
        cache.tree_layout(&tree, config);
        assert_eq!(cache.generation, generation);

        tree.insert(8).unwrap();
        assert_eq!(cache.tree_layout(&tree, config).len(), 3);
        assert_eq!(cache.generation, generation + 1);
    }

    #[test]
    fn test_tree_rebuilt_from_same_keys_is_relaid_out() {
        let mut cache = LayoutCache::new();
        let mut tree = BinarySearchTree::from_keys([1, 2]);
        let config = LayoutConfig::default();
        assert_eq!(cache.tree_layout(&tree, config).positions()[0].key, 1);

        tree.clear();
        tree.insert(2).unwrap();
        tree.insert(1).unwrap();
        assert_eq!(cache.tree_layout(&tree, config).positions()[0].key, 2);

        let generation = cache.generation;
        cache.invalidate_tree();
        cache.tree_layout(&tree, config);
        assert_eq!(cache.generation, generation + 1);
    }

    #[test]
    fn test_tree_relayout_on_width_change() {
        let mut cache = LayoutCache::new();
        let tree = BinarySearchTree::from_keys([5]);
        let wide = LayoutConfig { width: 1000.0, ..LayoutConfig::default() };

        let x = cache.tree_layout(&tree, LayoutConfig::default()).positions()[0].x;
        assert_eq!(x, 400.0);
        let x = cache.tree_layout(&tree, wide).positions()[0].x;
        assert_eq!(x, 500.0);
    }

    #[test]
    fn test_graph_positions_survive_new_edges() {
        let mut cache = LayoutCache::new();
        let mut graph = Graph::new();
        graph.add_node("A").unwrap();
        graph.add_node("B").unwrap();

        cache.graph_positions(&graph);
        let generation = cache.generation;

        graph.add_edge("A", "B").unwrap();
        cache.graph_positions(&graph);
        assert_eq!(cache.generation, generation);

        graph.add_node("C").unwrap();
        assert_eq!(cache.graph_positions(&graph).len(), 3);
        assert_eq!(cache.generation, generation + 1);

        cache.invalidate_graph();
        cache.graph_positions(&graph);
        assert_eq!(cache.generation, generation + 2);
    }
}
