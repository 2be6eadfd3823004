//! Deterministic 2-D placement of binary search tree nodes.
//!
//! The root sits in the horizontal center of the drawing area. Each child is
//! shifted left or right of its parent by a span that starts at a quarter of the
//! width and halves with every level. Rows are spaced evenly by depth.
//!
//! Deep trees run out of span and nodes may overlap; this is accepted.

use serde::{Deserialize, Serialize};

use crate::bst::{BinarySearchTree, BstNode};

/// Geometry of the drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Total horizontal extent available to the tree
    pub width: f32,
    /// Vertical distance between consecutive levels
    pub level_height: f32,
    /// Y coordinate of the root
    pub top_margin: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            level_height: 80.0,
            top_margin: 40.0,
        }
    }
}

/// Placement of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub key: i64,
    pub x: f32,
    pub y: f32,
    pub depth: usize,
}

/// Computed layout for one tree shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeLayout {
    config: LayoutConfig,
    /// Positions in pre-order
    positions: Vec<NodePosition>,
    /// (parent index, child index) into `positions`
    links: Vec<(usize, usize)>,
}

impl TreeLayout {
    /// Lays out `tree` inside the area described by `config`.
    pub fn compute(tree: &BinarySearchTree, config: LayoutConfig) -> Self {
        let mut layout = Self {
            config,
            positions: Vec::with_capacity(tree.len()),
            links: Vec::with_capacity(tree.len().saturating_sub(1)),
        };
        if let Some(root) = tree.root() {
            layout.place(root, config.width / 2.0, config.width / 4.0, 0, None);
        }
        layout
    }

    fn place(&mut self, node: &BstNode, x: f32, span: f32, depth: usize, parent: Option<usize>) {
        let index = self.positions.len();
        self.positions.push(NodePosition {
            key: node.key(),
            x,
            y: self.config.top_margin + depth as f32 * self.config.level_height,
            depth,
        });
        if let Some(parent) = parent {
            self.links.push((parent, index));
        }
        if let Some(left) = node.left() {
            self.place(left, x - span, span / 2.0, depth + 1, Some(index));
        }
        if let Some(right) = node.right() {
            self.place(right, x + span, span / 2.0, depth + 1, Some(index));
        }
    }

    pub fn config(&self) -> LayoutConfig {
        self.config
    }

    /// Node positions in pre-order (root first).
    pub fn positions(&self) -> &[NodePosition] {
        &self.positions
    }

    /// Position of the node holding `key`.
    pub fn position_of(&self, key: i64) -> Option<&NodePosition> {
        self.positions.iter().find(|p| p.key == key)
    }

    /// Parent-to-child line segments as ((x1, y1), (x2, y2)).
    pub fn segments(&self) -> impl Iterator<Item = ((f32, f32), (f32, f32))> + '_ {
        self.links.iter().map(|&(p, c)| {
            let (a, b) = (&self.positions[p], &self.positions[c]);
            ((a.x, a.y), (b.x, b.y))
        })
    }

    /// Bounding box of all node centers as (min_x, min_y, max_x, max_y).
    pub fn bounds(&self) -> Option<(f32, f32, f32, f32)> {
        let first = self.positions.first()?;
        let init = (first.x, first.y, first.x, first.y);
        Some(self.positions.iter().fold(init, |(x0, y0, x1, y1), p| {
            (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y))
        }))
    }

    /// Returns true if the layout no longer describes `tree`.
    ///
    /// Positions are kept in pre-order, and a pre-order sequence determines a
    /// BST's shape, so equal sequences mean the layout still fits. This also
    /// catches a tree rebuilt from the same keys in a different order.
    pub fn is_stale(&self, tree: &BinarySearchTree) -> bool {
        if self.positions.len() != tree.len() {
            return true;
        }
        !self.positions.iter().map(|p| p.key).eq(tree.pre_order())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
