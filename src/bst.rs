//! Unbalanced binary search tree over integer keys.
//!
//! Each node exclusively owns its children through `Box`, so subtrees can never
//! be shared or form cycles. Keys are strictly ordered: every key in a left
//! subtree is smaller than its parent and every key in a right subtree is larger.
//! Duplicates are rejected. There is no rebalancing and no delete.

use std::cmp::Ordering;

use crate::error::{VizError, VizResult};

/// A single tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BstNode {
    key: i64,
    left: Option<Box<BstNode>>,
    right: Option<Box<BstNode>>,
}

impl BstNode {
    fn leaf(key: i64) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> i64 {
        self.key
    }

    pub fn left(&self) -> Option<&BstNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&BstNode> {
        self.right.as_deref()
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Binary search tree with owned, recursive nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinarySearchTree {
    root: Option<Box<BstNode>>,
    len: usize,
}

impl BinarySearchTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree by inserting keys in order, skipping duplicates.
    pub fn from_keys(keys: impl IntoIterator<Item = i64>) -> Self {
        let mut tree = Self::new();
        for key in keys {
            // Duplicates are a no-op here.
            let _ = tree.insert(key);
        }
        tree
    }

    /// Root of the tree, absent when empty.
    pub fn root(&self) -> Option<&BstNode> {
        self.root.as_deref()
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts a key by recursive descent.
    ///
    /// Smaller keys go left and larger keys go right. An equal key reports
    /// `DuplicateKey` and leaves the tree untouched.
    pub fn insert(&mut self, key: i64) -> VizResult<()> {
        match insert_into(&mut self.root, key) {
            Ok(depth) => {
                self.len += 1;
                tracing::debug!(key, depth, size = self.len, "bst insert");
                Ok(())
            }
            Err(err) => {
                tracing::debug!(key, "bst insert rejected duplicate");
                Err(err)
            }
        }
    }

    /// Parses raw user text and inserts it.
    ///
    /// Blank text reports `EmptyInput`; anything that is not an integer reports
    /// `InvalidKey`. Surrounding whitespace is ignored.
    pub fn insert_text(&mut self, text: &str) -> VizResult<i64> {
        let key = parse_key(text)?;
        self.insert(key)?;
        Ok(key)
    }

    /// Returns true if `key` is stored in the tree.
    pub fn contains(&self, key: i64) -> bool {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Number of levels in the tree; 0 when empty, 1 for a lone root.
    pub fn height(&self) -> usize {
        fn height_of(node: Option<&BstNode>) -> usize {
            match node {
                None => 0,
                Some(n) => 1 + height_of(n.left()).max(height_of(n.right())),
            }
        }
        height_of(self.root())
    }

    /// Keys in ascending order.
    pub fn in_order(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&BstNode> = Vec::new();
        let mut current = self.root();
        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            if let Some(node) = stack.pop() {
                out.push(node.key);
                current = node.right();
            }
        }
        out
    }

    /// Keys in root, left, right order. Re-inserting them into an empty tree
    /// reproduces the same shape.
    pub fn pre_order(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&BstNode> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(node.key);
            if let Some(right) = node.right() {
                stack.push(right);
            }
            if let Some(left) = node.left() {
                stack.push(left);
            }
        }
        out
    }

    /// Parent to child key pairs in pre-order, left child before right.
    pub fn edges(&self) -> Vec<(i64, i64)> {
        let mut out = Vec::with_capacity(self.len.saturating_sub(1));
        let mut stack: Vec<&BstNode> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            if let Some(right) = node.right() {
                stack.push(right);
            }
            if let Some(left) = node.left() {
                stack.push(left);
            }
            for child in [node.left(), node.right()].into_iter().flatten() {
                out.push((node.key, child.key));
            }
        }
        out
    }

    /// Discards every node.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

/// Recursive insertion. Returns the depth at which the new node landed.
fn insert_into(slot: &mut Option<Box<BstNode>>, key: i64) -> VizResult<usize> {
    match slot {
        None => {
            *slot = Some(Box::new(BstNode::leaf(key)));
            Ok(0)
        }
        Some(node) => {
            let depth = match key.cmp(&node.key) {
                Ordering::Less => insert_into(&mut node.left, key)?,
                Ordering::Greater => insert_into(&mut node.right, key)?,
                Ordering::Equal => return Err(VizError::DuplicateKey { key }),
            };
            Ok(depth + 1)
        }
    }
}

/// Parses a tree key from raw user input.
pub fn parse_key(text: &str) -> VizResult<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(VizError::EmptyInput { what: "value to insert" });
    }
    trimmed.parse::<i64>().map_err(|_| VizError::InvalidKey {
        input: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_orders_keys() {
        let tree = BinarySearchTree::from_keys([50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.in_order(), vec![20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(tree.pre_order(), vec![50, 30, 20, 40, 70, 60, 80]);
        assert_eq!(tree.height(), 3);

        let root = tree.root().unwrap();
        assert_eq!(root.key(), 50);
        assert_eq!(root.left().map(BstNode::key), Some(30));
        assert_eq!(root.right().map(BstNode::key), Some(70));
    }

    #[test]
    fn test_duplicate_rejected_without_mutation() {
        let mut tree = BinarySearchTree::from_keys([5, 3, 8]);
        let before = tree.clone();
        assert_eq!(tree.insert(3), Err(VizError::DuplicateKey { key: 3 }));
        assert_eq!(tree, before);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_increasing_keys_degenerate_to_a_chain() {
        let tree = BinarySearchTree::from_keys(1..=6);
        assert_eq!(tree.height(), 6);
        assert!(tree.root().unwrap().left().is_none());
    }

    #[test]
    fn test_contains() {
        let tree = BinarySearchTree::from_keys([10, -5, 15]);
        assert!(tree.contains(-5));
        assert!(tree.contains(15));
        assert!(!tree.contains(0));
        assert!(!BinarySearchTree::new().contains(0));
    }

    #[test]
    fn test_edges_follow_shape() {
        let tree = BinarySearchTree::from_keys([2, 1, 3, 4]);
        assert_eq!(tree.edges(), vec![(2, 1), (2, 3), (3, 4)]);
        assert!(BinarySearchTree::new().edges().is_empty());
    }

    #[test]
    fn test_insert_text_validates() {
        let mut tree = BinarySearchTree::new();
        assert_eq!(tree.insert_text(" 42 "), Ok(42));
        assert_eq!(
            tree.insert_text(""),
            Err(VizError::EmptyInput { what: "value to insert" })
        );
        assert_eq!(
            tree.insert_text("4.2"),
            Err(VizError::InvalidKey { input: "4.2".to_string() })
        );
        assert_eq!(tree.insert_text("42"), Err(VizError::DuplicateKey { key: 42 }));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut tree = BinarySearchTree::from_keys([3, 1, 2]);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert!(tree.in_order().is_empty());
    }
}
