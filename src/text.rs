//! Plain-text renderings of the structures.
//!
//! Used by the line-oriented front-end and for traversal summaries in the GUI.

use std::fmt::Write;

use crate::bst::{BinarySearchTree, BstNode};
use crate::graph::{Graph, Traversal};
use crate::linear::{LinearContainer, Queue, Stack};

/// Joins a visit order as `A → B → C`.
pub fn format_order<S: AsRef<str>>(order: &[S]) -> String {
    order
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" → ")
}

/// Renders a stack vertically, top first.
pub fn render_stack(stack: &Stack) -> String {
    if stack.is_empty() {
        return "Stack is empty.".to_string();
    }
    let items = stack.items();
    let width = box_width(&items);
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        let label = if i == 0 { "  (Top)" } else { "" };
        let _ = writeln!(out, "| {item:^width$} |{label}");
    }
    let _ = write!(out, "+{}+  {}/{}", "-".repeat(width + 2), stack.len(), stack.capacity());
    out
}

/// Renders a queue horizontally, front on the left.
pub fn render_queue(queue: &Queue) -> String {
    if queue.is_empty() {
        return "Queue is empty.".to_string();
    }
    let items = queue.items();
    let cells: Vec<String> = items.iter().map(|item| format!("[ {item} ]")).collect();
    let mut out = format!("Front {} Rear", cells.join(" "));
    let _ = write!(out, "  {}/{}", queue.len(), queue.capacity());
    out
}

/// Renders a tree sideways: right subtree above, left subtree below.
pub fn render_tree(tree: &BinarySearchTree) -> String {
    fn walk(node: &BstNode, prefix: &str, out: &mut String) {
        if let Some(right) = node.right() {
            walk(right, &format!("{prefix}    "), out);
        }
        let _ = writeln!(out, "{prefix}{}", node.key());
        if let Some(left) = node.left() {
            walk(left, &format!("{prefix}    "), out);
        }
    }

    match tree.root() {
        None => "Tree is empty.".to_string(),
        Some(root) => {
            let mut out = String::new();
            walk(root, "", &mut out);
            let _ = write!(out, "size {} height {}", tree.len(), tree.height());
            out
        }
    }
}

/// Renders adjacency lists, marking nodes visited by `traversal`.
pub fn render_graph(graph: &Graph, traversal: Option<&Traversal>) -> String {
    if graph.is_empty() {
        return "Graph is empty.".to_string();
    }
    let mut out = String::new();
    for id in graph.nodes() {
        let mark = match traversal.and_then(|t| t.position(id)) {
            Some(pos) => format!(" #{}", pos + 1),
            None => String::new(),
        };
        let neighbors = graph.neighbors(id).unwrap_or_default().join(", ");
        let _ = writeln!(out, "{id}{mark}: {neighbors}");
    }
    match traversal {
        Some(t) => {
            let _ = write!(out, "Traversal Order ({}): {}", t.kind(), format_order(t.order()));
        }
        None => {
            let _ = write!(out, "{} nodes, {} edges", graph.node_count(), graph.edge_count());
        }
    }
    out
}

fn box_width(items: &[&str]) -> usize {
    items.iter().map(|s| s.chars().count()).max().unwrap_or(0).max(3)
}
