//! Rendering subsystem for drawing the structures
//!
//! - Container rendering (stack and queue cells)
//! - Tree rendering (laid-out BST nodes and links)
//! - Graph rendering (spring-laid-out nodes, traversal colors)
//! - Text utilities (label measurement and truncation)

pub mod container_renderer;
pub mod tree_renderer;
pub mod graph_renderer;
pub mod text_utils;
