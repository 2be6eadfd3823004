//! Color mapping for drawn elements.
//!
//! Graph nodes are colored by their traversal state; notices by severity.

use dsviz::ThemeColors;
use egui::Color32;

use crate::state::NoticeLevel;

/// Where a graph node stands in the revealed part of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Not reached yet (or no traversal shown)
    Unvisited,
    /// Revealed earlier in the visit order
    Visited,
    /// The most recently revealed node
    Current,
}

impl NodeState {
    /// Classifies `id` against the revealed prefix of a traversal.
    pub fn classify(id: &str, visible: &[String]) -> Self {
        match visible.iter().position(|n| n == id) {
            None => NodeState::Unvisited,
            Some(i) if i + 1 == visible.len() => NodeState::Current,
            Some(_) => NodeState::Visited,
        }
    }
}

/// Fill color of a graph node.
pub fn graph_node_color(state: NodeState, colors: &ThemeColors) -> Color32 {
    match state {
        NodeState::Unvisited => colors.graph_node,
        NodeState::Visited => colors.visited_node,
        NodeState::Current => colors.current_node,
    }
}

/// Text color of a notice.
pub fn notice_color(level: NoticeLevel, colors: &ThemeColors) -> Color32 {
    match level {
        NoticeLevel::Success => colors.success,
        NoticeLevel::Warning => colors.warning,
        NoticeLevel::Error => colors.error,
    }
}

/// Fill of a container cell; the cell at the removal end is highlighted.
pub fn cell_color(is_removal_end: bool, colors: &ThemeColors) -> Color32 {
    if is_removal_end {
        colors.cell_highlight
    } else {
        colors.cell
    }
}
