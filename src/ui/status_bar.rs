//! Status bar UI rendering
//!
//! Process memory plus the size of every structure.

use dsviz::LinearContainer;
use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::utils::{format_memory_mb, get_current_memory_mb, pluralize};

/// One-line summary of all four structures.
pub fn structure_summary(state: &AppState) -> String {
    let session = &state.session;
    let (stack, queue, tree, graph) = (session.stack(), session.queue(), session.tree(), session.graph());
    format!(
        "Stack: {}/{} | Queue: {}/{} | Tree: {}, height {} | Graph: {}, {}",
        stack.len(),
        stack.capacity(),
        queue.len(),
        queue.capacity(),
        pluralize(tree.len(), "node"),
        tree.height(),
        pluralize(graph.node_count(), "node"),
        pluralize(graph.edge_count(), "edge"),
    )
}

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(structure_summary(state)).strong());
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ApplicationCoordinator;
    use dsviz::Command;

    #[test]
    fn test_summary_counts() {
        let mut state = AppState::new();
        ApplicationCoordinator::execute(&mut state, Command::Push("a".into()), 0.0);
        ApplicationCoordinator::execute(&mut state, Command::Insert("4".into()), 0.0);
        ApplicationCoordinator::execute(&mut state, Command::AddNode("A".into()), 0.0);
        assert_eq!(
            structure_summary(&state),
            "Stack: 1/10 | Queue: 0/10 | Tree: 1 node, height 1 | Graph: 1 node, 0 edges"
        );
    }
}
