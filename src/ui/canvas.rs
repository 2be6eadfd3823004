//! Central canvas UI rendering
//!
//! Draws the active structure and the textual facts that go with it
//! (in-order sequence of the tree, revealed traversal order of the graph).

use dsviz::{text, Structure, ThemeColors};
use eframe::egui;

use crate::app::AppState;
use crate::rendering::{container_renderer, graph_renderer, tree_renderer};

/// Renders the active view into the central panel.
pub fn render_canvas(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors) {
    match state.settings.active_view() {
        Structure::Stack => container_renderer::render_stack(ui, state.session.stack(), colors),
        Structure::Queue => container_renderer::render_queue(ui, state.session.queue(), colors),
        Structure::Tree => tree_view(ui, state, colors),
        Structure::Graph => graph_view(ui, state, colors),
    }
}

fn tree_view(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors) {
    let tree = state.session.tree();
    if tree.is_empty() {
        ui.colored_label(colors.text_dim, "Tree is empty. Insert a value or generate a random tree.");
        return;
    }

    let in_order = tree.in_order();
    ui.label(format!("In-order: {}", text::format_order(&in_order.iter().map(i64::to_string).collect::<Vec<_>>())));
    ui.separator();

    let config = tree_renderer::layout_config(ui.available_width());
    let layout = state.layout_cache.tree_layout(tree, config);
    egui::ScrollArea::both().show(ui, |ui| {
        tree_renderer::render_tree(ui, layout, colors);
    });
}

fn graph_view(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors) {
    let graph = state.session.graph();
    if graph.is_empty() {
        ui.colored_label(colors.text_dim, "Graph is empty. Add nodes and edges or generate a random graph.");
        return;
    }

    let visible = state.playback.visible();
    match state.playback.traversal() {
        Some(traversal) => {
            ui.label(format!("Traversal Order ({}): {}", traversal.kind(), text::format_order(visible)));
        }
        None => {
            ui.label(format!("{} nodes, {} edges", graph.node_count(), graph.edge_count()));
        }
    }
    ui.separator();

    let positions = state.layout_cache.graph_positions(graph);
    graph_renderer::render_graph(ui, graph, positions, visible, colors);
}
