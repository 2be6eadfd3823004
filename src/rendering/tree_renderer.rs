//! Binary search tree drawing.
//!
//! Positions come from [`TreeLayout`], computed for the width of the canvas,
//! so layout coordinates map to screen coordinates by a plain offset.

use dsviz::{LayoutConfig, ThemeColors, TreeLayout};
use eframe::egui;
use egui::{Align2, FontId, Pos2, Sense, Stroke};

use crate::rendering::text_utils::truncate_text_to_fit;

pub const NODE_RADIUS: f32 = 20.0;

/// Narrowest canvas a tree is laid out for; narrower panels scroll.
const MIN_WIDTH: f32 = 320.0;

/// Layout geometry for a canvas of `available_width`.
pub fn layout_config(available_width: f32) -> LayoutConfig {
    LayoutConfig {
        width: available_width.max(MIN_WIDTH),
        ..LayoutConfig::default()
    }
}

/// Height needed to show every node of `layout` with its circle.
pub fn canvas_height(layout: &TreeLayout) -> f32 {
    match layout.bounds() {
        Some((_, _, _, max_y)) => max_y + NODE_RADIUS + layout.config().top_margin / 2.0,
        None => 0.0,
    }
}

/// Draws `layout` into a canvas allocated from `ui`.
pub fn render_tree(ui: &mut egui::Ui, layout: &TreeLayout, colors: &ThemeColors) {
    let size = egui::vec2(layout.config().width, canvas_height(layout));
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let origin = response.rect.min;
    let at = |(x, y): (f32, f32)| -> Pos2 { origin + egui::vec2(x, y) };

    let edge_stroke = Stroke::new(2.0, colors.edge);
    for (from, to) in layout.segments() {
        painter.line_segment([at(from), at(to)], edge_stroke);
    }

    let font = FontId::proportional(14.0);
    for node in layout.positions() {
        let center = at((node.x, node.y));
        painter.circle_filled(center, NODE_RADIUS, colors.tree_node);
        painter.circle_stroke(center, NODE_RADIUS, Stroke::new(1.0, colors.border));
        let label = truncate_text_to_fit(&node.key.to_string(), NODE_RADIUS * 2.0 + 8.0, &font, &painter);
        painter.text(center, Align2::CENTER_CENTER, label, font.clone(), colors.node_label);
    }
}
