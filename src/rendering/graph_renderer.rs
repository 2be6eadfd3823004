//! Undirected graph drawing with traversal highlighting.

use dsviz::{Graph, GraphPositions, ThemeColors};
use eframe::egui;
use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke};

use crate::presentation::color_mapping::{graph_node_color, NodeState};
use crate::rendering::text_utils::truncate_text_to_fit;

pub const NODE_RADIUS: f32 = 22.0;
const CANVAS_HEIGHT: f32 = 420.0;

/// Maps a unit-square point into `rect`, keeping node circles inside it.
pub fn to_screen((x, y): (f32, f32), rect: Rect) -> Pos2 {
    let inner = rect.shrink(NODE_RADIUS);
    egui::pos2(
        inner.min.x + x * inner.width(),
        inner.min.y + y * inner.height(),
    )
}

/// Draws `graph` at `positions`, coloring nodes by their place in `visible`.
///
/// `visible` is the revealed prefix of a traversal (empty when none).
pub fn render_graph(
    ui: &mut egui::Ui,
    graph: &Graph,
    positions: &GraphPositions,
    visible: &[String],
    colors: &ThemeColors,
) {
    let size = egui::vec2(ui.available_width(), CANVAS_HEIGHT);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 4.0, colors.canvas_background);

    let locate = |id: &str| positions.get(id).map(|p| to_screen(p, rect));
    let edge_stroke = Stroke::new(2.0, colors.edge);

    for (u, v) in graph.edges() {
        let (Some(a), Some(b)) = (locate(u), locate(v)) else {
            continue;
        };
        if u == v {
            // Self-loop: small ring above the node.
            let ring = a - egui::vec2(0.0, NODE_RADIUS);
            painter.circle_stroke(ring, NODE_RADIUS * 0.6, edge_stroke);
        } else {
            painter.line_segment([a, b], edge_stroke);
        }
    }

    let font = FontId::proportional(15.0);
    for id in graph.nodes() {
        let Some(center) = locate(id) else {
            continue;
        };
        let state = NodeState::classify(id, visible);
        painter.circle_filled(center, NODE_RADIUS, graph_node_color(state, colors));
        if state == NodeState::Current {
            painter.circle_stroke(center, NODE_RADIUS + 3.0, Stroke::new(2.0, colors.current_node));
        }
        let label = truncate_text_to_fit(id, NODE_RADIUS * 2.0 + 8.0, &font, &painter);
        painter.text(center, Align2::CENTER_CENTER, label, font.clone(), colors.node_label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_square_corners_stay_inside() {
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(200.0, 100.0));
        assert_eq!(to_screen((0.0, 0.0), rect), egui::pos2(NODE_RADIUS, NODE_RADIUS));
        assert_eq!(
            to_screen((1.0, 1.0), rect),
            egui::pos2(200.0 - NODE_RADIUS, 100.0 - NODE_RADIUS)
        );
        assert_eq!(to_screen((0.5, 0.5), rect), rect.center());
    }
}
