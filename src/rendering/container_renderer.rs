//! Drawing of the stack and queue as rows of cells.
//!
//! The stack grows upward with its top cell drawn first; the queue runs left
//! to right from front to rear. The cell at the removal end is highlighted.

use dsviz::{LinearContainer, ThemeColors};
use eframe::egui;
use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::presentation::color_mapping::cell_color;
use crate::rendering::text_utils::truncate_text_to_fit;

pub const CELL_SIZE: Vec2 = Vec2::new(140.0, 36.0);
pub const QUEUE_CELL_SIZE: Vec2 = Vec2::new(80.0, 48.0);
const GAP: f32 = 4.0;
const LABEL_WIDTH: f32 = 60.0;

/// Rects of `count` stacked cells, first (top) cell at the top.
pub fn stack_cell_rects(origin: Pos2, count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| {
            let min = origin + egui::vec2(LABEL_WIDTH, i as f32 * (CELL_SIZE.y + GAP));
            Rect::from_min_size(min, CELL_SIZE)
        })
        .collect()
}

/// Rects of `count` cells in a row, front cell on the left.
pub fn queue_cell_rects(origin: Pos2, count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| {
            let min = origin + egui::vec2(i as f32 * (QUEUE_CELL_SIZE.x + GAP), 0.0);
            Rect::from_min_size(min, QUEUE_CELL_SIZE)
        })
        .collect()
}

/// Draws a stack, top first, with a "Top" marker.
pub fn render_stack(ui: &mut egui::Ui, stack: &dyn LinearContainer, colors: &ThemeColors) {
    let items = stack.items();
    if items.is_empty() {
        ui.colored_label(colors.text_dim, "Stack is empty.");
        return;
    }

    let height = items.len() as f32 * (CELL_SIZE.y + GAP);
    let (response, painter) =
        ui.allocate_painter(egui::vec2(LABEL_WIDTH + CELL_SIZE.x, height), Sense::hover());
    let rects = stack_cell_rects(response.rect.min, items.len());
    let font = FontId::proportional(16.0);

    for (i, (rect, item)) in rects.iter().zip(&items).enumerate() {
        draw_cell(&painter, *rect, item, i == 0, &font, colors);
    }
    if let Some(top) = rects.first() {
        painter.text(
            egui::pos2(response.rect.min.x, top.center().y),
            Align2::LEFT_CENTER,
            "Top →",
            FontId::proportional(13.0),
            colors.text_dim,
        );
    }
}

/// Draws a queue, front on the left, with "Front" and "Rear" captions.
pub fn render_queue(ui: &mut egui::Ui, queue: &dyn LinearContainer, colors: &ThemeColors) {
    let items = queue.items();
    if items.is_empty() {
        ui.colored_label(colors.text_dim, "Queue is empty.");
        return;
    }

    let caption_height = 20.0;
    let width = items.len() as f32 * (QUEUE_CELL_SIZE.x + GAP);
    egui::ScrollArea::horizontal().show(ui, |ui| {
        let (response, painter) =
            ui.allocate_painter(egui::vec2(width, QUEUE_CELL_SIZE.y + caption_height), Sense::hover());
        let rects = queue_cell_rects(response.rect.min, items.len());
        let font = FontId::proportional(16.0);

        for (i, (rect, item)) in rects.iter().zip(&items).enumerate() {
            draw_cell(&painter, *rect, item, i == 0, &font, colors);
        }

        let caption = FontId::proportional(12.0);
        if let (Some(front), Some(rear)) = (rects.first(), rects.last()) {
            painter.text(front.center_bottom() + egui::vec2(0.0, 4.0), Align2::CENTER_TOP, "Front", caption.clone(), colors.text_dim);
            if rects.len() > 1 {
                painter.text(rear.center_bottom() + egui::vec2(0.0, 4.0), Align2::CENTER_TOP, "Rear", caption, colors.text_dim);
            }
        }
    });
}

fn draw_cell(
    painter: &egui::Painter,
    rect: Rect,
    label: &str,
    highlighted: bool,
    font: &FontId,
    colors: &ThemeColors,
) {
    painter.rect_filled(rect, 4.0, cell_color(highlighted, colors));
    painter.rect_stroke(rect, 4.0, Stroke::new(1.0, colors.border), StrokeKind::Inside);
    let text = truncate_text_to_fit(label, rect.width(), font, painter);
    let text_color = if highlighted { colors.node_label } else { colors.text };
    painter.text(rect.center(), Align2::CENTER_CENTER, text, font.clone(), text_color);
}
