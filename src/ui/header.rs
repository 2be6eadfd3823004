//! Header panel UI rendering
//!
//! View selector, container capacity, traversal step delay and theme selector.

use dsviz::Structure;
use eframe::egui;

use crate::app::AppState;
use crate::state::{CAPACITY_RANGE, STEP_DELAY_RANGE_MS};

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked another structure to show
    ViewSelected(Structure),
    /// User changed the stack and queue capacity
    CapacityChanged(usize),
}

/// Renders the application header.
///
/// The step delay and the theme are plain preferences and are edited in
/// place; choices that touch the structures are returned as interactions.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let active = state.settings.active_view();
        for view in Structure::ALL {
            if ui.selectable_label(active == view, view.title()).clicked() && active != view {
                interaction = Some(HeaderInteraction::ViewSelected(view));
            }
        }

        ui.separator();

        ui.label("Capacity:");
        let mut capacity = state.settings.capacity();
        let response = ui.add(egui::DragValue::new(&mut capacity).range(CAPACITY_RANGE));
        if response.changed() {
            interaction = Some(HeaderInteraction::CapacityChanged(capacity));
        }
        response.on_hover_text("Maximum number of items in the stack and the queue");

        ui.label("Step delay:");
        let mut delay = state.settings.step_delay_ms();
        if ui
            .add(egui::DragValue::new(&mut delay).range(STEP_DELAY_RANGE_MS).suffix(" ms").speed(10))
            .changed()
        {
            state.settings.set_step_delay_ms(delay);
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                tracing::debug!(theme = %current_theme, "theme changed");
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    interaction
}
