//! Panel orchestration and layout management.
//!
//! Coordinates the header, control, canvas and status panels and folds their
//! interactions into a single [`PanelInteraction`] per frame.

use dsviz::{Command, Structure};

use crate::app::AppState;
use crate::ui::{canvas, controls, header, status_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// Run an operation on a structure
    Execute(Command),
    /// Show another structure
    ViewSelected(Structure),
    /// Change the stack and queue capacity
    CapacityChanged(usize),
    /// Play or pause the traversal reveal
    TogglePlayback,
    /// Reveal one more traversal step
    StepPlayback,
    /// Reveal the whole traversal
    ShowAllSteps,
}

impl From<header::HeaderInteraction> for PanelInteraction {
    fn from(interaction: header::HeaderInteraction) -> Self {
        match interaction {
            header::HeaderInteraction::ViewSelected(view) => PanelInteraction::ViewSelected(view),
            header::HeaderInteraction::CapacityChanged(capacity) => PanelInteraction::CapacityChanged(capacity),
        }
    }
}

impl From<controls::ControlsInteraction> for PanelInteraction {
    fn from(interaction: controls::ControlsInteraction) -> Self {
        match interaction {
            controls::ControlsInteraction::Execute(command) => PanelInteraction::Execute(command),
            controls::ControlsInteraction::TogglePlayback => PanelInteraction::TogglePlayback,
            controls::ControlsInteraction::StepPlayback => PanelInteraction::StepPlayback,
            controls::ControlsInteraction::ShowAllSteps => PanelInteraction::ShowAllSteps,
        }
    }
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = state.theme.colors().clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(header_interaction.into());
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Left panel: operations for the active structure
        let controls_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        egui::SidePanel::left("controls_panel")
            .default_width(260.0)
            .resizable(true)
            .frame(controls_frame)
            .show(ctx, |ui| {
                if let Some(controls_interaction) = controls::render_controls(ui, state) {
                    interaction = Some(controls_interaction.into());
                }
            });

        // Center: the structure itself
        let canvas_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(12))
            .fill(theme_colors.canvas_background);

        egui::CentralPanel::default()
            .frame(canvas_frame)
            .show(ctx, |ui| {
                canvas::render_canvas(ui, state, &theme_colors);
            });

        interaction
    }
}
