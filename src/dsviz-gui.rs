//! Desktop front-end for the data structure visualizer.
//!
//! Shows one structure at a time (stack, queue, binary search tree or graph)
//! with controls to modify it. Graph traversals are revealed step by step.
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordinators
//! - `state/` - Focused state components (settings, inputs, playback, theme)
//! - `cache/` - Layout caching between frames
//! - `presentation/` - Color mapping
//! - `rendering/` - Low-level drawing of cells, trees and graphs
//! - `ui/` - Panels and their interactions
//! - `utils/` - Formatting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod cache;
mod presentation;
mod rendering;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use state::ThemeState;
use ui::panel_manager::{PanelInteraction, PanelManager};

#[derive(Debug, Parser)]
#[command(name = "dsviz-gui", about = "Interactive stack, queue, BST and graph visualizer")]
struct Args {
    /// Seed for random sample data
    #[arg(long, default_value_t = dsviz::DEFAULT_SEED)]
    seed: u64,
}

/// Main application entry point.
fn main() -> eframe::Result {
    init_tracing();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Data Structure Visualizer"),
        ..Default::default()
    };

    eframe::run_native(
        "Data Structure Visualizer",
        options,
        Box::new(move |cc| Ok(Box::new(VisualizerApp::new(cc, args.seed)))),
    )
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// The visualizer application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` applies interactions to the state
/// - `ThemeCoordinator` handles theme persistence and application
/// - `SettingsCoordinator` persists preferences
/// - `PanelManager` handles UI panel layout and rendering
struct VisualizerApp {
    state: AppState,
}

impl VisualizerApp {
    /// Creates the application with preferences loaded from persistent storage.
    fn new(cc: &eframe::CreationContext, seed: u64) -> Self {
        let theme = ThemeState::with_theme(ThemeCoordinator::load_theme_from_storage(cc.storage));
        let settings = SettingsCoordinator::load_settings(cc.storage);
        tracing::info!(
            theme = theme.current_theme_name(),
            capacity = settings.capacity(),
            view = %settings.active_view(),
            "visualizer started"
        );

        Self {
            state: AppState::with_preferences(theme, settings, seed),
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, now: f64) {
        let state = &mut self.state;
        match interaction {
            PanelInteraction::Execute(command) => ApplicationCoordinator::execute(state, command, now),
            PanelInteraction::ViewSelected(view) => ApplicationCoordinator::select_view(state, view),
            PanelInteraction::CapacityChanged(capacity) => ApplicationCoordinator::set_capacity(state, capacity),
            PanelInteraction::TogglePlayback => state.playback.toggle_play(now),
            PanelInteraction::StepPlayback => {
                state.playback.step_forward();
            }
            PanelInteraction::ShowAllSteps => state.playback.show_all(),
        }
    }
}

impl eframe::App for VisualizerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_settings(storage, &self.state.settings);
    }

    /// Main update loop: advance playback, apply theme, render, handle interactions.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        if ApplicationCoordinator::tick_playback(&mut self.state, now) {
            let delay = std::time::Duration::from_millis(self.state.settings.step_delay_ms());
            ctx.request_repaint_after(delay);
        }

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction, now);
            ctx.request_repaint();
        }
    }
}
