//! Theme application and persistence.

use dsviz::theme::DEFAULT_THEME;

use crate::app::AppState;

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the stored theme name, or the default theme when none is stored.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> String {
        storage
            .and_then(|storage| storage.get_string(THEME_KEY))
            .unwrap_or_else(|| DEFAULT_THEME.to_string())
    }

    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        storage.set_string(THEME_KEY, theme_name.to_string());
        storage.flush();
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let manager = state.theme.theme_manager();
        let theme = manager.theme_or_default(state.theme.current_theme_name());
        let mut visuals = if theme.name == "Light" {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };
        manager.apply_theme(theme, &mut visuals);
        ctx.set_visuals(visuals);
    }
}
