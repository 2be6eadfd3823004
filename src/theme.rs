//! Color schemes for the desktop visualizer.
//!
//! Each theme maps the visual roles of the four views (container cells, tree
//! nodes, graph nodes in their traversal states, edges, notices) onto concrete
//! colors. Built-in themes: Light, Dark, Dracula, One Dark Pro.
//!
//! # Examples
//!
//! ```
//! use dsviz::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! assert_eq!(dracula.name, "Dracula");
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Name of the theme used when none is stored.
pub const DEFAULT_THEME: &str = "Dark";

/// Palette covering the chrome and every drawn element.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Chrome
    pub panel_background: Color32,
    pub canvas_background: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Linear containers
    pub cell: Color32,
    pub cell_highlight: Color32,

    // Tree and graph
    pub tree_node: Color32,
    pub graph_node: Color32,
    pub visited_node: Color32,
    pub current_node: Color32,
    pub node_label: Color32,
    pub edge: Color32,

    // Notices
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
}

/// A named palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Registry of the built-in themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    fallback: Theme,
}

impl std::fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeManager")
            .field("themes", &self.list_themes())
            .finish()
    }
}

impl ThemeManager {
    pub fn new() -> Self {
        let themes = [light_theme(), dark_theme(), dracula_theme(), one_dark_pro_theme()]
            .into_iter()
            .map(|theme| (theme.name.clone(), theme))
            .collect();
        Self {
            themes,
            fallback: dark_theme(),
        }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Looks up `name`, falling back to the default theme.
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.fallback)
    }

    /// Sorted theme names.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Copies a theme's chrome colors onto egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.canvas_background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.cell_highlight;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light background, saturated element colors".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(248, 248, 248),
            canvas_background: Color32::from_rgb(255, 255, 255),
            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),
            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(189, 195, 199),

            cell: Color32::from_rgb(235, 240, 245),
            cell_highlight: hex_to_color32("#3498db"),

            tree_node: hex_to_color32("#9b59b6"),
            graph_node: hex_to_color32("#3498db"),
            visited_node: hex_to_color32("#27ae60"),
            current_node: hex_to_color32("#e67e22"),
            node_label: Color32::WHITE,
            edge: Color32::from_rgb(128, 128, 128),

            success: Color32::from_rgb(40, 160, 40),
            warning: Color32::from_rgb(200, 120, 0),
            error: Color32::from_rgb(200, 40, 40),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark background matching the egui defaults".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(39, 39, 39),
            canvas_background: hex_to_color32("#0e1117"),
            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),
            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),

            cell: Color32::from_rgb(52, 58, 64),
            cell_highlight: hex_to_color32("#3498db"),

            tree_node: hex_to_color32("#9b59b6"),
            graph_node: hex_to_color32("#3498db"),
            visited_node: hex_to_color32("#2ecc71"),
            current_node: hex_to_color32("#f39c12"),
            node_label: Color32::WHITE,
            edge: Color32::GRAY,

            success: hex_to_color32("#58d68d"),
            warning: hex_to_color32("#f1c40f"),
            error: hex_to_color32("#e74c3c"),
        },
    }
}

/// Palette from https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#282a36"),
            canvas_background: hex_to_color32("#21222c"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),

            cell: hex_to_color32("#44475a"),
            cell_highlight: hex_to_color32("#8be9fd"),

            tree_node: hex_to_color32("#bd93f9"),
            graph_node: hex_to_color32("#6272a4"),
            visited_node: hex_to_color32("#50fa7b"),
            current_node: hex_to_color32("#ffb86c"),
            node_label: hex_to_color32("#282a36"),
            edge: hex_to_color32("#f8f8f2"),

            success: hex_to_color32("#50fa7b"),
            warning: hex_to_color32("#f1fa8c"),
            error: hex_to_color32("#ff5555"),
        },
    }
}

/// Palette from https://github.com/Binaryify/OneDark-Pro
fn one_dark_pro_theme() -> Theme {
    Theme {
        name: "One Dark Pro".to_string(),
        description: "VSCode One Dark Pro color palette".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#282c34"),
            canvas_background: hex_to_color32("#21252b"),
            text: hex_to_color32("#abb2bf"),
            text_dim: hex_to_color32("#5c6370"),
            selection: hex_to_color32("#4b5263"),
            hover: hex_to_color32("#4b5263"),
            border: hex_to_color32("#5c6370"),

            cell: hex_to_color32("#2c313a"),
            cell_highlight: hex_to_color32("#61afef"),

            tree_node: hex_to_color32("#c678dd"),
            graph_node: hex_to_color32("#61afef"),
            visited_node: hex_to_color32("#98c379"),
            current_node: hex_to_color32("#d19a66"),
            node_label: hex_to_color32("#282c34"),
            edge: hex_to_color32("#5c6370"),

            success: hex_to_color32("#98c379"),
            warning: hex_to_color32("#e5c07b"),
            error: hex_to_color32("#e06c75"),
        },
    }
}

/// Converts `#rrggbb` to a color; malformed input yields black.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Color32::BLACK;
    }
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    Color32::from_rgb(channel(0..2), channel(2..4), channel(4..6))
}

/// Same color with a new alpha channel.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
