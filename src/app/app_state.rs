//! Centralized application state for the visualizer GUI.
//!
//! The state is composed of focused components, each with its own invariants:
//! the core [`Session`] holding the structures, persisted settings, text input
//! buffers, traversal playback, theme selection and the layout cache.

use dsviz::Session;

use crate::cache::LayoutCache;
use crate::state::{InputState, Notice, SettingsState, ThemeState, TraversalPlayback};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Stack, queue, tree and graph plus the last traversal
    pub session: Session,

    /// Persisted preferences
    pub settings: SettingsState,

    /// Text field buffers
    pub input: InputState,

    /// Step-by-step traversal reveal
    pub playback: TraversalPlayback,

    /// Theme and styling state
    pub theme: ThemeState,

    // ===== Top-Level State =====
    /// Feedback from the last operation (if any)
    pub notice: Option<Notice>,

    /// Tree and graph layouts reused between frames
    pub layout_cache: LayoutCache,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default settings.
    pub fn new() -> Self {
        Self::with_preferences(ThemeState::new(), SettingsState::new(), dsviz::DEFAULT_SEED)
    }

    /// Creates the state from stored preferences.
    ///
    /// Structures always start empty; only the capacity carries over.
    pub fn with_preferences(theme: ThemeState, settings: SettingsState, seed: u64) -> Self {
        Self {
            session: Session::new(settings.capacity(), seed),
            settings,
            input: InputState::new(),
            playback: TraversalPlayback::new(),
            theme,
            notice: None,
            layout_cache: LayoutCache::new(),
        }
    }

    /// The notice, if it belongs to the view currently shown.
    pub fn active_notice(&self) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|notice| notice.view == self.settings.active_view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsviz::Structure;

    #[test]
    fn test_capacity_from_settings() {
        let mut settings = SettingsState::new();
        settings.set_capacity(3);
        let state = AppState::with_preferences(ThemeState::new(), settings, 1);
        assert_eq!(dsviz::LinearContainer::capacity(state.session.stack()), 3);
        assert_eq!(dsviz::LinearContainer::capacity(state.session.queue()), 3);
    }

    #[test]
    fn test_notice_scoped_to_view() {
        let mut state = AppState::new();
        state.notice = Some(Notice::from_error(
            &dsviz::VizError::Underflow { container: "Queue" },
            Structure::Queue,
        ));
        assert!(state.active_notice().is_none());
        state.settings.set_active_view(Structure::Queue);
        assert!(state.active_notice().is_some());
    }
}
