//! State management modules for the visualizer GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Settings state (capacity, step delay, active view; persisted)
//! - Input state (text field buffers per view)
//! - Notice (latest success/warning/error message)
//! - Playback (step-by-step traversal reveal)
//! - Theme state (theme manager, current theme)

mod settings_state;
mod input_state;
mod notice;
mod playback;
mod theme_state;

pub use settings_state::{SettingsState, CAPACITY_RANGE, STEP_DELAY_RANGE_MS};
pub use input_state::InputState;
pub use notice::{Notice, NoticeLevel};
pub use playback::TraversalPlayback;
pub use theme_state::ThemeState;
