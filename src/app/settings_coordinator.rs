//! Generic settings persistence coordination.
//!
//! Settings are stored in eframe's storage as JSON strings, one key per
//! setting. Missing or unreadable values fall back to defaults so a stale
//! or hand-edited store never prevents startup.

use serde::{Deserialize, Serialize};

use crate::state::SettingsState;

/// Storage key of the visualizer preferences.
pub const SETTINGS_KEY: &str = "visualizer_settings";

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting with a custom default.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, %err, "ignoring unreadable stored setting");
                None
            }
        }
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(err) => tracing::warn!(key, %err, "failed to serialize setting"),
        }
    }

    /// Loads the visualizer preferences, clamped to the supported ranges.
    pub fn load_settings(storage: Option<&dyn eframe::Storage>) -> SettingsState {
        Self::load_setting_or(storage, SETTINGS_KEY, SettingsState::default()).sanitized()
    }

    pub fn save_settings(storage: &mut dyn eframe::Storage, settings: &SettingsState) {
        Self::save_setting(storage, SETTINGS_KEY, settings);
    }
}
