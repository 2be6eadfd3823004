//! User preferences that survive restarts.
//!
//! Only preferences are persisted. Structure contents always start empty.

use dsviz::{Structure, DEFAULT_CAPACITY};
use serde::{Deserialize, Serialize};

/// Smallest and largest capacity offered by the capacity control.
pub const CAPACITY_RANGE: std::ops::RangeInclusive<usize> = 1..=20;

/// Smallest and largest delay between traversal animation steps.
pub const STEP_DELAY_RANGE_MS: std::ops::RangeInclusive<u64> = 100..=3000;

/// Persisted visualizer preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsState {
    /// Capacity shared by the stack and the queue
    capacity: usize,
    /// Delay between highlighted traversal steps, in milliseconds
    step_delay_ms: u64,
    /// View shown in the central panel
    active_view: Structure,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsState {
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            step_delay_ms: 600,
            active_view: Structure::Stack,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn step_delay_ms(&self) -> u64 {
        self.step_delay_ms
    }

    /// Step delay in seconds, the unit egui clocks use.
    pub fn step_delay_secs(&self) -> f64 {
        self.step_delay_ms as f64 / 1000.0
    }

    pub fn active_view(&self) -> Structure {
        self.active_view
    }

    // ===== Mutations (clamped to the offered ranges) =====

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.clamp(*CAPACITY_RANGE.start(), *CAPACITY_RANGE.end());
    }

    pub fn set_step_delay_ms(&mut self, delay: u64) {
        self.step_delay_ms = delay.clamp(*STEP_DELAY_RANGE_MS.start(), *STEP_DELAY_RANGE_MS.end());
    }

    pub fn set_active_view(&mut self, view: Structure) {
        self.active_view = view;
    }

    /// Clamps values that may have been stored by an older build.
    pub fn sanitized(mut self) -> Self {
        self.set_capacity(self.capacity);
        self.set_step_delay_ms(self.step_delay_ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_clamped() {
        let mut settings = SettingsState::new();
        settings.set_capacity(0);
        assert_eq!(settings.capacity(), 1);
        settings.set_step_delay_ms(10_000);
        assert_eq!(settings.step_delay_ms(), 3000);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: SettingsState = serde_json::from_str(r#"{"capacity": 4}"#).unwrap();
        assert_eq!(settings.capacity(), 4);
        assert_eq!(settings.step_delay_ms(), 600);
        assert_eq!(settings.active_view(), Structure::Stack);
    }

    #[test]
    fn test_sanitized_fixes_out_of_range() {
        let settings: SettingsState =
            serde_json::from_str(r#"{"capacity": 999, "step_delay_ms": 1}"#).unwrap();
        let settings = settings.sanitized();
        assert_eq!(settings.capacity(), 20);
        assert_eq!(settings.step_delay_ms(), 100);
    }
}
