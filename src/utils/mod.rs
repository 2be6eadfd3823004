//! Utility modules for the visualizer GUI.

pub mod formatting;

pub use formatting::{format_memory_mb, get_current_memory_mb, pluralize};
