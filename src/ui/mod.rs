//! UI panel rendering subsystem
//!
//! - Header panel (view selector, capacity, step delay, theme selector)
//! - Controls panel (inputs and operation buttons of the active view)
//! - Canvas (drawing of the active structure)
//! - Status bar (memory and structure sizes)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod controls;
pub mod canvas;
pub mod status_bar;
pub mod panel_manager;
