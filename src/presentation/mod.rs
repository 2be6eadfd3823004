//! Presentation layer for visual styling and color mapping.
//!
//! Kept apart from the core structures, which know nothing about colors.

pub mod color_mapping;
