//! Caching modules for layout computations.

pub mod layout_cache;

pub use layout_cache::LayoutCache;
