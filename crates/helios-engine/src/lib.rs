//! Helios engine core crate.
//!
//! This crate owns the render-configuration resolution pieces consumed by the
//! tiled renderer, the window loop, and the image writer: the immutable
//! settings registry, the tile-size divisor search, and the scene-descriptor
//! strategy seam.

pub mod config;
pub mod scene;

pub mod logging;
