//! Dashbar engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the widget layer:
//! geometry, paint state, path construction, the recorded draw stream,
//! a CPU rasterizer for that stream, and frame timing / animation.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod path;
pub mod render;
pub mod scene;
pub mod time;
