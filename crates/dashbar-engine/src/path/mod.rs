//! Path model and builders.
//!
//! A [`Path`] is a flat list of [`PathEl`] commands in absolute logical
//! coordinates. Paths are ephemeral: widgets rebuild them every frame and the
//! renderer converts them to its own representation at draw time.
//!
//! The only shape builder the widget layer needs is the per-corner rounded
//! rectangle in [`round_rect`].

mod builder;
mod elements;
pub mod round_rect;

pub use builder::PathBuilder;
pub use elements::{Path, PathEl, Segment, Segments};
pub use round_rect::{build_round_rect_path, RoundRectSpec};
