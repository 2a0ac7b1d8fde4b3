//! Coordinate and geometry types shared by the path builder, renderer and UI.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down

mod corners;
mod rect;
mod vec2;

pub use corners::Corners;
pub use rect::Rect;
pub use vec2::Vec2;
