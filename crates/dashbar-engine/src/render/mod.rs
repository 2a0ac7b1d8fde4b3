//! CPU rasterization of a [`DrawList`](crate::scene::DrawList).
//!
//! Backed by `tiny_skia` (re-exported through `resvg`). Each `PushLayer`
//! allocates a transparent pixmap the size of the target; `PopLayer`
//! composites it source-over onto the layer below. This is what lets
//! destination-out fills erase previously painted pixels of one widget
//! without cutting holes in whatever lies behind it.

mod error;
mod pixmap;

pub use error::RenderError;
pub use pixmap::{render_into, render_to_pixmap, to_skia_path};

/// Re-export so callers can name pixmaps without a direct dependency.
pub use resvg::tiny_skia::Pixmap;
